/// The value returned by the event driven functions to the lambda runtime
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    /// A json encoded message describing the outcome
    pub body: String,
}

impl FunctionResponse {
    pub fn ok(message: &str) -> Self {
        Self::new(200, message)
    }

    pub fn error(message: &str) -> Self {
        Self::new(500, message)
    }

    fn new(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: serde_json::Value::from(message).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
