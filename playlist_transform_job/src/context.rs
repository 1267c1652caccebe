use crate::config::Config;

#[derive(Clone)]
pub struct Context<S> {
    pub storage: S,
    pub config: Config,
}
