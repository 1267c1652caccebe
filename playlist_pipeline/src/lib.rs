//! Shared logic for the playlist pipeline: converting raw playlist documents into csv
//! artifacts and moving them between buckets.

pub mod convert;
pub mod error;
pub mod key;
pub mod model;
pub mod response;
pub mod service;

pub use convert::{MalformedInputError, transform_playlist_data};
pub use error::TransformError;
pub use response::FunctionResponse;
