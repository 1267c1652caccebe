mod batch;
mod ingest;
mod sync;
mod transform;

pub use batch::*;
pub use ingest::*;
pub use sync::*;
pub use transform::*;
