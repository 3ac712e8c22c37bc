pub mod error;
pub mod logger;
pub mod metrics;

pub use error::LoaderError;
pub use metrics::{BatchSummary, Metrics};
