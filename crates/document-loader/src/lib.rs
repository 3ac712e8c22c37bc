pub mod config;
pub mod document;
pub mod processor;
pub mod utils;

pub use config::{ProcessorConfig, Settings};
pub use document::{Document, DocumentFormat, DocumentLoader, DocumentMetadata, LoaderFactory};
pub use processor::DocumentProcessor;
pub use utils::error::LoaderError;
