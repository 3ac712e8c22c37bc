pub mod processing;
pub mod settings;

pub use processing::ProcessorConfig;
pub use settings::{ChunkingConfig, LogFormat, LoggingConfig, Settings};
