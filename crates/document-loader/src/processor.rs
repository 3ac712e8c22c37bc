use crate::config::ProcessorConfig;
use crate::document::{Document, DocumentLoader, LoaderFactory};
use crate::utils::error::{LoaderError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Single entry point: select a loader, load, optionally split.
#[derive(Debug, Clone, Default)]
pub struct DocumentProcessor {
    config: ProcessorConfig,
}

impl DocumentProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Load and split with the held configuration.
    pub fn process(&self, file_path: impl AsRef<Path>) -> Result<Vec<Document>> {
        self.process_document(file_path, true)
    }

    /// Every failure comes back as [`LoaderError::LoadFailure`]; the message
    /// is the only thing distinguishing the cause.
    pub fn process_document(
        &self,
        file_path: impl AsRef<Path>,
        load_and_split: bool,
    ) -> Result<Vec<Document>> {
        let file_path = file_path.as_ref();
        debug!(
            "Processing {:?} (load_and_split={}, chunk_size={}, chunk_overlap={})",
            file_path,
            load_and_split,
            self.config.chunk_size(),
            self.config.chunk_overlap()
        );

        match self.process_internal(file_path, load_and_split) {
            Ok(documents) => {
                info!("Processed {:?}: {} records", file_path, documents.len());
                Ok(documents)
            }
            Err(e) => {
                let wrapped = match e {
                    LoaderError::FileNotFound(_) | LoaderError::UnsupportedFormat(_) => {
                        LoaderError::LoadFailure(format!("Document processing failed: {}", e))
                    }
                    other => LoaderError::LoadFailure(format!(
                        "Unexpected error during document processing: {}",
                        other
                    )),
                };
                warn!("Failed to process {:?}: {}", file_path, wrapped);
                Err(wrapped)
            }
        }
    }

    fn process_internal(&self, file_path: &Path, load_and_split: bool) -> Result<Vec<Document>> {
        let loader = LoaderFactory::create_loader(file_path)?;

        if load_and_split {
            let text_splitter = self.config.create_text_splitter();
            loader.load_and_split(&text_splitter)
        } else {
            loader.load()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_collapsed_into_load_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.pdf");

        let err = DocumentProcessor::default()
            .process_document(&path, true)
            .unwrap_err();
        assert_eq!(
            err,
            LoaderError::LoadFailure(format!(
                "Document processing failed: File not found: {}",
                path.display()
            ))
        );
    }

    #[test]
    fn test_unsupported_format_collapsed_into_load_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.CSV");
        fs::write(&path, "a,b\n1,2\n").unwrap();

        let err = DocumentProcessor::default()
            .process_document(&path, false)
            .unwrap_err();
        assert_eq!(
            err,
            LoaderError::LoadFailure(
                "Document processing failed: Unsupported file type: .csv".to_string()
            )
        );
    }

    #[test]
    fn test_loader_failure_gets_generic_prefix() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, "definitely not a pdf").unwrap();

        let err = DocumentProcessor::default().process(&path).unwrap_err();
        let msg = err.to_string();
        assert!(err.is_load_failure());
        assert!(
            msg.starts_with(
                "Unexpected error during document processing: Error loading and splitting PDF file: "
            ),
            "got: {msg}"
        );
    }

    #[test]
    fn test_plain_load_failure_prefix() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.docx");
        fs::write(&path, "definitely not a docx").unwrap();

        let msg = DocumentProcessor::default()
            .process_document(&path, false)
            .unwrap_err()
            .to_string();
        assert!(
            msg.starts_with("Unexpected error during document processing: Error loading DOCX file: "),
            "got: {msg}"
        );
    }

    #[test]
    fn test_text_processing_split_and_unsplit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(10);
        fs::write(&path, &text).unwrap();

        let processor = DocumentProcessor::new(ProcessorConfig::new(100, 20).unwrap());

        let whole = processor.process_document(&path, false).unwrap();
        assert_eq!(whole.len(), 1);
        assert_eq!(whole[0].page_content, text);

        let chunks = processor.process(&path).unwrap();
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.char_count() <= 100));
    }
}
