use super::model::Document;
use anyhow::Result;
use text_splitter::{ChunkConfig, TextSplitter};
use tracing::debug;

/// Subdivides records into smaller, possibly overlapping records.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSplitter {
    fn split_documents(&self, documents: Vec<Document>) -> Result<Vec<Document>>;
}

/// Character-count splitter backed by `text_splitter`, which tries paragraph,
/// line, sentence and word boundaries before falling back to graphemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split raw text into chunks of at most `chunk_size` characters.
    pub fn split_text<'text>(&self, text: &'text str) -> Result<Vec<&'text str>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let splitter = TextSplitter::new(
            ChunkConfig::new(self.chunk_size).with_overlap(self.chunk_overlap)?,
        );

        let chunks = splitter.chunks(text).collect();
        Ok(chunks)
    }
}

impl DocumentSplitter for RecursiveCharacterSplitter {
    fn split_documents(&self, documents: Vec<Document>) -> Result<Vec<Document>> {
        let mut chunks = Vec::new();

        for document in documents {
            let pieces = self.split_text(&document.page_content)?;
            debug!(
                "Split {} chars from {} into {} chunks",
                document.char_count(),
                document.metadata.source,
                pieces.len()
            );

            chunks.extend(pieces.into_iter().enumerate().map(|(i, content)| {
                Document::new(content, document.metadata.clone().with_chunk_index(i))
            }));
        }

        Ok(chunks)
    }
}
