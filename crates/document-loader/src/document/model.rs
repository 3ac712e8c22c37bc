use serde::{Deserialize, Serialize};

/// Unit of extracted text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub page_content: String,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: String,
    pub file_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_index: Option<usize>,
}

impl Document {
    pub fn new(page_content: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            page_content: page_content.into(),
            metadata,
        }
    }

    /// Length in characters, which is what chunk sizes are measured in.
    pub fn char_count(&self) -> usize {
        self.page_content.chars().count()
    }
}

impl DocumentMetadata {
    pub fn new(source: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            file_type: file_type.into(),
            page: None,
            total_pages: None,
            chunk_index: None,
        }
    }

    pub fn with_page(mut self, page: usize, total_pages: usize) -> Self {
        self.page = Some(page);
        self.total_pages = Some(total_pages);
        self
    }

    pub fn with_chunk_index(mut self, chunk_index: usize) -> Self {
        self.chunk_index = Some(chunk_index);
        self
    }
}
