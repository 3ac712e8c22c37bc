use crate::document::RecursiveCharacterSplitter;
use crate::utils::error::{LoaderError, Result};

pub const DEFAULT_CHUNK_SIZE: usize = 100;
pub const DEFAULT_CHUNK_OVERLAP: usize = 20;

/// Validated chunking parameters. Holds `0 <= chunk_overlap < chunk_size`.
///
/// | field           | default |
/// |-----------------|---------|
/// | `chunk_size`    | 100     |
/// | `chunk_overlap` | 20      |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorConfig {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl ProcessorConfig {
    /// Signed inputs so negative values coming from files or flags are
    /// rejected here rather than wrapping.
    pub fn new(chunk_size: i64, chunk_overlap: i64) -> Result<Self> {
        if chunk_size <= 0 {
            return Err(LoaderError::InvalidConfiguration(
                "chunk_size must be positive".to_string(),
            ));
        }
        if chunk_overlap < 0 {
            return Err(LoaderError::InvalidConfiguration(
                "chunk_overlap cannot be negative".to_string(),
            ));
        }
        if chunk_overlap >= chunk_size {
            return Err(LoaderError::InvalidConfiguration(
                "chunk_overlap must be smaller than chunk_size".to_string(),
            ));
        }

        let chunk_size = usize::try_from(chunk_size)
            .map_err(|_| LoaderError::InvalidConfiguration("chunk_size is too large".to_string()))?;
        let chunk_overlap = usize::try_from(chunk_overlap).map_err(|_| {
            LoaderError::InvalidConfiguration("chunk_overlap is too large".to_string())
        })?;

        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Splitter configured with the stored size and overlap.
    pub fn create_text_splitter(&self) -> RecursiveCharacterSplitter {
        RecursiveCharacterSplitter::new(self.chunk_size, self.chunk_overlap)
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(size: i64, overlap: i64) -> String {
        match ProcessorConfig::new(size, overlap) {
            Err(LoaderError::InvalidConfiguration(msg)) => msg,
            other => panic!("expected InvalidConfiguration for ({size}, {overlap}), got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = ProcessorConfig::default();
        assert_eq!(config.chunk_size(), 100);
        assert_eq!(config.chunk_overlap(), 20);
        assert_eq!(ProcessorConfig::new(100, 20).unwrap(), config);
    }

    #[test]
    fn test_non_positive_size_rejected() {
        for size in [0, -1, -100, i64::MIN] {
            assert_eq!(invalid(size, 0), "chunk_size must be positive");
        }
    }

    #[test]
    fn test_negative_overlap_rejected() {
        for overlap in [-1, -50] {
            assert_eq!(invalid(100, overlap), "chunk_overlap cannot be negative");
        }
    }

    #[test]
    fn test_overlap_not_smaller_than_size_rejected() {
        assert_eq!(invalid(100, 100), "chunk_overlap must be smaller than chunk_size");
        assert_eq!(invalid(100, 150), "chunk_overlap must be smaller than chunk_size");
        assert_eq!(invalid(1, 1), "chunk_overlap must be smaller than chunk_size");
    }

    #[test]
    fn test_validation_order() {
        // size checked before overlap sign, overlap sign before the relation
        assert_eq!(invalid(0, -5), "chunk_size must be positive");
        assert_eq!(invalid(-10, 20), "chunk_size must be positive");
        assert_eq!(invalid(10, -20), "chunk_overlap cannot be negative");
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(ProcessorConfig::new(1, 0).is_ok());
        assert!(ProcessorConfig::new(100, 99).is_ok());
    }

    #[test]
    fn test_splitter_factory_uses_exact_parameters() {
        let config = ProcessorConfig::new(150, 30).unwrap();
        let splitter = config.create_text_splitter();
        assert_eq!(splitter.chunk_size(), 150);
        assert_eq!(splitter.chunk_overlap(), 30);

        // pure: repeated calls give equal splitters
        assert_eq!(config.create_text_splitter(), splitter);
    }
}
