use super::chunker::DocumentSplitter;
use super::format::{dotted_extension, DocumentFormat};
use super::model::Document;
use super::parser::{DocxParser, FormatParser, PdfParser, TextParser};
use crate::utils::error::{LoaderError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Capability shared by every loader variant.
pub trait DocumentLoader {
    /// Records exactly as the parser produced them.
    fn load(&self) -> Result<Vec<Document>>;

    /// Records passed through `splitter`.
    fn load_and_split(&self, splitter: &dyn DocumentSplitter) -> Result<Vec<Document>>;
}

/// Binds one path to one format parser.
#[derive(Debug, Clone)]
pub struct FileLoader<P> {
    path: PathBuf,
    format: DocumentFormat,
    parser: P,
}

pub type PdfDocumentLoader = FileLoader<PdfParser>;
pub type DocxDocumentLoader = FileLoader<DocxParser>;
pub type TxtDocumentLoader = FileLoader<TextParser>;

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LoaderError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

impl<P: FormatParser> FileLoader<P> {
    pub fn with_parser(path: impl AsRef<Path>, format: DocumentFormat, parser: P) -> Result<Self> {
        let path = path.as_ref();
        ensure_exists(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            format,
            parser,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }
}

impl FileLoader<PdfParser> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_parser(path, DocumentFormat::Pdf, PdfParser)
    }
}

impl FileLoader<DocxParser> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_parser(path, DocumentFormat::Docx, DocxParser)
    }
}

impl FileLoader<TextParser> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_parser(path, DocumentFormat::Txt, TextParser)
    }
}

impl<P: FormatParser> DocumentLoader for FileLoader<P> {
    fn load(&self) -> Result<Vec<Document>> {
        debug!("Loading {} file {:?}", self.format, self.path);

        self.parser.parse(&self.path).map_err(|e| {
            LoaderError::LoadFailure(format!("Error loading {} file: {:#}", self.format, e))
        })
    }

    fn load_and_split(&self, splitter: &dyn DocumentSplitter) -> Result<Vec<Document>> {
        debug!("Loading and splitting {} file {:?}", self.format, self.path);

        self.parser
            .parse(&self.path)
            .and_then(|documents| splitter.split_documents(documents))
            .map_err(|e| {
                LoaderError::LoadFailure(format!(
                    "Error loading and splitting {} file: {:#}",
                    self.format, e
                ))
            })
    }
}

/// Closed set of loaders the selector can hand out.
#[derive(Debug, Clone)]
pub enum Loader {
    Pdf(PdfDocumentLoader),
    Docx(DocxDocumentLoader),
    Txt(TxtDocumentLoader),
}

impl Loader {
    pub fn format(&self) -> DocumentFormat {
        match self {
            Loader::Pdf(l) => l.format(),
            Loader::Docx(l) => l.format(),
            Loader::Txt(l) => l.format(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Loader::Pdf(l) => l.path(),
            Loader::Docx(l) => l.path(),
            Loader::Txt(l) => l.path(),
        }
    }
}

impl DocumentLoader for Loader {
    fn load(&self) -> Result<Vec<Document>> {
        match self {
            Loader::Pdf(l) => l.load(),
            Loader::Docx(l) => l.load(),
            Loader::Txt(l) => l.load(),
        }
    }

    fn load_and_split(&self, splitter: &dyn DocumentSplitter) -> Result<Vec<Document>> {
        match self {
            Loader::Pdf(l) => l.load_and_split(splitter),
            Loader::Docx(l) => l.load_and_split(splitter),
            Loader::Txt(l) => l.load_and_split(splitter),
        }
    }
}

/// Picks a loader from the file extension.
pub struct LoaderFactory;

impl LoaderFactory {
    pub fn create_loader(path: impl AsRef<Path>) -> Result<Loader> {
        let path = path.as_ref();
        ensure_exists(path)?;

        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| LoaderError::UnsupportedFormat(dotted_extension(path)))?;

        debug!("Selected {} loader for {:?}", format, path);

        let loader = match format {
            DocumentFormat::Pdf => Loader::Pdf(PdfDocumentLoader::new(path)?),
            DocumentFormat::Docx => Loader::Docx(DocxDocumentLoader::new(path)?),
            DocumentFormat::Txt => Loader::Txt(TxtDocumentLoader::new(path)?),
        };

        Ok(loader)
    }

    /// Check if the extension is one we have a loader for
    pub fn is_supported(path: &Path) -> bool {
        DocumentFormat::from_path(path).is_some()
    }
}
