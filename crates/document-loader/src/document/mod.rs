pub mod chunker;
pub mod format;
pub mod loader;
pub mod model;
pub mod parser;

pub use chunker::{DocumentSplitter, RecursiveCharacterSplitter};
pub use format::DocumentFormat;
pub use loader::{
    DocumentLoader, DocxDocumentLoader, FileLoader, Loader, LoaderFactory, PdfDocumentLoader,
    TxtDocumentLoader,
};
pub use model::{Document, DocumentMetadata};
pub use parser::{DocxParser, FormatParser, PdfParser, TextParser};
