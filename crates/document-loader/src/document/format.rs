use mime_guess::mime;
use std::fmt;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

/// Extension table used by the selector. Keys are lowercase, without the dot.
const REGISTRY: &[(&str, DocumentFormat)] = &[
    ("pdf", DocumentFormat::Pdf),
    ("docx", DocumentFormat::Docx),
    ("txt", DocumentFormat::Txt),
];

impl DocumentFormat {
    /// Case-insensitive lookup; accepts the extension with or without a leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let normalized = extension.trim_start_matches('.').to_lowercase();
        REGISTRY
            .iter()
            .find(|(ext, _)| *ext == normalized)
            .map(|(_, format)| *format)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(ext, _)| *ext)
    }

    /// Label used in loader error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Txt => "TXT",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Txt => "text/plain",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercased extension with its leading dot, or an empty string.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Detect MIME type from path, falling back to the format's canonical type.
pub fn detect_file_type(path: &Path, format: DocumentFormat) -> String {
    let file_type = match mime_guess::from_path(path).first() {
        Some(m) if m != mime::APPLICATION_OCTET_STREAM => m.essence_str().to_string(),
        _ => format.mime_type().to_string(),
    };

    debug!("Detected file type: {} for {:?}", file_type, path);

    file_type
}
