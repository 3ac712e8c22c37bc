use super::format::{detect_file_type, DocumentFormat};
use super::model::{Document, DocumentMetadata};
use anyhow::{anyhow, Context, Result};
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use encoding_rs::{Encoding, UTF_8};
use lopdf::Document as PdfDocument;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Turns one file format into document records.
#[cfg_attr(test, mockall::automock)]
pub trait FormatParser {
    fn parse(&self, path: &Path) -> Result<Vec<Document>>;
}

/// One record per page, using lopdf.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfParser;

/// Whole document as a single record, paragraphs separated by newlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxParser;

/// Whole file as a single record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextParser;

fn source_of(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl FormatParser for PdfParser {
    fn parse(&self, path: &Path) -> Result<Vec<Document>> {
        let doc = PdfDocument::load(path).context("Failed to load PDF file")?;
        let pages = doc.get_pages();
        let page_count = pages.len();
        let source = source_of(path);
        let file_type = detect_file_type(path, DocumentFormat::Pdf);

        debug!("Parsing PDF {:?} ({} pages)", path, page_count);

        let mut documents = Vec::with_capacity(page_count);

        for (index, page_num) in pages.keys().enumerate() {
            match doc.extract_text(&[*page_num]) {
                Ok(text) => {
                    let metadata = DocumentMetadata::new(source.clone(), file_type.clone())
                        .with_page(index, page_count);
                    documents.push(Document::new(text, metadata));
                }
                Err(e) => {
                    warn!("Failed to extract text from page {}: {}", page_num, e);
                }
            }
        }

        Ok(documents)
    }
}

impl FormatParser for DocxParser {
    fn parse(&self, path: &Path) -> Result<Vec<Document>> {
        let bytes = fs::read(path).context("Failed to read DOCX file")?;
        let docx = docx_rs::read_docx(&bytes).map_err(|e| anyhow!("Invalid DOCX: {}", e))?;

        let mut lines = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
                DocumentChild::Table(table) => table_lines(table, &mut lines),
                _ => {}
            }
        }

        let content = lines.join("\n");
        debug!("Parsed {} characters from {:?}", content.len(), path);

        let metadata = DocumentMetadata::new(
            source_of(path),
            detect_file_type(path, DocumentFormat::Docx),
        );

        Ok(vec![Document::new(content, metadata)])
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut line = String::new();
    push_runs(&paragraph.children, &mut line);
    line
}

/// Hyperlinks nest paragraph children, so their runs are walked the same way.
fn push_runs(children: &[ParagraphChild], line: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => line.push_str(&t.text),
                        RunChild::Tab(_) => line.push('\t'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_runs(&link.children, line),
            _ => {}
        }
    }
}

/// One line per cell paragraph, rows in order; nested tables are flattened.
fn table_lines(table: &Table, lines: &mut Vec<String>) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
                    TableCellContent::Table(nested) => table_lines(nested, lines),
                    _ => {}
                }
            }
        }
    }
}

impl FormatParser for TextParser {
    fn parse(&self, path: &Path) -> Result<Vec<Document>> {
        let raw_content = fs::read(path).context("Failed to read text file")?;
        let (content, encoding) = decode_text(&raw_content);

        debug!(
            "Parsed {} characters from {:?} (encoding: {})",
            content.len(),
            path,
            encoding.name()
        );

        let metadata = DocumentMetadata::new(
            source_of(path),
            detect_file_type(path, DocumentFormat::Txt),
        );

        Ok(vec![Document::new(content, metadata)])
    }
}

/// Decode honoring a BOM if present, otherwise as UTF-8 with replacement.
fn decode_text(bytes: &[u8]) -> (String, &'static Encoding) {
    let (encoding, _) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let (text, used, had_errors) = encoding.decode(bytes);

    if had_errors {
        warn!("Invalid {} sequences replaced while decoding", used.name());
    }

    (text.into_owned(), used)
}
