// ============================================================
// Layer 4 — Word Document Extractor
// ============================================================
// A .docx file is a ZIP archive of XML parts. docx-rs parses
// it into a typed tree:
//
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       ├── Run       → RunChild::Text / Tab / Break
//                       └── Hyperlink → Run ...
//
// Only top-level body paragraphs are read; tables, images and
// footnotes are skipped. Paragraphs whose text is blank after
// trimming are dropped, the rest are joined with '\n'.
//
// Reference: docx-rs crate documentation

use std::path::Path;

use crate::domain::{
    document::DocumentFormat,
    error::ExtractionFailure,
    traits::TextExtractor,
};

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    #[cfg(feature = "docx")]
    fn extract(&self, path: &Path) -> Result<String, ExtractionFailure> {
        let bytes = crate::data::read_bytes(path)?;
        text_from_bytes(&bytes)
    }

    #[cfg(not(feature = "docx"))]
    fn extract(&self, _path: &Path) -> Result<String, ExtractionFailure> {
        Err(ExtractionFailure::MissingCapability {
            library: "docx-rs",
            format:  DocumentFormat::Docx,
            feature: "docx",
        })
    }
}

/// Parse an in-memory .docx and return its paragraph text
#[cfg(feature = "docx")]
pub fn text_from_bytes(bytes: &[u8]) -> Result<String, ExtractionFailure> {
    use docx_rs::DocumentChild;

    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| ExtractionFailure::parse(DocumentFormat::Docx, e.to_string()))?;

    let paragraphs = docx.document.children.iter().filter_map(|child| match child {
        DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
        _ => None,
    });

    Ok(crate::data::join_non_blank(paragraphs))
}

/// Concatenate every run of a paragraph, including runs nested
/// in hyperlinks. Runs are fragments of the same sentence, so
/// no separator is inserted between them.
#[cfg(feature = "docx")]
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    use docx_rs::ParagraphChild;

    let mut out = String::new();
    for child in &para.children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, &mut out),
            ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let ParagraphChild::Run(run) = inner {
                        push_run_text(run, &mut out);
                    }
                }
            }
            _ => {}
        }
    }
    out
}

#[cfg(feature = "docx")]
fn push_run_text(run: &docx_rs::Run, out: &mut String) {
    use docx_rs::RunChild;

    for rc in &run.children {
        match rc {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_)   => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
