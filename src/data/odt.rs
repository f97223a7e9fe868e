// ============================================================
// Layer 4 — OpenDocument Text Extractor
// ============================================================
// An .odt file is a ZIP archive; the body lives in
// content.xml. We stream that XML with quick-xml and collect,
// for every <text:p> element in document order (matched by the
// ODF text namespace, whatever its prefix), the text nodes that
// are its *direct* children. Text inside nested
// elements (<text:span>, <text:a>, ...) is not part of the
// paragraph's own text nodes and is skipped.
//
// Paragraphs are joined with '\n' as-is, empty ones included.
//
//   <text:p>Hello <text:span>big</text:span> world</text:p>
//     → "Hello  world"

use std::path::Path;

use crate::domain::{
    document::DocumentFormat,
    error::ExtractionFailure,
    traits::TextExtractor,
};

pub struct OdtExtractor;

impl TextExtractor for OdtExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Odt
    }

    #[cfg(feature = "odt")]
    fn extract(&self, path: &Path) -> Result<String, ExtractionFailure> {
        // The archive owns the handle; it is closed when `file`
        // goes out of scope, on every return path.
        let file = std::fs::File::open(path).map_err(|e| ExtractionFailure::io(path, e))?;
        text_from_archive(file)
    }

    #[cfg(not(feature = "odt"))]
    fn extract(&self, _path: &Path) -> Result<String, ExtractionFailure> {
        Err(ExtractionFailure::MissingCapability {
            library: "zip/quick-xml",
            format:  DocumentFormat::Odt,
            feature: "odt",
        })
    }
}

#[cfg(feature = "odt")]
const CONTENT_PART: &str = "content.xml";

/// Namespace of <text:p>, whatever prefix the document binds it to
#[cfg(feature = "odt")]
const TEXT_NS: &[u8] = b"urn:oasis:names:tc:opendocument:xmlns:text:1.0";

/// Read content.xml out of an ODT archive and extract its paragraphs
#[cfg(feature = "odt")]
pub fn text_from_archive<R>(reader: R) -> Result<String, ExtractionFailure>
where
    R: std::io::Read + std::io::Seek,
{
    use std::io::Read;

    let parse_err = |e: &dyn std::fmt::Display| ExtractionFailure::parse(DocumentFormat::Odt, e.to_string());

    let mut archive = zip::ZipArchive::new(reader).map_err(|e| parse_err(&e))?;
    let mut entry   = archive.by_name(CONTENT_PART).map_err(|e| parse_err(&e))?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml).map_err(|e| parse_err(&e))?;

    let paragraphs = paragraphs_from_content_xml(&xml).map_err(|e| parse_err(&e))?;
    tracing::debug!("ODT content.xml held {} paragraphs", paragraphs.len());
    Ok(paragraphs.join("\n"))
}

/// Every <text:p> in document order, each with only its direct
/// text-node children concatenated. Elements are matched by
/// namespace URI and local name, not by prefix.
#[cfg(feature = "odt")]
pub fn paragraphs_from_content_xml(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    use quick_xml::{
        events::Event,
        name::{Namespace, ResolveResult},
        NsReader,
    };

    let is_paragraph = |ns: &ResolveResult, local: &[u8]| {
        local == b"p" && *ns == ResolveResult::Bound(Namespace(TEXT_NS))
    };

    let mut reader = NsReader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    // Indices into `paragraphs` of the <text:p> elements still open
    let mut open_paragraphs: Vec<usize> = Vec::new();
    // One entry per open element: is it a <text:p>?
    let mut elements: Vec<bool> = Vec::new();

    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(e)) => {
                let opens_paragraph = is_paragraph(&ns, e.local_name().as_ref());
                if opens_paragraph {
                    open_paragraphs.push(paragraphs.len());
                    paragraphs.push(String::new());
                }
                elements.push(opens_paragraph);
            }
            (ns, Event::Empty(e)) => {
                if is_paragraph(&ns, e.local_name().as_ref()) {
                    paragraphs.push(String::new());
                }
            }
            (_, Event::End(_)) => {
                if elements.pop() == Some(true) {
                    open_paragraphs.pop();
                }
            }
            (_, Event::Text(t)) => {
                if elements.last() == Some(&true) {
                    if let Some(&idx) = open_paragraphs.last() {
                        paragraphs[idx].push_str(&t.unescape()?);
                    }
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
