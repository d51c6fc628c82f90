//! Read-back checks for a generated fixture.

use std::path::Path;

use lopdf::{Document, Object};

use crate::{roster::roster, FixtureError};

/// Basic information about a PDF on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureInfo {
    /// Number of pages in the page tree.
    pub pages: usize,
    /// `/Info` entries whose values are strings, in document order.
    pub metadata: Vec<(String, String)>,
}

/// Load `path` and report its page count and document info.
pub fn info(path: &Path) -> Result<FixtureInfo, FixtureError> {
    let doc = Document::load(path)?;

    let mut metadata = Vec::new();
    if let Ok(info_ref) = doc.trailer.get(b"Info").and_then(Object::as_reference) {
        for (key, value) in doc.get_dictionary(info_ref)?.iter() {
            if let Object::String(bytes, _) = value {
                metadata.push((
                    String::from_utf8_lossy(key).into_owned(),
                    String::from_utf8_lossy(bytes).into_owned(),
                ));
            }
        }
    }

    Ok(FixtureInfo {
        pages: doc.get_pages().len(),
        metadata,
    })
}

/// Extracted text of every page, in page order.
pub fn page_texts(doc: &Document) -> Result<Vec<String>, FixtureError> {
    doc.get_pages()
        .keys()
        .map(|&number| doc.extract_text(&[number]).map_err(FixtureError::from))
        .collect()
}

/// Check that `doc` has one page per student and that each page names its
/// student and carries the right `Page i of n` counter.
pub fn verify(doc: &Document) -> Result<(), FixtureError> {
    let expected = roster();
    let texts = page_texts(doc)?;

    if texts.len() != expected.len() {
        return Err(FixtureError::Mismatch(format!(
            "expected {} pages, found {}",
            expected.len(),
            texts.len()
        )));
    }

    for (page, text) in expected.iter().zip(&texts) {
        if !text.contains(page.name) {
            return Err(FixtureError::Mismatch(format!(
                "page {} does not mention {}",
                page.index, page.name
            )));
        }
        let counter = page.counter();
        if !text.contains(&counter) {
            return Err(FixtureError::Mismatch(format!(
                "page {} is missing \"{counter}\"",
                page.index
            )));
        }
    }
    Ok(())
}
