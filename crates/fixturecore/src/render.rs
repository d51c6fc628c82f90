//! Builds the fixture document with `lopdf` and writes it out.

use std::{io::Write, path::Path};

use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Document, Object, ObjectId, Stream,
};
use tracing::{debug, info};

use crate::{
    layout::{Font, MARGIN_X, PAGE_HEIGHT, PAGE_WIDTH},
    roster::{roster, PageContent, STUDENT_NAMES},
    FixtureError,
};

/// Where `fixturegen` writes the fixture, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "test-data/test_students.pdf";

#[allow(clippy::cast_possible_wrap)]
const PAGE_COUNT: i64 = STUDENT_NAMES.len() as i64;

const TITLE: &str = "Test Students";
const PRODUCER: &str = concat!("fixturegen ", env!("CARGO_PKG_VERSION"));

/// Content-stream operations for one page: one `BT ... ET` block per line.
#[must_use]
pub fn page_operations(page: &PageContent) -> Vec<Operation> {
    let mut ops = Vec::new();
    for line in page.lines() {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(line.font.resource_name().as_bytes().to_vec()),
                line.size.into(),
            ],
        ));
        ops.push(Operation::new("Td", vec![MARGIN_X.into(), line.y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.text.as_str())],
        ));
        ops.push(Operation::new("ET", vec![]));
    }
    ops
}

/// Build the complete five-page document in memory.
pub fn build_document() -> Result<Document, FixtureError> {
    let mut doc = Document::with_version("1.4");

    let pages_id = doc.new_object_id();
    let resources = font_resources(&mut doc);
    let resources_id = doc.add_object(resources);

    let pages = roster();
    let mut kids = Vec::with_capacity(pages.len());
    for page in &pages {
        let page_id = add_page(&mut doc, pages_id, resources_id, page)?;
        kids.push(Object::Reference(page_id));
        debug!(page = page.index, student = page.name, "rendered page");
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => PAGE_COUNT,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(TITLE),
        "Producer" => Object::string_literal(PRODUCER),
    });

    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

/// Build the fixture and save it to `path`.
///
/// The parent directory must already exist.
pub fn write_fixture(path: &Path) -> Result<(), FixtureError> {
    let mut doc = build_document()?;
    doc.save(path)?;
    info!(path = %path.display(), pages = doc.get_pages().len(), "saved fixture");
    Ok(())
}

/// Build the fixture and serialize it into `target`.
pub fn write_fixture_to<W: Write>(target: &mut W) -> Result<(), FixtureError> {
    let mut doc = build_document()?;
    doc.save_to(target)?;
    Ok(())
}

fn font_resources(doc: &mut Document) -> Dictionary {
    let mut fonts = Dictionary::new();
    for font in Font::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    dictionary! { "Font" => fonts }
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page: &PageContent,
) -> Result<ObjectId, FixtureError> {
    let content = Content {
        operations: page_operations(page),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        "Resources" => resources_id,
        "Contents" => content_id,
    }))
}
