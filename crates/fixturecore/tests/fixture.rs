use std::fs;

use fixturecore::{info, page_texts, verify, write_fixture, FixtureError, STUDENT_NAMES};
use lopdf::{Document, Object};
use pretty_assertions::assert_eq;

fn write_into_tempdir() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test_students.pdf");
    write_fixture(&path).expect("write fixture");
    (dir, path)
}

#[test]
fn fixture_has_five_pages() {
    let (_dir, path) = write_into_tempdir();
    let info = info(&path).expect("info");
    assert_eq!(info.pages, 5);
    assert!(info
        .metadata
        .iter()
        .any(|(k, v)| k == "Title" && v == "Test Students"));
}

#[test]
fn each_page_names_its_student_in_order() {
    let (_dir, path) = write_into_tempdir();
    let doc = Document::load(&path).expect("load");
    let texts = page_texts(&doc).expect("texts");

    assert_eq!(texts.len(), STUDENT_NAMES.len());
    for (i, (text, name)) in texts.iter().zip(STUDENT_NAMES).enumerate() {
        assert!(text.contains(name), "page {}: {text:?}", i + 1);
        assert!(
            text.contains(&format!("Page {} of 5", i + 1)),
            "page {}: {text:?}",
            i + 1
        );
        assert!(text.contains("Score: ______ / 100"));
        assert!(text.contains("Problem 3:"));
    }

    verify(&doc).expect("verify");
}

#[test]
fn pages_are_us_letter() {
    let (_dir, path) = write_into_tempdir();
    let doc = Document::load(&path).expect("load");

    for page_id in doc.get_pages().into_values() {
        let page = doc.get_dictionary(page_id).expect("page dict");
        let media_box: Vec<f32> = page
            .get(b"MediaBox")
            .and_then(Object::as_array)
            .expect("media box")
            .iter()
            .map(|o| o.as_float().expect("number"))
            .collect();
        assert_eq!(media_box, vec![0.0, 0.0, 612.0, 792.0]);
    }
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test-data").join("test_students.pdf");

    let err = write_fixture(&path).expect_err("parent directory does not exist");
    assert!(matches!(err, FixtureError::Io(_)), "{err:?}");
    assert!(fs::read_dir(dir.path()).expect("read dir").next().is_none());
}
