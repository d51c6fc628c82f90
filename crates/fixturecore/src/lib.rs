//! Core library for `fixturegen`.
//!
//! Builds the five-page student exam PDF used to exercise the page
//! splitter, and reads it back for checks. Everything about the document
//! (names, page size, layout) is fixed at compile time.

#![warn(missing_docs)]

use thiserror::Error;

pub mod inspect;
pub mod layout;
pub mod render;
pub mod roster;

pub use inspect::{info, page_texts, verify, FixtureInfo};
pub use render::{build_document, write_fixture, write_fixture_to, DEFAULT_OUTPUT};
pub use roster::{roster, PageContent, STUDENT_NAMES};

/// Core error type for fixture operations.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Reading or writing the PDF file failed.
    #[error("i/o error")]
    Io(#[from] std::io::Error),

    /// lopdf rejected the document.
    #[error("pdf error")]
    Pdf(#[from] lopdf::Error),

    /// A read-back document does not match the roster.
    #[error("fixture mismatch: {0}")]
    Mismatch(String),
}
