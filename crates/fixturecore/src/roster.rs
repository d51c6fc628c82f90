//! The fixed class list and the per-page content derived from it.

use crate::layout::{self, Font, TextLine};

/// Students in page order. Page `i` (1-based) belongs to `STUDENT_NAMES[i - 1]`.
pub const STUDENT_NAMES: [&str; 5] = [
    "Alice Johnson",
    "Bob Smith",
    "Charlie Davis",
    "Diana Martinez",
    "Ethan Wilson",
];

/// What goes on one page of the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    /// Student the page belongs to.
    pub name: &'static str,
    /// 1-based page number.
    pub index: usize,
    /// Number of pages in the document.
    pub total: usize,
}

impl PageContent {
    /// `Student Name: <name>`, drawn in bold at the top of the page.
    #[must_use]
    pub fn header(&self) -> String {
        format!("Student Name: {}", self.name)
    }

    /// `Page <index> of <total>`.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("Page {} of {}", self.index, self.total)
    }

    /// Positioned text for this page, top to bottom.
    #[must_use]
    pub fn lines(&self) -> Vec<TextLine> {
        let mut lines = vec![
            TextLine::new(Font::HelveticaBold, 16.0, layout::HEADER_Y, self.header()),
            TextLine::new(Font::Helvetica, 10.0, layout::COUNTER_Y, self.counter()),
        ];

        let mut y = layout::BODY_TOP_Y;
        for (gap, text) in layout::EXAM_BODY {
            y -= gap;
            lines.push(TextLine::new(Font::Helvetica, 12.0, y, text.to_owned()));
        }
        lines
    }
}

/// One `PageContent` per student, in roster order.
#[must_use]
pub fn roster() -> Vec<PageContent> {
    let total = STUDENT_NAMES.len();
    STUDENT_NAMES
        .iter()
        .enumerate()
        .map(|(i, &name)| PageContent {
            name,
            index: i + 1,
            total,
        })
        .collect()
}
