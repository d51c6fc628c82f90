//! Page geometry and typography. All values are PDF points.

/// US Letter width.
pub const PAGE_WIDTH: f32 = 612.0;
/// US Letter height.
pub const PAGE_HEIGHT: f32 = 792.0;

/// Left edge of every line.
pub const MARGIN_X: f32 = 72.0;

/// Baseline of the bold student-name header.
pub const HEADER_Y: f32 = PAGE_HEIGHT - 72.0;
/// Baseline of the `Page i of n` counter.
pub const COUNTER_Y: f32 = PAGE_HEIGHT - 100.0;
/// Baseline of the first line of exam text.
pub const BODY_TOP_Y: f32 = PAGE_HEIGHT - 140.0;

/// Static exam text. Each entry is drawn `gap` points below the previous one,
/// starting at `BODY_TOP_Y`.
pub const EXAM_BODY: [(f32, &str); 5] = [
    (0.0, "Test Exam"),
    (30.0, "Score: ______ / 100"),
    (40.0, "Problem 1: ______________________________________"),
    (30.0, "Problem 2: ______________________________________"),
    (30.0, "Problem 3: ______________________________________"),
];

/// Base-14 fonts used by the fixture; no font program is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Body text.
    Helvetica,
    /// Student-name header.
    HelveticaBold,
}

impl Font {
    /// Every font the fixture registers as a page resource.
    pub const ALL: [Font; 2] = [Font::Helvetica, Font::HelveticaBold];

    /// Key under `/Resources /Font`.
    #[must_use]
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
        }
    }

    /// PostScript name written as `/BaseFont`.
    #[must_use]
    pub fn base_font(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }
}

/// A single line of text placed at (`MARGIN_X`, `y`).
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Font selected with `Tf`.
    pub font: Font,
    /// Font size in points.
    pub size: f32,
    /// Baseline, measured up from the bottom edge.
    pub y: f32,
    /// Literal string shown with `Tj`.
    pub text: String,
}

impl TextLine {
    /// Line at `y` in `font` at `size` points.
    #[must_use]
    pub fn new(font: Font, size: f32, y: f32, text: String) -> Self {
        Self {
            font,
            size,
            y,
            text,
        }
    }
}
