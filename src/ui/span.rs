use crate::ui::style::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub type SpanLine = Vec<Span>;

/// Concatenated text of a line, used by tests to assert on rendered output.
pub fn line_text(line: &SpanLine) -> String {
    line.iter().map(|span| span.text.as_str()).collect()
}
