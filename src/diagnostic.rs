use std::fmt::Display;

/// Represents a diagnostic, such as a table that was skipped because it has
/// no `PRIMARY KEY` line.
///
/// rows and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Diagnostic {
    row: usize,
    col: usize,
    message: String,
}

impl Diagnostic {
    pub const fn new(row: usize, col: usize, message: String) -> Self {
        Self { row, col, message }
    }

    /// Builds a diagnostic located at byte `offset` of `src`.
    pub fn at(src: &str, offset: usize, message: String) -> Self {
        let (row, col) = position(src, offset);
        Self::new(row, col, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.row, self.col, self.message)
    }
}

/// 1-based (row, col) of a byte offset. Columns count characters.
fn position(src: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(src.len());
    let before = src.get(..offset).unwrap_or(src);
    let row = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].chars().count() + 1;
    (row, col)
}
