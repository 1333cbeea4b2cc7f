use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The type stops at the first space after the quoted name; the
    /// modifiers run to the last comma on the line.
    static ref COLUMN: Regex = Regex::new(r"`(.*)` (.*?) (.*),").unwrap();
}

const AUTO_INCREMENT: &str = "AUTO_INCREMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawColumn<'a> {
    pub name: &'a str,
    pub data_type: &'a str,
    pub modifiers: &'a str,
    /// Byte offset of the opening backtick in the column block.
    pub offset: usize,
}

impl RawColumn<'_> {
    /// Modifiers without `AUTO_INCREMENT`, trimmed. Other keywords are kept
    /// as written.
    pub fn nullable_clause(&self) -> String {
        self.modifiers.replace(AUTO_INCREMENT, "").trim().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLine<'a> {
    Column(RawColumn<'a>),
    /// A non-blank line that is not a column definition.
    Unrecognized { text: &'a str, offset: usize },
}

/// Every non-blank line of a column block, classified.
pub fn column_lines(block: &str) -> impl Iterator<Item = ColumnLine<'_>> {
    lines_with_offsets(block).filter_map(|(start, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        match COLUMN.captures(line) {
            Some(caps) => {
                let whole = caps.get(0)?;
                Some(ColumnLine::Column(RawColumn {
                    name: caps.get(1)?.as_str(),
                    data_type: caps.get(2)?.as_str(),
                    modifiers: caps.get(3)?.as_str(),
                    offset: start + whole.start(),
                }))
            }
            None => Some(ColumnLine::Unrecognized {
                text: trimmed,
                offset: start + (line.len() - line.trim_start().len()),
            }),
        }
    })
}

/// Column definitions of a block, in line order.
pub fn extract_columns(block: &str) -> impl Iterator<Item = RawColumn<'_>> {
    column_lines(block).filter_map(|line| match line {
        ColumnLine::Column(column) => Some(column),
        ColumnLine::Unrecognized { .. } => None,
    })
}

fn lines_with_offsets(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.split('\n').scan(0, |next, line| {
        let start = *next;
        *next += line.len() + 1;
        Some((start, line))
    })
}
