//! Text extraction from `CREATE TABLE` dumps.
//!
//! Three independent stages: table statements are split into a column block
//! and a constraints block, then each block is scanned on its own.

mod column;
mod foreign_key;
mod table_block;

pub use column::{ColumnLine, RawColumn, column_lines, extract_columns};
pub use foreign_key::{ForeignKey, extract_foreign_keys};
pub use table_block::{TableBlock, TableExtractor, extract_tables};
