pub mod diagnostic;
pub mod error;
pub mod extract;
pub mod input;
pub mod model;
pub mod render;

use log::debug;

pub use diagnostic::Diagnostic;
pub use error::Error;
pub use render::{LatexRenderer, Locale};

use extract::{ColumnLine, TableBlock, TableExtractor, column_lines, extract_foreign_keys};
use model::{Column, ForeignKeyRef, Table};
use render::{ColumnRole, classify};

/// Schema qualifier used when none is configured.
pub const DEFAULT_SCHEMA: &str = "mydb";

#[derive(Debug, Clone)]
pub struct Options {
    pub schema: String,
    pub locale: Locale,
    /// Name the `REFERENCES` target in foreign-key sentences.
    pub resolve_references: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            locale: Locale::default(),
            resolve_references: false,
        }
    }
}

/// Rendered tables of one input plus everything that was skipped on the way.
#[derive(Debug, Default)]
pub struct Document {
    pub fragments: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse the tables of `sql`, with positions of skipped input reported
/// relative to `sql`.
pub fn parse_tables(sql: &str, schema: &str) -> Result<(Vec<Table>, Vec<Diagnostic>), Error> {
    let extractor = TableExtractor::new(schema)?;

    let mut diagnostics: Vec<Diagnostic> = extractor
        .unmatched(sql)
        .into_iter()
        .map(|(offset, name)| {
            Diagnostic::at(
                sql,
                offset,
                format!("Table `{}` skipped: no PRIMARY KEY line", name),
            )
        })
        .collect();

    let tables: Vec<Table> = extractor
        .extract(sql)
        .map(|block| build_table(sql, &block, &mut diagnostics))
        .collect();

    diagnostics.sort();
    Ok((tables, diagnostics))
}

fn build_table(sql: &str, block: &TableBlock, diagnostics: &mut Vec<Diagnostic>) -> Table {
    let mut table = Table::new(block.name);

    for line in column_lines(block.columns) {
        match line {
            ColumnLine::Column(raw) => {
                table.add_column(Column::new(raw.name, &raw.nullable_clause(), raw.data_type));
            }
            ColumnLine::Unrecognized { text, offset } => {
                diagnostics.push(Diagnostic::at(
                    sql,
                    block.columns_offset + offset,
                    format!("Line in table `{}` skipped: {}", block.name, text),
                ));
            }
        }
    }

    for fk in extract_foreign_keys(block.constraints) {
        let shown_as_foreign_key = table
            .columns()
            .iter()
            .find(|c| c.name() == fk.column)
            .is_some_and(|c| classify(&table, c) == ColumnRole::ForeignKey);
        if !shown_as_foreign_key {
            diagnostics.push(Diagnostic::at(
                sql,
                block.constraints_offset + fk.offset,
                format!(
                    "Foreign key column `{}` of table `{}` is not described as a foreign key",
                    fk.column, block.name
                ),
            ));
        }
        table.add_foreign_key(ForeignKeyRef {
            column: fk.column.to_string(),
            referenced_table: fk.referenced_table.map(str::to_string),
        });
    }

    debug!(
        "table {}: {} columns, {} foreign keys (conventional key {})",
        table.name(),
        table.columns().len(),
        table.foreign_keys().len(),
        table.primary_key_name()
    );
    table
}

/// Extract every table of `sql` and render it.
pub fn generate(sql: &str, options: &Options) -> Result<Document, Error> {
    let (tables, diagnostics) = parse_tables(sql, &options.schema)?;
    let renderer = LatexRenderer::new(options.locale, options.resolve_references);

    Ok(Document {
        fragments: tables.iter().map(|t| renderer.render(t)).collect(),
        diagnostics,
    })
}
