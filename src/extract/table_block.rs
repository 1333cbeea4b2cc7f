use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::Error;

lazy_static! {
    /// Start of any table statement; bounds the text of the one before it.
    static ref NEXT_STATEMENT: Regex = Regex::new(r"CREATE TABLE").unwrap();
    static ref PRIMARY_KEY_LINE: Regex = Regex::new(r"\n[ \t]*(PRIMARY KEY)").unwrap();
}

/// One `CREATE TABLE` statement split into its two text regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBlock<'t> {
    pub name: &'t str,
    /// Column definitions, from after the opening parenthesis up to the
    /// `PRIMARY KEY` line.
    pub columns: &'t str,
    /// From the `PRIMARY KEY` line through the first `;` after it.
    pub constraints: &'t str,
    /// Byte offset of the statement in the scanned text.
    pub offset: usize,
    pub columns_offset: usize,
    pub constraints_offset: usize,
}

/// Finds the table statements qualified by a single schema name.
pub struct TableExtractor {
    header: Regex,
}

impl TableExtractor {
    pub fn new(schema: &str) -> Result<Self, Error> {
        let header = format!(
            r"CREATE TABLE IF NOT EXISTS `{}`\.`(.*)` \(",
            regex::escape(schema)
        );
        Ok(Self {
            header: Regex::new(&header)?,
        })
    }

    /// Table blocks in input order.
    pub fn extract<'t>(&self, sql: &'t str) -> impl Iterator<Item = TableBlock<'t>> {
        self.header
            .captures_iter(sql)
            .filter_map(move |caps| split_statement(sql, &caps))
    }

    /// Statements for the schema that `extract` does not yield, as
    /// `(offset, table name)` pairs.
    pub fn unmatched<'t>(&self, sql: &'t str) -> Vec<(usize, &'t str)> {
        self.header
            .captures_iter(sql)
            .filter(|caps| split_statement(sql, caps).is_none())
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?;
                Some((whole.start(), name.as_str()))
            })
            .collect()
    }
}

/// Split the statement whose header is `caps`. The statement ends where the
/// next `CREATE TABLE` begins, so a missing PRIMARY KEY line never pulls in
/// the following table.
fn split_statement<'t>(sql: &'t str, caps: &Captures<'t>) -> Option<TableBlock<'t>> {
    let header = caps.get(0)?;
    let name = caps.get(1)?;

    let body_start = header.end();
    let body_end = NEXT_STATEMENT
        .find_at(sql, body_start)
        .map(|m| m.start())
        .unwrap_or(sql.len());
    let body = &sql[body_start..body_end];

    let primary_key = PRIMARY_KEY_LINE.captures(body)?;
    let columns_end = primary_key.get(0)?.start();
    let constraints_start = primary_key.get(1)?.start();

    let rest = &body[constraints_start..];
    let constraints_len = rest.find(';').map(|i| i + 1).unwrap_or(rest.len());

    Some(TableBlock {
        name: name.as_str(),
        columns: &body[..columns_end],
        constraints: &rest[..constraints_len],
        offset: header.start(),
        columns_offset: body_start,
        constraints_offset: body_start + constraints_start,
    })
}

/// Convenience wrapper collecting every block of `sql` for `schema`.
pub fn extract_tables<'t>(sql: &'t str, schema: &str) -> Result<Vec<TableBlock<'t>>, Error> {
    let extractor = TableExtractor::new(schema)?;
    Ok(extractor.extract(sql).collect())
}
