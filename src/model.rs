//! Parsed tables and columns.
//!
//! Records are built once during extraction and only read afterwards. The
//! escaped display names are computed by the constructors, so they always
//! agree with the raw names.

/// Escape every underscore for LaTeX (`_` → `\_`).
pub fn escape_latex(s: &str) -> String {
    s.replace('_', r"\_")
}

/// Escape free text such as a type or a `DEFAULT` clause for use inside a
/// table cell. Covers the characters that would otherwise end the cell,
/// start a comment or enter math mode.
pub fn escape_latex_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '_' | '%' | '&' | '#' | '$') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    name_escaped: String,
    primary_key_name: String,
    columns: Vec<Column>,
    foreign_keys: Vec<ForeignKeyRef>,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            name_escaped: escape_latex(name),
            primary_key_name: format!("{}_ID", name),
            columns: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn add_foreign_key(&mut self, foreign_key: ForeignKeyRef) {
        self.foreign_keys.push(foreign_key);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_escaped(&self) -> &str {
        &self.name_escaped
    }

    /// Conventional surrogate key name, `<name>_ID`. Not read from the DDL.
    pub fn primary_key_name(&self) -> &str {
        &self.primary_key_name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn foreign_keys(&self) -> &[ForeignKeyRef] {
        &self.foreign_keys
    }

    /// Table referenced by the `FOREIGN KEY` clause on `column`, if declared.
    pub fn referenced_table(&self, column: &str) -> Option<&str> {
        self.foreign_keys
            .iter()
            .find(|fk| fk.column == column)
            .and_then(|fk| fk.referenced_table.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    name_escaped: String,
    nullable_clause: String,
    data_type: String,
}

impl Column {
    pub fn new(name: &str, nullable_clause: &str, data_type: &str) -> Self {
        Self {
            name: name.to_string(),
            name_escaped: escape_latex(name),
            nullable_clause: nullable_clause.to_string(),
            data_type: data_type.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_escaped(&self) -> &str {
        &self.name_escaped
    }

    pub fn nullable_clause(&self) -> &str {
        &self.nullable_clause
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }
}

/// A `FOREIGN KEY` clause from a table's constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub column: String,
    pub referenced_table: Option<String>,
}
