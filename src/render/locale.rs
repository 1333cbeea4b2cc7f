use clap::ValueEnum;

/// Language of the fixed strings in the generated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    /// Estonian
    #[default]
    Et,
    /// English
    En,
}

impl Locale {
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Et => "Tabel",
            Self::En => "Table",
        }
    }

    /// Header cells: column name, type, nullability, semantics.
    pub const fn headers(self) -> [&'static str; 4] {
        match self {
            Self::Et => ["Veeru nimi", "Tüüp", "NULL?", "Semantika"],
            Self::En => ["Column name", "Type", "NULL?", "Semantics"],
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Et => "semantika siia",
            Self::En => "semantics here",
        }
    }

    /// Sentence for a table's own surrogate key. `table` is already escaped.
    pub fn primary_key_comment(self, table: &str) -> String {
        match self {
            Self::Et => format!(
                "Tabeli \\code{{{table}}} Primary Key. Surrogaatvõti, mis omistatakse uue kirje \
                 lisamisel võttes senise maksimaalse ID väärtuse tabelis \\code{{{table}}} ja \
                 liites sellel ühe. See on peidetud võti, mida ei näidata kasutajale kunagi. "
            ),
            Self::En => format!(
                "Primary key of table \\code{{{table}}}. Surrogate key assigned to a new row by \
                 taking the current maximum ID in table \\code{{{table}}} and adding one. It is a \
                 hidden key that is never shown to the user. "
            ),
        }
    }

    /// Sentence for a foreign key. Both arguments are already escaped.
    pub fn foreign_key_comment(self, table: &str, referenced: &str) -> String {
        match self {
            Self::Et => format!(
                "Välisvõti, mis seob tabeli \\code{{{table}}} tabeliga \\code{{{referenced}}}."
            ),
            Self::En => format!(
                "Foreign key linking table \\code{{{table}}} to table \\code{{{referenced}}}."
            ),
        }
    }
}
