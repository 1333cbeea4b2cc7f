//! LaTeX rendering of parsed tables.

mod locale;

pub use locale::Locale;

use crate::model::{Column, Table, escape_latex, escape_latex_text};

/// Semantic role of a column, decided from its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// The owning table's surrogate key (`<TABLE>_ID`).
    PrimaryKey,
    /// Any other `_ID` column.
    ForeignKey,
    Plain,
}

/// Classify `column` of `table`, first match wins:
/// the upper-cased name contains `<TABLE>_ID`, then the name contains `_ID`.
pub fn classify(table: &Table, column: &Column) -> ColumnRole {
    let own_key = format!("{}_ID", table.name().to_uppercase());
    if column.name().to_uppercase().contains(&own_key) {
        ColumnRole::PrimaryKey
    } else if column.name().contains("_ID") {
        ColumnRole::ForeignKey
    } else {
        ColumnRole::Plain
    }
}

fn wrap_in_code(s: &str) -> String {
    format!("\\code{{{}}}", s)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LatexRenderer {
    locale: Locale,
    resolve_references: bool,
}

impl LatexRenderer {
    pub const fn new(locale: Locale, resolve_references: bool) -> Self {
        Self {
            locale,
            resolve_references,
        }
    }

    /// One `table` environment for `table`, ending with a newline.
    pub fn render(&self, table: &Table) -> String {
        let mut latex = String::new();

        latex.push_str("\\begin{table}[H]\n");
        latex.push_str(&format!(
            "\\caption{{{}: {}}}\n",
            self.locale.caption(),
            wrap_in_code(table.name_escaped())
        ));
        latex.push_str(&format!("\\label{{tab:{}}}\n", table.name()));

        latex.push_str("\n\\begin{tabularx}{\\textwidth}{|l|l|l|X|}\n\\hline\n");
        let header = self
            .locale
            .headers()
            .iter()
            .map(|h| format!("\\textbf{{{}}}", h))
            .collect::<Vec<String>>()
            .join(" & ");
        latex.push_str(&header);
        latex.push_str(" \\\\ \\hline\n");

        for column in table.columns() {
            latex.push_str(&self.render_row(table, column));
            latex.push('\n');
        }

        latex.push_str("\\end{tabularx}\n\\end{table}\n");
        latex
    }

    fn render_row(&self, table: &Table, column: &Column) -> String {
        let cells = [
            wrap_in_code(column.name_escaped()),
            wrap_in_code(&escape_latex_text(column.data_type())),
            wrap_in_code(&escape_latex_text(column.nullable_clause())),
            self.comment(table, column),
        ];
        format!("{}\\\\ \\hline", cells.join(" & "))
    }

    fn comment(&self, table: &Table, column: &Column) -> String {
        match classify(table, column) {
            ColumnRole::PrimaryKey => self.locale.primary_key_comment(table.name_escaped()),
            ColumnRole::ForeignKey => {
                // Without resolution the column name stands in for the
                // referenced table.
                let referenced = self
                    .resolve_references
                    .then(|| table.referenced_table(column.name()))
                    .flatten()
                    .map(escape_latex)
                    .unwrap_or_else(|| column.name_escaped().to_string());
                self.locale
                    .foreign_key_comment(table.name_escaped(), &referenced)
            }
            ColumnRole::Plain => self.locale.placeholder().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ForeignKeyRef;
    use rstest::rstest;

    fn user_table() -> Table {
        let mut table = Table::new("User");
        table.add_column(Column::new("User_ID", "NOT NULL", "int(11)"));
        table.add_column(Column::new("user_name", "NOT NULL", "varchar(255)"));
        table.add_column(Column::new("Role_ID", "NULL", "int(11)"));
        table
    }

    #[rstest]
    #[case("User", "User_ID", ColumnRole::PrimaryKey)]
    #[case("User", "USER_ID", ColumnRole::PrimaryKey)]
    #[case("User", "Parent_User_ID", ColumnRole::PrimaryKey)]
    #[case("User", "Role_ID", ColumnRole::ForeignKey)]
    #[case("User_Account", "User_ID", ColumnRole::ForeignKey)]
    #[case("User", "user_name", ColumnRole::Plain)]
    #[case("User", "role_id", ColumnRole::Plain)]
    fn test_classify(#[case] table: &str, #[case] column: &str, #[case] expected: ColumnRole) {
        let table = Table::new(table);
        let column = Column::new(column, "NULL", "int");
        assert_eq!(classify(&table, &column), expected);
    }

    #[test]
    fn test_render_user_table() {
        let latex = LatexRenderer::default().render(&user_table());
        let expected = [
            r"\begin{table}[H]",
            r"\caption{Tabel: \code{User}}",
            r"\label{tab:User}",
            "",
            r"\begin{tabularx}{\textwidth}{|l|l|l|X|}",
            r"\hline",
            r"\textbf{Veeru nimi} & \textbf{Tüüp} & \textbf{NULL?} & \textbf{Semantika} \\ \hline",
        ];
        let lines: Vec<&str> = latex.lines().collect();
        assert_eq!(&lines[..expected.len()], expected);

        let rows = &lines[expected.len()..expected.len() + 3];
        assert!(rows[0].starts_with(r"\code{User\_ID} & \code{int(11)} & \code{NOT NULL} & Tabeli \code{User} Primary Key."));
        assert_eq!(
            rows[1],
            r"\code{user\_name} & \code{varchar(255)} & \code{NOT NULL} & semantika siia\\ \hline"
        );
        assert_eq!(
            rows[2],
            r"\code{Role\_ID} & \code{int(11)} & \code{NULL} & Välisvõti, mis seob tabeli \code{User} tabeliga \code{Role\_ID}.\\ \hline"
        );
        assert_eq!(&lines[expected.len() + 3..], [r"\end{tabularx}", r"\end{table}"]);
    }

    #[test]
    fn test_label_uses_raw_name() {
        let latex = LatexRenderer::default().render(&Table::new("order_line"));
        assert!(latex.contains(r"\caption{Tabel: \code{order\_line}}"));
        assert!(latex.contains(r"\label{tab:order_line}"));
    }

    #[test]
    fn test_no_raw_underscore_in_rows() {
        let mut table = Table::new("audit_log");
        table.add_column(Column::new("created_at", "DEFAULT CURRENT_TIMESTAMP", "date_time"));
        let latex = LatexRenderer::new(Locale::En, false).render(&table);
        let row = latex
            .lines()
            .find(|l| l.starts_with(r"\code{created"))
            .unwrap();
        assert_eq!(row.matches('_').count(), row.matches(r"\_").count());
    }

    #[test]
    fn test_special_characters_stay_in_their_cell() {
        let mut table = Table::new("Discount");
        table.add_column(Column::new("rate", "NULL DEFAULT '50%'", "varchar(8)"));
        let latex = LatexRenderer::default().render(&table);
        assert!(latex.contains(
            r"\code{rate} & \code{varchar(8)} & \code{NULL DEFAULT '50\%'} & semantika siia\\ \hline"
        ));
    }

    #[rstest]
    #[case(false, r"\code{Role\_ID}.")]
    #[case(true, r"\code{App\_Role}.")]
    fn test_resolve_references(#[case] resolve: bool, #[case] expected_tail: &str) {
        let mut table = user_table();
        table.add_foreign_key(ForeignKeyRef {
            column: "Role_ID".to_string(),
            referenced_table: Some("App_Role".to_string()),
        });
        let latex = LatexRenderer::new(Locale::Et, resolve).render(&table);
        let row = latex.lines().find(|l| l.starts_with(r"\code{Role")).unwrap();
        assert!(row.ends_with(&format!("{}\\\\ \\hline", expected_tail)));
    }

    #[test]
    fn test_resolve_references_falls_back_to_column_name() {
        let latex = LatexRenderer::new(Locale::En, true).render(&user_table());
        assert!(latex.contains(r"Foreign key linking table \code{User} to table \code{Role\_ID}."));
    }
}
