use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FOREIGN_KEY: Regex = Regex::new(
        r"FOREIGN KEY \(`([^`]*)`\)(?:\s*REFERENCES\s+(?:`[^`]*`\.)?`([^`]*)`)?"
    )
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey<'a> {
    /// Referencing column, without the surrounding backticks.
    pub column: &'a str,
    /// Target of the `REFERENCES` clause when the constraint has one.
    pub referenced_table: Option<&'a str>,
    /// Byte offset of the clause in the constraints block.
    pub offset: usize,
}

/// `FOREIGN KEY` clauses of a constraints block, in textual order.
pub fn extract_foreign_keys(constraints: &str) -> impl Iterator<Item = ForeignKey<'_>> {
    FOREIGN_KEY.captures_iter(constraints).filter_map(|caps| {
        let whole = caps.get(0)?;
        let column = caps.get(1)?;
        Some(ForeignKey {
            column: column.as_str(),
            referenced_table: caps.get(2).map(|m| m.as_str()),
            offset: whole.start(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbench_constraints() {
        let constraints = "PRIMARY KEY (`Login_ID`),
  INDEX `fk_Login_User_idx` (`User_Account_ID` ASC),
  CONSTRAINT `fk_Login_User`
    FOREIGN KEY (`User_Account_ID`)
    REFERENCES `mydb`.`User_Account` (`User_Account_ID`)
    ON DELETE NO ACTION
    ON UPDATE NO ACTION,
  CONSTRAINT `fk_Login_Device`
    FOREIGN KEY (`Device_ID`)
    REFERENCES `Device` (`Device_ID`))
ENGINE = InnoDB;";

        let fks: Vec<ForeignKey> = extract_foreign_keys(constraints).collect();
        assert_eq!(fks.len(), 2);
        assert_eq!(fks[0].column, "User_Account_ID");
        assert_eq!(fks[0].referenced_table, Some("User_Account"));
        assert_eq!(fks[1].column, "Device_ID");
        assert_eq!(fks[1].referenced_table, Some("Device"));
        assert!(constraints[fks[0].offset..].starts_with("FOREIGN KEY"));
    }

    #[test]
    fn test_clause_without_references() {
        let fks: Vec<ForeignKey> =
            extract_foreign_keys("FOREIGN KEY (`Role_ID`) ON DELETE CASCADE;").collect();
        assert_eq!(fks.len(), 1);
        assert_eq!(fks[0].column, "Role_ID");
        assert_eq!(fks[0].referenced_table, None);
    }

    #[test]
    fn test_no_foreign_keys() {
        assert_eq!(extract_foreign_keys("PRIMARY KEY (`User_ID`));").count(), 0);
    }
}
