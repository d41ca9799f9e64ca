// crosscheck-core/src/domain/dialect.rs
//
// A dialect decides how a table reference is qualified, nothing more.
// The rule vocabulary (COUNT_STAR, SUM...) is shared across all of them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// SQL Server: bracket-quoted [database].[schema].[table]
    SqlServer,
    /// Oracle: schema.table, the database lives in the connection
    Oracle,
    /// Netezza: database.schema.table
    Netezza,
    /// Snowflake: database.schema.table
    Snowflake,
    /// Flat file loaded in memory, queried under a fixed logical name
    Csv,
    /// Fallback: schema.table
    Generic,
}

impl Dialect {
    /// Maps a connector-reported identifier to a dialect.
    /// Unknown identifiers fall back to the generic schema.table style.
    pub fn from_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "sqlserver" | "mssql" => Dialect::SqlServer,
            "oracle" => Dialect::Oracle,
            "netezza" | "nz" => Dialect::Netezza,
            "snowflake" => Dialect::Snowflake,
            "csv" => Dialect::Csv,
            _ => Dialect::Generic,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Dialect::SqlServer => "sqlserver",
            Dialect::Oracle => "oracle",
            Dialect::Netezza => "netezza",
            Dialect::Snowflake => "snowflake",
            Dialect::Csv => "csv",
            Dialect::Generic => "generic",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_aliases() {
        assert_eq!(Dialect::from_id("MSSQL"), Dialect::SqlServer);
        assert_eq!(Dialect::from_id("nz"), Dialect::Netezza);
        assert_eq!(Dialect::from_id("Snowflake"), Dialect::Snowflake);
    }

    #[test]
    fn test_from_id_unknown_falls_back() {
        assert_eq!(Dialect::from_id("postgresql"), Dialect::Generic);
        assert_eq!(Dialect::from_id(""), Dialect::Generic);
    }
}
