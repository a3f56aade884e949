use crate::driver::SqlType;

/// Metadata of a column or a parameter, as it was declared in the database.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeclaredType {
    type_name: String,
    sql_type: SqlType,
}
impl DeclaredType {
    /// Creates a new `DeclaredType`.
    pub fn new<S: Into<String>>(type_name: S, sql_type: SqlType) -> Self {
        Self {
            type_name: type_name.into(),
            sql_type,
        }
    }

    /// The declared type of vendor XML columns.
    pub fn xmltype() -> Self {
        Self::new("XMLTYPE", SqlType::SQLXML)
    }

    /// Returns the database-specific name of the type, e.g. `SYS.XMLTYPE`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the SQL type code.
    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }
}

impl std::fmt::Display for DeclaredType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{} ({})", self.type_name, self.sql_type)
    }
}
