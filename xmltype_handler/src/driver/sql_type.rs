use crate::{usage_err, XmlResult};

/// SQL type code of a database column or a parameter.
///
/// The numeric values are the type codes that are used in statement calls like
/// [`PreparedStatement::set_null`](crate::driver::PreparedStatement::set_null).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum SqlType {
    /// The generic SQL NULL type.
    NULL = 0,
    /// For database type CHAR.
    CHAR = 1,
    /// For database type VARCHAR.
    VARCHAR = 12,
    /// For database type LONGVARCHAR.
    LONGVARCHAR = -1,
    /// For database type BINARY.
    BINARY = -2,
    /// For database type VARBINARY.
    VARBINARY = -3,
    /// For database type NCHAR.
    NCHAR = -15,
    /// For database type NVARCHAR.
    NVARCHAR = -9,
    /// Database specific types that have no own type code.
    OTHER = 1111,
    /// For database type BLOB.
    BLOB = 2004,
    /// For database type CLOB.
    CLOB = 2005,
    /// Opaque vendor types; the native XML type is transported as such.
    OPAQUE = 2007,
    /// For database type XML, used for all binds of XML values.
    SQLXML = 2009,
    /// For database type NCLOB.
    NCLOB = 2011,
}

impl SqlType {
    /// Maps a type code into the `SqlType`.
    pub fn try_new(code: i32) -> XmlResult<Self> {
        Ok(match code {
            0 => Self::NULL,
            1 => Self::CHAR,
            12 => Self::VARCHAR,
            -1 => Self::LONGVARCHAR,
            -2 => Self::BINARY,
            -3 => Self::VARBINARY,
            -15 => Self::NCHAR,
            -9 => Self::NVARCHAR,
            1111 => Self::OTHER,
            2004 => Self::BLOB,
            2005 => Self::CLOB,
            2007 => Self::OPAQUE,
            2009 => Self::SQLXML,
            2011 => Self::NCLOB,
            tc => return Err(usage_err!("Illegal type code {tc}")),
        })
    }

    /// Returns the type code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns true for the large-object types, including XML.
    pub fn is_lob(self) -> bool {
        matches!(
            self,
            Self::BLOB | Self::CLOB | Self::NCLOB | Self::SQLXML | Self::OPAQUE
        )
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            fmt,
            "{}",
            match self {
                Self::NULL => "NULL",
                Self::CHAR => "CHAR",
                Self::VARCHAR => "VARCHAR",
                Self::LONGVARCHAR => "LONGVARCHAR",
                Self::BINARY => "BINARY",
                Self::VARBINARY => "VARBINARY",
                Self::NCHAR => "NCHAR",
                Self::NVARCHAR => "NVARCHAR",
                Self::OTHER => "OTHER",
                Self::BLOB => "BLOB",
                Self::CLOB => "CLOB",
                Self::OPAQUE => "OPAQUE",
                Self::SQLXML => "SQLXML",
                Self::NCLOB => "NCLOB",
            }
        )
    }
}

#[cfg(test)]
mod test {
    use super::SqlType;

    #[test]
    fn test_type_codes() {
        for sql_type in [
            SqlType::NULL,
            SqlType::VARCHAR,
            SqlType::LONGVARCHAR,
            SqlType::CLOB,
            SqlType::OPAQUE,
            SqlType::SQLXML,
            SqlType::NCLOB,
        ] {
            assert_eq!(SqlType::try_new(sql_type.code()).unwrap(), sql_type);
        }
        assert_eq!(SqlType::SQLXML.code(), 2009);
        assert!(SqlType::try_new(4711).is_err());
    }

    #[test]
    fn test_is_lob() {
        assert!(SqlType::SQLXML.is_lob());
        assert!(SqlType::CLOB.is_lob());
        assert!(!SqlType::VARCHAR.is_lob());
        assert_eq!(SqlType::SQLXML.to_string(), "SQLXML");
    }
}
