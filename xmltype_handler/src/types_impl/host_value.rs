use crate::{ForeignXmlContent, XmlContent, XmlResult};

/// A value that the host application hands over for binding or conversion.
#[derive(Clone, Debug)]
pub enum HostValue {
    /// Representation of a NULL value.
    Null,
    /// Content that was produced by this handler.
    Xml(XmlContent),
    /// XML content that was produced by some other driver.
    ForeignXml(ForeignXmlContent),
    /// A character value, e.g. XML text entered by a user.
    String(String),
    /// A binary value, interpreted as UTF-8 encoded text.
    Bytes(Vec<u8>),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Double(f64),
    /// A boolean value.
    Bool(bool),
}

impl HostValue {
    /// Returns true if the value represents NULL,
    /// including content wrappers that are NULL.
    pub fn is_null_value(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Xml(content) => content.is_null(),
            Self::ForeignXml(foreign) => foreign.is_null(),
            _ => false,
        }
    }

    /// Returns the type name of the value, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Xml(_) => "XmlContent",
            Self::ForeignXml(_) => "ForeignXmlContent",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Int(_) => "Int",
            Self::Double(_) => "Double",
            Self::Bool(_) => "Bool",
        }
    }

    /// Returns the string form of the value.
    ///
    /// NULL is represented by the empty String; content wrappers are read completely.
    pub fn to_string_form(&self) -> XmlResult<String> {
        Ok(match self {
            Self::Null => String::new(),
            Self::Xml(content) => content.to_string_value()?.unwrap_or_default(),
            Self::ForeignXml(foreign) => match foreign.raw_value() {
                Some(sqlxml) => sqlxml.to_string_value()?,
                None => String::new(),
            },
            Self::String(s) => s.clone(),
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Int(i) => i.to_string(),
            Self::Double(d) => d.to_string(),
            Self::Bool(b) => b.to_string(),
        })
    }
}

impl From<XmlContent> for HostValue {
    fn from(content: XmlContent) -> Self {
        Self::Xml(content)
    }
}
impl From<ForeignXmlContent> for HostValue {
    fn from(foreign: ForeignXmlContent) -> Self {
        Self::ForeignXml(foreign)
    }
}
impl From<String> for HostValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}
impl From<Vec<u8>> for HostValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}
impl From<i64> for HostValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}
impl From<f64> for HostValue {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}
impl From<bool> for HostValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl<T: Into<HostValue>> From<Option<T>> for HostValue {
    fn from(o: Option<T>) -> Self {
        o.map_or(Self::Null, Into::into)
    }
}
