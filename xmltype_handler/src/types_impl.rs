mod foreign_xml;
mod host_value;
mod native_xml;
mod sql_xml;
mod xml_content;

pub use self::foreign_xml::ForeignXmlContent;
pub use self::host_value::HostValue;
pub use self::native_xml::{create_xml_object, NativeXml};
pub use self::sql_xml::{InMemoryLob, SqlXml};
pub use self::xml_content::XmlContent;

pub(crate) use self::sql_xml::read_all;
