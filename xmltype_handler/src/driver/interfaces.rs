use crate::{
    driver::{ClassId, DriverResult, DriverValue, SqlType},
    ExecutionContext, ProgressMonitor, SqlXml,
};
use std::{io::Read, sync::Arc};

/// Catalog of the runtime classes that a driver can produce.
///
/// It is consulted once, when an [`XmlValueHandler`](crate::XmlValueHandler) is created.
pub trait DriverCatalog {
    /// Name of the driver, for logging.
    fn driver_name(&self) -> &str;

    /// Returns the tag of the class with the given fully qualified name,
    /// or `None` if the driver does not know such a class.
    fn resolve_class(&self, class_name: &str) -> Option<ClassId>;
}

/// Something that can deliver large-object content as a byte stream.
pub trait LobSource: std::fmt::Debug + Send + Sync {
    /// Opens a new stream over the complete content.
    fn binary_stream(&self) -> DriverResult<Box<dyn Read + Send + '_>>;

    /// Returns the length of the content in bytes, if the source knows it upfront.
    fn byte_length(&self) -> Option<u64> {
        None
    }
}

/// An object as it is returned from a generic driver read.
pub trait DriverObject: LobSource {
    /// The capability tag of the object's runtime class.
    fn class_id(&self) -> ClassId;

    /// The fully qualified name of the object's runtime class.
    fn class_name(&self) -> &str;
}

/// A cursor over a result set, positioned on the current row.
pub trait ResultCursor {
    /// Reads the column as a generic object.
    fn get_object(&mut self, index: usize) -> DriverResult<DriverValue>;

    /// Reads the column as a generic XML stream handle; `Ok(None)` represents SQL NULL.
    fn get_sqlxml(&mut self, index: usize) -> DriverResult<Option<SqlXml>>;
}

/// A prepared statement with indexed parameter setters.
pub trait PreparedStatement {
    /// Binds a NULL value that carries the given type information.
    fn set_null(&mut self, index: usize, sql_type: SqlType, type_name: &str) -> DriverResult<()>;

    /// Binds a driver object.
    fn set_object(&mut self, index: usize, object: &dyn DriverObject) -> DriverResult<()>;
}

/// The database session within which values are fetched and bound.
pub trait XmlSession {
    /// The execution context that fetched content is bound to.
    fn execution_context(&self) -> &Arc<ExecutionContext>;

    /// The progress and cancellation context of the current operation.
    fn progress_monitor(&self) -> &ProgressMonitor;

    /// Constructs a driver-native XML object from the given byte stream.
    fn create_xml_object(&self, stream: &mut dyn Read) -> DriverResult<Arc<dyn DriverObject>>;
}
