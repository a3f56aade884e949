//! Value handler for XML database columns.
//!
//! `xmltype_handler` converts between the driver-native representation of an XML column
//! value and [`XmlContent`], a uniform large-object value that the rest of a data layer
//! can display, bind again, or transfer to another database.
//!
//! The handler works in both directions:
//!
//! - [`XmlValueHandler::fetch_column_value`] reads a column from a result cursor,
//! - [`XmlValueHandler::bind_parameter`] binds a value to a prepared statement parameter,
//! - [`XmlValueHandler::value_from_object`] converts an arbitrary host value into `XmlContent`.
//!
//! The database driver itself is not part of this crate; it is plugged in through the traits
//! in [`driver`] (cursor, statement, session, and the driver's class catalog).
//!
//! XML content that originates from a _different_ driver (e.g. when data are copied from one
//! database into another) is accepted as well and normalized into the driver-native
//! XML object before it is bound.

#![deny(missing_debug_implementations)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

mod exec;
mod handler;
mod types_impl;
mod validate;
mod xml_error;

pub mod driver;

pub use crate::exec::{ExecutionContext, ProgressMonitor, SubTask};
pub use crate::handler::{
    HandlerConfiguration, HandlerStatistics, LobValueHandler, XmlValueHandler,
};
pub use crate::types_impl::{
    create_xml_object, ForeignXmlContent, HostValue, InMemoryLob, NativeXml, SqlXml, XmlContent,
};
pub use crate::validate::check_well_formed;
pub use crate::xml_error::{XmlError, XmlResult};

/// Fully qualified class name of the vendor's native XML type.
///
/// The driver's class catalog resolves this name once, when the handler is created
/// (see [`driver::DriverCatalog::resolve_class`]).
pub const XMLTYPE_CLASS_NAME: &str = "oracle.xdb.XMLType";

/// MIME type of the content that is produced by this handler.
pub const MIME_TEXT_XML: &str = "text/xml";
