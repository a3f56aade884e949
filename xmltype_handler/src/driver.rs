//! The boundary to the database driver.
//!
//! The host data-access layer implements the traits of this module for its driver;
//! the handler only talks to the driver through them.

mod column_value;
mod declared_type;
mod driver_adapter;
mod driver_error;
mod driver_value;
mod interfaces;
mod sql_type;

pub use self::column_value::{ColumnValue, RawValue};
pub use self::declared_type::DeclaredType;
pub use self::driver_adapter::DriverAdapter;
pub use self::driver_error::{DriverError, DriverResult, Severity};
pub use self::driver_value::{ClassId, DriverValue};
pub use self::interfaces::{
    DriverCatalog, DriverObject, LobSource, PreparedStatement, ResultCursor, XmlSession,
};
pub use self::sql_type::SqlType;
