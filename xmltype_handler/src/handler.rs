mod handler_configuration;
mod handler_statistics;
mod lob_value_handler;
mod xml_value_handler;

pub use self::handler_configuration::HandlerConfiguration;
pub use self::handler_statistics::HandlerStatistics;
pub use self::lob_value_handler::LobValueHandler;
pub use self::xml_value_handler::XmlValueHandler;
