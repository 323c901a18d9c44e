pub mod errors;
pub mod logging;
pub mod resolver;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{NaptrOrdering, ResolverConfig};
