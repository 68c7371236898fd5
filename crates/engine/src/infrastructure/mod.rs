//! Infrastructure: ports and their implementations, settings, logging.

pub mod clock;
pub mod logging;
pub mod ports;
pub mod settings;
