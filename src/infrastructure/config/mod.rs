//! Infrastructure configuration modules.

pub mod logging;
pub mod settings;
pub mod watch;
