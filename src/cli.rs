pub mod commands;
pub mod global;

pub use commands::audit::AuditArgs;
pub use global::{CommandLineArgs, GlobalArgs, Mode};
