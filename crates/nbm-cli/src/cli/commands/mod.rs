//! CLI command handlers. Each command is in its own file for clarity and line limit.

mod endpoints;
mod run;

pub use endpoints::run_endpoints;
pub use run::run_mirror;
