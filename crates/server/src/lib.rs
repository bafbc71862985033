pub mod cors;
pub mod errors;
pub mod routes;
pub mod startup;

pub use startup::{build_app, run_with_shutdown};
