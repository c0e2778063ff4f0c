// cargo watch -x 'fmt' -x 'test'

pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod shell;

pub use error::ResolveError;
pub use models::{Resolution, SubnetFacts};
pub use processing::resolve;

/// Binary name used in the version line.
pub const BIN_NAME: &str = "cidr";

/// `cidr version <version>, commit <commit>, built at <date>`.
///
/// Commit and date are taken from `CIDR_COMMIT` / `CIDR_BUILD_DATE` at
/// build time.
pub fn version_line() -> String {
    format!(
        "{BIN_NAME} version {version}, commit {commit}, built at {date}",
        version = env!("CARGO_PKG_VERSION"),
        commit = option_env!("CIDR_COMMIT").unwrap_or("none"),
        date = option_env!("CIDR_BUILD_DATE").unwrap_or("unknown"),
    )
}
