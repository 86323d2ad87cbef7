#[cfg(feature = "cli")]
pub mod cli;
pub mod fixture;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
pub use fixture::FixtureConfig;
