pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};
pub use config::FixtureConfig;

pub use crate::adapters::{InMemoryMemberStore, InMemoryUserStore};
pub use crate::core::{AmbientSignals, Environment, EnvironmentReport, ScriptKind};
pub use crate::domain::model::{Member, MemberId, User, UserId};
pub use crate::domain::ports::{MemberStore, UserStore};
pub use crate::utils::error::{Result, ShopEnvError};
