pub mod environment;
pub mod groups;
pub mod report;
pub mod script;
pub mod signals;

pub use crate::domain::model::{Member, MemberId, User, UserId};
pub use crate::domain::ports::{MemberStore, UserStore};
pub use crate::utils::error::Result;
pub use environment::Environment;
pub use report::EnvironmentReport;
pub use script::ScriptKind;
pub use signals::AmbientSignals;
