use crate::core::script::ScriptKind;
use crate::domain::model::{Member, User};
use serde::Serialize;
use std::fmt;

/// Serializable snapshot of an [`Environment`](crate::core::environment::Environment).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentReport {
    pub frontend_preview: bool,
    pub can_see_unpublished: bool,
    pub script: String,
    pub script_kind: Option<ScriptKind>,
    pub member: Option<MemberSummary>,
    pub user: Option<UserSummary>,
    pub member_groups: Vec<String>,
    pub user_groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberSummary {
    pub id: u32,
    pub username: String,
    pub display_name: String,
}

impl From<&Member> for MemberSummary {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.get(),
            username: member.username.clone(),
            display_name: member.display_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: u32,
    pub username: String,
    pub admin: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            username: user.username.clone(),
            admin: user.admin,
        }
    }
}

impl fmt::Display for EnvironmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(m) => writeln!(
                f,
                "member:            #{} {} ({})",
                m.id, m.username, m.display_name
            )?,
            None => writeln!(f, "member:            -")?,
        }
        match &self.user {
            Some(u) => writeln!(
                f,
                "user:              #{} {}{}",
                u.id,
                u.username,
                if u.admin { " [admin]" } else { "" }
            )?,
            None => writeln!(f, "user:              -")?,
        }
        writeln!(f, "member groups:     {}", join_or_dash(&self.member_groups))?;
        writeln!(f, "user groups:       {}", join_or_dash(&self.user_groups))?;
        writeln!(f, "frontend preview:  {}", self.frontend_preview)?;
        writeln!(f, "see unpublished:   {}", self.can_see_unpublished)?;
        write!(
            f,
            "script:            {} ({})",
            if self.script.is_empty() { "-" } else { self.script.as_str() },
            self.script_kind
                .map(|k| k.to_string())
                .unwrap_or_else(|| "regular".to_string())
        )
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
