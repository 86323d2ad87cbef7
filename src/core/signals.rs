use crate::domain::model::{MemberId, UserId};
use serde::{Deserialize, Serialize};

/// Request-scoped inputs the host framework exposes about the current
/// execution: who is logged in, whether preview is on, which entry script
/// is running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientSignals {
    /// Set iff a front-end member is logged in.
    pub frontend_member_id: Option<MemberId>,
    /// Id of the back-end user session, if any.
    pub backend_user_id: Option<UserId>,
    pub backend_logged_in: bool,
    pub frontend_preview: bool,
    pub script: String,
}

impl AmbientSignals {
    /// No login, no preview, empty script path (e.g. a bare CLI process).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, id: MemberId) -> Self {
        self.frontend_member_id = Some(id);
        self
    }

    pub fn with_user(mut self, id: UserId) -> Self {
        self.backend_user_id = Some(id);
        self
    }

    pub fn with_backend_login(mut self, logged_in: bool) -> Self {
        self.backend_logged_in = logged_in;
        self
    }

    pub fn with_preview(mut self, preview: bool) -> Self {
        self.frontend_preview = preview;
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }
}
