use crate::core::groups::decode_groups;
use crate::core::report::{EnvironmentReport, MemberSummary, UserSummary};
use crate::core::script::ScriptKind;
use crate::core::signals::AmbientSignals;
use crate::domain::model::{Member, User};
use crate::domain::ports::{MemberStore, UserStore};
use std::fmt;

/// Who is acting in the current request, and under what viewing rules.
///
/// Built once per request from [`AmbientSignals`], then read (and possibly
/// overridden through the setters) for the rest of the request. The member
/// and user are looked up through the injected stores on [`reset`].
///
/// Nothing here fails: a lookup that finds no row leaves the field empty.
///
/// [`reset`]: Environment::reset
pub struct Environment<M, U> {
    members: M,
    users: U,
    is_frontend_preview: bool,
    can_see_unpublished: bool,
    script: String,
    member: Option<Member>,
    user: Option<User>,
}

impl<M: MemberStore, U: UserStore> Environment<M, U> {
    /// Anonymous environment: nobody logged in, no preview, no script.
    pub fn new(members: M, users: U) -> Self {
        Self {
            members,
            users,
            is_frontend_preview: false,
            can_see_unpublished: false,
            script: String::new(),
            member: None,
            user: None,
        }
    }

    pub fn from_signals(signals: &AmbientSignals, members: M, users: U) -> Self {
        let mut env = Self::new(members, users);
        env.reset(signals);
        env
    }

    /// Re-derive every field from `signals`.
    ///
    /// A member or user is only held afterwards if the signal carries an id
    /// and the store has a row for it.
    pub fn reset(&mut self, signals: &AmbientSignals) -> &mut Self {
        self.member = signals
            .frontend_member_id
            .and_then(|id| self.members.find_member(id));
        self.user = signals
            .backend_user_id
            .and_then(|id| self.users.find_user(id));

        self.can_see_unpublished = signals.backend_logged_in;
        self.is_frontend_preview = signals.frontend_preview;
        self.script = signals.script.clone();

        tracing::debug!(
            "environment reset: member={:?} user={:?} preview={} unpublished={} script={:?}",
            self.member.as_ref().map(|m| m.id),
            self.user.as_ref().map(|u| u.id),
            self.is_frontend_preview,
            self.can_see_unpublished,
            self.script
        );

        self
    }
}

impl<M, U> Environment<M, U> {
    pub fn has_member(&self) -> bool {
        self.member.is_some()
    }

    pub fn has_user(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_frontend_preview(&self) -> bool {
        self.is_frontend_preview
    }

    pub fn can_see_unpublished(&self) -> bool {
        self.can_see_unpublished
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn is_install_script(&self) -> bool {
        ScriptKind::Install.matches(&self.script)
    }

    pub fn is_postsale_script(&self) -> bool {
        ScriptKind::Postsale.matches(&self.script)
    }

    pub fn is_cron_script(&self) -> bool {
        ScriptKind::Cron.matches(&self.script)
    }

    pub fn script_kind(&self) -> Option<ScriptKind> {
        ScriptKind::detect(&self.script)
    }

    pub fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Group ids of the current member; empty if there is none or the
    /// stored list cannot be decoded.
    pub fn member_groups(&self) -> Vec<String> {
        self.member
            .as_ref()
            .and_then(|m| m.groups.as_deref())
            .and_then(decode_groups)
            .unwrap_or_default()
    }

    /// Group ids of the current back-end user, same rules as
    /// [`member_groups`](Self::member_groups).
    pub fn user_groups(&self) -> Vec<String> {
        self.user
            .as_ref()
            .and_then(|u| u.groups.as_deref())
            .and_then(decode_groups)
            .unwrap_or_default()
    }

    pub fn set_is_frontend_preview(&mut self, status: bool) -> &mut Self {
        self.is_frontend_preview = status;
        self
    }

    pub fn set_can_see_unpublished(&mut self, status: bool) -> &mut Self {
        self.can_see_unpublished = status;
        self
    }

    pub fn set_member(&mut self, member: Member) -> &mut Self {
        self.member = Some(member);
        self
    }

    pub fn set_user(&mut self, user: User) -> &mut Self {
        self.user = Some(user);
        self
    }

    pub fn set_script(&mut self, script: impl Into<String>) -> &mut Self {
        self.script = script.into();
        self
    }

    pub fn clear_member(&mut self) -> &mut Self {
        self.member = None;
        self
    }

    pub fn clear_user(&mut self) -> &mut Self {
        self.user = None;
        self
    }

    pub fn report(&self) -> EnvironmentReport {
        EnvironmentReport {
            frontend_preview: self.is_frontend_preview,
            can_see_unpublished: self.can_see_unpublished,
            script: self.script.clone(),
            script_kind: self.script_kind(),
            member: self.member.as_ref().map(MemberSummary::from),
            user: self.user.as_ref().map(UserSummary::from),
            member_groups: self.member_groups(),
            user_groups: self.user_groups(),
        }
    }
}

impl<M, U> fmt::Debug for Environment<M, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("is_frontend_preview", &self.is_frontend_preview)
            .field("can_see_unpublished", &self.can_see_unpublished)
            .field("script", &self.script)
            .field("member", &self.member)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
