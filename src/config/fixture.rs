use crate::adapters::{InMemoryMemberStore, InMemoryUserStore};
use crate::core::AmbientSignals;
use crate::domain::model::{Member, User};
use crate::utils::error::{Result, ShopEnvError};
use crate::utils::validation::{validate_non_empty_string, validate_unique_ids, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A request environment described in TOML: the ambient signals plus the
/// member and user rows the lookups should see.
///
/// ```toml
/// [signals]
/// frontend_member_id = 7
/// backend_logged_in = true
/// script = "/system/modules/isotope/postsale.php"
///
/// [[members]]
/// id = 7
/// username = "jdoe"
/// groups = 'a:1:{i:0;s:1:"2";}'
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureConfig {
    #[serde(default)]
    pub signals: AmbientSignals,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl FixtureConfig {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("loaded fixture from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        let config: Self = toml::from_str(&processed)?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${SCRIPT_NAME})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShopEnvError::ConfigError {
            message: format!("placeholder pattern failed to compile: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn signals(&self) -> AmbientSignals {
        self.signals.clone()
    }

    pub fn member_store(&self) -> InMemoryMemberStore {
        self.members.iter().cloned().collect()
    }

    pub fn user_store(&self) -> InMemoryUserStore {
        self.users.iter().cloned().collect()
    }
}

impl Validate for FixtureConfig {
    fn validate(&self) -> Result<()> {
        for member in &self.members {
            validate_non_empty_string("members.username", &member.username)?;
        }
        for user in &self.users {
            validate_non_empty_string("users.username", &user.username)?;
        }

        validate_unique_ids("members", self.members.iter().map(|m| m.id.get()))?;
        validate_unique_ids("users", self.users.iter().map(|u| u.id.get()))?;

        // 找不到資料列是合法的，只提醒
        if let Some(id) = self.signals.frontend_member_id {
            if !self.members.iter().any(|m| m.id == id) {
                tracing::warn!("⚠️ signalled member {} has no row in [[members]]", id);
            }
        }
        if let Some(id) = self.signals.backend_user_id {
            if !self.users.iter().any(|u| u.id == id) {
                tracing::warn!("⚠️ signalled user {} has no row in [[users]]", id);
            }
        }

        Ok(())
    }
}
