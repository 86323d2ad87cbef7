use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry scripts that change how the storefront behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    Install,
    Postsale,
    Cron,
}

impl ScriptKind {
    /// Detection order used by [`ScriptKind::detect`].
    pub const ALL: [ScriptKind; 3] = [ScriptKind::Install, ScriptKind::Postsale, ScriptKind::Cron];

    pub fn marker(self) -> &'static str {
        match self {
            ScriptKind::Install => "install.php",
            ScriptKind::Postsale => "postsale.php",
            ScriptKind::Cron => "cron.php",
        }
    }

    /// Plain substring match; the marker may appear anywhere in the path,
    /// query string included.
    pub fn matches(self, script: &str) -> bool {
        script.contains(self.marker())
    }

    pub fn detect(script: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.matches(script))
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptKind::Install => "install",
            ScriptKind::Postsale => "postsale",
            ScriptKind::Cron => "cron",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_match_anywhere() {
        assert!(ScriptKind::Install.matches("/contao/install.php"));
        assert!(ScriptKind::Postsale.matches("system/modules/isotope/postsale.php?mod=pay&id=3"));
        assert!(ScriptKind::Cron.matches("/index.php?next=cron.php"));
        assert!(!ScriptKind::Cron.matches("/cron/index.php"));
    }

    #[test]
    fn test_detect_order() {
        assert_eq!(ScriptKind::detect("/index.php"), None);
        assert_eq!(ScriptKind::detect("/system/cron/cron.php"), Some(ScriptKind::Cron));
        // both markers present: install wins
        assert_eq!(
            ScriptKind::detect("/install.php?back=cron.php"),
            Some(ScriptKind::Install)
        );
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!ScriptKind::Install.matches("/INSTALL.PHP"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ScriptKind::Postsale).unwrap(), "\"postsale\"");
        assert_eq!(ScriptKind::Cron.to_string(), "cron");
    }
}
