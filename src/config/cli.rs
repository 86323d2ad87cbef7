use crate::core::AmbientSignals;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "shop-env")]
#[command(about = "Inspect the storefront request environment described by a fixture")]
pub struct CliConfig {
    #[arg(long, short = 'c', help = "Path to the TOML fixture")]
    pub config: String,

    #[arg(long, help = "Override the current script path")]
    pub script: Option<String>,

    #[arg(long, help = "Force frontend preview on")]
    pub preview: bool,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command-line overrides win over the fixture's signals.
    pub fn apply_overrides(&self, signals: &mut AmbientSignals) {
        if let Some(script) = &self.script {
            signals.script = script.clone();
        }
        if self.preview {
            signals.frontend_preview = true;
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_override() {
        let cli = CliConfig::parse_from([
            "shop-env",
            "--config",
            "env.toml",
            "--script",
            "/install.php",
            "--preview",
            "--format",
            "json",
        ]);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.format, OutputFormat::Json);

        let mut signals = AmbientSignals::anonymous().with_script("/index.php");
        cli.apply_overrides(&mut signals);
        assert_eq!(signals.script, "/install.php");
        assert!(signals.frontend_preview);
    }

    #[test]
    fn test_no_overrides_keeps_fixture() {
        let cli = CliConfig::parse_from(["shop-env", "-c", "env.toml"]);
        assert_eq!(cli.format, OutputFormat::Text);

        let mut signals = AmbientSignals::anonymous()
            .with_script("/cron.php")
            .with_preview(false);
        cli.apply_overrides(&mut signals);
        assert_eq!(signals.script, "/cron.php");
        assert!(!signals.frontend_preview);
    }

    #[test]
    fn test_empty_config_path_invalid() {
        let cli = CliConfig::parse_from(["shop-env", "--config", ""]);
        assert!(cli.validate().is_err());
    }
}
