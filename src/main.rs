use anyhow::Context;
use clap::Parser;
use shop_env::utils::{logger, validation::Validate};
use shop_env::{CliConfig, Environment, EnvironmentReport, FixtureConfig, OutputFormat, ShopEnvError};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 設定錯誤給使用者友善訊息，其餘錯誤交給 anyhow
    let report = match config.validate().and_then(|_| build_report(&config)) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    print_report(&report, config.format)
}

fn build_report(config: &CliConfig) -> Result<EnvironmentReport, ShopEnvError> {
    let fixture = FixtureConfig::from_file(&config.config)?;

    let mut signals = fixture.signals();
    config.apply_overrides(&mut signals);

    let env = Environment::from_signals(&signals, fixture.member_store(), fixture.user_store());
    tracing::info!(
        "environment ready (member: {}, user: {})",
        env.has_member(),
        env.has_user()
    );

    Ok(env.report())
}

fn print_report(report: &EnvironmentReport, format: OutputFormat) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Text => {
            writeln!(stdout, "{}", report).context("failed to write report to stdout")?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
            writeln!(stdout, "{}", json).context("failed to write report to stdout")?;
        }
    }
    Ok(())
}
