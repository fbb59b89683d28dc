use super::Host;
use super::ProgressReporter;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::analysis::{Analysis, analyze};
use crate::facts::{Login, Provider};
use crate::reports::{generate_console, generate_json};
use crate::scoring::RiskLevel;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::Parser;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use std::fs;
use std::io::{IsTerminal, Write, stderr, stdout};

const LOG_TARGET: &str = "   analyze";

/// Delay before the spinner becomes visible.
const PROGRESS_DELAY: Duration = Duration::from_millis(300);

/// Delay that in practice keeps the spinner hidden.
const NEVER: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// GitHub account to appraise
    #[arg(value_name = "LOGIN")]
    pub login: Login,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to configuration file (default is `ebert.toml` in the current directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Print the analysis to the terminal as JSON instead of text
    #[arg(long, conflicts_with = "json_file", help_heading = "Report Output")]
    pub json: bool,

    /// Write the analysis as JSON to a file, in addition to the text report
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json_file: Option<Utf8PathBuf>,

    /// Exit with status code 1 if the account is appraised as high risk
    #[arg(long)]
    pub error_if_high_risk: bool,

    /// Exit with status code 1 if the account is appraised as medium or high risk
    #[arg(long)]
    pub error_if_medium_risk: bool,
}

pub async fn analyze_account<H: Host>(host: &mut H, args: &AnalyzeArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let provider = Provider::new(args.github_token.as_deref(), config.to_provider_options(), Utc::now())?;

    // a spinner would garble log output
    let delay = if args.log_level == LogLevel::None {
        PROGRESS_DELAY
    } else {
        NEVER
    };
    let progress = ProgressReporter::new(delay, args.color.use_colors(stderr().is_terminal()));

    let data = provider.fetch(&args.login, &progress).await?;

    let analysis = analyze(data.profile, &data.repositories, &data.events, Utc::now());
    log::info!(
        target: LOG_TARGET,
        "Account '{}' scored {:.1} ({})",
        args.login,
        analysis.overall_score,
        analysis.risk_level
    );

    report(host, args, &analysis)?;
    check_risk(args, &analysis)
}

fn report<H: Host>(host: &mut H, args: &AnalyzeArgs, analysis: &Analysis) -> Result<()> {
    if let Some(filename) = &args.json_file {
        let mut json_output = String::new();
        generate_json(analysis, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to {filename}"))?;
    }

    let mut output = String::new();
    if args.json {
        generate_json(analysis, &mut output)?;
    } else {
        generate_console(analysis, args.color.use_colors(stdout().is_terminal()), &mut output)?;
    }

    write!(host.output(), "{output}").into_app_err("writing report")?;
    Ok(())
}

fn check_risk(args: &AnalyzeArgs, analysis: &Analysis) -> Result<()> {
    if args.error_if_medium_risk && analysis.risk_level >= RiskLevel::Medium {
        return Err(app_err!("account '{}' was appraised as {} risk", args.login, analysis.risk_level));
    }

    if args.error_if_high_risk && analysis.risk_level == RiskLevel::High {
        return Err(app_err!("account '{}' was appraised as high risk", args.login));
    }

    Ok(())
}
