//! Command dispatch logic for ebert

use super::{AnalyzeArgs, InitArgs, analyze_account, init_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use ohno::IntoAppError;
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "ebert", version, long_about = None, author)]
#[command(about = "Appraise the trustworthiness of GitHub accounts")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: EbertSubcommand,
}

#[derive(Subcommand, Debug)]
enum EbertSubcommand {
    /// Fetch a GitHub account's public activity and report its risk profile
    Analyze(Box<AnalyzeArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// Help, version, and usage errors are written to the host and end with
/// [`Host::exit`] using clap's exit code.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails or if help or usage text cannot be written
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let rendered = e.render();
            if e.use_stderr() {
                write!(host.error(), "{rendered}").into_app_err("writing usage")?;
            } else {
                write!(host.output(), "{rendered}").into_app_err("writing usage")?;
            }
            host.exit(e.exit_code());
            return Ok(());
        }
    };

    match &cli.command {
        EbertSubcommand::Analyze(analyze_args) => analyze_account(host, analyze_args).await,
        EbertSubcommand::Init(init_args) => init_config(host, init_args),
    }
}
