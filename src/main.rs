use anyhow::Result;
use clap::Parser;
use pwacheck::commands::verify::{self, RunOptions};
use pwacheck::logging;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "pwacheck")]
#[command(about = "PWA, SEO and deployment readiness checklist", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
struct Cli {
    /// Project directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Exit with status 1 when any check fails (warnings never gate)
    #[arg(long)]
    strict: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = RunOptions {
        base_dir: cli.dir,
        strict: cli.strict,
        color: !cli.no_color,
    };

    let outcome = verify::execute(&options)?;
    if outcome.exit_code != 0 {
        std::process::exit(outcome.exit_code);
    }
    Ok(())
}
