use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skill_version::cli::{run_bump, run_list, run_status, BumpRequest};
use skill_version::config;
use skill_version::domain::VersionBumper;
use skill_version::store::FileVersionStore;
use skill_version::ui;

#[derive(Parser)]
#[command(
    name = "skill-version",
    version,
    about = "Manage SemVer versions for a project and its skills"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Project root holding the VERSION file"
    )]
    root: PathBuf,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the root version and every skill version
    Status,

    /// List skills with their versions
    List,

    /// Bump the root version (`bump <LEVEL>`) or a skill (`bump <SKILL> <LEVEL>`)
    Bump {
        /// Bump level, or skill name when a level follows
        first: String,

        /// Bump level when the first argument names a skill
        second: Option<String>,

        #[arg(long, value_name = "LABEL", help = "Pre-release label (alpha, beta, rc)")]
        pre_release: Option<String>,

        #[arg(long, help = "Show the new version without writing it")]
        dry_run: bool,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let store = FileVersionStore::with_layout(&args.root, &config.store);

    match args.command {
        Command::Status => {
            let report = run_status(&store)?;
            ui::display_status_report(&report);
        }
        Command::List => {
            let components = run_list(&store)?;
            ui::display_component_list(&components);
        }
        Command::Bump {
            first,
            second,
            pre_release,
            dry_run,
        } => {
            let request =
                BumpRequest::from_positionals(&first, second.as_deref(), pre_release, dry_run)?;
            let bumper = VersionBumper::new(config.pre_release.allow_list());
            let outcome = run_bump(&store, &bumper, &request)?;
            ui::display_bump_outcome(&outcome);
        }
    }

    Ok(())
}
