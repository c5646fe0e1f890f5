use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use eyre::Result;

use arogya_cli::commands::{self, OutputFormat};
use arogya_cli::store::{ProfileStore, read_profile_file};

#[derive(Debug, Parser)]
#[command(
    name = "arogya",
    version,
    about = "NCD risk screening and test recommendations from a patient profile"
)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a profile and list recommended screenings
    Analyze(AnalyzeArgs),
    /// Manage the saved profile
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["profile", "saved"])))]
struct AnalyzeArgs {
    /// Read the profile from a JSON file
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Use the saved profile
    #[arg(long)]
    saved: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Year used to compute years since quitting (defaults to this year)
    #[arg(long)]
    reference_year: Option<i32>,
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    /// Save a profile from a JSON file
    Save { file: PathBuf },
    /// Print the saved profile
    Show,
    /// Delete the saved profile
    Reset,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Command::Analyze(args) => {
            let profile = match &args.profile {
                Some(path) => read_profile_file(path)?,
                None => ProfileStore::default_location()?.load()?,
            };
            let year = args.reference_year.unwrap_or_else(arogya_rules::current_year);
            println!("{}", commands::analyze(&profile, year, args.format)?);
        }
        Command::Profile(ProfileCommand::Save { file }) => {
            let store = ProfileStore::default_location()?;
            commands::save_profile(&store, &file)?;
            println!("Profile saved to {}", store.path().display());
        }
        Command::Profile(ProfileCommand::Show) => {
            println!("{}", commands::show_profile(&ProfileStore::default_location()?)?);
        }
        Command::Profile(ProfileCommand::Reset) => {
            ProfileStore::default_location()?.delete()?;
            println!("Saved profile removed");
        }
    }

    Ok(())
}
