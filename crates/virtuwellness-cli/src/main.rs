use std::path::PathBuf;

use clap::{Parser, Subcommand};

use virtuwellness_cli::commands;
use virtuwellness_cli::config::{self, AppConfig};
use virtuwellness_cli::logging;
use virtuwellness_core::models::subject::SubjectId;

#[derive(Parser, Debug)]
#[command(
    name = "virtuwellness",
    about = "Score PHQ-9 self-assessments and print recommendations",
    version
)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a submission read as JSON from a file or stdin
    Assess {
        /// Submission file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Subject identity to stamp on the result; a new one when omitted
        #[arg(long)]
        subject: Option<SubjectId>,
    },
    /// Print the questionnaire items and answer scale
    Questionnaire {
        /// Instrument to print: phq9, or gad7 for the anxiety screen
        #[arg(long, default_value = "phq9")]
        instrument: String,
    },
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?.with_env_overrides();
    logging::init(config.log_format);

    match cli.command {
        Command::Assess { input, subject } => {
            let pipeline = commands::build_pipeline(&config)?;
            let request = commands::read_request(input.as_deref())?;
            let result =
                commands::assess(&pipeline, subject.unwrap_or_default(), &request)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Questionnaire { instrument } => {
            let instrument = virtuwellness_instruments::require_instrument(&instrument)?;
            print!("{}", commands::render_questionnaire(instrument.as_ref()));
        }
        Command::InitConfig { force } => {
            let path = match cli.config {
                Some(path) => path,
                None => config::default_config_path()?,
            };
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "{} already exists; pass --force to overwrite",
                    path.display()
                ));
            }
            config::save_config(&path, &AppConfig::default())?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
