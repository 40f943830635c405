use std::path::PathBuf;
use std::str::FromStr;

use careconnectapp::config::OutputMode;
use careconnectapp::error::CareError;
use careconnectapp::model::{Address, Email, LastVisit, Medicine, Name, Phone, Tag};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "careconnect",
    bin_name = "careconnect",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Keep track of a clinic's patients", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file with the patients to start the session with
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub seed: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, help_heading = "Options")]
    pub output: Option<OutputArg>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputMode::Text,
            OutputArg::Json => OutputMode::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a patient to the patient list
    #[command(alias = "a")]
    Add(AddArgs),

    /// Show the usage of every command
    Help,
}

/// Each value is validated by its field type as clap parses it.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Patient name
    #[arg(short = 'n', long, value_parser = field::<Name>)]
    pub name: Name,

    /// Phone number
    #[arg(short = 'p', long, value_parser = field::<Phone>)]
    pub phone: Phone,

    /// Email address
    #[arg(short = 'e', long, value_parser = field::<Email>)]
    pub email: Email,

    /// Home address
    #[arg(short = 'a', long, value_parser = field::<Address>)]
    pub address: Address,

    /// Date of the last visit (YYYY-MM-DD)
    #[arg(
        short = 'd',
        long = "date",
        value_name = "LAST_VISIT_DATE",
        value_parser = field::<LastVisit>
    )]
    pub last_visit: Option<LastVisit>,

    /// Tag, may be repeated
    #[arg(short = 't', long = "tag", value_parser = field::<Tag>)]
    pub tags: Vec<Tag>,

    /// Medicine, may be repeated
    #[arg(short = 'm', long = "medicine", value_parser = field::<Medicine>)]
    pub medicines: Vec<Medicine>,
}

/// Runs a field's own validation and hands clap the message on failure.
fn field<T: FromStr<Err = CareError>>(value: &str) -> Result<T, String> {
    value.parse().map_err(|e: CareError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("careconnect").chain(args.iter().copied()))
    }

    #[test]
    fn parses_full_add() {
        let cli = parse(&[
            "add",
            "-n",
            "John Doe",
            "-p",
            "98765432",
            "-e",
            "johnd@example.com",
            "-a",
            "311, Clementi Ave 2, #02-25",
            "-d",
            "2025-03-25",
            "-t",
            "ASD",
            "-t",
            "Dysphoria",
            "-m",
            "Estrogen",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.name.as_str(), "John Doe");
                assert_eq!(args.last_visit.unwrap().to_string(), "2025-03-25");
                assert_eq!(args.tags.len(), 2);
                assert_eq!(args.medicines.len(), 1);
            }
            other => panic!("Expected add, got {:?}", other),
        }
    }

    #[test]
    fn rejects_invalid_field_values() {
        let result = parse(&[
            "add",
            "--name",
            "John Doe",
            "--phone",
            "12",
            "--email",
            "johnd@example.com",
            "--address",
            "Blk 1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn requires_mandatory_fields() {
        assert!(parse(&["add", "--name", "John Doe"]).is_err());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = parse(&["help", "--output", "json", "--seed", "patients.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Help)));
        assert_eq!(cli.output, Some(OutputArg::Json));
        assert_eq!(cli.seed, Some(PathBuf::from("patients.json")));
    }
}
