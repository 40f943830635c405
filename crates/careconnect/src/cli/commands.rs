use anyhow::{Context, Result};
use careconnectapp::api::CareApi;
use careconnectapp::commands::{AddCommand, Command};
use careconnectapp::config::{CareConfig, OutputMode};
use careconnectapp::model::Patient;
use careconnectapp::store::memory::InMemoryRegistry;
use clap::Parser;
use log::debug;

use super::print::print_result;
use super::setup::{AddArgs, Cli, Commands};

struct AppContext {
    api: CareApi<InMemoryRegistry>,
    output: OutputMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let command = match cli.command {
        Some(Commands::Add(args)) => Command::Add(AddCommand::new(build_patient(args))),
        Some(Commands::Help) | None => Command::Help,
    };

    let result = ctx.api.execute(command)?;
    print_result(&result, ctx.output)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = CareConfig::load().context("failed to load configuration")?;

    let output = cli.output.map(OutputMode::from).unwrap_or(config.output);
    let seed = cli.seed.clone().or(config.seed_file);

    let registry = match seed {
        Some(path) => InMemoryRegistry::load_seed(&path)
            .with_context(|| format!("failed to load seed file {}", path.display()))?,
        None => {
            debug!("no seed file configured, starting with an empty patient list");
            InMemoryRegistry::new()
        }
    };

    Ok(AppContext {
        api: CareApi::new(registry),
        output,
    })
}

fn build_patient(args: AddArgs) -> Patient {
    let patient = Patient::new(args.name, args.phone, args.email, args.address)
        .with_tags(args.tags)
        .with_medicines(args.medicines);
    match args.last_visit {
        Some(visit) => patient.with_last_visit(visit),
        None => patient,
    }
}
