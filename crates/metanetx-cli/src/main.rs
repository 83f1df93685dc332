// Rust guideline compliant 2026-10-18

//! mnx CLI Application
//!
//! Command-line interface for resolving metabolites against MetaNetX.

use clap::Parser;
use metanetx_cli::{commands, create_formatter, logging, should_use_color, OutputFormatter};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "mnx",
    version,
    about = "Resolve metabolite identifiers and names through MetaNetX",
    long_about = "mnx maps a metabolite identifier or name to its MetaNetX entry and the cross-references it carries (ChEBI, HMDB, KEGG, BiGG, SwissLipids, VMH).",
    after_help = "Examples:\n  mnx resolve MNXM1101229\n  mnx resolve glu_L --type vmh\n  mnx resolve 15377 --type chebi --json\n  mnx resolve glucose --type name --format plain\n  mnx config\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path (default: ./metanetx.toml if present)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve an identifier or name to a cross-reference record
    Resolve {
        /// Identifier or name to resolve
        token: String,

        /// Input type (id, name, vmh, chebi); defaults to id
        #[arg(long = "type", short = 't')]
        input_type: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    match run(cli, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<metanetx_core::Error>()
                .map(metanetx_core::Error::code);
            let message = formatter.format_error(&err.to_string(), code);
            if format == "json" {
                println!("{}", message);
            } else {
                eprintln!("{}", message);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    logging::init_tracing(&cli.log_level)?;

    let config = commands::config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Resolve { token, input_type }) => {
            commands::resolve::execute(&token, input_type.as_deref(), config, formatter)?;
        }
        Some(Commands::Config) => {
            commands::config::execute(&config, formatter)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
