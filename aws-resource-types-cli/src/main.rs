//! AWS Resource Types command line interface
//!
//! ```bash
//! # Decompose an ARN
//! aws-resource-types parse arn:aws:lambda:us-west-2:000000000000:function:my-function
//!
//! # Resolve ARNs piped on stdin against a custom lookup table
//! cat arns.txt | aws-resource-types resolve --table lookup.yaml
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code when at least one ARN could not be parsed or resolved
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "aws-resource-types")]
#[command(version)]
#[command(about = "Parse AWS ARNs and resolve them to CloudFormation resource types")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON parser configuration (prefixStyleServices, implicitTypeServices, serviceAliases)
    #[arg(long, global = true, env = "AWS_RESOURCE_TYPES_PARSER_CONFIG")]
    parser_config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decompose ARNs into partition, service, region, account, resource kind and id
    Parse {
        /// ARNs to parse (reads stdin, one per line, if not provided)
        arns: Vec<String>,
    },

    /// Resolve ARNs to CloudFormation resource types
    Resolve {
        /// ARNs to resolve (reads stdin, one per line, if not provided)
        arns: Vec<String>,

        /// YAML lookup table to use instead of the embedded one
        #[arg(long, env = "AWS_RESOURCE_TYPES_TABLE")]
        table: Option<PathBuf>,
    },
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let options = commands::OutputOptions { pretty: cli.pretty };
    let parser = match commands::load_parser(cli.parser_config.as_deref()) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match &cli.command {
        Commands::Parse { arns } => commands::parse_arns(&parser, arns, options),
        Commands::Resolve { arns, table } => {
            commands::resolve_arns(&parser, arns, table.as_deref(), options)
        }
    };

    match outcome {
        Ok(commands::Outcome::AllSucceeded) => ExitCode::SUCCESS,
        Ok(commands::Outcome::SomeFailed) => ExitCode::from(EXIT_INVALID_INPUT),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
