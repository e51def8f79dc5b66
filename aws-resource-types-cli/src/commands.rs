//! Subcommand implementations

use anyhow::{Context, Result};
use aws_resource_types_core::{ArnParser, ParserConfig, ResourceTypeResolver, ServiceTable};
use log::{debug, info};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputOptions {
    pub(crate) pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    AllSucceeded,
    SomeFailed,
}

pub(crate) fn load_parser(config_path: Option<&Path>) -> Result<ArnParser> {
    let config = match config_path {
        Some(path) => {
            info!("Using parser configuration: {}", path.display());
            ParserConfig::from_path(path).with_context(|| {
                format!("Failed to load parser configuration {}", path.display())
            })?
        }
        None => ParserConfig::default(),
    };
    Ok(ArnParser::new(config))
}

fn load_table(table_path: Option<&Path>) -> Result<ServiceTable> {
    match table_path {
        Some(path) => {
            info!("Using lookup table: {}", path.display());
            ServiceTable::from_path(path)
                .with_context(|| format!("Failed to load lookup table {}", path.display()))
        }
        None => ServiceTable::embedded().context("Failed to load embedded lookup table"),
    }
}

pub(crate) fn parse_arns(
    parser: &ArnParser,
    arns: &[String],
    options: OutputOptions,
) -> Result<Outcome> {
    let inputs = collect_inputs(arns)?;
    process(&inputs, options, |arn| parser.parse(arn))
}

pub(crate) fn resolve_arns(
    parser: &ArnParser,
    arns: &[String],
    table_path: Option<&Path>,
    options: OutputOptions,
) -> Result<Outcome> {
    let table = load_table(table_path)?;
    let resolver = ResourceTypeResolver::new(parser, &table);
    let inputs = collect_inputs(arns)?;
    process(&inputs, options, |arn| resolver.resolve(arn))
}

/// ARNs from the command line, or from stdin when none were given and stdin is not a TTY
fn collect_inputs(arns: &[String]) -> Result<Vec<String>> {
    if !arns.is_empty() {
        return Ok(arns.to_vec());
    }
    if atty::is(atty::Stream::Stdin) {
        return Ok(Vec::new());
    }
    read_lines(io::stdin().lock())
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut arns = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read ARNs from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            arns.push(trimmed.to_string());
        }
    }
    debug!("Read {} ARNs from stdin", arns.len());
    Ok(arns)
}

/// Run `operation` on every input, printing results to stdout and failures to stderr
fn process<T, E, F>(inputs: &[String], options: OutputOptions, operation: F) -> Result<Outcome>
where
    T: Serialize,
    E: Display,
    F: Fn(&str) -> std::result::Result<T, E>,
{
    if inputs.is_empty() {
        eprintln!("Error: No ARNs provided: pass them as arguments or pipe them on stdin");
        return Ok(Outcome::SomeFailed);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut outcome = Outcome::AllSucceeded;

    for arn in inputs {
        match operation(arn) {
            Ok(value) => {
                let rendered = render(&value, options)?;
                writeln!(out, "{}", rendered).context("Failed to write output")?;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                outcome = Outcome::SomeFailed;
            }
        }
    }

    Ok(outcome)
}

fn render<T: Serialize>(value: &T, options: OutputOptions) -> Result<String> {
    let rendered = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to serialize output")
}
