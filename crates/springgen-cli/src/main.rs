//! springgen CLI entrypoint
//! Parses command-line arguments and renders query parameters with the core library.

// Internal imports (std, crate)
use std::collections::BTreeSet;
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use springgen_core::{Config, Parameter, ParameterSet};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "springgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render query parameters as Spring method parameters
    Render {
        /// Path to the YAML file describing the query parameters
        #[arg(long)]
        input: PathBuf,
        /// Configuration file (YAML, or TOML with a .toml extension)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Rendered query parameter for JSON output
#[derive(Debug, Serialize)]
struct RenderedParameter {
    name: String,
    annotate: bool,
    with_parameters: bool,
    source: String,
    imports: BTreeSet<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Render {
            input,
            config,
            format,
        } => {
            let config = match config {
                Some(path) => Config::from_file(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            debug!(map_types = ?config.map_types, "using map types");

            let classifier = config.classifier()?;
            let writer = config.writer();

            let parameters = ParameterSet::from_file(input)
                .await
                .with_context(|| format!("Failed to load parameters {}", input.display()))?
                .into_parameters(&classifier)?;
            info!("rendering {} query parameters", parameters.len());

            let rendered: Vec<RenderedParameter> = parameters
                .iter()
                .map(|p| RenderedParameter {
                    name: p.name().to_string(),
                    annotate: p.with_annotation(),
                    with_parameters: p.with_parameters(),
                    source: writer.write(p),
                    imports: writer.imports(p),
                })
                .collect();

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&rendered)?);
                }
                OutputFormat::Text => {
                    let imports: BTreeSet<&String> =
                        rendered.iter().flat_map(|r| r.imports.iter()).collect();
                    for import in &imports {
                        println!("import {};", import);
                    }
                    if !imports.is_empty() {
                        println!();
                    }
                    for r in &rendered {
                        println!("{}", r.source);
                    }
                }
            }
        }
    }
    Ok(())
}
