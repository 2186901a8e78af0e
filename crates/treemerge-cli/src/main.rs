//! `treemerge` CLI — merge YAML and JSON documents into a single tree.
//!
//! The merged tree is what a JSON Schema generator should see when a schema
//! must accept every one of the input files.
//!
//! ## Usage
//!
//! ```sh
//! # Merge two files, print YAML on stdout
//! treemerge merge base.yaml override.json
//!
//! # Read one input from stdin, write pretty JSON to a file
//! echo '{"foo": "bar"}' | treemerge merge defaults.yaml - -f json -o merged.json
//!
//! # Only check that the inputs can be merged
//! treemerge check a.yaml b.yaml
//!
//! # Show each merge step on stderr
//! treemerge -v merge a.yaml b.yaml
//! ```
//!
//! Merge rules, applied in argument order (every `---` document of a file
//! counts as its own input):
//!
//! - objects are deep-merged; later files override earlier scalar values
//! - lists are merged constructively: later elements first, then earlier
//!   elements that are not already present
//! - a number always wins over an integer
//! - any other type mismatch (`42` vs `{"foo": "bar"}`, lists vs objects)
//!   is an error, at any depth

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use std::io::{self, Read};
use treemerge_core::{decode_yaml_stream, merge_all, TreeValue};

#[derive(Parser)]
#[command(
    name = "treemerge",
    version,
    about = "Merge YAML/JSON documents into one tree for JSON Schema generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge the input documents and write the result
    Merge {
        /// Input files, merged in order ("-" reads stdin, at most once)
        #[arg(required = true)]
        files: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Check that the input documents can be merged, without writing them
    Check {
        /// Input files, merged in order ("-" reads stdin, at most once)
        #[arg(required = true)]
        files: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Merge {
            files,
            output,
            format,
        } => {
            let (merged, _) = load_and_merge(&files)?;
            let rendered = match format {
                OutputFormat::Yaml => merged
                    .to_yaml_string()
                    .context("Failed to serialize merged document as YAML")?,
                OutputFormat::Json => {
                    let mut json = merged
                        .to_json_string(true)
                        .context("Failed to serialize merged document as JSON")?;
                    json.push('\n');
                    json
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { files } => {
            let (merged, count) = load_and_merge(&files)?;
            println!("Documents:  {}", count);
            println!("Root kind:  {}", merged.kind());
            println!("Result:     ok");
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with merged output on stdout.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Read and decode every file, then fold all documents in order.
///
/// Returns the merged tree and the number of documents that went into it.
fn load_and_merge(files: &[String]) -> Result<(TreeValue, usize)> {
    if files.iter().filter(|f| f.as_str() == "-").count() > 1 {
        anyhow::bail!("stdin (\"-\") may be given only once");
    }

    let mut docs = Vec::new();
    for file in files {
        let text = read_input(file)?;
        let decoded = decode_yaml_stream(&text)
            .with_context(|| format!("Failed to decode documents from {}", display_name(file)))?;
        debug!("{}: {} document(s)", display_name(file), decoded.len());
        docs.extend(decoded);
    }

    let count = docs.len();
    let merged = merge_all(docs).context("Failed to merge documents")?;
    info!("merged {} document(s) into one {}", count, merged.kind());
    Ok((merged, count))
}

fn display_name(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
