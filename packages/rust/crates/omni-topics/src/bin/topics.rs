#![allow(missing_docs)]

//! Developer CLI: build a topic catalog, report content defects, run lookups.
//!
//! Logging: set `RUST_LOG=omni_topics=debug` to see shadowed keys on stderr.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use omni_topics::{
    CatalogDefinition, CategoryIndex, Difficulty, ValidationConfig, run_validation, slugify,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "topics",
    about = "Topic catalog index and integrity checks",
    arg_required_else_help = true
)]
struct Cli {
    /// Authored catalog (YAML).
    #[arg(long, short = 'f', value_name = "FILE", global = true)]
    catalog: Option<PathBuf>,

    /// Validation config file (YAML). Defaults apply when omitted.
    #[arg(long = "conf", short = 'c', value_name = "FILE", global = true)]
    config_file: Option<String>,

    /// Output format.
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the catalog and print the report.
    Check {
        /// Exit non-zero when any defect is found.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Return index stats.
    Stats,
    /// Return every indexed key.
    Keys,
    /// Return the topic stored under a key.
    Get { key: String },
    /// Return topics carrying a tag.
    Tag { tag: String },
    /// Return topics at a difficulty level.
    Difficulty {
        #[arg(value_enum)]
        level: DifficultyArg,
    },
    /// Print the key derived from a title.
    Slug { title: String },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum DifficultyArg {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Serialize)]
struct SlugOutput<'a> {
    title: &'a str,
    key: String,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Beginner => Self::Beginner,
            DifficultyArg::Intermediate => Self::Intermediate,
            DifficultyArg::Advanced => Self::Advanced,
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

fn emit<T: Serialize>(value: &T, output: OutputFormat) -> Result<()> {
    let rendered = match output {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
    .context("failed to serialize CLI output as JSON")?;
    println!("{rendered}");
    Ok(())
}

fn load_index(cli: &Cli) -> Result<CategoryIndex> {
    let Some(path) = &cli.catalog else {
        bail!("this command needs --catalog <FILE>");
    };
    let catalog = CatalogDefinition::load(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    Ok(catalog.build_index())
}

fn load_config(cli: &Cli) -> ValidationConfig {
    cli.config_file
        .as_deref()
        .map_or_else(ValidationConfig::default, ValidationConfig::load)
}

fn emit_slug(title: &str, output: OutputFormat) -> Result<()> {
    let slug = SlugOutput {
        title,
        key: slugify(title),
    };
    emit(&slug, output)
}

fn execute(cli: &Cli, index: &CategoryIndex) -> Result<()> {
    match &cli.command {
        Command::Check { strict } => {
            let report = run_validation(index, &load_config(cli));
            report.log();
            emit(&report, cli.output)?;
            if *strict && !report.is_clean() {
                bail!("{} content defect(s) found", report.diagnostics.len());
            }
            Ok(())
        }
        Command::Stats => emit(&index.stats(), cli.output),
        Command::Keys => emit(&index.get_all_topic_keys(), cli.output),
        Command::Get { key } => match index.get_topic(key) {
            Some(topic) => emit(topic, cli.output),
            None => bail!("no topic with key '{key}'"),
        },
        Command::Tag { tag } => emit(&index.get_topics_by_tag(tag), cli.output),
        Command::Difficulty { level } => emit(
            &index.get_topics_by_difficulty(Difficulty::from(*level)),
            cli.output,
        ),
        Command::Slug { title } => emit_slug(title, cli.output),
    }
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    // `slug` works on its argument alone; every other command needs a catalog.
    if let Command::Slug { title } = &cli.command {
        return emit_slug(title, cli.output);
    }
    let index = load_index(&cli)?;
    execute(&cli, &index)
}
