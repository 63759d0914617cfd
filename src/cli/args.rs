//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::template::{parse_pair, TemplateName};

/// Scaffold - Resolve project template names.
#[derive(Debug, Parser)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .scaffold/config.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a template name to its location
    Resolve(ResolveArgs),

    /// Show template metadata from a file
    Info(InfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Template: foo, foo.hsfiles, https://example.com/foo.hsfiles, github:user/foo
    #[arg(env = "SCAFFOLD_TEMPLATE", value_parser = parse_template_arg)]
    pub template: Option<TemplateName>,

    /// Template parameter as key:value (repeatable)
    #[arg(short = 'P', long = "param", value_name = "KEY:VALUE", value_parser = parse_param_arg)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InfoArgs {
    /// Metadata file (YAML, or JSON with a .json extension)
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_template_arg(raw: &str) -> Result<TemplateName, String> {
    raw.parse().map_err(|e: crate::ScaffoldError| e.to_string())
}

fn parse_param_arg(raw: &str) -> Result<(String, String), String> {
    parse_pair(raw).map_err(|e| e.to_string())
}
