//! vectl — CLI client for Milvus-compatible vector databases.
//!
//! Commands that need no server connection live here today: compiling
//! field definitions into the collection schema and index plan, and
//! inspecting configuration. Remote operations go through the server
//! client built on these artifacts.

mod output;

use std::time::Instant;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vectl_core::config::Config;
use vectl_core::error::{Error, ErrorCode};
use vectl_schema::{build_index_plan, build_schema, grammar, parse_fields, CollectionSchema, IndexDescriptor};

use crate::output::{Meta, OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "vectl", version, about = "CLI client for Milvus-compatible vector databases")]
struct Cli {
    /// Output format: table, json, yaml
    #[arg(short, long, global = true, env = "VECTL_OUTPUT")]
    output: Option<String>,

    /// Emit machine-readable response envelopes
    #[arg(long, global = true)]
    agent: bool,

    /// Connection profile from the config file
    #[arg(short, long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile and inspect field definitions
    #[command(subcommand)]
    Schema(SchemaCommand),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum SchemaCommand {
    /// Compile field definitions into a collection schema and index plan
    Compile {
        /// Field definitions, e.g. 'id:int64:pk:auto' 'embedding:float_vector:768'
        #[arg(required = true)]
        fields: Vec<String>,
        /// Allow records to carry attributes not declared in the schema
        #[arg(long)]
        dynamic: bool,
    },
    /// Parse and validate field definitions without compiling
    Check {
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Print the field definition grammar
    Grammar,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective connection profile
    Show,
}

/// Both compiler artifacts, as handed to the server client.
#[derive(Serialize)]
struct CompiledSchema {
    schema: CollectionSchema,
    index_plan: Vec<IndexDescriptor>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let started = Instant::now();

    let ctx = OutputContext {
        format: resolve_format(&cli),
        agent: cli.agent,
    };

    if let Err(e) = run(&cli, &ctx) {
        let code = match e.downcast_ref::<Error>() {
            Some(err) => err.code(),
            None => ErrorCode::classify(&e.to_string()),
        };
        let meta = Meta::default().with_duration_ms(elapsed_ms(started));
        ctx.emit_error(code, &e.to_string(), meta);
        std::process::exit(1);
    }
}

/// `--output` wins; otherwise the configured profile's format; table as
/// the final fallback. Config problems never block a command here, they
/// surface when `config show` is asked for explicitly.
fn resolve_format(cli: &Cli) -> OutputFormat {
    if let Some(format) = cli.output.as_deref().and_then(OutputFormat::from_name) {
        return format;
    }
    Config::load()
        .and_then(|c| c.profile(cli.profile.as_deref()))
        .ok()
        .and_then(|p| OutputFormat::from_name(&p.output))
        .unwrap_or(OutputFormat::Table)
}

fn run(cli: &Cli, ctx: &OutputContext) -> anyhow::Result<()> {
    match &cli.command {
        Command::Schema(cmd) => run_schema(cmd, ctx),
        Command::Config(cmd) => run_config(cmd, cli.profile.as_deref(), ctx),
    }
}

fn run_schema(cmd: &SchemaCommand, ctx: &OutputContext) -> anyhow::Result<()> {
    match cmd {
        SchemaCommand::Compile { fields, dynamic } => {
            let started = Instant::now();
            let specs = parse_fields(fields)?;
            debug!(fields = specs.len(), dynamic = *dynamic, "parsed field batch");
            let compiled = CompiledSchema {
                schema: build_schema(&specs, *dynamic),
                index_plan: build_index_plan(&specs),
            };
            let meta = Meta::command("schema.compile")
                .with_count(specs.len())
                .with_duration_ms(elapsed_ms(started));
            ctx.emit(&compiled, meta)
        }
        SchemaCommand::Check { fields } => {
            let started = Instant::now();
            let specs = parse_fields(fields)?;
            let meta = Meta::command("schema.check")
                .with_count(specs.len())
                .with_duration_ms(elapsed_ms(started));
            ctx.emit(&specs, meta)
        }
        SchemaCommand::Grammar => {
            ctx.emit(&json!(grammar::field_help()), Meta::command("schema.grammar"))
        }
    }
}

fn run_config(cmd: &ConfigCommand, profile: Option<&str>, ctx: &OutputContext) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let config = Config::load()?;
            let connection = config.profile(profile)?;
            ctx.emit(&connection, Meta::command("config.show"))
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
