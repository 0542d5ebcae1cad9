mod atomic;
mod config;
mod logging;
mod summary;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use schemasmith_codegen::emit_schema;
use schemasmith_core::Error as CoreError;
use schemasmith_dedup::{DedupOptions, deduplicate};
use schemasmith_introspect::{
    IntrospectOptions, altered_tables, apply_script, introspect_postgres, split_statements,
};
use thiserror::Error;

use atomic::write_bytes_atomic;
use config::{ConnectionArgs, resolve_schema_path};
use logging::{LogFormat, init_logging};
use summary::{Destination, apply_report, dedup_summary, synth_summary};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("{0} duplicate definition(s) found")]
    DuplicatesFound(usize),
}

#[derive(Parser, Debug)]
#[command(
    name = "schemasmith",
    version,
    about = "Generate Drizzle pgTable schemas from a live Postgres catalog"
)]
struct Cli {
    /// Log output format; the filter comes from RUST_LOG.
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read the catalog and write the schema source.
    Synth(SynthArgs),
    /// Drop repeated table definitions from a schema source file.
    Dedup(DedupArgs),
    /// Run a SQL script in one transaction and show the altered columns.
    Apply(ApplyArgs),
}

#[derive(Args, Debug)]
struct SynthArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
    /// Output path; overrides `schema_path` from the config.
    #[arg(long, value_name = "PATH", conflicts_with = "stdout")]
    out: Option<PathBuf>,
    /// Print the schema instead of writing a file.
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

#[derive(Args, Debug)]
struct DedupArgs {
    /// Schema source file to rewrite.
    #[arg(long, value_name = "PATH", conflicts_with = "config")]
    path: Option<PathBuf>,
    /// Config file to take `schema_path` from.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Table constructor that starts a definition.
    #[arg(long, default_value = "pgTable")]
    constructor: String,
    /// Report duplicates without rewriting; exits non-zero when any exist.
    #[arg(long, default_value_t = false)]
    check: bool,
}

#[derive(Args, Debug)]
struct ApplyArgs {
    /// SQL script to run.
    #[arg(long, value_name = "SQL")]
    file: PathBuf,
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_format) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    let timer = Instant::now();
    let result = match cli.command {
        Command::Synth(args) => run_synth(args).await,
        Command::Dedup(args) => run_dedup(args),
        Command::Apply(args) => run_apply(args).await,
    };
    let duration_ms = timer.elapsed().as_millis();

    match result {
        Ok(()) => {
            tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(event = "run_finished", status = "failed", duration_ms = duration_ms, error = %err);
            eprintln!("error: {}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

async fn run_synth(args: SynthArgs) -> Result<(), CliError> {
    let SynthArgs {
        connection,
        out,
        stdout,
    } = args;
    let config = connection.resolve()?;

    tracing::info!(
        event = "run_started",
        command = "synth",
        connection = %config.connection.redacted(),
        namespace = %config.namespace,
    );

    let options = IntrospectOptions::for_namespace(&config.namespace);
    let snapshot = introspect_postgres(&config.connection, &options).await?;
    let source = emit_schema(&snapshot)?;

    let destination = if stdout {
        print!("{}", source.text);
        Destination::Stdout
    } else {
        let path = out.as_deref().unwrap_or(&config.schema_path);
        write_bytes_atomic(path, source.text.as_bytes())?;
        tracing::info!(event = "schema_written", path = %path.display(), bytes = source.text.len());
        Destination::File(path)
    };

    eprintln!("{}", synth_summary(&snapshot, &source, destination));
    Ok(())
}

fn run_dedup(args: DedupArgs) -> Result<(), CliError> {
    let path = resolve_schema_path(args.path, args.config.as_deref())?;
    tracing::info!(event = "run_started", command = "dedup", path = %path.display());

    let source = std::fs::read_to_string(&path)?;
    let options = DedupOptions {
        constructor: args.constructor,
    };
    let outcome = deduplicate(&source, &options)?;

    if !args.check && outcome.text != source {
        write_bytes_atomic(&path, outcome.text.as_bytes())?;
        tracing::info!(event = "schema_written", path = %path.display(), bytes = outcome.text.len());
    }

    eprintln!("{}", dedup_summary(&outcome, &path, args.check));

    if args.check && outcome.duplicates_removed() > 0 {
        return Err(CliError::DuplicatesFound(outcome.duplicates_removed()));
    }
    Ok(())
}

async fn run_apply(args: ApplyArgs) -> Result<(), CliError> {
    let config = args.connection.resolve()?;
    let script = std::fs::read_to_string(&args.file)?;
    let statements = split_statements(&script);
    if statements.is_empty() {
        return Err(CliError::Core(CoreError::InvalidConfig(format!(
            "no statements in {}",
            args.file.display()
        ))));
    }

    tracing::info!(
        event = "run_started",
        command = "apply",
        connection = %config.connection.redacted(),
        statements = statements.len(),
        altered_tables = altered_tables(&statements).len(),
    );

    let report = apply_script(&config.connection, &config.namespace, &statements).await?;
    for line in apply_report(&report.before, &report.after) {
        println!("{line}");
    }
    eprintln!(
        "executed {} statements, verified {} tables",
        report.executed,
        report.after.len()
    );
    Ok(())
}
