//! Pantry - local settings manager for command-line tools.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pantry::cli::commands::config;
use pantry::config::SettingsStore;
use pantry::output::{self, OutputMode};

/// Pantry - manage your local tool settings 🥫
#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(version, about = "Manage your local settings", long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short = 'd', long, global = true)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Commands to manage your local settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// List config settings
    List,
    /// Update a config setting
    Set { name: String, value: String },
    /// Delete a config setting
    Delete { name: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(&args);

    let store = SettingsStore::new();
    let mode = OutputMode::from_json_flag(args.json);

    // Apply persisted output switches before any command runs.
    let ctx = output::apply_global_settings(&store);

    if ctx.logo_enabled && !mode.is_json() {
        print_banner();
    }

    let result = match &args.command {
        Command::Config { action } => match action {
            ConfigAction::List => config::list(&store, ctx, mode),
            ConfigAction::Set { name, value } => config::set(&store, mode, name, value),
            ConfigAction::Delete { name } => config::delete(&store, mode, name),
        },
    };

    if let Err(e) = result {
        if mode.is_json() {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            std::process::exit(1);
        }
        return Err(e.into());
    }

    Ok(())
}

fn init_tracing(args: &Args) {
    let default_filter = if args.verbose {
        "trace"
    } else if args.debug {
        "debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner() {
    println!();
    println!("  \x1b[1;33m┌─┐┌─┐┌┐┌┌┬┐┬─┐┬ ┬\x1b[0m");
    println!(
        "  \x1b[1;33m├─┘├─┤│││ │ ├┬┘└┬┘\x1b[0m  \x1b[2mv{}\x1b[0m",
        env!("CARGO_PKG_VERSION")
    );
    println!("  \x1b[1;33m┴  ┴ ┴┘└┘ ┴ ┴  ┴ \x1b[0m");
    println!();
}
