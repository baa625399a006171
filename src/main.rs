mod commands;
mod core;
mod manifest;
mod release;
mod vcs;
mod version;
mod wasm;

use crate::core::context::WorkspaceContext;
use crate::core::error::{SkiffError, print_error};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release orchestration and wasm size reporting for a cargo workspace
#[derive(Parser)]
#[command(name = "cargo")]
#[command(bin_name = "cargo")]
#[command(styles = get_styles())]
enum CargoCli {
  Skiff(SkiffCli),
}

#[derive(Parser)]
#[command(name = "skiff")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct SkiffCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Bump the workspace version, then commit, push and create a GitHub release
  Release {
    /// Version to release (a leading `v` is accepted and stripped)
    #[arg(id = "release_version", value_name = "VERSION")]
    version: String,
    /// Self-referential dependency to pin (auto-detected by default)
    #[arg(long = "crate")]
    crate_name: Option<String>,
    /// Skip the `cargo check` lockfile refresh before the dirty check
    #[arg(long)]
    no_verify: bool,
  },

  /// Update the manifest version fields without releasing
  Version {
    /// Version to store (a leading `v` is accepted and stripped)
    #[arg(id = "set_version", value_name = "VERSION")]
    version: String,
    /// Self-referential dependency to pin (auto-detected by default)
    #[arg(long = "crate")]
    crate_name: Option<String>,
  },

  /// Build the size-optimized wasm artifact and report raw/gzip sizes
  Wasm {
    /// Append the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Crate whose `<crate>-wasm` package is built (auto-detected by default)
    #[arg(long = "crate")]
    crate_name: Option<String>,
    /// Output the report rows as JSON
    #[arg(long)]
    json: bool,
  },

  /// Print the size of the canonical wasm artifact on disk
  Summary {
    /// Crate whose artifact is measured (auto-detected by default)
    #[arg(long = "crate")]
    crate_name: Option<String>,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let CargoCli::Skiff(cli) = CargoCli::parse();

  let root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  let ctx = WorkspaceContext::new(root);

  let result = match cli.command {
    Commands::Release {
      version,
      crate_name,
      no_verify,
    } => commands::run_release(&ctx, &version, crate_name, no_verify),
    Commands::Version { version, crate_name } => commands::run_version(&ctx, &version, crate_name),
    Commands::Wasm {
      output,
      crate_name,
      json,
    } => commands::run_wasm(&ctx, output, crate_name, json),
    Commands::Summary { crate_name } => commands::run_summary(&ctx, crate_name),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: SkiffError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
