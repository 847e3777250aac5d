//! carbase CLI - a small vehicle register kept in a plain-text file
//!
//! Runs the numbered interactive menu by default and offers scriptable
//! subcommands over the same data file.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod menu;
mod output;
mod ui;

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::constants::LOG_ENV;
use crate::errors::CliError;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = AppContext::new(&cli);
    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        let ui_ctx = UiContext::from_env(false, None, cli.no_color, cli.ascii);
        print_error(&ui_ctx, &format!("{:#}", e), None);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Menu) => commands::handle_menu(ctx)?,
        Some(Commands::List(args)) => commands::handle_list(ctx, args)?,
        Some(Commands::Add(args)) => commands::handle_add(ctx, args)?,
        Some(Commands::Remove(args)) => commands::handle_remove(ctx, args)?,
        Some(Commands::Search(args)) => commands::handle_search(ctx, args)?,
        Some(Commands::Completions(args)) => commands::handle_completions(args),
    }
    Ok(())
}
