//! Host entry point.
//!
//! Renders the menu to the terminal, applies selections, and hands fetch
//! actions to the external tool — the glue the shell extension provided in
//! spirit, minus the shell.

use anyhow::{Context, Result};
use tracing::debug;

use nugetmenu::cli::{Cli, Commands};
use nugetmenu::launcher;
use nugetmenu::resolver::Action;
use nugetmenu::{ContextMenu, paths};

/// Initialize the tracing subscriber with env-filter support.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse_args();

    let sources = match cli.sources {
        Some(path) => path,
        None => paths::sources_document().context("cannot determine the per-user config directory")?,
    };
    let options = match cli.options {
        Some(path) => path,
        None => paths::options_document().context("cannot determine the per-user data directory")?,
    };
    debug!(sources = %sources.display(), options = %options.display(), "document locations");
    let handler = ContextMenu::new(sources, options);

    match cli.command {
        Commands::Menu => print_menu(&handler)?,
        Commands::Select {
            index,
            package,
            dry_run,
        } => match handler.on_select(index, &package)? {
            Action::Toggle(flag) => {
                println!("toggled {flag}");
                print_menu(&handler)?;
            }
            Action::Fetch(fetch) => {
                if dry_run {
                    println!("would run: {}", fetch.argument_string());
                } else {
                    let output = launcher::run_fetch(&fetch)?;
                    print!("{}", output.stdout);
                    eprint!("{}", output.stderr);
                    output.ensure_success("fetch")?;
                }
            }
        },
        Commands::Toggle { flag } => {
            handler.store().toggle(flag)?;
            println!("toggled {flag}");
            print_menu(&handler)?;
        }
    }

    Ok(())
}

fn print_menu(handler: &ContextMenu) -> Result<()> {
    let menu = handler.build_menu()?;
    for (index, entry) in menu.entries().iter().enumerate() {
        println!("{index:>2}  {entry}");
    }
    Ok(())
}
