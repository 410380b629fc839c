// Tallerlei Homepage - portfolio website
//
// Renders a single page from five sections (header, hero, about, projects,
// contact) and either serves it over HTTP or writes it to disk.
//
// Architecture:
// - Components: one renderer per page section, composed by the root shell
// - Clock: injected time source for the copyright year
// - Server (axum): serves the rendered page
// - Export: writes index.html for static hosting

mod cli;
mod clock;
mod components;
mod config;
mod export;
mod html;
mod logging;
mod server;
mod startup;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use clock::{Clock, SystemClock};
use components::ContactComponent;
use config::Config;
use server::AppState;
use std::sync::Arc;

/// Load configuration, writing a template on first run
fn load_config() -> Result<Config> {
    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    Config::load()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        // Config management runs before anything reads the config
        Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        } => cli::handle_config(show, reset, edit, update, path),
        Commands::Year => {
            println!("{}", ContactComponent.get_current_year(&SystemClock));
            Ok(())
        }
        Commands::Render { out } => {
            let config = load_config()?;
            let _log_guard = logging::init(&config.logging);
            let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
            let path = export::export_site(&out_dir, &config.site, &SystemClock)?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Serve => serve(load_config()?).await,
    }
}

/// Run the HTTP server until Ctrl+C
async fn serve(config: Config) -> Result<()> {
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _log_guard = logging::init(&config.logging);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = AppState::new(config.site.clone(), clock);

    startup::print_startup(&config, &state.shell);
    startup::log_startup(&config, &state.shell);

    // Oneshot channel: a single graceful-shutdown signal for the server
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let mut server_handle = tokio::spawn(server::start_server(
        config.bind_addr,
        state,
        shutdown_rx,
    ));

    tokio::select! {
        result = &mut server_handle => {
            // Server stopped on its own (e.g. bind failure)
            return result.context("Server task panicked")?;
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
        }
    }

    tracing::info!("Shutting down...");

    // If the send fails, the server has already shut down (which is fine)
    let _ = shutdown_tx.send(());
    server_handle.await.context("Server task panicked")??;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use components::{RenderContext, RootShell};

    #[test]
    fn test_root_shell_needs_no_input() {
        // Instantiating the shell with defaults yields every section
        let site = config::SiteContent::default();
        let shell = RootShell::new();
        let page = shell.render_document(&RenderContext::new(&site, &SystemClock));
        for id in shell.sections() {
            assert!(page.contains(&format!("id=\"{}\"", id.as_str())));
        }
    }
}
