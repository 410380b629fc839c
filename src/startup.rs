// Startup module - displays banner and page composition
//
// Shown before the server starts accepting requests:
// - Version info and branding
// - Configuration source
// - Page sections in render order

use crate::components::RootShell;
use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Describe where configuration was loaded from
fn config_source() -> String {
    match Config::config_path() {
        Some(path) if path.exists() => path.display().to_string(),
        _ => "(using defaults)".to_string(),
    }
}

/// Section names in render order, e.g. "header → hero → about → projects → contact"
fn section_line(shell: &RootShell) -> String {
    shell
        .sections()
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Print the startup banner
pub fn print_startup(config: &Config, shell: &RootShell) {
    use colors::*;

    println!();
    println!(
        "  {BOLD}{CYAN}{}{RESET} {DIM}v{VERSION}{RESET}",
        config.site.brand
    );
    println!("  {DIM}{}{RESET}", shell.title());
    println!();
    println!("  {DIM}Config:{RESET} {}", config_source());
    println!("  {DIM}Sections:{RESET} {GREEN}{}{RESET}", section_line(shell));
    println!();
    println!(
        "  {MAGENTA}▸{RESET} Serving on {BOLD}http://{}{RESET}",
        config.bind_addr
    );
    println!();
}

/// Mirror the banner into the log
pub fn log_startup(config: &Config, shell: &RootShell) {
    tracing::info!("{} v{}", shell.title(), VERSION);
    tracing::info!("Config: {}", config_source());
    tracing::info!("Sections: {}", section_line(shell));
    tracing::info!("▸ Listening on {}", config.bind_addr);
}
