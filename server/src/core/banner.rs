//! Startup banner and URL display

use std::path::Path;

use super::config::is_all_interfaces;
use super::constants::APP_NAME;

// Label width: "API docs:" padded for alignment
const W: usize = 12;

/// Print the startup banner with URLs
pub fn print_banner(host: &str, port: u16, db_path: &Path) {
    // Use localhost for display when binding to all interfaces
    let display_host = if is_all_interfaces(host) {
        "localhost"
    } else {
        host
    };

    println!();
    println!(
        "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!(
        "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}",
        "API:", display_host, port
    );
    println!(
        "  \x1b[33m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}/api/docs",
        "API docs:", display_host, port
    );

    if host == "127.0.0.1" || host == "localhost" {
        println!(
            "  \x1b[90m➜  {:<W$} use --host 0.0.0.0 to expose\x1b[0m",
            "Network:"
        );
    }
    println!("  \x1b[90m➜  {:<W$} {}\x1b[0m", "Database:", db_path.display());

    println!();
}
