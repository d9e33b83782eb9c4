#![forbid(unsafe_code)]

//! BetterRest
//!
//! ```sh
//! cargo run -p betterrest -- --variant live
//! ```
//!
//! # Controls
//!
//! - Tab / Shift+Tab: move between controls
//! - ↑/↓ or +/-: adjust; ←/→ switch hour and minute; PageUp/PageDown: ±15 min
//! - c or Enter on Calculate: show the bedtime
//! - q / Ctrl+C: quit

fn main() {
    match betterrest::run_from_env() {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("betterrest: {error}");
            std::process::exit(error.exit_code());
        }
    }
}
