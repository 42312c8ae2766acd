//! Terminal feedback for CLI commands. Errors go to stderr, the rest to stdout.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt::Display;
use std::io::{self, Write};

fn tagged(color: &str, icon: &str, msg: impl Display) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info(msg: impl Display) {
    println!("{}", tagged(BLUE, "ℹ️", msg));
}

pub fn success(msg: impl Display) {
    println!("{}", tagged(GREEN, "✅", msg));
}

pub fn warning(msg: impl Display) {
    println!("{}", tagged(YELLOW, "⚠️", msg));
}

pub fn error(msg: impl Display) {
    eprintln!("{}", tagged(RED, "❌", msg));
}

/// Section title used above the CLI tables.
pub fn header(title: impl Display) {
    println!("{BLUE}{BOLD}=== {title} ==={RESET}");
}

/// Print `question` as a warning and read a y/N answer from stdin.
/// Anything but "y"/"yes" (or a read failure) counts as no.
pub fn confirm(question: impl Display, prompt: &str) -> bool {
    warning(question);
    print!("{prompt} [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
