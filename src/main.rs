//! rLunchBank main entrypoint.

use rlunchbank::run;
use rlunchbank::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
