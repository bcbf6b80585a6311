//! gatelog main entrypoint.

use gatelog::run;
use gatelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
