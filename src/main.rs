//! hourtrack main entrypoint.

use hourtrack::run;
use hourtrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
