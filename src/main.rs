//! shiftchart main entrypoint.

use shiftchart::run;
use shiftchart::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
