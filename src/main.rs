//! studylogger main entrypoint.

use studylogger::run;

fn main() {
    if let Err(e) = run() {
        studylogger::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
