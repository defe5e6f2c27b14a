use gomoku::protocol::{handler, health};
use std::io::Read;

/// One-shot worker: a decision-request document on stdin, the updated
/// document (or an error object) on stdout.
fn main() {
    env_logger::init();
    health::mark_started();

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        log::error!("failed to read request: {err}");
        std::process::exit(1);
    }

    println!("{}", handler::handle_request(&input));
}
