use rover::Engine;
use std::io::{self, BufRead};

mod uri;
use uri::command::parse_command;
use uri::protocol::handle_command;

fn main() {
    println!("Rover - Coverage Engine");

    let stdin = io::stdin();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let input = line.unwrap();

        if let Some(cmd) = parse_command(&input) {
            if let Err(err) = handle_command(&cmd, &mut engine) {
                if engine.options.strict_mode {
                    panic!("{}", err);
                } else {
                    eprintln!("{}", err);
                }
            }
        }
    }
}
