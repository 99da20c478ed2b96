//! URI protocol implementation

use std::io::{self, Write};

use anyhow::{bail, ensure, Context, Result};
use rover::core::{Board, Dir, Move};
use rover::engine::SearchOptions;
use rover::Engine;

/// Handle a URI command
pub fn handle_command(cmd: &str, engine: &mut Engine) -> Result<()> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(());
    }

    match parts[0] {
        "uri" => {
            println!("id name Rover");
            println!("option name player type combo default montecarlo var montecarlo var random");
            println!("option name playouts type spin default 20");
            println!("option name maxsteps type spin default 250");
            println!("uriok");
            io::stdout().flush().unwrap();
        }
        "isready" => {
            println!("readyok");
            io::stdout().flush().unwrap();
        }
        "setoption" => {
            ensure!(
                parts.len() == 5 && parts[1] == "name" && parts[3] == "value",
                "invalid setoption command"
            );

            engine.set_option(parts[2], parts[4])?;
        }
        "position" => {
            ensure!(parts.len() >= 2, "position command requires arguments");

            match parts[1] {
                "startpos" => {
                    let size = if parts.len() >= 3 {
                        parts[2].parse().context("invalid board size")?
                    } else {
                        Engine::DEFAULT_SIZE
                    };
                    engine.reset(size)?;
                }
                "fen" if parts.len() >= 3 => {
                    let fen = parts[2..].join(" ");
                    engine.set_position(&fen)?;
                }
                _ => bail!("invalid position command"),
            }
        }
        "go" => {
            let args = parts[1..].join(" ");
            let search_options = args.parse::<SearchOptions>()?;

            match engine.go(&search_options) {
                Some(mv) => {
                    println!("info coverage {}", engine.board.coverage());
                    println!("bestmove {}", mv);
                }
                None => println!("bestmove none"),
            }
            io::stdout().flush().unwrap();
        }
        "move" => {
            ensure!(parts.len() >= 2, "missing move argument");

            let mv = parse_move(parts[1])?;
            engine.apply(mv)?;
        }
        "display" => {
            engine.display();
        }
        "getfen" => {
            println!("{}", engine.fen());
        }
        "quit" => {
            std::process::exit(0);
        }
        cmd => {
            bail!("Unknown command: {}", cmd);
        }
    }

    Ok(())
}

/// Accept a move either as a compass direction (`ne`) or a raw delta
/// (`-1,1`)
fn parse_move(s: &str) -> Result<Move> {
    s.parse::<Dir>()
        .map(Move::from)
        .or_else(|_| s.parse::<Move>())
}
