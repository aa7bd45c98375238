use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use minemark_core::{CellCount, Coord, GameConfig, GameSession};

use crate::command::Command;

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(short = 'W', long, default_value_t = 9)]
    width: Coord,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = 9)]
    height: Coord,

    /// How many mines to place
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every cell's mine flag and neighbor count before playing
    #[arg(long)]
    clues: bool,

    /// Print each action outcome as a JSON line instead of text
    #[arg(long)]
    json: bool,
}

const HELP: &str = "Commands: `m ROW COL` cycles a mark, `c ROW COL` commits a marked cell, `clues` dumps the board, `q` quits";

fn main() -> Result<()> {
    use rand::Rng;

    let args = Args::parse();
    if let Some(log_level) = args.verbose.log_level() {
        simple_logger::init_with_level(log_level)?;
    }

    let config = GameConfig::new(args.width, args.height, args.mines)?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let mut session = GameSession::new(config, seed);
    let generated = session.board().game_config();
    println!(
        "New game board generated: {}x{} with {} mines.",
        generated.width(),
        generated.height(),
        generated.mines()
    );
    if args.clues {
        print!("{}", render::clue_grid(session.board()));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut session, stdin.lock(), &mut stdout.lock(), args.json)
}

/// Reads commands until the game is lost, input ends, or the player quits.
fn play(
    session: &mut GameSession,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<()> {
    writeln!(out, "{HELP}")?;
    let mut lines = input.lines();
    let mut repaint = true;
    while !session.is_lost() {
        if repaint {
            write!(out, "{}", render::grid(session))?;
            writeln!(out, "{}", render::status(session))?;
        }
        out.flush()?;
        repaint = false;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e:#} - try again. {HELP}")?;
                continue;
            }
        };

        let result = match command {
            Command::Mark(coords) => session.secondary(coords),
            Command::Commit(coords) => session.primary(coords),
            Command::Clues => {
                write!(out, "{}", render::clue_grid(session.board()))?;
                continue;
            }
            Command::Quit => break,
        };

        if let Ok(outcome) = result {
            repaint = outcome.has_update();
        }
        match result {
            Ok(outcome) if json => writeln!(out, "{}", serde_json::to_string(&outcome)?)?,
            Ok(outcome) => writeln!(out, "{}", render::outcome(outcome))?,
            Err(e) => writeln!(out, "Invalid action - try again: {e}")?,
        }
    }

    if session.is_lost() {
        write!(out, "{}", render::grid(session))?;
    }
    Ok(())
}
