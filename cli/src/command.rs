use std::str::FromStr;

use anyhow::{Context, bail};
use minemark_core::{Coord, Coord2};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Secondary action, cycles the mark.
    Mark(Coord2),
    /// Primary action, commits a marked cell.
    Commit(Coord2),
    Clues,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(action) = words.next() else {
            bail!("empty command");
        };

        let command = match action {
            "m" | "mark" => Command::Mark(parse_coords(&mut words)?),
            "c" | "commit" => Command::Commit(parse_coords(&mut words)?),
            "clues" => Command::Clues,
            "q" | "quit" => Command::Quit,
            other => bail!("unknown action `{other}`"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected `{extra}` after command");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = parse_axis(words.next(), "row")?;
    let col = parse_axis(words.next(), "col")?;
    Ok((row, col))
}

fn parse_axis(word: Option<&str>, name: &str) -> anyhow::Result<Coord> {
    let word = word.with_context(|| format!("missing {name}"))?;
    word.parse()
        .with_context(|| format!("invalid {name} `{word}`"))
}
