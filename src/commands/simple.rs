//! Simple line-based game for humans
//!
//! The player guesses the secret; every guess is answered with a history
//! table. No TUI, so it works over pipes too.

use crate::core::Code;
use crate::game::Game;
use crate::output::formatters::history_table;
use crate::solver::Status;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the line-based game until it ends, the player quits, or input runs out
///
/// Returns the game status at that point.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    output: &mut W,
) -> Result<Status> {
    let config = *game.config();

    writeln!(output, "Let's play a game...")?;
    writeln!(
        output,
        "I'm thinking of {} numbers between 1 and {}.",
        config.secret_length, config.num_choices
    )?;
    writeln!(output, "Can you guess the sequence? ('quit' to give up)\n")?;

    while game.status() == Status::Guessing {
        write!(output, "Please enter your guess: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if matches!(line, "quit" | "q" | "exit") {
            writeln!(output, "The secret was {}", game.secret())?;
            break;
        }

        let guess = match Code::parse(line, &config) {
            Ok(guess) => guess,
            Err(err) => {
                writeln!(
                    output,
                    "{} Guesses must be sequences of exactly {} integers between 1 and {}.",
                    format!("❌ {err}.").red(),
                    config.secret_length,
                    config.num_choices
                )?;
                continue;
            }
        };

        match game.submit(&guess)? {
            Status::Won => {
                writeln!(output, "{}", "That is correct! You win".green().bold())?;
            }
            Status::Exhausted => {
                writeln!(output, "{}", "You lose! Too many guesses!".red().bold())?;
                writeln!(output, "The secret was {}", game.secret())?;
            }
            Status::Guessing => {
                write!(output, "{}", history_table(&game.observations()))?;
                writeln!(output, "{} guesses left\n", game.guesses_left())?;
            }
        }
    }

    Ok(game.status())
}
