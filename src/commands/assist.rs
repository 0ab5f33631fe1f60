//! Assisted solving mode
//!
//! The solver suggests guesses for a game played elsewhere; the user reports
//! the feedback each one received.

use crate::core::Feedback;
use crate::error::MastermindError;
use crate::solver::minimax::calculate_max_remaining;
use crate::solver::{Solver, Status, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Candidate lists at or below this size are printed in full
const SHOW_CANDIDATES: usize = 10;

/// Outcome of reading one feedback line
enum Reply {
    Feedback(Feedback),
    Undo,
    NewGame,
    Quit,
}

/// Run the assisted solving loop until the user quits or input runs out
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist<S: Strategy, R: BufRead, W: Write>(
    solver: &mut Solver<S>,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    let length = solver.config().secret_length;

    writeln!(output, "I'll suggest guesses that minimize the worst case.")?;
    writeln!(
        output,
        "After each guess, enter the feedback as two numbers: symbols in the right \
         position, then right symbols in the wrong position (e.g. '1 2')."
    )?;
    writeln!(output, "Commands: 'win', 'undo', 'new', 'quit'\n")?;

    loop {
        if solver.status().is_terminal() {
            if solver.status() == Status::Won {
                let made = solver.guesses_made();
                let message = format!(
                    "🎉 Solved in {made} {}!",
                    if made == 1 { "guess" } else { "guesses" }
                );
                writeln!(output, "\n{}", message.green().bold())?;
            } else {
                writeln!(output, "\n{}", "Out of guesses.".red().bold())?;
            }

            write!(output, "Play again? (yes/no/undo): ")?;
            output.flush()?;
            match read_line(&mut input)?.as_deref() {
                Some("yes" | "y") => {
                    solver.reset();
                    writeln!(output, "\n🔄 New game started!\n")?;
                }
                Some("undo" | "u") => {
                    solver.undo_last();
                }
                _ => return Ok(()),
            }
            continue;
        }

        let guess = solver.next_guess()?;
        let worst_case =
            calculate_max_remaining(solver.space(), &guess, solver.candidate_indices());

        writeln!(output, "{}", "─".repeat(60))?;
        writeln!(
            output,
            "Turn {}: {} candidates remaining",
            solver.guesses_made() + 1,
            solver.candidate_count()
        )?;
        writeln!(output, "{}", "─".repeat(60))?;
        writeln!(
            output,
            "\n📊 Suggested guess: {}",
            guess.to_string().bright_yellow().bold()
        )?;
        writeln!(output, "   Worst case:      {worst_case} candidates\n")?;

        if solver.candidate_count() <= SHOW_CANDIDATES {
            writeln!(output, "Remaining candidates:")?;
            for candidate in solver.candidates() {
                writeln!(output, "  • {candidate}")?;
            }
            writeln!(output)?;
        }

        let reply = loop {
            write!(output, "Enter feedback: ")?;
            output.flush()?;

            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            match line.as_str() {
                "quit" | "q" | "exit" => break Reply::Quit,
                "new" | "n" => break Reply::NewGame,
                "undo" | "u" => break Reply::Undo,
                "win" | "correct" => break Reply::Feedback(Feedback::perfect(length)),
                text => match Feedback::parse(text, length) {
                    Ok(feedback) => break Reply::Feedback(feedback),
                    Err(err) => writeln!(output, "{}", format!("❌ {err}").red())?,
                },
            }
        };

        match reply {
            Reply::Quit => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Reply::NewGame => {
                solver.reset();
                writeln!(output, "\n🔄 New game started!\n")?;
            }
            Reply::Undo => match solver.undo_last() {
                Some(turn) => writeln!(output, "✓ Undone {}\n", turn.guess)?,
                None => writeln!(output, "Nothing to undo!\n")?,
            },
            Reply::Feedback(feedback) => match solver.record_feedback(&guess, feedback) {
                Ok(_) => {}
                Err(err @ MastermindError::InconsistentFeedback(_)) => {
                    writeln!(output, "{}", format!("❌ {err}").red())?;
                    writeln!(
                        output,
                        "Check the feedback, or type 'undo' to revisit an earlier turn.\n"
                    )?;
                }
                Err(err) => return Err(err.into()),
            },
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::solver::MinimaxStrategy;
    use std::io::Cursor;

    fn run(solver: &mut Solver<MinimaxStrategy>, input: &str) -> String {
        let mut output = Vec::new();
        run_assist(solver, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn fresh() -> Solver<MinimaxStrategy> {
        Solver::new(MinimaxStrategy, GameConfig::default(), None).unwrap()
    }

    #[test]
    fn suggests_opening_and_records_feedback() {
        let mut solver = fresh();
        let output = run(&mut solver, "1 0\n");

        assert!(output.contains("Turn 1: 1296 candidates remaining"));
        assert!(output.contains("Suggested guess: 1 1 1 1"));
        assert!(output.contains("Turn 2: 500 candidates remaining"));
        assert_eq!(solver.guesses_made(), 1);
    }

    #[test]
    fn invalid_feedback_reprompts() {
        let mut solver = fresh();
        let output = run(&mut solver, "5 0\nhello\n0 0\n");

        assert_eq!(output.matches("❌").count(), 2);
        assert_eq!(solver.candidate_count(), 625);
    }

    #[test]
    fn contradictory_feedback_keeps_state() {
        let mut solver = fresh();
        // 1 1 1 1 can never score a value match
        let output = run(&mut solver, "0 1\n");

        assert!(output.contains("contradicts earlier feedback"));
        assert_eq!(solver.guesses_made(), 0);
        assert_eq!(solver.candidate_count(), 1296);
    }

    #[test]
    fn undo_and_new_game() {
        let mut solver = fresh();
        let output = run(&mut solver, "undo\n0 0\nundo\n0 0\nnew\n");

        assert!(output.contains("Nothing to undo!"));
        assert!(output.contains("✓ Undone 1 1 1 1"));
        assert!(output.contains("New game started!"));
        assert_eq!(solver.guesses_made(), 0);
    }

    #[test]
    fn win_ends_game() {
        let mut solver = fresh();
        let output = run(&mut solver, "win\nno\n");

        assert!(output.contains("Solved in 1 guess!"));
        assert_eq!(solver.status(), Status::Won);
    }

    #[test]
    fn quit_stops_immediately() {
        let mut solver = fresh();
        let output = run(&mut solver, "quit\n0 0\n");

        assert!(output.contains("Thanks for playing!"));
        assert_eq!(solver.guesses_made(), 0);
    }
}
