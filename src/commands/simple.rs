//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::core::{SpellChecker, SubmissionResult};
use crate::game::Session;
use crate::output::Alert;
use crate::output::display::{write_accepted, write_alert, write_round_header, write_used_words};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<C: SpellChecker, R: Rng>(session: &mut Session<C, R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the game loop over any input and output
///
/// Every line is a submission unless it is one of the commands
/// `:reset`, `:score`, `:words` or `:quit`. End of input ends the game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<C, R, I, O>(
    session: &mut Session<C, R>,
    mut input: I,
    mut output: O,
) -> Result<()>
where
    C: SpellChecker,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Interactive Mode             ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the root word.")?;
    writeln!(output, "Commands: ':score' scoring rules, ':words' found words, ':reset' new root, ':quit' to exit")?;

    write_round_header(&mut output, session.state())?;

    loop {
        let Some(line) = prompt(&mut input, &mut output, "Enter new word")? else {
            break;
        };

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":score" | ":help" | "?" => write_alert(&mut output, &Alert::ScoreHelp)?,
            ":words" => write_used_words(&mut output, session.state())?,
            ":reset" => {
                write_alert(&mut output, &Alert::ResetConfirm)?;

                let Some(answer) = prompt(&mut input, &mut output, "Reset? (yes/no)")? else {
                    break;
                };

                if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
                    session.reset();
                    writeln!(output, "\n🔄 New round started!")?;
                    write_round_header(&mut output, session.state())?;
                } else {
                    writeln!(output, "Reset cancelled.")?;
                }
            }
            _ => match session.submit(&line) {
                Some(SubmissionResult::Accepted { word, points }) => {
                    write_accepted(&mut output, &word, points, session.state().score())?;
                }
                Some(SubmissionResult::Rejected(rejection)) => {
                    write_alert(&mut output, &Alert::from(&rejection))?;
                }
                None => {}
            },
        }
    }

    writeln!(
        output,
        "\nFinal score: {} ({} words)",
        session.state().score(),
        session.state().word_count()
    )?;
    writeln!(output, "👋 Thanks for playing!\n")?;
    Ok(())
}

/// Print a prompt and read one line, without its line ending
///
/// Returns `None` at end of input.
fn prompt<I: BufRead, O: Write>(input: &mut I, output: &mut O, label: &str) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
