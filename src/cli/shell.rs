//! Interactive shell
//!
//! Runs ledger commands line by line against one in-memory session so that
//! changes persist until the shell exits.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use super::{dispatch, LedgerCommand, Session};
use crate::error::{TrackerError, TrackerResult};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,

    #[command(flatten)]
    Ledger(LedgerCommand),
}

/// Split a line into words, honoring single and double quotes
fn split_words(line: &str) -> TrackerResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(TrackerError::Validation("Unterminated quote".into()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Read commands from `input` until it ends or `exit` is entered
pub fn run_shell(session: &mut Session, input: impl BufRead) -> TrackerResult<()> {
    println!("spendtrack shell. Type 'help' for commands, 'exit' to quit.");
    prompt()?;

    for line in input.lines() {
        let line = line?;
        let words = match split_words(&line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Error: {}", e);
                prompt()?;
                continue;
            }
        };

        if words.is_empty() {
            prompt()?;
            continue;
        }

        match ShellLine::try_parse_from(&words) {
            Ok(ShellLine {
                command: ShellCommand::Exit,
            }) => return Ok(()),
            Ok(ShellLine {
                command: ShellCommand::Ledger(cmd),
            }) => {
                if let Err(e) = dispatch(session, cmd) {
                    eprintln!("Error: {}", e);
                }
            }
            // Help and usage errors render through clap
            Err(e) => e.print()?,
        }

        prompt()?;
    }

    println!();
    Ok(())
}

fn prompt() -> TrackerResult<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TrackerPaths};
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(temp_dir: &TempDir) -> Session {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        Session::new(
            Storage::sample(today),
            Settings::default(),
            TrackerPaths::with_base_dir(temp_dir.path().to_path_buf()),
            today,
        )
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"txn add "Corner Cafe" 12.50 -c 'Dining Out'"#).unwrap(),
            vec!["txn", "add", "Corner Cafe", "12.50", "-c", "Dining Out"]
        );
        assert_eq!(split_words("  ").unwrap(), Vec::<String>::new());
        assert_eq!(split_words(r#"-m """#).unwrap(), vec!["-m", ""]);
        assert!(split_words("txn add \"Cafe").is_err());
    }

    #[test]
    fn test_changes_persist_across_lines() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let before = session.storage.categories.len();

        let input = Cursor::new("category add Books\ncategory delete Books\ncategory add Pets\n");
        run_shell(&mut session, input).unwrap();

        assert_eq!(session.storage.categories.len(), before + 1);
        assert!(session.category("Pets").is_ok());
    }

    #[test]
    fn test_errors_do_not_stop_the_shell() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let before = session.storage.categories.len();

        let input = Cursor::new("category delete Groceries\nnonsense\ncategory add Books\n");
        run_shell(&mut session, input).unwrap();

        assert_eq!(session.storage.categories.len(), before + 1);
    }

    #[test]
    fn test_exit_stops_reading() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let before = session.storage.categories.len();

        let input = Cursor::new("exit\ncategory add Books\n");
        run_shell(&mut session, input).unwrap();

        assert_eq!(session.storage.categories.len(), before);
    }
}
