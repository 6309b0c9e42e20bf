use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Config;
use crate::engine::PrefixIndex;

const BANNER: &str = "\
==============================================
    AUTOCOMPLETE CHATBOT WITH TRIE & PQ
==============================================
Enter words or prefixes to get suggestions.
Type 'quit' or 'exit' to end the program.
Type 'stats' to see statistics.
Type 'help' to see available commands.
==============================================
";

const HELP: &str = "\
=== Available Commands ===
- Type any word or prefix to get suggestions
- 'stats' - Display chatbot statistics
- 'help' - Show this help menu
- 'quit' or 'exit' - End the program
";

const STATS: &str = "\
=== Chatbot Statistics ===
Database contains words starting with common prefixes.
Words are ranked by frequency and alphabetical order.
New words are automatically added when not found.
";

const FAREWELL: &str = "Thank you for using the Autocomplete Chatbot!";

/// One line of user input, classified. Command words are case-insensitive;
/// anything else non-empty is a completion query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Stats,
    Help,
    Empty,
    Query(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "quit" | "exit" => Command::Quit,
            "stats" => Command::Stats,
            "help" => Command::Help,
            "" => Command::Empty,
            _ => Command::Query(trimmed.to_string()),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Reply(String),
    Quit(String),
}

/// Interactive front-end over one `PrefixIndex`, handed in at construction.
/// Holds no other state; all responses are rendered as strings so the loop
/// stays a thin pipe between stdin and stdout.
pub struct Shell {
    index: PrefixIndex,
    prompt: String,
    max_results: usize,
}

impl Shell {
    pub fn new(index: PrefixIndex, config: &Config) -> Self {
        Self {
            index,
            prompt: config.shell.prompt.clone(),
            max_results: config.suggest.max_results,
        }
    }

    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        output
            .write_all(BANNER.as_bytes())
            .context("failed to write banner")?;
        output.write_all(b"\n").context("failed to write banner")?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.prompt).context("failed to write prompt")?;
            output.flush().context("failed to flush prompt")?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("failed to read input line")?;

            match self.handle_line(&line) {
                Outcome::Reply(reply) => {
                    write!(output, "{reply}").context("failed to write reply")?;
                    writeln!(output, "\n{}", "-".repeat(50))
                        .context("failed to write separator")?;
                    output.flush().context("failed to flush reply")?;
                }
                Outcome::Quit(farewell) => {
                    write!(output, "{farewell}").context("failed to write farewell")?;
                    output.flush().context("failed to flush farewell")?;
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Command::Quit => Outcome::Quit(format!("\n{FAREWELL}\n")),
            Command::Stats => Outcome::Reply(format!("\n{STATS}")),
            Command::Help => Outcome::Reply(format!("\n{HELP}\n")),
            Command::Empty => Outcome::Reply("Please enter a valid input.\n".to_string()),
            Command::Query(query) => Outcome::Reply(self.process_query(&query)),
        }
    }

    /// Every query is treated as a usage signal: suggest, report whether the
    /// exact word exists, then bump it by 1 either way (creating it if new).
    fn process_query(&mut self, query: &str) -> String {
        let mut reply = String::new();
        let _ = writeln!(reply, "\n--- Processing: \"{query}\" ---");

        let suggestions = self.index.suggest(query, self.max_results);
        if suggestions.is_empty() {
            let _ = writeln!(reply, "No suggestions found for \"{query}\"");
        } else {
            let _ = writeln!(reply, "Autocomplete suggestions:");
            for (i, word) in suggestions.iter().enumerate() {
                let _ = writeln!(reply, "{}. {word}", i + 1);
            }
        }

        if self.index.lookup(query) {
            let _ = writeln!(reply, "Word \"{query}\" exists in our database.");
            self.index.insert(query, 1);
            let _ = writeln!(reply, "Increased frequency of \"{query}\"");
        } else {
            let _ = writeln!(reply, "Word \"{query}\" not found in database.");
            let _ = writeln!(reply, "Adding \"{query}\" to the database with frequency 1.");
            self.index.insert(query, 1);
            debug!(word = %query, "learned new word");
        }

        reply
    }
}
