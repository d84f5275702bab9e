//! Interactive console boundary
//!
//! All blocking prompts go through the [`Prompter`] trait so the
//! orchestration can run headlessly in tests with canned responses. The real
//! interactive console ([`StdinPrompter`]) is one implementation of the
//! boundary; [`ScriptedPrompter`] replays a fixed script.

use crate::config::Config;
use crate::crawler::fetch_page;
use crate::url::validate_seed;
use crate::{FetchError, ScoutError};
use reqwest::Client;
use std::io::{self, BufRead, Write};

/// Line-oriented prompt boundary
pub trait Prompter {
    /// Shows `prompt` and returns the user's answer, without the trailing
    /// newline
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Real interactive console backed by stdin/stdout
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Replays a fixed sequence of answers; for headless runs and tests
#[derive(Debug)]
pub struct ScriptedPrompter {
    answers: std::vec::IntoIter<String>,
}

impl ScriptedPrompter {
    /// Creates a prompter that will answer with `answers`, in order
    pub fn new(answers: Vec<String>) -> Self {
        Self {
            answers: answers.into_iter(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, _prompt: &str) -> io::Result<String> {
        self.answers.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "prompt script exhausted")
        })
    }
}

/// Prints the preset seed menu, one `[<code>] - <url>` row per entry
pub fn print_menu(config: &Config) {
    for preset in &config.presets {
        println!("[{}] - {}", preset.code, preset.url);
    }
}

/// Obtains a fetchable seed: a URL and its page body
///
/// Accepts either a preset menu code (case-insensitive) or a raw URL.
/// Re-prompts indefinitely on malformed or unreachable selections, with a
/// distinguished message for HTTP 403. Only a failure of the prompt
/// boundary itself ends the loop with an error.
pub async fn select_seed(
    prompter: &mut dyn Prompter,
    client: &Client,
    config: &Config,
) -> Result<(String, String), ScoutError> {
    loop {
        let selection = prompter.ask("Please select a URL above, or enter URL of your choice: ")?;

        let url = match config.preset_url(&selection) {
            Some(preset_url) => preset_url.to_string(),
            None => selection,
        };

        if let Err(e) = validate_seed(&url) {
            println!("ERROR - Invalid URL ({})", e);
            continue;
        }

        match fetch_page(client, &url).await {
            Ok(body) => {
                println!();
                return Ok((url, body));
            }
            Err(e @ FetchError::Forbidden { .. }) => {
                println!("ERROR - Unable to access URL ({}) - Please see Notes", e);
            }
            Err(e) => {
                println!("ERROR - Unable to access URL ({})", e);
            }
        }
    }
}

/// Asks whether to display the article links, re-prompting until Y or N
///
/// Returns true for Y, false for N (case-insensitive); anything else asks
/// again.
pub fn confirm_display(prompter: &mut dyn Prompter) -> Result<bool, ScoutError> {
    println!();
    loop {
        let answer =
            prompter.ask("Would you also like to display the found article links here? [Y/N]: ")?;
        match answer.trim() {
            a if a.eq_ignore_ascii_case("y") => return Ok(true),
            a if a.eq_ignore_ascii_case("n") => return Ok(false),
            _ => {}
        }
    }
}

/// Renders the one-line progress indicator for the fetch+estimate phase
pub fn print_progress(done: usize, total: usize) {
    print!("\rDetecting articles from links... {}/{}", done, total);
    let _ = io::stdout().flush();
    if done == total {
        println!();
    }
}
