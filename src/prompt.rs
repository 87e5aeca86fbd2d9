// src/prompt.rs
use crate::scraper::ScraperError;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Asks one question. A terminal gets a dialoguer prompt; piped or
/// redirected stdin is read a line at a time.
pub fn ask(text: &str) -> Result<String, ScraperError> {
    let answer = if io::stdin().is_terminal() {
        Input::<String>::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ScraperError::Io(format!("reading input: {e}")))?
    } else {
        print!("{text}: ");
        io::stdout()
            .flush()
            .map_err(|e| ScraperError::Io(format!("writing prompt: {e}")))?;
        read_answer(&mut io::stdin().lock())?
    };

    Ok(answer.trim().to_lowercase())
}

/// Next line from `reader` without its line ending. EOF before any input is an error.
pub fn read_answer<R: BufRead>(reader: &mut R) -> Result<String, ScraperError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| ScraperError::Io(format!("reading input: {e}")))?;

    if read == 0 {
        return Err(ScraperError::Io("reading input: unexpected end of input".into()));
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
