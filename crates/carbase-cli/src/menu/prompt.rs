//! Line-oriented console prompts for the menu.

use std::io::{self, BufRead, Write};

use crate::helpers::{first_token, parse_int};

/// Why a prompt could not produce a value.
#[derive(Debug)]
pub enum Stop {
    EndOfInput,
    Io(io::Error),
}

impl From<io::Error> for Stop {
    fn from(err: io::Error) -> Self {
        Stop::Io(err)
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line.
    pub fn say(&mut self, text: &str) -> Result<(), Stop> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Print a prompt without a trailing newline.
    fn ask(&mut self, text: &str) -> Result<(), Stop> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn line(&mut self) -> Result<String, Stop> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Stop::EndOfInput);
        }
        Ok(buf)
    }

    /// Next non-blank word, skipping empty lines.
    pub fn word(&mut self) -> Result<String, Stop> {
        loop {
            if let Some(token) = first_token(&self.line()?) {
                return Ok(token);
            }
        }
    }

    pub fn ask_word(&mut self, prompt: &str) -> Result<String, Stop> {
        self.ask(prompt)?;
        self.word()
    }

    /// Ask for an integer, re-asking until one is entered.
    pub fn ask_int(&mut self, prompt: &str, what: &str) -> Result<i32, Stop> {
        self.ask(prompt)?;
        loop {
            let line = self.line()?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(value) = parse_int(&line) {
                return Ok(value);
            }
            self.ask(&format!("Invalid input. Please enter a valid {}: ", what))?;
        }
    }
}
