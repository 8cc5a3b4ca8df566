//! Console seam: line input and text output

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::error::{DebateError, Result};

/// Interactive text channel to the human participant
pub trait Console {
    /// Show `label` and read one line (without the trailing newline)
    fn prompt(&mut self, label: &str) -> Result<String>;

    /// Print a block of text
    fn say(&mut self, text: &str);

    /// Print a stage or section heading
    fn banner(&mut self, text: &str) {
        self.say(&format!("\n=== {} ===", text));
    }
}

/// Terminal console on stdin/stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Colors are switched off globally through `colored` when `no_color` is set
    pub fn new(no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, label: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", label.bold())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(DebateError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) {
        println!("{}", text);
    }

    fn banner(&mut self, text: &str) {
        println!("{}", format!("\n=== {} ===", text).cyan().bold());
    }
}

/// Pre-scripted console: answers prompts from a queue and records all output
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Labels shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Everything printed via `say`/`banner`
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, label: &str) -> Result<String> {
        self.prompts.push(label.to_string());
        self.inputs.pop_front().ok_or(DebateError::ScriptExhausted)
    }

    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
