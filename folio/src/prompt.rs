use std::io::{BufRead, Write};

use anyhow::Context;
use dialoguer::{console::Term, theme::ColorfulTheme, Confirm, Input};
use folio_models::contact::{ContactForm, SubmissionStatus};

/// Where the contact form is filled in and where its status is shown.
pub trait Prompt {
    /// Asks for a single field. An empty answer keeps `current`.
    fn field(&mut self, label: &str, current: &str) -> anyhow::Result<String>;

    /// Asks a yes/no question, defaulting to no.
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool>;

    /// Shows the banner for `status`, if it has one.
    fn render(&mut self, status: &SubmissionStatus) -> anyhow::Result<()>;

    /// Asks for every field again, keeping the current values as defaults.
    fn edit(&mut self, form: &mut ContactForm) -> anyhow::Result<()> {
        form.name = self.field("Name", &form.name)?;
        form.email = self.field("Email", &form.email)?;
        form.message = self.field("Message", &form.message)?;
        Ok(())
    }
}

/// Prompt for an interactive terminal. Questions and banners go to stderr.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn field(&mut self, label: &str, current: &str) -> anyhow::Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true);
        if !current.is_empty() {
            input = input.default(current.into());
        }
        input
            .interact_on(&self.term)
            .with_context(|| format!("Failed to read {label}"))
    }

    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(false)
            .interact_on(&self.term)
            .context("Failed to read confirmation")
    }

    fn render(&mut self, status: &SubmissionStatus) -> anyhow::Result<()> {
        if let Some(banner) = banner(status) {
            self.term.write_line(&banner)?;
        }
        Ok(())
    }
}

/// Line based prompt for piped, non-terminal input.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn field(&mut self, label: &str, current: &str) -> anyhow::Result<String> {
        if current.is_empty() {
            write!(self.output, "{label}: ")?;
        } else {
            write!(self.output, "{label} [{current}]: ")?;
        }
        self.output.flush()?;

        let line = self.read_line()?;
        Ok(match line.trim_end_matches(['\r', '\n']) {
            "" => current.into(),
            answer => answer.into(),
        })
    }

    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        write!(self.output, "{question} [y/N]: ")?;
        self.output.flush()?;

        let answer = self.read_line()?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn render(&mut self, status: &SubmissionStatus) -> anyhow::Result<()> {
        if let Some(banner) = banner(status) {
            writeln!(self.output, "{banner}")?;
        }
        Ok(())
    }
}

pub fn banner(status: &SubmissionStatus) -> Option<String> {
    match status {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Submitting => Some("Sending message...".into()),
        SubmissionStatus::Succeeded(message) => Some(format!("[ok] {message}")),
        SubmissionStatus::Failed(message) => Some(format!("[error] {message}")),
    }
}
