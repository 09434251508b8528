//! Interactive menu loop.
//!
//! The controller has a single waiting state. Every iteration prints the menu,
//! reads a choice, and (unless the choice is Exit) reads an image location,
//! opens it, asks for the operation's parameter, runs exactly one operation,
//! and shows the result.
//!
//! The controller is the only recovery boundary: any failure inside an
//! iteration is logged, printed as `Error: ...`, and the menu comes back.
//! The loop ends on Exit, when input runs out, or when the terminal itself
//! can no longer be written to.
//!
//! All I/O is injected (`BufRead`/`Write`, [`Fetcher`], [`Viewer`]), so whole
//! sessions can be scripted in tests.

use crate::imaging::{
    ImagingError, Normalization, Rendered, adjust_contrast, apply_filter, resize_for_platform,
    sketch,
};
use crate::output::{self, CHOICE_PROMPT, FILTER_PROMPT, GOODBYE, PERSON_PROMPT, SOURCE_PROMPT};
use crate::source::{self, Fetcher, SourceError};
use crate::viewer::{Viewer, ViewerError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Invalid option '{0}'. Please choose an option between 1 and 5")]
    InvalidChoice(String),
    #[error("'{0}' is not a whole number")]
    InvalidNumber(String),
    #[error("Input closed")]
    InputClosed,
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Imaging(#[from] ImagingError),
    #[error("Could not display the result: {0}")]
    Viewer(#[from] ViewerError),
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// An image operation offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Resize,
    Contrast,
    Filter,
    Sketch,
}

/// Main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        match input.trim() {
            "1" => Ok(MenuChoice::Run(Operation::Resize)),
            "2" => Ok(MenuChoice::Run(Operation::Contrast)),
            "3" => Ok(MenuChoice::Run(Operation::Filter)),
            "4" => Ok(MenuChoice::Run(Operation::Sketch)),
            "5" => Ok(MenuChoice::Exit),
            other => Err(ActionError::InvalidChoice(other.to_string())),
        }
    }
}

/// Interpret a yes/no answer. English and Spanish affirmatives are accepted.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print `message`, then read one line. `None` means input is exhausted.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn require(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> Result<String, ActionError> {
    prompt(input, out, message)?.ok_or(ActionError::InputClosed)
}

pub struct Controller<F, V> {
    fetcher: F,
    viewer: V,
    output_dir: PathBuf,
    normalization: Normalization,
}

impl<F: Fetcher, V: Viewer> Controller<F, V> {
    /// Results are written to `output_dir`.
    pub fn new(fetcher: F, viewer: V, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            viewer,
            output_dir: output_dir.into(),
            normalization: Normalization::default(),
        }
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Run the menu until Exit or end of input.
    pub fn run(&self, mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        loop {
            write_lines(&mut out, &output::format_main_menu())?;
            let Some(raw) = prompt(&mut input, &mut out, CHOICE_PROMPT)? else {
                tracing::info!("Input closed, leaving menu");
                return Ok(());
            };

            let operation = match MenuChoice::parse(&raw) {
                Ok(MenuChoice::Exit) => {
                    writeln!(out, "{GOODBYE}")?;
                    return Ok(());
                }
                Ok(MenuChoice::Run(operation)) => operation,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            };

            match self.dispatch(operation, &mut input, &mut out) {
                Ok(()) => {}
                Err(ActionError::InputClosed) => {
                    tracing::info!("Input closed, leaving menu");
                    return Ok(());
                }
                Err(ActionError::Io(e)) => return Err(e),
                Err(e) => {
                    tracing::warn!(?operation, error = %e, "Operation failed");
                    writeln!(out, "{}", output::format_error(&e.to_string()))?;
                }
            }
        }
    }

    fn dispatch(
        &self,
        operation: Operation,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<(), ActionError> {
        let location = require(input, out, SOURCE_PROMPT)?;
        let source = source::open(&self.fetcher, &location)?;

        match operation {
            Operation::Resize => {
                let platform = require(input, out, &output::format_platform_prompt())?;
                let rendered = resize_for_platform(&source, &platform, &self.output_dir)?;
                self.present(out, &rendered)
            }
            Operation::Contrast => {
                let rendered = adjust_contrast(&source, self.normalization, &self.output_dir)?;
                self.present(out, &rendered)
            }
            Operation::Filter => {
                write_lines(out, &output::format_filter_menu())?;
                let raw = require(input, out, FILTER_PROMPT)?;
                let code: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ActionError::InvalidNumber(raw.trim().to_string()))?;
                let filtered = apply_filter(&source.image, code)?;
                self.viewer
                    .show(&filtered, &format!("filter-{code}_{}", source.name))?;
                Ok(())
            }
            Operation::Sketch => {
                let answer = require(input, out, PERSON_PROMPT)?;
                let rendered = sketch(&source, is_affirmative(&answer), &self.output_dir)?;
                self.present(out, &rendered)
            }
        }
    }

    fn present(&self, out: &mut impl Write, rendered: &Rendered) -> Result<(), ActionError> {
        writeln!(out, "{}", output::format_saved(&rendered.path))?;
        self.viewer.show(&rendered.image, &rendered.filename)?;
        Ok(())
    }
}
