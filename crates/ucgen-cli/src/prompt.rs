//! Interactive prompts: missing names and the confirmation step.
//!
//! Prompts only appear when both stdin and stderr are terminals. Without the
//! `interactive` feature, missing names are an error and the confirmation
//! falls back to a plain `[Y/n]` line on stdin.

use std::io::IsTerminal as _;

use crate::error::{CliError, CliResult};

/// `true` when a human can answer a prompt.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Return `value`, or ask for it until the answer is a valid identifier.
///
/// `name` is the positional name shown in errors, `field` the identifier
/// field used for validation messages.
pub fn identifier_or_prompt(
    value: Option<String>,
    name: &'static str,
    field: &'static str,
) -> CliResult<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !is_interactive() {
        return Err(CliError::MissingArgument { name });
    }
    ask_identifier(name, field)
}

#[cfg(feature = "interactive")]
fn ask_identifier(_name: &'static str, field: &'static str) -> CliResult<String> {
    use dialoguer::{Input, theme::ColorfulTheme};
    use ucgen_core::domain::Identifier;

    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(capitalise(field))
        .validate_with(|input: &String| -> Result<(), String> {
            Identifier::parse(field, input.trim())
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map(|answer| answer.trim().to_string())
        .map_err(|e| CliError::Prompt {
            message: format!("could not read the {field}"),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn ask_identifier(name: &'static str, _field: &'static str) -> CliResult<String> {
    Err(CliError::MissingArgument { name })
}

/// Ask whether to apply the plan.  Enter means yes.
#[cfg(feature = "interactive")]
pub fn confirm(question: &str) -> CliResult<bool> {
    use dialoguer::{Confirm, theme::ColorfulTheme};

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(true)
        .interact()
        .map_err(|e| CliError::Prompt {
            message: "could not read the confirmation".into(),
            source: Some(Box::new(e)),
        })
}

/// Ask whether to apply the plan.  Enter means yes.
#[cfg(not(feature = "interactive"))]
pub fn confirm(question: &str) -> CliResult<bool> {
    use std::io::{self, Write};

    eprint!("{question} [Y/n] ");
    io::stderr().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stderr".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    Ok(is_yes(&input))
}

#[cfg(any(test, not(feature = "interactive")))]
fn is_yes(answer: &str) -> bool {
    let answer = answer.trim().to_ascii_lowercase();
    answer.is_empty() || answer == "y" || answer == "yes"
}

#[cfg(feature = "interactive")]
fn capitalise(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_value_is_returned_without_prompting() {
        let value = identifier_or_prompt(Some("products".into()), "DOMAIN", "domain").unwrap();
        assert_eq!(value, "products");
    }

    #[test]
    fn empty_answer_and_yes_confirm() {
        assert!(is_yes("\n"));
        assert!(is_yes("Y\n"));
        assert!(is_yes("yes"));
        assert!(!is_yes("n"));
        assert!(!is_yes("nope"));
    }

    #[cfg(feature = "interactive")]
    #[test]
    fn prompt_labels_are_capitalised() {
        assert_eq!(capitalise("use case"), "Use case");
        assert_eq!(capitalise(""), "");
    }
}
