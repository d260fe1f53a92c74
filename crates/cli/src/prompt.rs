//! Stdin prompt helpers for the interactive questionnaire.
//!
//! Input validation lives here, at the collection boundary: the scoring
//! engine receives only well-typed answers.

use std::io::{self, Write};

use thiserror::Error;

use crate::render::{print_error, BOLD, DIM, RESET, WHITE};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("input stream closed")]
    Eof,
}

/// Read one trimmed line, falling back to the default on empty input.
pub fn get_input(prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
    match default {
        Some(default) => print!("{WHITE}{prompt}{RESET} [{DIM}{default}{RESET}]: "),
        None => print!("{WHITE}{prompt}{RESET}: "),
    }
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(PromptError::Eof);
    }

    let value = line.trim();
    if value.is_empty() {
        Ok(default.unwrap_or("").to_string())
    } else {
        Ok(value.to_string())
    }
}

/// Yes/no confirmation with a default answer.
pub fn get_yes_no(prompt: &str, default: bool) -> Result<bool, PromptError> {
    let hint = if default { "Y/n" } else { "y/N" };
    let fallback = if default { "y" } else { "n" };
    let response = get_input(&format!("{prompt} ({hint})"), Some(fallback))?.to_lowercase();
    Ok(matches!(response.as_str(), "y" | "yes" | "1" | "true"))
}

/// Numeric input, re-prompting until it parses.
pub fn get_number(prompt: &str, default: u32) -> Result<u32, PromptError> {
    loop {
        let raw = get_input(prompt, Some(&default.to_string()))?;
        match raw.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => print_error("Please enter a valid number"),
        }
    }
}

/// Comma-separated list input; entries are trimmed, empties dropped.
pub fn get_list(prompt: &str, default: &str) -> Result<Vec<String>, PromptError> {
    let raw = get_input(prompt, Some(default))?;
    Ok(split_list(&raw))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Display a numbered menu and read a selection (0 = exit).
pub fn display_menu(title: &str, options: &[&str]) -> Result<usize, PromptError> {
    println!("\n{BOLD}{title}{RESET}");
    println!("{DIM}{}{RESET}", "─".repeat(60));
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
    println!("  0. {DIM}Exit{RESET}");
    println!();

    loop {
        let raw = get_input("Select option", Some("1"))?;
        match raw.parse::<usize>() {
            Ok(choice) if choice <= options.len() => return Ok(choice),
            _ => print_error(&format!(
                "Please enter a number between 0 and {}",
                options.len()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list("Windows Event Logs, Syslog ,, EDR "),
            vec![
                "Windows Event Logs".to_string(),
                "Syslog".to_string(),
                "EDR".to_string(),
            ]
        );
    }

    #[test]
    fn test_split_list_empty_input() {
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }
}
