//! Menu text and result messages.
//!
//! Each piece of output has a `format_*` function (returns `Vec<String>` or
//! `String`) that the controller writes to its output stream. Format
//! functions are pure, so the exact wording is testable without a terminal.
//!
//! ```text
//! === Photokit ===
//! 1. Resize for a social network
//! 2. Adjust contrast
//! 3. Apply a filter
//! 4. Create an artistic sketch
//! 5. Exit
//! ```

use crate::imaging::{Filter, FilterChoice, Platform};
use std::path::Path;

/// Main menu entries, in option order.
const MAIN_MENU: &[&str] = &[
    "Resize for a social network",
    "Adjust contrast",
    "Apply a filter",
    "Create an artistic sketch",
    "Exit",
];

pub const CHOICE_PROMPT: &str = "Choose an option (1-5): ";
pub const SOURCE_PROMPT: &str = "Enter the image URL or path: ";
pub const FILTER_PROMPT: &str = "Select the filter number (1-10): ";
pub const PERSON_PROMPT: &str =
    "Does the image contain a person? No detection is performed, your answer is trusted (y/n): ";
pub const GOODBYE: &str = "Thanks for using Photokit!";

/// Main menu, preceded by a blank line.
pub fn format_main_menu() -> Vec<String> {
    let mut lines = vec![String::new(), "=== Photokit ===".to_string()];
    lines.extend(
        MAIN_MENU
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{}. {}", i + 1, label)),
    );
    lines
}

/// Numbered filter list; code 1 is the untouched original.
pub fn format_filter_menu() -> Vec<String> {
    let mut lines = vec![String::new(), "Available filters:".to_string()];
    lines.push(format!("1. {}", FilterChoice::Original.label()));
    lines.extend(
        Filter::ALL
            .iter()
            .enumerate()
            .map(|(i, filter)| format!("{}. {}", i + 2, filter.label())),
    );
    lines
}

/// Platform prompt listing the supported names.
pub fn format_platform_prompt() -> String {
    let names: Vec<String> = Platform::ALL
        .iter()
        .map(|p| {
            let name = p.name();
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    format!("Enter the social network ({}): ", names.join("/"))
}

/// Confirmation after a file was written.
pub fn format_saved(path: &Path) -> String {
    format!("Saved {}", path.display())
}

/// Error line shown before returning to the menu.
pub fn format_error(message: &str) -> String {
    format!("Error: {message}")
}
