//! # Output Formatting
//!
//! Colored, emoji-prefixed helpers for user-facing CLI messages. Diagnostics
//! meant for operators go through `tracing` instead.

use owo_colors::OwoColorize;

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

/// Format a ticket key for display
pub fn format_ticket_key(key: &str) -> String {
  key.bright_cyan().bold().to_string()
}

/// Format a field name for display
pub fn format_field_name(name: &str) -> String {
  name.purple().to_string()
}
