// src/cli/banner.rs

// Decorated command echoes. Each one rewrites the just-entered input line
// so the banner takes its place.

use colored::Colorize;

/// Cursor up, clear the echoed input line, park at column zero.
fn overwrite_input_line() {
    print!("\x1b[1A\x1b[2K\r");
}

pub fn echo_kill(command: &str) {
    overwrite_input_line();
    println!("{} {}", "✖✖✖".red().bold(), command.red());
}

pub fn echo_cat(command: &str) {
    overwrite_input_line();
    println!("{} {}", "···".cyan().bold(), command);
}
