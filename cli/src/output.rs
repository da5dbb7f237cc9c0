//! Console presentation helpers.
//!
//! Colors are applied only when the target stream is a terminal.

use std::fmt::Display;

use crossterm::style::{Color, Stylize};

/// Color `text` for stdout.
pub fn paint(text: impl Display, color: Color) -> String {
    paint_for(atty::Stream::Stdout, text, color)
}

fn paint_for(stream: atty::Stream, text: impl Display, color: Color) -> String {
    if atty::is(stream) {
        text.to_string().with(color).to_string()
    } else {
        text.to_string()
    }
}

pub fn success(message: &str) {
    println!("{}{}", paint("✓ ", Color::Green), message);
}

pub fn info(message: &str) {
    println!("{}{}", paint("ℹ ", Color::Blue), message);
}

pub fn step(message: &str) {
    println!("{} {}", paint("→", Color::Blue), message);
}

pub fn error(message: &str) {
    eprintln!("{}{}", paint_for(atty::Stream::Stderr, "✗ ", Color::Red), message);
}

/// One indented `PID <pid>: <command>` line.
pub fn process_line(pid: u32, command: &str, user: Option<&str>) -> String {
    let mut line = format!("  PID {}: {}", paint(pid, Color::Yellow), command);
    if let Some(user) = user {
        line.push_str(&format!(" ({})", user));
    }
    line
}
