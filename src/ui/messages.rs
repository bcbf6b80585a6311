//! Leveled, coloured terminal messages.
//! Everything the user reads goes through here; errors go to stderr.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> Style {
        match self {
            Level::Info => Colour::Blue.bold(),
            Level::Success => Colour::Green.bold(),
            Level::Warning => Colour::Yellow.bold(),
            Level::Error => Colour::Red.bold(),
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

pub fn notify<T: fmt::Display>(level: Level, msg: T) {
    let line = format!("{} {}", level.style().paint(level.icon()), msg);
    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    notify(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    notify(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    notify(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    notify(Level::Error, msg);
}

/// Section header above a listing.
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        Colour::Blue
            .bold()
            .paint(format!("====================== {msg}"))
    );
}
