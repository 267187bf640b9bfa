use crate::constants::LOG_LEVEL_ENV;
use chrono::Local;
use colored::*;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

impl LogLevel {
    /// Level from `LOG_LEVEL`, falling back to `Info`.
    pub fn from_env() -> Self {
        std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(LogLevel::Info)
    }
}

#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
    pub min_level: LogLevel,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        Self {
            name: name.into().to_uppercase(),
            info_color,
            min_level: LogLevel::from_env(),
        }
    }

    pub fn with_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn prefix(&self, level: &str) -> String {
        format!("[{}][{}][{}]", Self::timestamp(), level, self.name)
    }

    pub fn debug(&self, msg: impl AsRef<str>) {
        if !self.enabled(LogLevel::Debug) {
            return;
        }
        println!(
            "{} {} {}",
            self.prefix("DEBUG").dimmed(),
            "→".dimmed(),
            msg.as_ref().dimmed()
        );
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if !self.enabled(LogLevel::Info) {
            return;
        }
        println!(
            "{} {} {}",
            self.prefix("INFO").bold().color(self.info_color),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if !self.enabled(LogLevel::Warn) {
            return;
        }
        println!(
            "{} {} {}",
            self.prefix("WARN").bold().yellow(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!(
            "{} {} {}",
            self.prefix("ERROR").bold().bright_red(),
            "→".dimmed(),
            msg.as_ref()
        );
    }
}
