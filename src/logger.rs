//! Console (and optional file) backend for the `log` facade.

use crate::config::GeminiConfig;
use chrono::{DateTime, Utc};
use colored::*;
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use uuid::Uuid;

static ATELIER_LOGGER: Lazy<AtelierLogger> = Lazy::new(AtelierLogger::new);

pub fn init_with_config(config: LoggerConfig) -> Result<(), String> {
    let max_level = config.min_level;
    ATELIER_LOGGER.update_config(config)?;

    log::set_logger(&*ATELIER_LOGGER).map_err(|e| format!("Failed to set logger: {:?}", e))?;
    log::set_max_level(max_level);
    Ok(())
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Trace => Color::Cyan,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

fn level_badge(level: Level) -> &'static str {
    match level {
        Level::Trace => "🔍",
        Level::Debug => "🐛",
        Level::Info => "💅",
        Level::Warn => "⚠️",
        Level::Error => "❌",
    }
}

/// One rendered record; also the JSON line shape.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub level: &'static str,
    pub target: String,
    pub message: String,
    pub location: Option<String>,
}

impl LogEntry {
    fn from_record(record: &Record) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            level: record.level().as_str(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            location: record
                .file()
                .zip(record.line())
                .map(|(file, line)| format!("{}:{}", file, line)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LevelFilter,
    pub show_colors: bool,
    pub show_location: bool,
    pub output_json: bool,
    pub log_file_path: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LevelFilter::Info,
            show_colors: true,
            show_location: false,
            output_json: false,
            log_file_path: None,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `ATELIER_LOG` (level name), `ATELIER_LOG_FORMAT=json` and `ATELIER_LOG_FILE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(level) = std::env::var("ATELIER_LOG")
            .ok()
            .and_then(|name| name.parse::<LevelFilter>().ok())
        {
            config = config.with_level(level);
        }
        if std::env::var("ATELIER_LOG_FORMAT").map_or(false, |format| format.eq_ignore_ascii_case("json")) {
            config = config.with_json_output(true);
        }
        if let Ok(path) = std::env::var("ATELIER_LOG_FILE") {
            config = config.with_file_output(&path);
        }
        config
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.min_level = level;
        self.show_location = level >= LevelFilter::Debug;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.show_colors = enabled;
        self
    }

    pub fn with_file_output(mut self, path: &str) -> Self {
        self.log_file_path = Some(path.to_string());
        self
    }

    pub fn with_json_output(mut self, enabled: bool) -> Self {
        self.output_json = enabled;
        self.show_colors = self.show_colors && !enabled;
        self
    }
}

pub struct AtelierLogger {
    config: Mutex<LoggerConfig>,
    log_file: Mutex<Option<File>>,
}

impl AtelierLogger {
    pub fn new() -> Self {
        Self {
            config: Mutex::new(LoggerConfig::default()),
            log_file: Mutex::new(None),
        }
    }

    pub fn update_config(&self, new_config: LoggerConfig) -> Result<(), String> {
        let file = match &new_config.log_file_path {
            Some(path) => Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| format!("Failed to open log file {}: {}", path, e))?,
            ),
            None => None,
        };

        if let Ok(mut log_file) = self.log_file.lock() {
            *log_file = file;
        }
        if let Ok(mut config) = self.config.lock() {
            *config = new_config;
        }
        Ok(())
    }

    fn render(&self, entry: &LogEntry, config: &LoggerConfig, colors: bool) -> String {
        if config.output_json {
            return serde_json::to_string(entry).unwrap_or_default();
        }

        let level = entry.level.parse::<Level>().unwrap_or(Level::Info);
        let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        let badge = format!("{} {}", level_badge(level), entry.level);
        let location = match (&entry.location, config.show_location) {
            (Some(location), true) => format!(" ({})", location),
            _ => String::new(),
        };

        if colors {
            format!(
                "{} [{}] {}: {}{}",
                timestamp.bright_black(),
                badge.color(level_color(level)).bold(),
                entry.target.bright_blue(),
                entry.message,
                location.bright_black()
            )
        } else {
            format!(
                "{} [{}] {}: {}{}",
                timestamp, badge, entry.target, entry.message, location
            )
        }
    }
}

impl Default for AtelierLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Log for AtelierLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.config.lock() {
            Ok(config) => metadata.level() <= config.min_level,
            Err(_) => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry::from_record(record);
        let config = match self.config.lock() {
            Ok(config) => config.clone(),
            Err(_) => return,
        };

        println!("{}", self.render(&entry, &config, config.show_colors));

        if let Ok(mut log_file) = self.log_file.lock() {
            if let Some(file) = log_file.as_mut() {
                // No ANSI escapes in files.
                let _ = writeln!(file, "{}", self.render(&entry, &config, false));
            }
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        if let Ok(mut log_file) = self.log_file.lock() {
            if let Some(file) = log_file.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

/// Logs how long the enclosing scope took when dropped.
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn new(name: &str) -> Self {
        log::debug!("⏱️  Starting timer: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::info!(
            "⏱️  '{}' completed in {}ms",
            self.name,
            self.elapsed().as_millis()
        );
    }
}

pub fn timer(name: &str) -> Timer {
    Timer::new(name)
}

pub fn log_startup_info(app_name: &str, version: &str) {
    log::info!("🚀 Starting {} v{}", app_name, version);
}

pub fn log_config_info(config: &GeminiConfig) {
    log::info!("⚙️  Gemini configuration:");
    log::info!("   API key: {}", config.masked_api_key());
    log::info!("   Endpoint: {}", config.base_url);
    log::info!("   Image model: {}", config.image_model);
    log::info!("   Text model: {}", config.text_model);
    log::info!("   Timeout: {}s", config.timeout_secs);
}
