// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Default log file used by the `file` constructors when no file name is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "ratio_log_file_debug.log";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level. The allocators log fix-up
/// passes at [`LevelFilter::TRACE`], and column collapsing at [`LevelFilter::DEBUG`].
///
/// Use [`TracingConfig::install_global`] or [`TracingConfig::install_thread_local`] to
/// initialize the tracing system with this configuration.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `tracing_log_file_path_and_prefix`: [String] is the file path and prefix to use for
///   the log file. Eg: `/tmp/layout_debug.log` or `layout_debug.log`.
/// - `DisplayPreference`: [`DisplayPreference`] is the preferred display to use for
///   logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* tracing_log_file_path_and_prefix */),
    DisplayAndFile(
        DisplayPreference,
        String, /* tracing_log_file_path_and_prefix */
    ),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// Stderr, so that logs don't end up mixed into a TUI drawn on stdout.
impl Default for TracingConfig {
    fn default() -> Self { Self::new_display(DisplayPreference::Stderr) }
}

impl TracingConfig {
    /// Log to both the given [`DisplayPreference`] and a file, at
    /// [`LevelFilter::DEBUG`].
    #[must_use]
    pub fn new_file_and_display(
        maybe_filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                maybe_filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::INFO,
        }
    }

    #[must_use]
    pub fn new_file(maybe_filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                maybe_filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level_filter(self, level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..self
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_tracing_config_default() {
        let config = TracingConfig::default();
        assert_eq2!(
            config.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
        assert_eq2!(config.get_level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn test_tracing_config_file_constructors() {
        assert_eq2!(
            TracingConfig::new_file(None).get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let config = TracingConfig::new_file_and_display(
            Some("layout.log".to_string()),
            DisplayPreference::Stdout,
        )
        .with_level_filter(LevelFilter::TRACE);
        assert_eq2!(
            config.get_writer_config(),
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "layout.log".to_string())
        );
        assert_eq2!(config.get_level_filter(), LevelFilter::TRACE);
    }
}
