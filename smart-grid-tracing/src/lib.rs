//! Tracing and status-line helpers for the smart grid contract generator.

use ansiterm::{Colour, Style};
use std::{env, io};
use tracing::{Level, Metadata};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::MakeWriter,
};

const ACTION_COLUMN_WIDTH: usize = 12;

/// Prints an action message with a green-bold prefix like "   Generated {txt}".
pub fn println_action_green(action: &str, txt: &str) {
    println_action(action, txt, Colour::Green);
}

/// Prints an action message with a yellow-bold prefix like "     Checked {txt}".
pub fn println_action_yellow(action: &str, txt: &str) {
    println_action(action, txt, Colour::Yellow);
}

fn println_action(action: &str, txt: &str, color: Colour) {
    tracing::info!("{}", format_action(action, txt, Style::new().bold().fg(color)));
}

fn format_action(action: &str, txt: &str, style: Style) -> String {
    format!(
        "{} {}",
        style.paint(format!("{action:>ACTION_COLUMN_WIDTH$}")),
        txt
    )
}

/// Prints a warning message to stderr with a yellow prefix like "warning: {txt}".
pub fn println_warning(txt: &str) {
    tracing::warn!("{}: {}", Colour::Yellow.paint("warning"), txt);
}

/// Prints an error message to stderr with a red prefix like "error: {txt}".
///
/// Written straight to stderr when the active filter drops ERROR events, so a
/// `RUST_LOG` setting can never hide a failure.
pub fn println_error(txt: &str) {
    let line = format!("{}: {}", Colour::Red.paint("error"), txt);
    if tracing::enabled!(Level::ERROR) {
        tracing::error!("{}", line);
    } else {
        eprintln!("{line}");
    }
}

const LOG_FILTER: &str = "RUST_LOG";

// ERROR and WARN go to stderr, everything else to stdout.
struct StdioTracingWriter;

impl StdioTracingWriter {
    fn writes_to_stderr(level: &Level) -> bool {
        level <= &Level::WARN
    }
}

impl<'a> MakeWriter<'a> for StdioTracingWriter {
    type Writer = Box<dyn io::Write>;

    fn make_writer(&'a self) -> Self::Writer {
        // No metadata to go on.
        Box::new(io::stdout())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if Self::writes_to_stderr(meta.level()) {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        }
    }
}

#[derive(Debug, Default)]
pub struct TracingSubscriberOptions {
    pub verbosity: Option<u8>,
    pub silent: Option<bool>,
}

impl TracingSubscriberOptions {
    /// The level that overrides `RUST_LOG`, if any.
    ///
    /// Verbosity wins over `silent`. Silent mode still lets errors through.
    fn level_filter(&self) -> Option<LevelFilter> {
        self.verbosity
            .and_then(|verbosity| match verbosity {
                0 => None,
                1 => Some(LevelFilter::DEBUG), // -v
                _ => Some(LevelFilter::TRACE), // -vv and up
            })
            .or_else(|| match self.silent {
                Some(true) => Some(LevelFilter::ERROR),
                _ => None,
            })
    }
}

/// A subscriber built from the default `tracing_subscriber::fmt::SubscriberBuilder` such that
/// its output reads like plain `println!` lines.
///
/// `RUST_LOG` can be used to set a different minimum level for the subscriber, default is `INFO`.
/// An invalid `RUST_LOG` value falls back to `INFO`.
pub fn init_tracing_subscriber(options: TracingSubscriberOptions) {
    let env_filter = match env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::new("info"),
    };
    let level_filter = options.level_filter();

    let builder = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_level(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_target(false)
        .with_writer(StdioTracingWriter);

    // Log level, verbosity or silent mode override RUST_LOG.
    if let Some(level_filter) = level_filter {
        builder.with_max_level(level_filter).init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn level_filter_defaults_to_env() {
        assert_eq!(TracingSubscriberOptions::default().level_filter(), None);
    }

    #[test]
    fn verbosity_maps_to_debug_and_trace() {
        let opts = |verbosity| TracingSubscriberOptions {
            verbosity: Some(verbosity),
            ..Default::default()
        };
        assert_eq!(opts(0).level_filter(), None);
        assert_eq!(opts(1).level_filter(), Some(LevelFilter::DEBUG));
        assert_eq!(opts(2).level_filter(), Some(LevelFilter::TRACE));
        assert_eq!(opts(5).level_filter(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn verbosity_beats_silent() {
        let options = TracingSubscriberOptions {
            verbosity: Some(1),
            silent: Some(true),
        };
        assert_eq!(options.level_filter(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn only_errors_and_warnings_go_to_stderr() {
        assert!(StdioTracingWriter::writes_to_stderr(&Level::ERROR));
        assert!(StdioTracingWriter::writes_to_stderr(&Level::WARN));
        assert!(!StdioTracingWriter::writes_to_stderr(&Level::INFO));
        assert!(!StdioTracingWriter::writes_to_stderr(&Level::DEBUG));
    }

    #[test]
    fn silent_keeps_only_errors() {
        let options = TracingSubscriberOptions {
            silent: Some(true),
            ..Default::default()
        };
        assert_eq!(options.level_filter(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn action_is_right_aligned() {
        let line = format_action("Generated", "out.sol", Style::new());
        assert_eq!(line, "   Generated out.sol");
    }

    #[test]
    #[traced_test]
    fn action_helpers_emit_info_events() {
        println_action_green("Generated", "SmartGridMappingGenerated.sol");
        assert!(logs_contain("Generated"));
        assert!(logs_contain("SmartGridMappingGenerated.sol"));
    }

    #[test]
    #[traced_test]
    fn error_helper_emits_error_event() {
        println_error("users.json not found");
        assert!(logs_contain("users.json not found"));
    }
}
