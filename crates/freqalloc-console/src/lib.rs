//! Colorful console output for encoder events.
//!
//! Provides a custom `tracing` layer that formats encoder events with colors.
//! Output goes to stderr so encoded data or reports on stdout stay clean.
//!
//! ## Log Levels
//!
//! - **INFO**: Encoding start/end, written files
//! - **DEBUG**: Domain statistics, naming fallbacks
//! - **TRACE**: One line per cost function

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Initializes console output at INFO level.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initializes console output with `level` as the default verbosity.
///
/// `RUST_LOG` directives take precedence over `level`. Safe to call multiple
/// times - only the first call has effect.
pub fn init_with_level(level: Level) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::builder()
            .with_default_directive(default_directive(level))
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(EncoderConsoleLayer)
            .try_init();
    });
}

// Scopes the default level to the encoder crates so dependencies stay quiet.
fn default_directive(level: Level) -> Directive {
    format!("freqalloc={}", LevelFilter::from_level(level))
        .parse()
        .unwrap_or_else(|_| LevelFilter::from_level(level).into())
}

/// Maps a `-q`/`-v` count to a level: quiet shows warnings only, each `-v`
/// adds one level of detail above INFO.
pub fn level_for_verbosity(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::WARN;
    }
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// Returns elapsed time since initialization.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

/// A tracing layer that formats encoder events with colors.
pub struct EncoderConsoleLayer;

impl<S: Subscriber> Layer<S> for EncoderConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from encoder crates
        if !metadata.target().starts_with("freqalloc") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    kind: Option<String>,
    path: Option<String>,
    error: Option<String>,
    x: Option<u64>,
    y: Option<u64>,
    tuples: Option<u64>,
    station_count: Option<u64>,
    interference_count: Option<u64>,
    connection_count: Option<u64>,
    variable_count: Option<u64>,
    cost_function_count: Option<u64>,
    total_tuples: Option<u64>,
    max_tuples: Option<u64>,
    duration_ms: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "kind" => self.kind = Some(value),
            "path" => self.path = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "x" => self.x = Some(value),
            "y" => self.y = Some(value),
            "tuples" => self.tuples = Some(value),
            "station_count" => self.station_count = Some(value),
            "interference_count" => self.interference_count = Some(value),
            "connection_count" => self.connection_count = Some(value),
            "variable_count" => self.variable_count = Some(value),
            "cost_function_count" => self.cost_function_count = Some(value),
            "total_tuples" => self.total_tuples = Some(value),
            "max_tuples" => self.max_tuples = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref() {
        Some("encode_start") => format_encode_start(v),
        Some("spaced_stations") => format_spaced_stations(v),
        Some("cost_function") => format_cost_function(v),
        Some("encode_end") => format_encode_end(v),
        Some(_) => String::new(),
        None => format_message(v, level),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value
        .unwrap_or(0)
        .to_formatted_string(&Locale::en)
        .bright_yellow()
        .to_string()
}

fn format_encode_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Encoding │ {} stations │ {} interferences │ {} connections",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.station_count),
        count(v.interference_count),
        count(v.connection_count),
    )
}

fn format_spaced_stations(v: &EventVisitor) -> String {
    format!(
        "{} {} Domains │ {} stations │ {} pairs │ largest {}",
        format_elapsed(),
        "◆".bright_blue(),
        count(v.station_count),
        count(v.total_tuples),
        count(v.max_tuples),
    )
}

fn format_cost_function(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {}-{} │ {} tuples",
        format_elapsed(),
        "·".bright_black(),
        v.kind.as_deref().unwrap_or("cost function").white(),
        v.x.unwrap_or(0),
        v.y.unwrap_or(0),
        count(v.tuples),
    )
}

fn format_encode_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Encoding complete │ {} variables │ {} cost functions │ {} tuples │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.variable_count),
        count(v.cost_function_count),
        count(v.tuples),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };

    let icon = if level == Level::ERROR {
        "✗".bright_red().bold().to_string()
    } else if level == Level::WARN {
        "⚠".yellow().bold().to_string()
    } else if level == Level::INFO {
        "✓".bright_green().to_string()
    } else {
        "·".bright_black().to_string()
    };

    let mut output = format!("{} {} {}", format_elapsed(), icon, message);
    if let Some(path) = &v.path {
        output.push_str(&format!(" │ {}", path.bright_cyan()));
    }
    if let Some(error) = &v.error {
        output.push_str(&format!(" │ {}", error.bright_red()));
    }
    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0, false), Level::INFO);
        assert_eq!(level_for_verbosity(1, false), Level::DEBUG);
        assert_eq!(level_for_verbosity(5, false), Level::TRACE);
        assert_eq!(level_for_verbosity(2, true), Level::WARN);
    }

    #[test]
    fn test_default_directive_is_scoped_to_encoder_crates() {
        let directive = default_directive(Level::TRACE).to_string().to_lowercase();
        assert_eq!(directive, "freqalloc=trace");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(15), "15ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("solver_step".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_encode_end_mentions_counts() {
        let v = EventVisitor {
            event: Some("encode_end".to_string()),
            variable_count: Some(4),
            cost_function_count: Some(5),
            tuples: Some(12_345),
            duration_ms: Some(3),
            ..Default::default()
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("Encoding complete"));
        assert!(line.contains("12,345"));
        assert!(line.contains("3ms"));
    }

    #[test]
    fn test_message_includes_path() {
        let v = EventVisitor {
            message: Some("Encoding written".to_string()),
            path: Some("out.wcsp".to_string()),
            ..Default::default()
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("Encoding written"));
        assert!(line.contains("out.wcsp"));
    }
}
