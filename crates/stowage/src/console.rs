//! Console output for planning runs.
//!
//! Provides a `tracing` layer that prints planner events as one colored
//! line each. Enabled with the `console` feature.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the planner console as the global subscriber.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// is honoured, with `stowage_solver=info` added on top.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "stowage_solver=info".parse() {
            filter = filter.add_directive(directive);
        }

        // another subscriber may already be installed by the host
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats planner events.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("stowage_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    rows: Option<u64>,
    cols: Option<u64>,
    containers: Option<u64>,
    unloads: Option<u64>,
    loads: Option<u64>,
    duration_ms: Option<u64>,
    expanded: Option<u64>,
    generated: Option<u64>,
    speed: Option<u64>,
    moves: Option<u64>,
    cost: Option<u64>,
    reason: Option<String>,
    error: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "reason" => self.reason = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "rows" => self.rows = Some(value),
            "cols" => self.cols = Some(value),
            "containers" => self.containers = Some(value),
            "unloads" => self.unloads = Some(value),
            "loads" => self.loads = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "expanded" => self.expanded = Some(value),
            "generated" => self.generated = Some(value),
            "speed" => self.speed = Some(value),
            "moves" => self.moves = Some(value),
            "cost" => self.cost = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "plan_start" => format_plan_start(v),
        "plan_end" => format_plan_end(v),
        "plan_failed" => format_plan_failed(v),
        "invalid_input" => format_invalid_input(v),
        _ => String::new(),
    }
}

fn format_plan_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} deck ({}x{}), containers ({}), unloads ({}), loads ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Planner]".bright_cyan(),
        v.rows.unwrap_or(0).yellow(),
        v.cols.unwrap_or(0).yellow(),
        count(v.containers).bright_yellow(),
        count(v.unloads).bright_yellow(),
        count(v.loads).bright_yellow(),
    )
}

fn format_plan_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Plan found: moves ({}), cost ({}), time spent ({}), expanded ({}), generated ({}), speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Planner]".bright_cyan(),
        count(v.moves).white().bold(),
        count(v.cost).bright_green(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.expanded).white(),
        count(v.generated).white(),
        count(v.speed).bright_magenta().bold(),
    )
}

fn format_plan_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} {} No plan: {} after {} expansions ({})",
        timestamp().bright_black(),
        "WARN".bright_red(),
        "[Planner]".bright_cyan(),
        v.reason.as_deref().unwrap_or("unknown").bright_red(),
        count(v.expanded).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_invalid_input(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Rejected: {}",
        timestamp().bright_black(),
        "WARN".bright_red(),
        "[Planner]".bright_cyan(),
        v.error.as_deref().unwrap_or("invalid input").bright_red(),
    )
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
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
