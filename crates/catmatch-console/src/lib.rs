//! Colorful console output for resolution events.
//!
//! Provides a custom `tracing` layer that formats catmatch events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Completed resolutions, batch start/end
//! - **WARN**: Rejected enum values, fallback-category substitution
//! - **DEBUG**: Per-step decisions (chosen category, dropped attributes, pricing)
//! - **TRACE**: Individual candidate scores

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "catmatch=info";

/// Initializes console output for catmatch events.
///
/// Safe to call multiple times - only the first call has effect. Does nothing
/// if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(CatmatchConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats catmatch events with colors.
pub struct CatmatchConsoleLayer;

impl<S: Subscriber> Layer<S> for CatmatchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("catmatch") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    category_id: Option<i64>,
    path: Option<String>,
    suggested: Option<String>,
    strategy: Option<String>,
    score: Option<f64>,
    name: Option<String>,
    key: Option<String>,
    value: Option<String>,
    reason: Option<String>,
    model: Option<String>,
    bidding_score: Option<i64>,
    asking_price: Option<i64>,
    depth: Option<u64>,
    mapped_count: Option<u64>,
    dropped_count: Option<u64>,
    missing_count: Option<u64>,
    request_count: Option<u64>,
    publishable_count: Option<u64>,
    duration_ms: Option<u64>,
    publishable: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "path" => self.path = Some(value),
            "suggested" => self.suggested = Some(value),
            "strategy" => self.strategy = Some(value),
            "name" => self.name = Some(value),
            "key" => self.key = Some(value),
            "value" => self.value = Some(value),
            "reason" => self.reason = Some(value),
            "model" => self.model = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "depth" => self.depth = Some(value),
            "mapped_count" => self.mapped_count = Some(value),
            "dropped_count" => self.dropped_count = Some(value),
            "missing_count" => self.missing_count = Some(value),
            "request_count" => self.request_count = Some(value),
            "publishable_count" => self.publishable_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => self.record_i64(field, value as i64),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "category_id" => self.category_id = Some(value),
            "bidding_score" => self.bidding_score = Some(value),
            "asking_price" => self.asking_price = Some(value),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "score" {
            self.score = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "publishable" {
            self.publishable = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "category_resolved" => format_category_resolved(v),
        "category_unmatched" => format_category_unmatched(v),
        "category_fallback" => format_category_fallback(v),
        "resolution_complete" => format_resolution_complete(v),
        "enum_value_rejected" => format_enum_rejected(v),
        "attribute_dropped" => format_attribute_dropped(v),
        "pricing_model_selected" => format_pricing(v),
        "batch_start" => format_batch_start(v),
        "batch_end" => format_batch_end(v),
        "candidate_scored" if level == Level::TRACE => format_candidate(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_category_resolved(v: &EventVisitor) -> String {
    let id = v.category_id.unwrap_or(0);
    let path = v.path.as_deref().unwrap_or("?");
    let strategy = v.strategy.as_deref().unwrap_or("?");

    format!(
        "{} {} Category {} │ {} │ {} │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        id.to_formatted_string(&Locale::en).bright_yellow(),
        path.white().bold(),
        strategy.bright_blue(),
        format_score(v.score.unwrap_or(0.0))
    )
}

fn format_category_unmatched(v: &EventVisitor) -> String {
    format!(
        "{} {} No category for {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.suggested.as_deref().unwrap_or("(none)").white()
    )
}

fn format_category_fallback(v: &EventVisitor) -> String {
    format!(
        "{} {} Falling back to category {}",
        format_elapsed(),
        "⚠".yellow().bold(),
        v.category_id
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow()
    )
}

fn format_resolution_complete(v: &EventVisitor) -> String {
    let mapped = v.mapped_count.unwrap_or(0);
    let dropped = v.dropped_count.unwrap_or(0);
    let missing = v.missing_count.unwrap_or(0);

    let status = if v.publishable.unwrap_or(false) {
        "PUBLISHABLE".bright_green().bold().to_string()
    } else {
        "BLOCKED".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Resolved │ {} mapped │ {} dropped",
        format_elapsed(),
        "■".bright_cyan().bold(),
        mapped.to_formatted_string(&Locale::en).bright_green(),
        dropped.to_formatted_string(&Locale::en).yellow(),
    );

    if missing > 0 {
        output.push_str(&format!(
            " │ {} required missing",
            missing.to_formatted_string(&Locale::en).bright_red()
        ));
    }

    output.push_str(&format!(" │ {}", status));
    output
}

fn format_enum_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} Rejected value {} for {}",
        format_elapsed(),
        "⚠".yellow().bold(),
        v.value.as_deref().unwrap_or("?").bright_red(),
        v.key.as_deref().unwrap_or("?").white().bold()
    )
}

fn format_attribute_dropped(v: &EventVisitor) -> String {
    format!(
        "{} {} Dropped {} ({})",
        format_elapsed(),
        "·".bright_black(),
        v.name.as_deref().unwrap_or("?").white(),
        v.reason.as_deref().unwrap_or("?").bright_black()
    )
}

fn format_pricing(v: &EventVisitor) -> String {
    let score = v.bidding_score.unwrap_or(0);
    let score = if score > 0 {
        score.to_string().bright_green().to_string()
    } else if score < 0 {
        score.to_string().bright_red().to_string()
    } else {
        score.to_string().white().to_string()
    };

    format!(
        "{} {} Pricing {} │ €{} │ keyword score {}",
        format_elapsed(),
        "€".bright_cyan(),
        v.model.as_deref().unwrap_or("?").bright_magenta().bold(),
        v.asking_price
            .unwrap_or(0)
            .to_formatted_string(&Locale::nl)
            .bright_yellow(),
        score
    )
}

fn format_batch_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Resolving batch │ {} requests",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.request_count
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow()
    )
}

fn format_batch_end(v: &EventVisitor) -> String {
    let total = v.request_count.unwrap_or(0);
    let publishable = v.publishable_count.unwrap_or(0);

    format!(
        "{} {} Batch complete │ {} │ {}/{} publishable",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        publishable.to_formatted_string(&Locale::en).bright_green(),
        total.to_formatted_string(&Locale::en).white()
    )
}

fn format_candidate(v: &EventVisitor) -> String {
    format!(
        "{} {} Candidate {:>8} │ {}",
        format_elapsed(),
        "·".bright_black(),
        v.category_id
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black(),
        format_score(v.score.unwrap_or(0.0))
    )
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

// Similarity ratios: green for a certain match, yellow near the cutoff.
fn format_score(score: f64) -> String {
    let text = format!("{:.3}", score);
    if score >= 0.999 {
        text.bright_green().to_string()
    } else if score >= 0.8 {
        text.green().to_string()
    } else {
        text.yellow().to_string()
    }
}
