//! Display formatting for metrics.
//!
//! Pure helpers used by the CLI and available to editor front ends:
//! percentages, durations, thousands separators, and bounce-rate health
//! bucketing against configurable thresholds.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream, Style};

/// Render `text` with `style` when stdout takes colors.
///
/// Honors `--color` (via `owo_colors::set_override`) and TTY detection.
pub fn styled<T: Display>(text: T, style: Style) -> String {
    styled_for(Stream::Stdout, text, style)
}

/// [`styled`] for an explicit stream.
pub fn styled_for<T: Display>(stream: Stream, text: T, style: Style) -> String {
    text.if_supports_color(stream, |t| t.style(style))
        .to_string()
}

/// `0.3667` -> `"36.7%"`.
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "-".to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Seconds -> `"7s"`, `"1m 23s"`, `"1h 02m"`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to >= 0 and rounded
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "-".to_string();
    }
    let total = seconds.max(0.0).round() as u64;
    let (hours, minutes, secs) = (total / 3600, (total / 60) % 60, total % 60);

    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs:02}s")
    } else {
        format!("{secs}s")
    }
}

/// `12345` -> `"12,345"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "file")` -> `"0 files"`
/// - `plural_count(1, "file")` -> `"1 file"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

/// Bounce-rate bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Good,
    Warn,
    Bad,
}

impl Health {
    /// `rate <= good` is good, `rate <= warn` is a warning, above is bad.
    pub fn from_bounce_rate(rate: f64, good: f64, warn: f64) -> Self {
        if rate <= good {
            Self::Good
        } else if rate <= warn {
            Self::Warn
        } else {
            Self::Bad
        }
    }

    /// Paint `text` in this bucket's color.
    pub fn paint(self, text: &str) -> String {
        match self {
            Self::Good => styled(text, Style::new().green()),
            Self::Warn => styled(text, Style::new().yellow()),
            Self::Bad => styled(text, Style::new().red()),
        }
    }
}
