use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::discount::DiscountStatus;

/// Text shown in place of a countdown once the window has closed.
pub const EXPIRED_TEXT: &str = "Expired";

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Severity bucket for a countdown, used only to pick a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownTier {
    Critical,
    Warning,
    Normal,
    Neutral,
}

impl CountdownTier {
    /// Bucket a formatted countdown phrase by the units it mentions.
    ///
    /// Day and hour together is critical, hour alone is a warning, and
    /// anything else is normal. This looks at the text, not the duration.
    pub fn classify(text: &str) -> CountdownTier {
        let has_day = text.contains("day");
        let has_hour = text.contains("hour");
        match (has_day, has_hour) {
            (true, true) => CountdownTier::Critical,
            (false, true) => CountdownTier::Warning,
            _ => CountdownTier::Normal,
        }
    }

    /// Hex color the product card uses for this tier.
    pub fn color(self) -> &'static str {
        match self {
            CountdownTier::Critical => "#d62828",
            CountdownTier::Warning => "#ff6f00",
            CountdownTier::Normal => "#000",
            CountdownTier::Neutral => "#888",
        }
    }
}

impl fmt::Display for CountdownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownTier::Critical => write!(f, "critical"),
            CountdownTier::Warning => write!(f, "warning"),
            CountdownTier::Normal => write!(f, "normal"),
            CountdownTier::Neutral => write!(f, "neutral"),
        }
    }
}

/// A rendered countdown and its tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub text: String,
    pub tier: CountdownTier,
}

impl Countdown {
    pub fn expired() -> Self {
        Countdown {
            text: EXPIRED_TEXT.to_string(),
            tier: CountdownTier::Neutral,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.text == EXPIRED_TEXT
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Future-relative phrase for a remaining duration, e.g. `in 1 day, 2 hours`.
///
/// Granularity is days and hours; zero components are left out. Under an
/// hour it falls back to minutes, and under a minute to `a few seconds`.
/// Fractions of a second are dropped.
pub fn relative_phrase(remaining: Duration) -> String {
    let secs = remaining.num_seconds().max(0);
    let days = secs / SECS_PER_DAY;
    let hours = (secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;

    let body = if days > 0 {
        if hours > 0 {
            format!("{}, {}", plural(days, "day"), plural(hours, "hour"))
        } else {
            plural(days, "day")
        }
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "a few seconds".to_string()
    };
    format!("in {body}")
}

/// Countdown for a window that is still open.
pub fn format_remaining(remaining: Duration) -> Countdown {
    let phrase = relative_phrase(remaining);
    let text = phrase.strip_prefix("in ").unwrap_or(&phrase).to_string();
    let tier = CountdownTier::classify(&text);
    Countdown { text, tier }
}

/// Countdown for an evaluated discount.
pub fn format_countdown(status: DiscountStatus) -> Countdown {
    match status {
        DiscountStatus::Active { remaining } => format_remaining(remaining),
        DiscountStatus::Expired => Countdown::expired(),
    }
}
