//! Statistic count-up for the hub sidebar.
//!
//! Each statistic is shown as text (`"1.250"`, `"87%"`, `"∞"`). When the
//! sidebar opens, numeric ones reset to zero and count back up to their
//! original text, staggered by position.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing of the count-up animation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsConfig {
    /// Length of one count-up, in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Delay between the starts of consecutive statistics, in milliseconds.
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
}

const fn default_duration_ms() -> u64 {
    4000
}

const fn default_stagger_ms() -> u64 {
    100
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            stagger_ms: default_stagger_ms(),
        }
    }
}

impl StatsConfig {
    /// Count-up length as a [`Duration`].
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Delay before statistic number `index` starts counting.
    #[must_use]
    pub fn start_delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Duration::from_millis(self.stagger_ms).saturating_mul(index)
    }
}

/// A statistic that can be animated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValue {
    original: String,
    target: i64,
    percent: bool,
}

impl StatValue {
    /// Parse the displayed text of a statistic.
    ///
    /// Thousands separators (`.` and `,`) and `%` are ignored, then the
    /// leading integer is read. Returns `None` for texts with no leading
    /// number, including `"∞"`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text == "∞" {
            return None;
        }

        let cleaned: String = text
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | '%'))
            .collect();
        let target = leading_integer(cleaned.trim_start())?;

        Some(Self {
            original: text.to_string(),
            target,
            percent: text.contains('%'),
        })
    }

    /// The text the statistic had before animating.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Final numeric value.
    #[must_use]
    pub const fn target(&self) -> i64 {
        self.target
    }

    /// Whether the value is shown as a percentage.
    #[must_use]
    pub const fn is_percent(&self) -> bool {
        self.percent
    }

    /// Text shown right before counting starts.
    #[must_use]
    pub const fn zero_label(&self) -> &'static str {
        if self.percent { "0%" } else { "0" }
    }

    /// Text to show `elapsed` into a count-up lasting `duration`.
    ///
    /// Progress is linear. Once the count-up is over, the original text is
    /// returned verbatim.
    #[must_use]
    pub fn label_at(&self, elapsed: Duration, duration: Duration) -> String {
        if self.is_finished(elapsed, duration) {
            return self.original.clone();
        }

        let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
        let value = (self.target as f64 * progress).floor() as i64;
        if self.percent {
            format!("{value}%")
        } else {
            format_pt_br(value)
        }
    }

    /// Whether a count-up lasting `duration` is over after `elapsed`.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration, duration: Duration) -> bool {
        elapsed >= duration
    }
}

/// Parse an optional sign followed by ASCII digits, ignoring whatever follows.
fn leading_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Format an integer with Brazilian thousands separators (`1.234.567`).
#[must_use]
pub fn format_pt_br(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_grouped_numbers() {
        let stat = StatValue::parse("42").expect("numeric");
        assert_eq!(stat.target(), 42);
        assert!(!stat.is_percent());

        assert_eq!(StatValue::parse("1.000").map(|s| s.target()), Some(1000));
        assert_eq!(StatValue::parse("1,000").map(|s| s.target()), Some(1000));
        assert_eq!(
            StatValue::parse("12.345.678").map(|s| s.target()),
            Some(12_345_678)
        );
    }

    #[test]
    fn test_parse_percent() {
        let stat = StatValue::parse("87%").expect("numeric");
        assert_eq!(stat.target(), 87);
        assert!(stat.is_percent());
        assert_eq!(stat.zero_label(), "0%");
    }

    #[test]
    fn test_parse_reads_leading_number_only() {
        assert_eq!(StatValue::parse("365 dias").map(|s| s.target()), Some(365));
        assert_eq!(StatValue::parse("  7x").map(|s| s.target()), Some(7));
        assert_eq!(StatValue::parse("-3").map(|s| s.target()), Some(-3));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(StatValue::parse("∞").is_none());
        assert!(StatValue::parse("muitos").is_none());
        assert!(StatValue::parse("").is_none());
        assert!(StatValue::parse("%").is_none());
    }

    #[test]
    fn test_label_counts_up_linearly() {
        let stat = StatValue::parse("1.000").expect("numeric");
        let duration = Duration::from_millis(4000);

        assert_eq!(stat.label_at(Duration::ZERO, duration), "0");
        assert_eq!(stat.label_at(Duration::from_millis(1000), duration), "250");
        assert_eq!(stat.label_at(Duration::from_millis(3000), duration), "750");
        assert_eq!(stat.label_at(duration, duration), "1.000");
    }

    #[test]
    fn test_label_returns_original_text_when_done() {
        let stat = StatValue::parse("1,500").expect("numeric");
        let duration = Duration::from_millis(100);
        // Original formatting wins over pt-BR at the end.
        assert_eq!(stat.label_at(Duration::from_secs(10), duration), "1,500");
        assert!(stat.is_finished(Duration::from_secs(10), duration));
    }

    #[test]
    fn test_label_percent() {
        let stat = StatValue::parse("80%").expect("numeric");
        let duration = Duration::from_millis(1000);
        assert_eq!(stat.label_at(Duration::from_millis(500), duration), "40%");
        assert_eq!(stat.label_at(duration, duration), "80%");
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let stat = StatValue::parse("12").expect("numeric");
        assert_eq!(stat.label_at(Duration::ZERO, Duration::ZERO), "12");
    }

    #[test]
    fn test_format_pt_br() {
        assert_eq!(format_pt_br(0), "0");
        assert_eq!(format_pt_br(999), "999");
        assert_eq!(format_pt_br(1000), "1.000");
        assert_eq!(format_pt_br(1_234_567), "1.234.567");
        assert_eq!(format_pt_br(-12_500), "-12.500");
    }

    #[test]
    fn test_start_delay_staggers_by_index() {
        let config = StatsConfig::default();
        assert_eq!(config.start_delay(0), Duration::ZERO);
        assert_eq!(config.start_delay(3), Duration::from_millis(300));
        assert_eq!(config.duration(), Duration::from_millis(4000));
    }
}
