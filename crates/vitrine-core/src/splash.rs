//! Splash screen loading progress.
//!
//! The splash screen fills a progress bar on a fixed tick, with a little
//! random jitter, then waits a moment before revealing the start button.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Banner text once loading has finished.
pub const READY_TEXT: &str = "Tudo pronto!";

/// Start button label after it has been pressed.
pub const ENTERING_TEXT: &str = "Entrando...";

/// Upper bound of the progress bar.
pub const COMPLETE_PERCENT: f64 = 100.0;

/// Timing of the splash loading animation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplashConfig {
    /// Nominal time to fill the bar, in milliseconds.
    #[serde(default = "default_total_duration_ms")]
    pub total_duration_ms: u64,
    /// Interval between progress ticks, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Pause between a full bar and the start button appearing.
    #[serde(default = "default_finish_delay_ms")]
    pub finish_delay_ms: u64,
    /// Pause between pressing start and leaving the splash screen.
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
}

const fn default_total_duration_ms() -> u64 {
    2500
}

const fn default_tick_interval_ms() -> u64 {
    50
}

const fn default_finish_delay_ms() -> u64 {
    500
}

const fn default_exit_delay_ms() -> u64 {
    800
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            total_duration_ms: default_total_duration_ms(),
            tick_interval_ms: default_tick_interval_ms(),
            finish_delay_ms: default_finish_delay_ms(),
            exit_delay_ms: default_exit_delay_ms(),
        }
    }
}

impl SplashConfig {
    /// Reject timings that would never fill the bar.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Configuration(
                "Splash tick interval must be greater than zero".to_string(),
            ));
        }
        if self.total_duration_ms < self.tick_interval_ms {
            return Err(Error::Configuration(format!(
                "Splash duration ({} ms) is shorter than one tick ({} ms)",
                self.total_duration_ms, self.tick_interval_ms
            )));
        }
        Ok(())
    }

    /// Percentage added on every tick before jitter.
    #[must_use]
    pub fn increment(&self) -> f64 {
        COMPLETE_PERCENT / (self.total_duration_ms as f64 / self.tick_interval_ms as f64)
    }

    /// Tick interval as a [`Duration`].
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Finish delay as a [`Duration`].
    #[must_use]
    pub const fn finish_delay(&self) -> Duration {
        Duration::from_millis(self.finish_delay_ms)
    }

    /// Exit delay as a [`Duration`].
    #[must_use]
    pub const fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

/// Stage of the splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplashPhase {
    /// The progress bar is filling.
    #[default]
    Loading,
    /// The bar is hidden and the start button is shown.
    Ready,
    /// Start was pressed; the screen is fading out.
    Entering,
}

impl std::fmt::Display for SplashPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::Ready => write!(f, "Ready"),
            Self::Entering => write!(f, "Entering"),
        }
    }
}

/// Progress of the splash loading animation.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashProgress {
    percent: f64,
    increment: f64,
    phase: SplashPhase,
}

impl SplashProgress {
    /// Start an empty progress bar.
    #[must_use]
    pub fn new(config: &SplashConfig) -> Self {
        Self {
            percent: 0.0,
            increment: config.increment(),
            phase: SplashPhase::Loading,
        }
    }

    /// Advance one tick.
    ///
    /// `roll` and `jitter` are uniform samples in `[0, 1)`: when `roll`
    /// exceeds one half, up to two extra percent are added. Returns `true`
    /// only on the tick that fills the bar.
    pub fn tick(&mut self, roll: f64, jitter: f64) -> bool {
        if self.phase != SplashPhase::Loading || self.is_complete() {
            return false;
        }

        self.percent += self.increment;
        if roll > 0.5 {
            self.percent += jitter * 2.0;
        }

        if self.percent >= COMPLETE_PERCENT {
            self.percent = COMPLETE_PERCENT;
            debug!("Splash progress complete");
            return true;
        }
        false
    }

    /// Current fill in percent, `0.0..=100.0`.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Footer label, e.g. `"42%"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.percent.floor() as u32)
    }

    /// Whether the bar is full.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent >= COMPLETE_PERCENT
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Reveal the start button. Only valid once the bar is full.
    pub fn mark_ready(&mut self) -> bool {
        if self.phase != SplashPhase::Loading || !self.is_complete() {
            return false;
        }
        self.phase = SplashPhase::Ready;
        true
    }

    /// Press the start button.
    ///
    /// Returns `true` the first time it is pressed while ready; the caller
    /// then plays the burst, shows the vignette and leaves after the exit
    /// delay. Later presses are ignored.
    pub fn start(&mut self) -> bool {
        if self.phase != SplashPhase::Ready {
            return false;
        }
        self.phase = SplashPhase::Entering;
        true
    }

    /// Banner text replacing the loading caption, if any.
    #[must_use]
    pub const fn banner_text(&self) -> Option<&'static str> {
        match self.phase {
            SplashPhase::Loading => None,
            SplashPhase::Ready | SplashPhase::Entering => Some(READY_TEXT),
        }
    }

    /// Label of the start button while it is visible.
    #[must_use]
    pub const fn button_label(&self, idle_label: &'static str) -> &'static str {
        match self.phase {
            SplashPhase::Entering => ENTERING_TEXT,
            SplashPhase::Loading | SplashPhase::Ready => idle_label,
        }
    }
}
