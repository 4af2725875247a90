//! `Vitrine` Core Library
//!
//! This crate provides the logic behind the `Vitrine` page sequence:
//! - Message carousel controller with cancel-and-restart transitions
//! - Splash screen loading progress
//! - Hub sidebar and overlay state
//! - Statistic count-up parsing and formatting
//! - Best-effort session flags
//! - Application configuration
//!
//! The `runtime` feature (on by default) adds the tokio transition driver and
//! config file I/O. WASM front ends depend on this crate without it.
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`] with the crate's [`Error`].
//! Carousel navigation itself never fails; out-of-range requests are ignored.
//!
//! ```rust,ignore
//! use vitrine_core::{CarouselController, VitrineConfig};
//!
//! let config = VitrineConfig::default();
//! let mut carousel = CarouselController::new(config.message_list()?, view);
//! carousel.show_initial();
//! ```

pub mod carousel;
pub mod config;
pub mod error;
pub mod hub;
pub mod session;
pub mod splash;
pub mod stats;

#[cfg(feature = "runtime")]
pub use carousel::driver::CarouselDriver;
pub use carousel::{CarouselController, CarouselView, MessageList, Position, Transition};
pub use config::{DEFAULT_MESSAGES, DEFAULT_SETTLE_DELAY_MS, TimingConfig, VitrineConfig};
pub use error::{Error, Result};
pub use hub::{HubEffect, HubState};
pub use session::{
    MemorySessionStore, SESSION_STARTED_KEY, SessionStore, mark_session_started, session_started,
};
pub use splash::{ENTERING_TEXT, READY_TEXT, SplashConfig, SplashPhase, SplashProgress};
pub use stats::{StatValue, StatsConfig, format_pt_br};
