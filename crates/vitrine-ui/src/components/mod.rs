//! UI components for `Vitrine`.
//!
//! One component per screen of the page sequence.

mod carousel;
mod hub;
mod splash;

pub use carousel::{MessageCarousel, SignalCarouselView};
pub use hub::{HubPage, STATS};
pub use splash::SplashScreen;
