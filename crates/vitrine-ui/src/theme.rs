//! Theme configuration for `Vitrine`.
//!
//! Warm night palette with soft glows. Transition lengths are derived from
//! the configured timings so CSS animations and Rust timers stay in step.

use vitrine_core::{SplashConfig, TimingConfig};

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page background.
        pub const PRIMARY: &str = "#0f0a1a";
        /// Cards and sidebar.
        pub const SECONDARY: &str = "#1a1329";
        /// Glass effect background.
        pub const GLASS: &str = "rgba(26, 19, 41, 0.75)";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#fdf7ff";
        /// Secondary/muted text.
        pub const SECONDARY: &str = "#b9a9cf";
        /// Disabled text.
        pub const DISABLED: &str = "#5c4f70";
    }

    /// Accent colors.
    pub mod accent {
        /// Primary accent - rose.
        pub const PRIMARY: &str = "#f472b6";
        /// Secondary accent - violet.
        pub const SECONDARY: &str = "#a78bfa";
        /// Highlight for statistics.
        pub const GOLD: &str = "#fbbf24";
    }

    /// Overlay colors.
    pub mod overlay {
        /// Vignette covering a screen during transitions.
        pub const VIGNETTE: &str = "#000000";
        /// Dimmed backdrop behind the sidebar.
        pub const BACKDROP: &str = "rgba(0, 0, 0, 0.6)";
    }

    /// Gradient definitions.
    pub mod gradient {
        /// Brand gradient for buttons and the progress bar.
        pub const BRAND: &str = "linear-gradient(135deg, #f472b6 0%, #a78bfa 100%)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Body font family.
    pub const FONT_FAMILY: &str =
        "'Nunito', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables(timings: &TimingConfig, splash: &SplashConfig) -> String {
    format!(
        r":root {{
  /* Background colors */
  --bg-primary: {bg_primary};
  --bg-secondary: {bg_secondary};
  --bg-glass: {bg_glass};

  /* Text colors */
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --text-disabled: {text_disabled};

  /* Accent colors */
  --accent-primary: {accent_primary};
  --accent-secondary: {accent_secondary};
  --accent-gold: {accent_gold};
  --gradient-brand: {gradient_brand};

  /* Overlays */
  --vignette: {vignette};
  --backdrop: {backdrop};

  /* Typography */
  --font-family: {font_family};

  /* Timings */
  --card-transition: {settle}ms;
  --vignette-transition: {leave}ms;
  --progress-tick: {tick}ms;
}}",
        bg_primary = colors::background::PRIMARY,
        bg_secondary = colors::background::SECONDARY,
        bg_glass = colors::background::GLASS,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        text_disabled = colors::text::DISABLED,
        accent_primary = colors::accent::PRIMARY,
        accent_secondary = colors::accent::SECONDARY,
        accent_gold = colors::accent::GOLD,
        gradient_brand = colors::gradient::BRAND,
        vignette = colors::overlay::VIGNETTE,
        backdrop = colors::overlay::BACKDROP,
        font_family = typography::FONT_FAMILY,
        settle = timings.settle_delay_ms,
        leave = timings.leave_delay_ms,
        tick = splash.tick_interval_ms,
    )
}
