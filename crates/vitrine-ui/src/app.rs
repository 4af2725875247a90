//! Main application component.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrine_core::{VitrineConfig, session_started};

use crate::components::{HubPage, MessageCarousel, SplashScreen};
use crate::storage::BrowserSessionStore;
use crate::theme::generate_css_variables;

/// The screens of the page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Loading bar and start button.
    Splash,
    /// Sidebar, statistics and the entry to the messages.
    Hub,
    /// Message carousel.
    Messages,
}

/// Screen switching behind a vignette.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    /// Screen currently mounted.
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
    /// Whether the vignette covers the page.
    pub vignette: ReadSignal<bool>,
    set_vignette: WriteSignal<bool>,
}

impl NavigationContext {
    /// Cover the current screen, then mount `screen` after `delay_ms`.
    pub fn leave_to(&self, screen: Screen, delay_ms: u64) {
        let set_screen = self.set_screen;
        self.set_vignette.set(true);
        spawn_local(async move {
            TimeoutFuture::new(millis(delay_ms)).await;
            set_screen.set(screen);
        });
    }

    /// Fade the vignette out after `delay_ms`. Called by each screen on mount.
    pub fn reveal(&self, delay_ms: u64) {
        let set_vignette = self.set_vignette;
        spawn_local(async move {
            TimeoutFuture::new(millis(delay_ms)).await;
            set_vignette.set(false);
        });
    }
}

/// Clamp a millisecond count to what browser timers accept.
pub fn millis(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

/// Configuration provided by [`App`], or defaults outside of it.
pub fn use_config() -> VitrineConfig {
    use_context::<VitrineConfig>().unwrap_or_default()
}

/// Hook to access the navigation context.
///
/// # Panics
/// Panics if called outside of [`App`].
pub fn use_navigation() -> NavigationContext {
    expect_context::<NavigationContext>()
}

/// Main application component.
#[component]

pub fn App() -> impl IntoView {
    let config = VitrineConfig::default();
    let css_vars = generate_css_variables(&config.timings, &config.splash);

    // A reload within the same tab skips the splash screen.
    let initial = if session_started(&BrowserSessionStore) {
        leptos::logging::log!("Session already started, opening hub");
        Screen::Hub
    } else {
        Screen::Splash
    };

    let (screen, set_screen) = signal(initial);
    let (vignette, set_vignette) = signal(true);

    provide_context(config);
    provide_context(NavigationContext {
        screen,
        set_screen,
        vignette,
        set_vignette,
    });

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <div
            id="vignette-overlay"
            class="vignette"
            class:vignette-active=move || vignette.get()
        ></div>
        {move || match screen.get() {
            Screen::Splash => view! { <SplashScreen /> }.into_any(),
            Screen::Hub => view! { <HubPage /> }.into_any(),
            Screen::Messages => view! { <MessageCarousel /> }.into_any(),
        }}
    }
}
