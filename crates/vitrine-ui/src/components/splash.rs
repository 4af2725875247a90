//! Splash screen with the loading bar and the start button.

use gloo_timers::future::TimeoutFuture;
use js_sys::Math;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrine_core::{SplashPhase, SplashProgress, mark_session_started};

use crate::app::{Screen, millis, use_config, use_navigation};
use crate::storage::BrowserSessionStore;

/// Caption while the bar is filling.
const LOADING_TEXT: &str = "Preparando tudo...";

/// Start button label before it is pressed.
const START_LABEL: &str = "Começar";

/// Splash screen.
///
/// Fills the progress bar on a timer, then reveals the start button. Pressing
/// it records the session and moves on to the hub.
#[component]

pub fn SplashScreen() -> impl IntoView {
    let config = use_config();
    let nav = use_navigation();
    let splash = config.splash;

    let progress = RwSignal::new(SplashProgress::new(&splash));
    let (burst, set_burst) = signal(false);

    nav.reveal(config.timings.vignette_delay_ms);

    spawn_local(async move {
        loop {
            TimeoutFuture::new(millis(splash.tick_interval_ms)).await;
            // `None` once the screen has been unmounted.
            match progress.try_update(|p| p.tick(Math::random(), Math::random())) {
                Some(true) => break,
                Some(false) => {}
                None => return,
            }
        }
        TimeoutFuture::new(millis(splash.finish_delay_ms)).await;
        progress.try_update(SplashProgress::mark_ready);
    });

    let on_start = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if !progress.try_update(SplashProgress::start).unwrap_or(false) {
            return;
        }
        set_burst.set(true);
        if !mark_session_started(&mut BrowserSessionStore) {
            leptos::logging::warn!("Could not record session start");
        }
        nav.leave_to(Screen::Hub, splash.exit_delay_ms);
    };

    let loading = move || progress.with(|p| p.phase() == SplashPhase::Loading);

    view! {
        <div id="splash-screen" class="splash">
            <h1 class="splash-title">"Vitrine"</h1>
            <p class="splash-text">
                {move || progress.with(|p| p.banner_text().unwrap_or(LOADING_TEXT))}
            </p>
            <Show when=loading>
                <div class="progress-container">
                    <div
                        class="progress-bar"
                        style:width=move || format!("{}%", progress.with(SplashProgress::percent))
                    ></div>
                </div>
                <div class="splash-footer">{move || progress.with(SplashProgress::label)}</div>
            </Show>
            <button
                id="start-btn"
                class="start-btn"
                class:hidden=loading
                class:burst=move || burst.get()
                on:click=on_start
            >
                {move || progress.with(|p| p.button_label(START_LABEL))}
            </button>
        </div>
    }
}
