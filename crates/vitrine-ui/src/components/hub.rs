//! Hub page: sidebar with statistics and the "reason" overlay.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrine_core::{HubEffect, HubState, StatValue};

use crate::app::{Screen, millis, use_config, use_navigation};

/// Statistics listed in the sidebar, as label and displayed value.
pub const STATS: [(&str, &str); 4] = [
    ("Dias juntos", "1.095"),
    ("Mensagens trocadas", "12.480"),
    ("Felicidade", "100%"),
    ("Amor", "∞"),
];

/// Refresh interval of a running count-up.
const FRAME_MS: u32 = 16;

/// Length of the pop effect after a count-up lands.
const POP_MS: u32 = 500;

/// Length of the celebration behind the reason overlay.
const CELEBRATION_MS: u32 = 2500;

/// Hub page.
#[component]

pub fn HubPage() -> impl IntoView {
    let config = use_config();
    let nav = use_navigation();
    let leave_delay = config.timings.leave_delay_ms;

    let hub = RwSignal::new(HubState::new());
    let (stats_run, set_stats_run) = signal(0u32);
    let (celebrating, set_celebrating) = signal(false);

    nav.reveal(config.timings.vignette_delay_ms);

    let apply = move |effect: HubEffect| match effect {
        HubEffect::AnimateStats => set_stats_run.update(|run| *run += 1),
        HubEffect::Celebrate => {
            set_celebrating.set(true);
            spawn_local(async move {
                TimeoutFuture::new(CELEBRATION_MS).await;
                set_celebrating.try_set(false);
            });
        }
    };

    let open_sidebar = move |_| {
        if let Some(effect) = hub.try_update(HubState::open_sidebar) {
            apply(effect);
        }
    };

    let open_reason = move |_| {
        if let Some(effect) = hub.try_update(HubState::open_reason) {
            apply(effect);
        }
    };

    view! {
        <div
            id="hub-page"
            class="hub"
            class:sidebar-open=move || hub.with(HubState::sidebar_open)
        >
            <header class="hub-header">
                <button
                    id="back-btn"
                    class="icon-btn"
                    aria-label="Voltar"
                    on:click=move |_| nav.leave_to(Screen::Splash, leave_delay)
                >
                    "←"
                </button>
                <h1 class="hub-title">"Vitrine"</h1>
                <button id="menu-btn" class="icon-btn" aria-label="Abrir menu" on:click=open_sidebar>
                    "☰"
                </button>
            </header>

            <main class="hub-cards">
                <button
                    class="hub-card"
                    on:click=move |_| nav.leave_to(Screen::Messages, leave_delay)
                >
                    <span class="hub-card-title">"Mensagens"</span>
                    <span class="hub-card-text">"Uma sequência de recados para você."</span>
                </button>
            </main>

            <div
                id="sidebar-overlay"
                class="sidebar-overlay"
                on:click=move |_| hub.update(HubState::overlay_clicked)
            ></div>

            <aside id="sidebar" class="sidebar">
                <button
                    id="close-btn"
                    class="icon-btn"
                    aria-label="Fechar menu"
                    on:click=move |_| hub.update(HubState::close_sidebar)
                >
                    "×"
                </button>
                <ul class="stats">
                    {STATS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (label, value))| {
                            view! { <StatItem index=index label=label value=value run=stats_run /> }
                        })
                        .collect_view()}
                </ul>
                <button id="reason-btn" class="primary-btn" on:click=open_reason>
                    "Por quê?"
                </button>
            </aside>

            <div
                id="reason-overlay"
                class="reason-overlay"
                class:active=move || hub.with(HubState::reason_open)
                class:celebrating=move || celebrating.get()
            >
                <p class="reason-text">"Porque cada mensagem foi escrita pensando em você."</p>
                <button
                    id="back-btn-reason"
                    class="primary-btn"
                    on:click=move |_| hub.update(HubState::close_reason)
                >
                    "Voltar"
                </button>
            </div>
        </div>
    }
}

/// One statistic in the sidebar.
///
/// Counts up from zero every time `run` changes. A newer run stops an older
/// one still in flight.
#[component]
fn StatItem(
    /// Position in the list, used for the start stagger.
    index: usize,
    /// Caption below the value.
    label: &'static str,
    /// Displayed value.
    value: &'static str,
    /// Incremented on every sidebar open.
    run: ReadSignal<u32>,
) -> impl IntoView {
    let stats = use_config().stats;
    let stat = StatValue::parse(value);
    let (text, set_text) = signal(value.to_string());
    let (popping, set_popping) = signal(false);

    Effect::new(move || {
        let generation = run.get();
        if generation == 0 {
            return;
        }
        let Some(stat) = stat.clone() else {
            return;
        };

        set_text.set(stat.zero_label().to_string());
        spawn_local(async move {
            TimeoutFuture::new(millis(stats.start_delay(index).as_millis() as u64)).await;

            let duration = stats.duration();
            let started = js_sys::Date::now();
            loop {
                if run.try_get_untracked() != Some(generation) {
                    return;
                }
                let elapsed_ms = (js_sys::Date::now() - started).max(0.0);
                let elapsed = Duration::from_secs_f64(elapsed_ms / 1000.0);
                set_text.set(stat.label_at(elapsed, duration));
                if stat.is_finished(elapsed, duration) {
                    break;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }

            set_popping.set(true);
            TimeoutFuture::new(POP_MS).await;
            set_popping.try_set(false);
        });
    });

    view! {
        <li class="stat">
            <span class="stat-value" class:stat-pop=move || popping.get()>
                {move || text.get()}
            </span>
            <span class="stat-label">{label}</span>
        </li>
    }
}
