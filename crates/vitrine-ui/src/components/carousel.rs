//! Message carousel screen.
//!
//! Binds a [`CarouselController`] to Leptos signals. The controller decides
//! what to show; this component only runs the settle timers and renders.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrine_core::{CarouselController, CarouselView, Position, Transition};

use crate::app::{Screen, millis, use_config, use_navigation};

/// [`CarouselView`] that writes into signals read by the component.
#[derive(Debug, Clone, Copy)]
pub struct SignalCarouselView {
    set_text: WriteSignal<String>,
    set_shown: WriteSignal<bool>,
    set_leaving: WriteSignal<bool>,
    set_position: WriteSignal<Position>,
}

impl CarouselView for SignalCarouselView {
    fn begin_transition(&mut self) {
        self.set_leaving.set(true);
    }

    fn show_message(&mut self, message: &str) {
        self.set_text.set(message.to_string());
        self.set_shown.set(true);
    }

    fn end_transition(&mut self) {
        self.set_leaving.set(false);
    }

    fn update_position(&mut self, position: Position) {
        self.set_position.set(position);
    }
}

/// Message carousel with previous/next buttons and indicator dots.
#[component]

pub fn MessageCarousel() -> impl IntoView {
    let config = use_config();
    let nav = use_navigation();
    let timings = config.timings;

    nav.reveal(timings.vignette_delay_ms);

    let messages = match config.message_list() {
        Ok(messages) => messages,
        Err(e) => {
            leptos::logging::error!("Cannot build carousel: {}", e);
            return view! {
                <div id="messages-page" class="messages">
                    <p class="carousel-error">"Nenhuma mensagem por aqui."</p>
                </div>
            }
            .into_any();
        }
    };
    let len = messages.len();

    let (text, set_text) = signal(String::new());
    let (shown, set_shown) = signal(false);
    let (leaving, set_leaving) = signal(false);
    let (position, set_position) = signal(Position { index: 0, len });

    let controller = StoredValue::new(CarouselController::new(
        messages,
        SignalCarouselView {
            set_text,
            set_shown,
            set_leaving,
            set_position,
        },
    ));

    let intro_ms = millis(timings.intro_delay_ms);
    spawn_local(async move {
        TimeoutFuture::new(intro_ms).await;
        controller.try_update_value(CarouselController::show_initial);
    });

    let settle_ms = millis(timings.settle_delay_ms);
    let settle = move |transition: Option<Transition>| {
        let Some(transition) = transition else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(settle_ms).await;
            controller.try_update_value(|carousel| carousel.complete(transition));
        });
    };

    let go_to = move |index: usize| {
        settle(
            controller
                .try_update_value(|carousel| carousel.go_to(index))
                .flatten(),
        );
    };
    let on_previous = move |_| {
        settle(
            controller
                .try_update_value(CarouselController::previous)
                .flatten(),
        );
    };
    let on_next = move |_| {
        settle(controller.try_update_value(CarouselController::next).flatten());
    };

    view! {
        <div id="messages-page" class="messages">
            <button
                class="icon-btn messages-back"
                aria-label="Voltar"
                on:click=move |_| nav.leave_to(Screen::Hub, timings.leave_delay_ms)
            >
                "←"
            </button>

            <div
                id="message-card"
                class="message-card"
                class:active=move || shown.get()
                class:leaving=move || leaving.get()
            >
                <p id="message-text">{move || text.get()}</p>
            </div>

            <div class="carousel-controls">
                <button
                    id="prev-btn"
                    class="nav-btn"
                    aria-label="Mensagem anterior"
                    disabled=move || position.get().previous_disabled()
                    on:click=on_previous
                >
                    "‹"
                </button>
                <div id="dots-container" class="dots">
                    {(0..len)
                        .map(|index| {
                            view! {
                                <button
                                    class="dot"
                                    class:active=move || position.get().is_active(index)
                                    aria-label=format!("Mensagem {}", index + 1)
                                    on:click=move |_| go_to(index)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    id="next-btn"
                    class="nav-btn"
                    aria-label="Próxima mensagem"
                    disabled=move || position.get().next_disabled()
                    on:click=on_next
                >
                    "›"
                </button>
            </div>
        </div>
    }
    .into_any()
}
