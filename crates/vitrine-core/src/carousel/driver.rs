//! Tokio-driven carousel transitions.
//!
//! [`CarouselDriver`] wraps a [`CarouselController`] and schedules the second
//! phase of each navigation on a tokio timer, so callers only issue the
//! navigation itself.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{CarouselController, CarouselView, MessageList, Position, Transition};
use crate::config::TimingConfig;

/// Shared, timer-staged carousel.
///
/// Cloning is cheap and every clone drives the same controller.
pub struct CarouselDriver<V> {
    controller: Arc<Mutex<CarouselController<V>>>,
    settle_delay: Duration,
}

impl<V> Clone for CarouselDriver<V> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            settle_delay: self.settle_delay,
        }
    }
}

impl<V> std::fmt::Debug for CarouselDriver<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselDriver")
            .field("settle_delay", &self.settle_delay)
            .finish_non_exhaustive()
    }
}

impl<V: CarouselView + Send + 'static> CarouselDriver<V> {
    /// Wrap an existing controller.
    pub fn new(controller: CarouselController<V>, settle_delay: Duration) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            settle_delay,
        }
    }

    /// Build a driver with the settle delay from `timings`.
    pub fn with_timings(messages: MessageList, view: V, timings: &TimingConfig) -> Self {
        Self::new(
            CarouselController::new(messages, view),
            timings.settle_delay(),
        )
    }

    /// Delay between the exit animation and the text swap.
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Render the first message immediately.
    pub async fn show_initial(&self) {
        self.controller.lock().await.show_initial();
    }

    /// Navigate to `index`.
    ///
    /// Returns the handle of the scheduled completion, or `None` when the
    /// request was ignored. The handle resolves to `false` if a later
    /// navigation superseded this one.
    pub async fn go_to(&self, index: usize) -> Option<JoinHandle<bool>> {
        let transition = self.controller.lock().await.go_to(index);
        self.schedule(transition)
    }

    /// Navigate to the following message.
    pub async fn next(&self) -> Option<JoinHandle<bool>> {
        let transition = self.controller.lock().await.next();
        self.schedule(transition)
    }

    /// Navigate to the preceding message.
    pub async fn previous(&self) -> Option<JoinHandle<bool>> {
        let transition = self.controller.lock().await.previous();
        self.schedule(transition)
    }

    /// Current position.
    pub async fn position(&self) -> Position {
        self.controller.lock().await.position()
    }

    /// Index of the active message.
    pub async fn current_index(&self) -> usize {
        self.controller.lock().await.current_index()
    }

    /// Run `f` against the view.
    pub async fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(self.controller.lock().await.view())
    }

    fn schedule(&self, transition: Option<Transition>) -> Option<JoinHandle<bool>> {
        let transition = transition?;
        let controller = Arc::clone(&self.controller);
        let delay = self.settle_delay;
        debug!(
            index = transition.target(),
            delay_ms = delay.as_millis() as u64,
            "Scheduling carousel transition"
        );
        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.lock().await.complete(transition)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Begin,
        Show(String),
        End,
        Position(usize),
    }

    #[derive(Debug, Default)]
    struct RecordingView {
        events: Vec<Event>,
    }

    impl CarouselView for RecordingView {
        fn begin_transition(&mut self) {
            self.events.push(Event::Begin);
        }

        fn show_message(&mut self, message: &str) {
            self.events.push(Event::Show(message.to_string()));
        }

        fn end_transition(&mut self) {
            self.events.push(Event::End);
        }

        fn update_position(&mut self, position: Position) {
            self.events.push(Event::Position(position.index));
        }
    }

    fn driver() -> CarouselDriver<RecordingView> {
        let messages = MessageList::new(["A", "B", "C"]).expect("non-empty");
        CarouselDriver::with_timings(messages, RecordingView::default(), &TimingConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_swaps_only_after_settle_delay() {
        let driver = driver();
        let handle = driver.next().await.expect("0 -> 1");

        tokio::time::sleep(Duration::from_millis(299)).await;
        let events = driver.with_view(|v| v.events.clone()).await;
        assert_eq!(events, vec![Event::Begin]);

        assert!(handle.await.expect("task completes"));
        let events = driver.with_view(|v| v.events.clone()).await;
        assert_eq!(
            events,
            vec![
                Event::Begin,
                Event::Show("B".to_string()),
                Event::End,
                Event::Position(1),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_navigation_renders_last_target_once() {
        let driver = driver();
        let first = driver.next().await.expect("0 -> 1");
        let second = driver.next().await.expect("1 -> 2");

        assert!(!first.await.expect("task completes"));
        assert!(second.await.expect("task completes"));

        let events = driver.with_view(|v| v.events.clone()).await;
        assert_eq!(
            events,
            vec![
                Event::Begin,
                Event::Begin,
                Event::Show("C".to_string()),
                Event::End,
                Event::Position(2),
            ]
        );
        assert_eq!(driver.current_index().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ignored_navigation_schedules_nothing() {
        let driver = driver();
        assert!(driver.previous().await.is_none());
        assert!(driver.go_to(7).await.is_none());
        assert!(driver.with_view(|v| v.events.is_empty()).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_state() {
        let driver = driver();
        let other = driver.clone();

        let handle = other.go_to(2).await.expect("in range");
        handle.await.expect("task completes");

        let position = driver.position().await;
        assert_eq!(position, Position { index: 2, len: 3 });
        assert!(position.next_disabled());
    }

    #[tokio::test]
    async fn test_show_initial_renders_without_begin() {
        let driver = driver();
        driver.show_initial().await;
        let events = driver.with_view(|v| v.events.clone()).await;
        assert_eq!(
            events,
            vec![Event::Show("A".to_string()), Event::End, Event::Position(0)]
        );
    }
}
