//! Integration tests for the message carousel.
//!
//! These walk the controller through the navigation scenarios a visitor can
//! produce with the previous/next buttons and the indicator dots, checking
//! what the view ends up showing after every step.

use vitrine_core::{CarouselController, CarouselView, MessageList, Position, VitrineConfig};

/// View that keeps only the latest rendered state, like the DOM does.
#[derive(Debug, Default)]
struct PageView {
    text: Option<String>,
    transitioning: bool,
    position: Option<Position>,
    renders: usize,
}

impl PageView {
    fn previous_disabled(&self) -> bool {
        self.position.is_some_and(|p| p.previous_disabled())
    }

    fn next_disabled(&self) -> bool {
        self.position.is_some_and(|p| p.next_disabled())
    }
}

impl CarouselView for PageView {
    fn begin_transition(&mut self) {
        self.transitioning = true;
    }

    fn show_message(&mut self, message: &str) {
        self.text = Some(message.to_string());
        self.renders += 1;
    }

    fn end_transition(&mut self) {
        self.transitioning = false;
    }

    fn update_position(&mut self, position: Position) {
        self.position = Some(position);
    }
}

/// Show the controller's debug logs when a scenario fails.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("vitrine_core=debug")
        .try_init();
}

fn carousel(messages: &[&str]) -> CarouselController<PageView> {
    init_tracing();
    let list = MessageList::new(messages.iter().copied()).expect("non-empty");
    CarouselController::new(list, PageView::default())
}

/// Navigate and let the settle timer fire.
fn settle(
    carousel: &mut CarouselController<PageView>,
    navigate: impl FnOnce(&mut CarouselController<PageView>) -> Option<vitrine_core::Transition>,
) -> bool {
    match navigate(carousel) {
        Some(transition) => {
            assert!(carousel.view().transitioning, "exit animation started");
            carousel.complete(transition)
        }
        None => false,
    }
}

#[test]
fn test_next_through_three_messages() {
    let mut carousel = carousel(&["A", "B", "C"]);
    carousel.show_initial();
    assert_eq!(carousel.view().text.as_deref(), Some("A"));
    assert!(carousel.view().previous_disabled());
    assert!(!carousel.view().next_disabled());

    assert!(settle(&mut carousel, CarouselController::next));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.view().text.as_deref(), Some("B"));
    assert!(!carousel.view().previous_disabled());
    assert!(!carousel.view().next_disabled());

    assert!(settle(&mut carousel, CarouselController::next));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.view().text.as_deref(), Some("C"));
    assert!(carousel.view().next_disabled());

    assert!(!settle(&mut carousel, CarouselController::next));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.view().renders, 3);
}

#[test]
fn test_dot_click_out_of_range_keeps_index() {
    let mut carousel = carousel(&["A", "B", "C"]);
    carousel.show_initial();
    assert!(settle(&mut carousel, |c| c.go_to(1)));

    assert!(!settle(&mut carousel, |c| c.go_to(5)));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.view().text.as_deref(), Some("B"));
    assert!(!carousel.view().transitioning);
}

#[test]
fn test_button_rule_holds_after_every_navigation() {
    let mut carousel = carousel(&["1", "2", "3", "4"]);
    let jumps = [3, 0, 2, 1, 3, 3, 0];
    for target in jumps {
        assert!(settle(&mut carousel, |c| c.go_to(target)));
        let position = carousel.view().position.expect("rendered");
        assert_eq!(position.index, target);
        assert_eq!(carousel.view().previous_disabled(), target == 0);
        assert_eq!(carousel.view().next_disabled(), target == 3);
    }
}

#[test]
fn test_previous_back_to_start() {
    let mut carousel = carousel(&["A", "B", "C"]);
    assert!(settle(&mut carousel, |c| c.go_to(2)));
    assert!(settle(&mut carousel, CarouselController::previous));
    assert!(settle(&mut carousel, CarouselController::previous));
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.view().previous_disabled());
    assert!(!settle(&mut carousel, CarouselController::previous));
}

#[test]
fn test_rapid_clicks_converge_on_last_request() {
    let mut carousel = carousel(&["A", "B", "C"]);
    carousel.show_initial();

    let to_b = carousel.next().expect("0 -> 1");
    let to_c = carousel.next().expect("1 -> 2");
    let back_to_a = carousel.go_to(0).expect("dot 0");

    // Timers fire in the order they were armed.
    assert!(!carousel.complete(to_b));
    assert!(!carousel.complete(to_c));
    assert!(carousel.complete(back_to_a));

    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.view().text.as_deref(), Some("A"));
    assert_eq!(carousel.view().position.map(|p| p.index), Some(0));
    assert!(!carousel.view().transitioning);
    // Initial render plus the one settled navigation.
    assert_eq!(carousel.view().renders, 2);
}

#[test]
fn test_default_config_messages_drive_carousel() {
    let config = VitrineConfig::default();
    let list = config.message_list().expect("defaults are non-empty");
    let mut carousel = CarouselController::new(list, PageView::default());
    carousel.show_initial();

    while settle(&mut carousel, CarouselController::next) {}
    assert_eq!(carousel.current_index(), config.messages.len() - 1);
    assert_eq!(
        carousel.view().text.as_deref(),
        config.messages.last().map(String::as_str)
    );
}
