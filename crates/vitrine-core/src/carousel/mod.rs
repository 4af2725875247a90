//! Message carousel controller.
//!
//! The controller owns a fixed, non-empty list of messages and the index of
//! the active one. Navigation is two-phase:
//!
//! 1. [`CarouselController::go_to`] (and `next`/`previous`) moves the index,
//!    asks the view to play its exit animation and hands back a
//!    [`Transition`] ticket.
//! 2. After the settle delay the caller passes the ticket to
//!    [`CarouselController::complete`], which swaps the text, plays the entry
//!    animation and publishes the new [`Position`].
//!
//! Every navigation supersedes the previous ticket. Completing a stale ticket
//! is a no-op, so rapid clicks always settle on the last requested message.
//!
//! ```rust,ignore
//! use vitrine_core::carousel::{CarouselController, MessageList};
//!
//! let messages = MessageList::new(["A", "B", "C"])?;
//! let mut carousel = CarouselController::new(messages, view);
//! if let Some(transition) = carousel.next() {
//!     // ... wait for the exit animation ...
//!     carousel.complete(transition);
//! }
//! ```

#[cfg(feature = "runtime")]
pub mod driver;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Ordered, non-empty list of carousel messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MessageList(Vec<String>);

// A message list is never empty, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl MessageList {
    /// Build a message list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMessageList`] if `messages` yields nothing.
    pub fn new<I, S>(messages: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            return Err(Error::EmptyMessageList);
        }
        Ok(Self(messages))
    }

    /// Number of messages (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Index of the last message.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    /// Message at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate over the messages in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The messages as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for MessageList {
    type Error = Error;

    fn try_from(messages: Vec<String>) -> Result<Self> {
        Self::new(messages)
    }
}

impl From<MessageList> for Vec<String> {
    fn from(list: MessageList) -> Self {
        list.0
    }
}

/// Where the carousel currently stands.
///
/// Drives the indicator dots and the enabled state of the navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Index of the active message.
    pub index: usize,
    /// Total number of messages.
    pub len: usize,
}

impl Position {
    /// The "previous" button is disabled on the first message.
    #[must_use]
    pub const fn previous_disabled(&self) -> bool {
        self.index == 0
    }

    /// The "next" button is disabled on the last message.
    #[must_use]
    pub const fn next_disabled(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Whether indicator `dot` should be marked active.
    #[must_use]
    pub const fn is_active(&self, dot: usize) -> bool {
        self.index == dot
    }
}

/// Ticket for an in-flight navigation.
///
/// Returned by the navigation operations and redeemed with
/// [`CarouselController::complete`] once the exit animation has played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a transition only renders once it is completed"]
pub struct Transition {
    generation: u64,
    target: usize,
}

impl Transition {
    /// Index this transition navigates to.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }
}

/// Rendering collaborator for the carousel.
#[cfg_attr(test, mockall::automock)]
pub trait CarouselView {
    /// Play the exit animation of the message card.
    fn begin_transition(&mut self);

    /// Replace the displayed message text.
    fn show_message(&mut self, message: &str);

    /// Play the entry animation of the message card.
    fn end_transition(&mut self);

    /// Mark the active indicator and enable/disable the navigation buttons.
    fn update_position(&mut self, position: Position);
}

/// Owns the carousel index and mediates transitions for one page.
#[derive(Debug)]
pub struct CarouselController<V> {
    messages: MessageList,
    current_index: usize,
    generation: u64,
    pending: Option<Transition>,
    view: V,
}

impl<V: CarouselView> CarouselController<V> {
    /// Create a controller positioned on the first message.
    ///
    /// Nothing is rendered until [`Self::show_initial`] or a navigation
    /// completes.
    pub const fn new(messages: MessageList, view: V) -> Self {
        Self {
            messages,
            current_index: 0,
            generation: 0,
            pending: None,
            view,
        }
    }

    /// Render the current message without an exit phase.
    ///
    /// Used once the page intro has played. Any pending transition is
    /// superseded.
    pub fn show_initial(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        self.render();
    }

    /// Navigate to `index`.
    ///
    /// Out-of-range indexes are ignored and return `None`. Otherwise the
    /// index moves immediately, the view is told to start its exit
    /// animation, and the returned ticket must be passed to
    /// [`Self::complete`] after the settle delay.
    pub fn go_to(&mut self, index: usize) -> Option<Transition> {
        if index >= self.messages.len() {
            debug!(
                index,
                len = self.messages.len(),
                "Ignoring out-of-range carousel navigation"
            );
            return None;
        }

        self.current_index = index;
        self.generation = self.generation.wrapping_add(1);
        let transition = Transition {
            generation: self.generation,
            target: index,
        };
        if let Some(superseded) = self.pending.replace(transition) {
            debug!(
                superseded = superseded.target,
                index,
                "Superseding pending carousel transition"
            );
        }

        self.view.begin_transition();
        Some(transition)
    }

    /// Navigate to the following message. No-op on the last one.
    pub fn next(&mut self) -> Option<Transition> {
        self.go_to(self.current_index + 1)
    }

    /// Navigate to the preceding message. No-op on the first one.
    pub fn previous(&mut self) -> Option<Transition> {
        self.current_index
            .checked_sub(1)
            .and_then(|index| self.go_to(index))
    }

    /// Finish a navigation once the exit animation has played.
    ///
    /// Returns `false` (and renders nothing) if `transition` was superseded
    /// by a later navigation.
    pub fn complete(&mut self, transition: Transition) -> bool {
        if self.pending != Some(transition) {
            debug!(
                index = transition.target,
                "Dropping stale carousel transition"
            );
            return false;
        }
        self.pending = None;
        self.render();
        true
    }

    fn render(&mut self) {
        let message = &self.messages.0[self.current_index];
        self.view.show_message(message);
        self.view.end_transition();
        self.view.update_position(Position {
            index: self.current_index,
            len: self.messages.len(),
        });
    }
}

impl<V> CarouselController<V> {
    /// Index of the active message.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`; see [`MessageList`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Text of the active message.
    #[must_use]
    pub fn current_message(&self) -> &str {
        &self.messages.0[self.current_index]
    }

    /// Current position for indicators and buttons.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            index: self.current_index,
            len: self.messages.len(),
        }
    }

    /// Whether a navigation is waiting for [`Self::complete`].
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The message list.
    #[must_use]
    pub const fn messages(&self) -> &MessageList {
        &self.messages
    }

    /// The rendering collaborator.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the rendering collaborator.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
