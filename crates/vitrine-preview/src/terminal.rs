//! Terminal rendering of the carousel.

use std::io::Write;

use tracing::warn;
use vitrine_core::{CarouselView, Position};

/// Indicator line for `position`: one dot per message and the button states.
///
/// ```text
/// [‹] ○ ● ○ [›]  2/3
/// ```
/// A disabled button is drawn as `[ ]`.
#[must_use]
pub fn indicator(position: Position) -> String {
    let dots: Vec<&str> = (0..position.len)
        .map(|dot| if position.is_active(dot) { "●" } else { "○" })
        .collect();
    let previous = if position.previous_disabled() { "[ ]" } else { "[‹]" };
    let next = if position.next_disabled() { "[ ]" } else { "[›]" };
    format!(
        "{previous} {} {next}  {}/{}",
        dots.join(" "),
        position.index + 1,
        position.len
    )
}

/// [`CarouselView`] that prints each rendering step to a writer.
pub struct TerminalView<W> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    /// Render into `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// The underlying writer.
    #[cfg(test)]
    pub const fn writer(&self) -> &W {
        &self.out
    }

    fn line(&mut self, text: &str) {
        // A closed terminal must not take the carousel down with it.
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> CarouselView for TerminalView<W> {
    fn begin_transition(&mut self) {
        self.line("  ~");
    }

    fn show_message(&mut self, message: &str) {
        self.line(&format!("\n  “{message}”\n"));
    }

    fn end_transition(&mut self) {}

    fn update_position(&mut self, position: Position) {
        self.line(&format!("  {}", indicator(position)));
    }
}
