//! Keyboard commands accepted by the carousel prompt.

/// One line typed at the carousel prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move to the following message.
    Next,
    /// Move to the preceding message.
    Previous,
    /// Jump to a message by its 1-based number, as shown on the dots.
    Jump(usize),
    /// Leave the preview.
    Quit,
}

impl Command {
    /// Parse a prompt line. Returns `None` for anything unrecognized.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "n" | "next" | ">" => Some(Self::Next),
            "p" | "prev" | "previous" | "<" => Some(Self::Previous),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => line.parse().ok().map(Self::Jump),
        }
    }

    /// Zero-based carousel index for a jump. `0` has no message.
    #[must_use]
    pub const fn jump_index(number: usize) -> Option<usize> {
        number.checked_sub(1)
    }
}

/// Help line printed for unknown input.
pub const HELP: &str = "comandos: n (próxima), p (anterior), 1..N (ir para), q (sair)";
