// SPDX-License-Identifier: MPL-2.0
//! Page scroll locking.
//!
//! The page column has one piece of shared style, [`BodyStyle`]: whether it
//! scrolls and how much right padding it carries. Overlays that need the page
//! frozen take a lock instead of writing the style directly.
//!
//! Each [`ScrollLock::acquire`] records the style it replaced and each
//! [`ScrollLock::release`] restores exactly that value. Releasing out of
//! order is fine: the recorded value is handed to the next holder up, so the
//! page stays hidden while anyone still holds a lock and returns to the
//! original style once the last lock is gone.

use std::fmt;

/// Scroll behaviour of the page column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// No explicit value; behaves like `Auto`.
    #[default]
    Unset,
    Visible,
    Hidden,
    Auto,
    Scroll,
}

impl Overflow {
    /// Parses a CSS-like keyword. Empty or unknown input is `Unset`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "visible" => Overflow::Visible,
            "hidden" => Overflow::Hidden,
            "auto" => Overflow::Auto,
            "scroll" => Overflow::Scroll,
            _ => Overflow::Unset,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Overflow::Unset => "",
            Overflow::Visible => "visible",
            Overflow::Hidden => "hidden",
            Overflow::Auto => "auto",
            Overflow::Scroll => "scroll",
        }
    }

    /// Whether the user can scroll the page and a scrollbar is drawn.
    #[must_use]
    pub fn scrolls(self) -> bool {
        !matches!(self, Overflow::Hidden)
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyStyle {
    pub overflow: Overflow,
    /// Extra right padding compensating for a hidden scrollbar.
    pub padding_right: f32,
}

impl BodyStyle {
    #[must_use]
    pub fn with_overflow(overflow: Overflow) -> Self {
        Self {
            overflow,
            padding_right: 0.0,
        }
    }
}

/// Proof of a held lock. Not `Clone`: each lock is released once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a token without releasing it leaves the page locked"]
pub struct LockToken(u64);

#[derive(Debug, Clone, Copy)]
struct Holder {
    id: u64,
    previous: BodyStyle,
}

#[derive(Debug, Default)]
pub struct ScrollLock {
    current: BodyStyle,
    holders: Vec<Holder>,
    next_id: u64,
}

impl ScrollLock {
    #[must_use]
    pub fn new(initial: BodyStyle) -> Self {
        Self {
            current: initial,
            holders: Vec::new(),
            next_id: 1,
        }
    }

    /// Hides the page scrollbar and pads the page by `scrollbar_width` so
    /// content does not shift.
    pub fn acquire(&mut self, scrollbar_width: f32) -> LockToken {
        let id = self.next_id;
        self.next_id += 1;

        let previous = self.current;
        // Only compensate when a scrollbar was actually drawn.
        let compensation = if previous.overflow.scrolls() {
            scrollbar_width.max(0.0)
        } else {
            0.0
        };
        self.holders.push(Holder { id, previous });
        self.current = BodyStyle {
            overflow: Overflow::Hidden,
            padding_right: previous.padding_right + compensation,
        };
        tracing::trace!(holders = self.holders.len(), "scroll lock acquired");
        LockToken(id)
    }

    /// Releases a lock. Unknown tokens are ignored.
    pub fn release(&mut self, token: LockToken) {
        let Some(position) = self.holders.iter().position(|h| h.id == token.0) else {
            tracing::warn!(token = token.0, "release of unknown scroll lock");
            return;
        };

        let holder = self.holders.remove(position);
        if position == self.holders.len() {
            // Topmost holder: restore what it replaced.
            self.current = holder.previous;
        } else {
            // The holder above captured our style; give it ours instead.
            self.holders[position].previous = holder.previous;
        }
        tracing::trace!(holders = self.holders.len(), "scroll lock released");
    }

    /// Writes the style directly, as an unrelated component would.
    ///
    /// While locks are held the write is recorded as the value to restore
    /// once they are all released.
    pub fn set_style(&mut self, style: BodyStyle) {
        match self.holders.first_mut() {
            Some(bottom) => bottom.previous = style,
            None => self.current = style,
        }
    }

    #[must_use]
    pub fn style(&self) -> BodyStyle {
        self.current
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }
}
