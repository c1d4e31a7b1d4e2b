//! Toast Slot
//!
//! One visible message at a time. Each `show` bumps the generation and the
//! hide timer only hides the generation it was scheduled for, so a newer
//! message always gets its full display time.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    message: String,
    visible: bool,
    generation: u64,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message; returns the generation to expire later
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = message.into();
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide the toast if `generation` is still the one on screen
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut toast = ToastSlot::new();
        assert!(!toast.is_visible());

        let shown = toast.show("List cleared");
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "List cleared");

        assert!(toast.expire(shown));
        assert!(!toast.is_visible());
        assert!(!toast.expire(shown));
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_message() {
        let mut toast = ToastSlot::new();
        let first = toast.show("Added 2 items");
        let second = toast.show("Share link copied to clipboard!");

        assert!(!toast.expire(first));
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "Share link copied to clipboard!");

        assert!(toast.expire(second));
        assert!(!toast.is_visible());
    }
}
