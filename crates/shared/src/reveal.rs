//! One-shot scroll reveal state machine

/// Fraction of an element that must be inside the viewport before it reveals.
/// Handed to the browser observer, which decides when it is crossed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// `Hidden` until the element is first seen, then `Revealed` for good
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    /// Feed one visibility notification, as flagged by the observer.
    ///
    /// Returns `true` only for the notification that caused the transition,
    /// which is the caller's cue to stop observing.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.is_revealed() || !intersecting {
            return false;
        }
        *self = RevealState::Revealed;
        true
    }

    /// Reveal without a visibility notification (no observer available)
    pub fn force(&mut self) -> bool {
        let changed = !self.is_revealed();
        *self = RevealState::Revealed;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert_eq!(RevealState::default(), RevealState::Hidden);
        assert!(!RevealState::default().is_revealed());
    }

    #[test]
    fn test_initial_out_of_view_notification_stays_hidden() {
        // Observers report once on attach, even when nothing is visible
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_reveals_once_when_intersecting() {
        let mut state = RevealState::default();
        assert!(state.observe(true));
        assert!(state.is_revealed());

        // Further notifications never fire again
        assert!(!state.observe(true));
        assert!(!state.observe(true));
    }

    #[test]
    fn test_never_reverts() {
        let mut state = RevealState::default();
        state.observe(true);

        // Scrolled back out of view
        assert!(!state.observe(false));
        assert!(state.is_revealed());
    }

    #[test]
    fn test_scroll_sequence_fires_exactly_once() {
        // Element scrolls in, out and back in again
        let notifications = [false, false, true, true, false, true];
        let mut state = RevealState::default();

        let fired: Vec<usize> = notifications
            .iter()
            .enumerate()
            .filter_map(|(i, &intersecting)| state.observe(intersecting).then_some(i))
            .collect();

        assert_eq!(fired, vec![2]);
        assert!(state.is_revealed());
    }

    #[test]
    fn test_force_reveal() {
        let mut state = RevealState::default();
        assert!(state.force());
        assert!(!state.force());
        assert!(state.is_revealed());
    }

    #[test]
    fn test_force_after_observed_reveal_is_noop() {
        let mut state = RevealState::default();
        state.observe(true);
        assert!(!state.force());
    }
}
