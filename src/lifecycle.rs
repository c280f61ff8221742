//! Timer-driven lifecycle shared by the welcome toast and cookie banner.
//!
//! An overlay is mounted hidden, fades in, fades out on dismissal and is
//! finally unmounted. Transitions that do not apply to the current phase
//! are ignored, which makes a second dismissal (close button racing the
//! auto-dismiss timer) harmless.

use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Mounted,
    Visible,
    Leaving,
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Show,
    Dismiss,
    Remove,
}

impl Phase {
    pub fn next(self, transition: Transition) -> Phase {
        match (self, transition) {
            (Phase::Mounted, Transition::Show) => Phase::Visible,
            (Phase::Mounted | Phase::Visible, Transition::Dismiss) => Phase::Leaving,
            (Phase::Leaving, Transition::Remove) => Phase::Removed,
            (phase, _) => phase,
        }
    }

    /// Whether the `visible` class is applied.
    pub fn is_visible(self) -> bool {
        self == Phase::Visible
    }

    /// Whether the node is still attached to the document.
    pub fn is_attached(self) -> bool {
        self != Phase::Removed
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Overlay {
    pub phase: Phase,
}

impl Reducible for Overlay {
    type Action = Transition;

    fn reduce(self: Rc<Self>, action: Transition) -> Rc<Self> {
        let phase = self.phase.next(action);
        if phase == self.phase {
            self
        } else {
            Rc::new(Overlay { phase })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle() {
        let phase = Phase::Mounted;
        assert!(!phase.is_visible());
        let phase = phase.next(Transition::Show);
        assert!(phase.is_visible());
        let phase = phase.next(Transition::Dismiss);
        assert_eq!(phase, Phase::Leaving);
        assert!(phase.is_attached());
        let phase = phase.next(Transition::Remove);
        assert!(!phase.is_attached());
    }

    #[test]
    fn double_dismiss_is_noop() {
        let leaving = Phase::Visible.next(Transition::Dismiss);
        assert_eq!(leaving.next(Transition::Dismiss), Phase::Leaving);
        let removed = leaving.next(Transition::Remove);
        assert_eq!(removed.next(Transition::Dismiss), Phase::Removed);
        assert_eq!(removed.next(Transition::Show), Phase::Removed);
    }

    #[test]
    fn late_show_after_dismiss_stays_hidden() {
        let phase = Phase::Mounted.next(Transition::Dismiss);
        assert_eq!(phase.next(Transition::Show), Phase::Leaving);
    }

    #[test]
    fn remove_only_after_leaving() {
        assert_eq!(Phase::Visible.next(Transition::Remove), Phase::Visible);
    }

    #[test]
    fn reducer_keeps_same_rc_on_noop() {
        let overlay = Rc::new(Overlay { phase: Phase::Removed });
        let next = overlay.clone().reduce(Transition::Dismiss);
        assert!(Rc::ptr_eq(&overlay, &next));
    }
}
