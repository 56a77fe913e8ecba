//! # Focus
//!
//! Exactly one target owns keyboard input: one of the `N` list panes, or the
//! output pane (index `N`). Focus moves cyclically over `0..=N`.

use log::debug;

use crate::core::pane::ListPane;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Pane(usize),
    Output,
}

#[derive(Debug, Clone)]
pub struct FocusController {
    index: usize,
    pane_count: usize,
    output_focused: bool,
}

impl FocusController {
    /// Focus the first pane (or the output pane when there are none) and
    /// sync the panes' flags to match.
    pub fn new(panes: &mut [ListPane]) -> Self {
        let mut focus = Self {
            index: 0,
            pane_count: panes.len(),
            output_focused: false,
        };
        for pane in panes.iter_mut() {
            pane.set_focused(false);
        }
        focus.set_flag(panes, true);
        focus
    }

    pub fn current(&self) -> FocusTarget {
        if self.index < self.pane_count {
            FocusTarget::Pane(self.index)
        } else {
            FocusTarget::Output
        }
    }

    pub fn output_focused(&self) -> bool {
        self.output_focused
    }

    fn set_flag(&mut self, panes: &mut [ListPane], value: bool) {
        match self.current() {
            FocusTarget::Pane(i) => panes[i].set_focused(value),
            FocusTarget::Output => self.output_focused = value,
        }
    }

    fn move_to(&mut self, panes: &mut [ListPane], next: usize) {
        self.set_flag(panes, false);
        self.index = next;
        self.set_flag(panes, true);
        debug!("Focus moved to {:?}", self.current());
    }

    /// Move focus to `(index + 1) mod (N + 1)`.
    pub fn advance(&mut self, panes: &mut [ListPane]) {
        let next = (self.index + 1) % (self.pane_count + 1);
        self.move_to(panes, next);
    }

    /// Inverse of [`advance`](Self::advance).
    pub fn retreat(&mut self, panes: &mut [ListPane]) {
        let slots = self.pane_count + 1;
        let next = (self.index + slots - 1) % slots;
        self.move_to(panes, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pane::PaneKind;

    fn panes(n: usize) -> Vec<ListPane> {
        (0..n)
            .map(|i| ListPane::new(format!("Pane {i}"), PaneKind::Menu, ["x"]))
            .collect()
    }

    fn focused_count(panes: &[ListPane], focus: &FocusController) -> usize {
        panes.iter().filter(|p| p.is_focused()).count() + usize::from(focus.output_focused())
    }

    #[test]
    fn test_starts_on_first_pane() {
        let mut panes = panes(3);
        let focus = FocusController::new(&mut panes);
        assert_eq!(focus.current(), FocusTarget::Pane(0));
        assert!(panes[0].is_focused());
        assert_eq!(focused_count(&panes, &focus), 1);
    }

    #[test]
    fn test_exactly_one_focused_through_advances() {
        let mut panes = panes(4);
        let mut focus = FocusController::new(&mut panes);
        for _ in 0..23 {
            focus.advance(&mut panes);
            assert_eq!(focused_count(&panes, &focus), 1);
            match focus.current() {
                FocusTarget::Pane(i) => assert!(panes[i].is_focused()),
                FocusTarget::Output => assert!(focus.output_focused()),
            }
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut panes = panes(4);
        let mut focus = FocusController::new(&mut panes);
        focus.advance(&mut panes);
        let start = focus.current();
        for _ in 0..5 {
            focus.advance(&mut panes);
        }
        assert_eq!(focus.current(), start);
    }

    #[test]
    fn test_advance_reaches_output_after_last_pane() {
        let mut panes = panes(2);
        let mut focus = FocusController::new(&mut panes);
        focus.advance(&mut panes);
        focus.advance(&mut panes);
        assert_eq!(focus.current(), FocusTarget::Output);
        assert!(!panes[1].is_focused());
        focus.advance(&mut panes);
        assert_eq!(focus.current(), FocusTarget::Pane(0));
        assert!(!focus.output_focused());
    }

    #[test]
    fn test_retreat_undoes_advance() {
        let mut panes = panes(3);
        let mut focus = FocusController::new(&mut panes);
        focus.retreat(&mut panes);
        assert_eq!(focus.current(), FocusTarget::Output);
        focus.advance(&mut panes);
        assert_eq!(focus.current(), FocusTarget::Pane(0));
        assert_eq!(focused_count(&panes, &focus), 1);
    }

    #[test]
    fn test_no_panes_keeps_output_focused() {
        let mut panes = panes(0);
        let mut focus = FocusController::new(&mut panes);
        assert_eq!(focus.current(), FocusTarget::Output);
        focus.advance(&mut panes);
        assert_eq!(focus.current(), FocusTarget::Output);
        assert!(focus.output_focused());
    }
}
