//! Selection controller: which body is shown and whether the detail view is open.
//!
//! ```text
//!            select(X)                 request_close()            elapse(ticket)
//!  Closed ─────────────▶ Open(X) ─────────────────────▶ Closing(X) ─────────────▶ Closed
//!                          ▲                                 │
//!                          └──────────── select(Y) ──────────┘
//! ```
//!
//! The controller never touches a clock. `request_close` hands out a
//! [`CloseTicket`]; the host schedules a timer for [`SelectionController::close_delay`]
//! and registers its handle with [`SelectionController::arm`]. When the timer
//! fires the host calls [`SelectionController::elapse`] with the ticket.
//!
//! Every `select` and `teardown` bumps the generation, so a ticket from an
//! earlier close can never clear a newer selection, and both return the
//! pending timer handle so the host can cancel it. Last selection always wins.

use std::time::Duration;

use crate::types::CelestialBody;

/// Default delay between closing the detail view and clearing the selection.
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Coarse state of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected, view closed
    Closed,
    /// Body selected, view open
    Open,
    /// View closed, selection kept until the close delay elapses
    Closing,
}

/// Proof that a close was requested at a particular generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

/// Selection state plus the pending close timer handle `H`.
#[derive(Clone, Debug)]
pub struct SelectionController<H> {
    selected: Option<CelestialBody>,
    open: bool,
    generation: u64,
    pending: Option<H>,
    close_delay: Duration,
}

impl<H> Default for SelectionController<H> {
    fn default() -> Self {
        Self::new(DEFAULT_CLOSE_DELAY)
    }
}

impl<H> SelectionController<H> {
    /// Fresh controller in the `Closed` state.
    pub fn new(close_delay: Duration) -> Self {
        Self {
            selected: None,
            open: false,
            generation: 0,
            pending: None,
            close_delay,
        }
    }

    /// How long the host should wait before calling [`Self::elapse`].
    pub fn close_delay(&self) -> Duration {
        self.close_delay
    }

    /// Open the detail view for `body`, replacing any prior selection.
    ///
    /// Returns the pending close timer, if any; the caller must cancel it.
    #[must_use = "a returned handle belongs to a timer that must be cancelled"]
    pub fn select(&mut self, body: CelestialBody) -> Option<H> {
        let stale = self.pending.take();
        self.generation += 1;
        tracing::debug!(
            id = %body.id,
            superseded = stale.is_some(),
            "selection opened"
        );
        self.selected = Some(body);
        self.open = true;
        stale
    }

    /// Close the view, keeping the selection until the delay elapses.
    ///
    /// Returns `None` when the view is not open, so repeated close requests
    /// (button, Escape and backdrop in quick succession) schedule one timer.
    pub fn request_close(&mut self) -> Option<CloseTicket> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.generation += 1;
        tracing::debug!(
            id = self.selected.as_ref().map(|b| b.id.as_str()),
            "selection closing"
        );
        Some(CloseTicket(self.generation))
    }

    /// Register the timer scheduled for `ticket`.
    ///
    /// If the ticket is no longer current (a new selection arrived first, or
    /// the timer already fired) the handle is returned for cancellation.
    #[must_use = "a returned handle belongs to a timer that must be cancelled"]
    pub fn arm(&mut self, ticket: CloseTicket, handle: H) -> Option<H> {
        if self.is_current(ticket) && self.phase() == Phase::Closing {
            self.pending.replace(handle)
        } else {
            Some(handle)
        }
    }

    /// The close delay for `ticket` elapsed. Clears the selection if the
    /// ticket is still current; returns whether anything changed.
    pub fn elapse(&mut self, ticket: CloseTicket) -> bool {
        if !self.is_current(ticket) || self.phase() != Phase::Closing {
            tracing::debug!(?ticket, "stale close timer ignored");
            return false;
        }
        self.pending = None;
        self.selected = None;
        tracing::debug!("selection cleared");
        true
    }

    /// Reset to `Closed` when the owning view goes away.
    ///
    /// Returns the pending timer handle; the caller must cancel it. Any
    /// ticket handed out earlier becomes stale.
    #[must_use = "a returned handle belongs to a timer that must be cancelled"]
    pub fn teardown(&mut self) -> Option<H> {
        self.generation += 1;
        self.open = false;
        self.selected = None;
        self.pending.take()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match (self.open, self.selected.is_some()) {
            (true, true) => Phase::Open,
            (false, true) => Phase::Closing,
            _ => Phase::Closed,
        }
    }

    /// The selected body, including while closing.
    pub fn selected(&self) -> Option<&CelestialBody> {
        self.selected.as_ref()
    }

    /// Whether the detail view is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The body the detail view should show: only while open.
    pub fn visible(&self) -> Option<&CelestialBody> {
        if self.open { self.selected.as_ref() } else { None }
    }

    /// Whether a close timer is registered.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn is_current(&self, ticket: CloseTicket) -> bool {
        ticket.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn body(id: &str) -> CelestialBody {
        Catalog::bundled().get(id).cloned().expect("bundled body")
    }

    fn controller() -> SelectionController<u32> {
        SelectionController::new(DEFAULT_CLOSE_DELAY)
    }

    #[test]
    fn starts_closed() {
        let selection = controller();
        assert_eq!(selection.phase(), Phase::Closed);
        assert!(selection.selected().is_none());
        assert!(!selection.is_open());
        assert_eq!(selection.close_delay(), Duration::from_millis(300));
    }

    #[test]
    fn select_opens_and_overwrites() {
        let mut selection = controller();
        assert_eq!(selection.select(body("mars")), None);
        assert_eq!(selection.select(body("venus")), None);
        assert_eq!(selection.phase(), Phase::Open);
        assert_eq!(selection.visible().map(|b| b.id.as_str()), Some("venus"));
    }

    #[test]
    fn close_keeps_selection_until_elapsed() {
        let mut selection = controller();
        let _ = selection.select(body("mars"));
        let ticket = selection.request_close().expect("open view closes");
        assert_eq!(selection.arm(ticket, 7), None);

        assert_eq!(selection.phase(), Phase::Closing);
        assert!(selection.visible().is_none());
        assert_eq!(selection.selected().map(|b| b.id.as_str()), Some("mars"));
        assert!(selection.has_pending());

        assert!(selection.elapse(ticket));
        assert_eq!(selection.phase(), Phase::Closed);
        assert!(!selection.has_pending());
    }

    #[test]
    fn reselect_during_close_cancels_stale_timer() {
        let mut selection = controller();
        let _ = selection.select(body("mars"));
        let ticket = selection.request_close().unwrap();
        assert_eq!(selection.arm(ticket, 41), None);

        // The pending handle comes back so the host can cancel it.
        assert_eq!(selection.select(body("jupiter")), Some(41));

        // Even if the host failed to cancel, the stale ticket is inert.
        assert!(!selection.elapse(ticket));
        assert_eq!(selection.phase(), Phase::Open);
        assert_eq!(selection.visible().map(|b| b.id.as_str()), Some("jupiter"));
    }

    #[test]
    fn reselect_same_body_during_close_wins() {
        let mut selection = controller();
        let _ = selection.select(body("moon"));
        let ticket = selection.request_close().unwrap();
        let _ = selection.select(body("moon"));
        assert!(!selection.elapse(ticket));
        assert_eq!(selection.phase(), Phase::Open);
    }

    #[test]
    fn repeated_close_requests_schedule_once() {
        let mut selection = controller();
        let _ = selection.select(body("earth"));
        assert!(selection.request_close().is_some());
        assert!(selection.request_close().is_none());
        assert!(controller().request_close().is_none());
    }

    #[test]
    fn arming_a_stale_ticket_hands_back_the_handle() {
        let mut selection = controller();
        let _ = selection.select(body("earth"));
        let ticket = selection.request_close().unwrap();
        let _ = selection.select(body("mars"));
        assert_eq!(selection.arm(ticket, 3), Some(3));
        assert!(!selection.has_pending());
    }

    #[test]
    fn overlapping_close_cycles_only_latest_timer_clears() {
        let mut selection = controller();
        let _ = selection.select(body("mars"));
        let first = selection.request_close().unwrap();
        assert_eq!(selection.arm(first, 1), None);

        assert_eq!(selection.select(body("venus")), Some(1));
        let second = selection.request_close().unwrap();
        assert_eq!(selection.arm(second, 2), None);

        assert!(!selection.elapse(first));
        assert_eq!(selection.selected().map(|b| b.id.as_str()), Some("venus"));
        assert!(selection.elapse(second));
        assert_eq!(selection.phase(), Phase::Closed);
    }

    #[test]
    fn teardown_returns_pending_and_invalidates_tickets() {
        let mut selection = controller();
        let _ = selection.select(body("saturn"));
        let ticket = selection.request_close().unwrap();
        assert_eq!(selection.arm(ticket, 9), None);

        assert_eq!(selection.teardown(), Some(9));
        assert_eq!(selection.phase(), Phase::Closed);
        assert!(!selection.elapse(ticket));
    }
}
