//! Texture load tracking for the texture-mapped tiers.
//!
//! A marker never waits on its texture. It renders a placeholder while the
//! slot is pending and degrades to the procedural gradient on failure. Each
//! `begin` issues a new ticket so a slow response for an old url cannot
//! overwrite the result for a newer one.

use crate::fidelity::FidelityTier;

/// Load state of one texture slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureState {
    /// Nothing requested
    #[default]
    Idle,
    /// Request in flight
    Pending,
    /// Texture decoded and usable
    Ready,
    /// Request failed
    Failed,
}

/// Identifies one `begin` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureTicket(u64);

/// What the marker should draw for a texture tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TexturePresentation {
    /// Wireframe placeholder while loading
    Placeholder,
    /// The textured sphere
    Textured,
    /// Fall back to this tier
    Degraded(FidelityTier),
}

/// Tracks the most recent texture request for one marker.
#[derive(Clone, Debug, Default)]
pub struct TextureSlot {
    url: Option<String>,
    generation: u64,
    state: TextureState,
}

impl TextureSlot {
    /// Start loading `url`, superseding any earlier request.
    pub fn begin(&mut self, url: impl Into<String>) -> TextureTicket {
        self.generation += 1;
        self.url = Some(url.into());
        self.state = TextureState::Pending;
        TextureTicket(self.generation)
    }

    /// Record the outcome for `ticket`. Returns false for stale tickets.
    pub fn resolve(&mut self, ticket: TextureTicket, ok: bool) -> bool {
        if ticket.0 != self.generation || self.state != TextureState::Pending {
            return false;
        }
        self.state = if ok {
            TextureState::Ready
        } else {
            tracing::warn!(url = self.url.as_deref(), "texture failed to load");
            TextureState::Failed
        };
        true
    }

    /// Drop the in-flight request, if any.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.url = None;
        self.state = TextureState::Idle;
    }

    /// Current state.
    pub fn state(&self) -> TextureState {
        self.state
    }

    /// Url of the latest request.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// What to draw for `tier` given the current state.
    pub fn presentation(&self, tier: FidelityTier) -> TexturePresentation {
        match self.state {
            TextureState::Ready => TexturePresentation::Textured,
            TextureState::Failed | TextureState::Idle => TexturePresentation::Degraded(tier.degraded()),
            TextureState::Pending => TexturePresentation::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pending_shows_placeholder_then_texture() {
        let mut slot = TextureSlot::default();
        let ticket = slot.begin("/textures/mars.jpg");
        assert_eq!(slot.presentation(FidelityTier::Textured), TexturePresentation::Placeholder);
        assert!(slot.resolve(ticket, true));
        assert_eq!(slot.state(), TextureState::Ready);
        assert_eq!(slot.presentation(FidelityTier::Textured), TexturePresentation::Textured);
    }

    #[test]
    fn failure_degrades_to_gradient() {
        let mut slot = TextureSlot::default();
        let ticket = slot.begin("/textures/missing.jpg");
        assert!(slot.resolve(ticket, false));
        assert_eq!(
            slot.presentation(FidelityTier::Shaded),
            TexturePresentation::Degraded(FidelityTier::Gradient)
        );
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut slot = TextureSlot::default();
        let old = slot.begin("/textures/2k_earth.jpg");
        let new = slot.begin("/textures/8k_earth.jpg");

        assert!(!slot.resolve(old, false));
        assert_eq!(slot.state(), TextureState::Pending);
        assert!(slot.resolve(new, true));
        assert!(!slot.resolve(new, false));
        assert_eq!(slot.state(), TextureState::Ready);
        assert_eq!(slot.url(), Some("/textures/8k_earth.jpg"));
    }

    #[test]
    fn cancel_invalidates_in_flight_ticket() {
        let mut slot = TextureSlot::default();
        let ticket = slot.begin("/textures/sun.jpg");
        slot.cancel();
        assert!(!slot.resolve(ticket, true));
        assert_eq!(slot.state(), TextureState::Idle);
    }
}
