//! Controller core for the event-invitation page.
//!
//! The one stateful component here is [`RevealController`], which owns the
//! page's intersection-observation subscription and replays reveal-on-scroll
//! after a content swap without leaking registrations across generations.
//! Everything else (countdown arithmetic, RSVP form state, music playback
//! state, the dispatch transport) is a direct reaction to a single host
//! event and lives in the satellite modules.
//!
//! Host concerns enter through traits: the page surface ([`RevealSurface`]),
//! the observation mechanism ([`ObserverHost`] / [`ObserverSubscription`]),
//! the audio output ([`audio::AudioSink`]) and the intake endpoint
//! ([`transport::RsvpTransport`]). The GUI supplies real implementations;
//! the test tree substitutes doubles.

use std::collections::HashSet;

use shared::domain::ElementId;

pub mod audio;
pub mod countdown;
pub mod rsvp;
pub mod transport;

/// Fraction of an element's area that must be inside the viewport before it
/// counts as intersecting.
pub const REVEAL_VISIBILITY_THRESHOLD: f32 = 0.15;

/// Host-side view of the page the reveal controller drives.
pub trait RevealSurface {
    /// Handles for every element currently carrying the reveal marker.
    fn reveal_elements(&self) -> Vec<ElementId>;

    /// Whether enough of the element lies within the viewport right now.
    fn is_in_viewport(&self, element: ElementId) -> bool;

    /// Set or clear the element's revealed visual state.
    fn set_revealed(&mut self, element: ElementId, revealed: bool);
}

/// One generation of intersection observation.
pub trait ObserverSubscription {
    fn observe(&mut self, element: ElementId);

    /// Unobserving an element that was never observed, or was already
    /// released, must be a no-op. Generation boundaries make "was this ever
    /// registered here" ambiguous, so the contract absorbs it.
    fn unobserve(&mut self, element: ElementId);
}

/// Creates observation subscriptions on the controller's behalf.
pub trait ObserverHost {
    type Subscription: ObserverSubscription;

    /// A fresh subscription that reports elements once `threshold` of their
    /// area is inside the viewport.
    fn subscribe(&mut self, threshold: f32) -> Self::Subscription;
}

/// One element's intersection state as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub element: ElementId,
    pub is_intersecting: bool,
}

/// Reveal-on-scroll controller.
///
/// Ensures every current reveal element gains its revealed state exactly
/// once per generation: synchronously when it is already in the viewport at
/// [`RevealController::initialize`] time, otherwise on its first reported
/// intersection. The subscription handle and the tracked-element set are
/// owned here; [`RevealController::reset`] atomically replaces both, so no
/// element is ever registered with two generations at once.
pub struct RevealController<S: ObserverSubscription> {
    subscription: Option<S>,
    tracked: HashSet<ElementId>,
    threshold: f32,
}

impl<S: ObserverSubscription> Default for RevealController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ObserverSubscription> RevealController<S> {
    pub fn new() -> Self {
        Self::with_threshold(REVEAL_VISIBILITY_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            subscription: None,
            tracked: HashSet::new(),
            threshold,
        }
    }

    /// The live subscription, if a generation is active. Hosts that poll
    /// rather than push use this to ask which elements are still observed.
    pub fn subscription(&self) -> Option<&S> {
        self.subscription.as_ref()
    }

    /// Number of elements still awaiting their first intersection.
    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }

    /// Start (or restart) observation for the current element set.
    ///
    /// Elements already in the viewport are revealed synchronously and never
    /// registered. Everything else is observed under a fresh subscription,
    /// created only after the previous generation is fully drained.
    pub fn initialize<H>(&mut self, surface: &mut impl RevealSurface, host: &mut H)
    where
        H: ObserverHost<Subscription = S>,
    {
        self.release_generation();

        let mut subscription = host.subscribe(self.threshold);
        for element in surface.reveal_elements() {
            if surface.is_in_viewport(element) {
                surface.set_revealed(element, true);
            } else {
                subscription.observe(element);
                self.tracked.insert(element);
            }
        }
        self.subscription = Some(subscription);
    }

    /// Intersection delivery from the host.
    ///
    /// Intersecting tracked elements are revealed and immediately released
    /// (one-shot). Non-intersecting reports and reports for elements this
    /// generation does not track are ignored; nothing is ever un-revealed.
    pub fn on_intersections(
        &mut self,
        surface: &mut impl RevealSurface,
        entries: &[IntersectionEntry],
    ) {
        let Some(subscription) = self.subscription.as_mut() else {
            return;
        };
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if !self.tracked.remove(&entry.element) {
                continue;
            }
            surface.set_revealed(entry.element, true);
            subscription.unobserve(entry.element);
        }
    }

    /// Clear every element's revealed state and re-run
    /// [`RevealController::initialize`]. This is the entry point the
    /// content-swap collaborator calls after changing page text; calling it
    /// repeatedly accumulates no state.
    pub fn reset<H>(&mut self, surface: &mut impl RevealSurface, host: &mut H)
    where
        H: ObserverHost<Subscription = S>,
    {
        for element in surface.reveal_elements() {
            surface.set_revealed(element, false);
        }
        self.initialize(surface, host);
    }

    /// Unregister everything the current generation tracks and drop its
    /// subscription, so the next generation starts from nothing.
    fn release_generation(&mut self) {
        if let Some(subscription) = self.subscription.as_mut() {
            for element in self.tracked.drain() {
                subscription.unobserve(element);
            }
        }
        self.tracked.clear();
        self.subscription = None;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
