//! The stale-sample guard.

/// A generation token tying location samples to one subscription window.
///
/// Platform positioning watches deliver asynchronously, so a sample can
/// arrive *after* the view that requested it switched circles or tore down.
/// The tracker bumps its generation on every subscribe/unsubscribe and on
/// any active-circle or meeting-spot change; a sample carrying an older
/// token is discarded, never applied.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SubscriptionId(pub u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}
