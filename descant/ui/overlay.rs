//! Ownership broker for the single on-screen overlay slot.
//!
//! At most one overlay kind is visible at a time. Components acquire the
//! slot by kind instead of sharing a global handle, so mutual exclusion
//! holds without the components knowing about each other.

/// Which overlay family owns the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind {
  Autocomplete,
  Hover,
  Picker,
}

/// Outcome of an acquisition attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acquire {
  /// The caller already held the slot; it must not re-show itself.
  AlreadyHeld,
  /// The slot now belongs to the caller; `evicted` names the kind that lost
  /// it, if any.
  Granted { evicted: Option<OverlayKind> },
}

#[derive(Debug, Default)]
pub struct OverlayBroker {
  current: Option<OverlayKind>,
}

impl OverlayBroker {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn current(&self) -> Option<OverlayKind> {
    self.current
  }

  pub fn acquire(&mut self, kind: OverlayKind) -> Acquire {
    if self.current == Some(kind) {
      return Acquire::AlreadyHeld;
    }
    let evicted = self.current.replace(kind);
    if let Some(previous) = evicted {
      log::debug!("overlay {previous:?} evicted by {kind:?}");
    }
    Acquire::Granted { evicted }
  }

  /// Releasing a kind that does not hold the slot is a no-op.
  pub fn release(&mut self, kind: OverlayKind) {
    if self.current == Some(kind) {
      self.current = None;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_acquire_is_granted_without_eviction() {
    let mut broker = OverlayBroker::new();
    assert_eq!(broker.acquire(OverlayKind::Autocomplete), Acquire::Granted {
      evicted: None
    });
    assert_eq!(broker.current(), Some(OverlayKind::Autocomplete));
  }

  #[test]
  fn reacquiring_the_held_slot_reports_already_held() {
    let mut broker = OverlayBroker::new();
    broker.acquire(OverlayKind::Autocomplete);
    assert_eq!(
      broker.acquire(OverlayKind::Autocomplete),
      Acquire::AlreadyHeld
    );
  }

  #[test]
  fn a_different_kind_evicts_the_holder() {
    let mut broker = OverlayBroker::new();
    broker.acquire(OverlayKind::Hover);
    assert_eq!(broker.acquire(OverlayKind::Autocomplete), Acquire::Granted {
      evicted: Some(OverlayKind::Hover)
    });
    assert_eq!(broker.current(), Some(OverlayKind::Autocomplete));
  }

  #[test]
  fn release_only_affects_the_holder() {
    let mut broker = OverlayBroker::new();
    broker.acquire(OverlayKind::Autocomplete);
    broker.release(OverlayKind::Hover);
    assert_eq!(broker.current(), Some(OverlayKind::Autocomplete));
    broker.release(OverlayKind::Autocomplete);
    assert_eq!(broker.current(), None);
  }
}
