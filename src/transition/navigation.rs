/// Single-slot holder for the destination of an in-flight exit.
///
/// First writer wins; the slot is read-and-cleared exactly once when the cover completes.
#[derive(Clone, Debug, Default)]
pub struct NavigationCoordinator {
    pending: Option<String>,
}

impl NavigationCoordinator {
    /// Empty coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `target` unless one is already pending. Returns whether it was stored.
    pub fn stash(&mut self, target: impl Into<String>) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(target.into());
        true
    }

    /// Read and clear the pending target.
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// Pending target, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/navigation.rs"]
mod tests;
