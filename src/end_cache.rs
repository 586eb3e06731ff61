use std::fmt::Debug;

#[cfg(feature = "sync")]
use once_cell::sync::OnceCell;
#[cfg(not(feature = "sync"))]
use once_cell::unsync::OnceCell;

/// Write-once slot for an end position discovered while walking a sequence.
///
/// Cloning yields an empty cache. The clone belongs to a different copy of the
/// sequence, and positions into one copy are meaningless for the other.
pub(crate) struct EndCache<P> {
    slot: OnceCell<P>,
}

impl<P> EndCache<P> {
    pub fn new() -> Self {
        EndCache {
            slot: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Option<&P> {
        self.slot.get()
    }

    /// Returns the cached end, filling it with `f` first if it is empty.
    pub fn get_or_fill_with<F: FnOnce() -> P>(&self, f: F) -> &P {
        self.slot.get_or_init(f)
    }
}

impl<P> Default for EndCache<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for EndCache<P> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<P: Debug> Debug for EndCache<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(end) => write!(f, "EndCache({:?})", end),
            None => write!(f, "EndCache(<empty>)"),
        }
    }
}
