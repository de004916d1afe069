//! A lock-free interning cache for field values.

use alloc::boxed::Box;

use once_cell::race::OnceBox;

/// A fixed array of slots, one per legal value, each holding at most one
/// canonical instance for the lifetime of the process.
///
/// A slot is written only while it is empty. Racing writers build their own
/// candidate, and every loser discards its candidate and returns the winner,
/// so only one instance per slot is ever observable.
pub(crate) struct InternCache<T: Send + Sync + 'static, const N: usize> {
    slots: [OnceBox<T>; N],
}

impl<T: Send + Sync + 'static, const N: usize> InternCache<T, N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: [const { OnceBox::new() }; N],
        }
    }

    /// Returns the canonical instance of slot `index`, creating it with
    /// `create` if the slot is empty. Returns `None` for an out of range index.
    pub(crate) fn get_or_insert<F>(&'static self, index: usize, create: F) -> Option<&'static T>
    where
        F: FnOnce() -> T,
    {
        let slot = self.slots.get(index)?;
        Some(slot.get_or_init(|| Box::new(create())))
    }
}
