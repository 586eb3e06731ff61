use crate::cycle_cursor::CycleCursor;
use crate::sequence::{Finite, ForwardSequence, Walk};

/// End marker of a sequence that never ends. No position ever compares equal
/// to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unreachable;

impl<'a, S: ForwardSequence<Extent = Finite>> PartialEq<Unreachable> for CycleCursor<'a, S> {
    fn eq(&self, _: &Unreachable) -> bool {
        false
    }
}

impl<'a, S: ForwardSequence<Extent = Finite>> PartialEq<CycleCursor<'a, S>> for Unreachable {
    fn eq(&self, _: &CycleCursor<'a, S>) -> bool {
        false
    }
}

impl<'a, S: ForwardSequence + ?Sized> PartialEq<Unreachable> for Walk<'a, S> {
    fn eq(&self, _: &Unreachable) -> bool {
        false
    }
}
