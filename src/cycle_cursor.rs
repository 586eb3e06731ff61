use std::fmt::Debug;
use std::iter::FusedIterator;
use std::ptr;

use crate::cycled::{Cycled, Lapped};
use crate::error::CycleError;
use crate::sequence::{
    BidirectionalSequence, Finite, ForwardSequence, MeasurableSequence, RandomAccessSequence,
};

/// A position in a [`Cycled`] view.
///
/// Which movements are available depends on the source: every source can be
/// stepped forward, bidirectional sources can step back, and random access
/// sources can jump any distance in constant time.
pub struct CycleCursor<'a, S: ForwardSequence> {
    view: &'a Cycled<S>,
    at: Lapped<S::Pos>,
}

impl<'a, S: ForwardSequence<Extent = Finite>> CycleCursor<'a, S> {
    pub(crate) fn new(view: &'a Cycled<S>, at: Lapped<S::Pos>) -> Self {
        CycleCursor { view, at }
    }

    pub fn read(&self) -> &'a S::Item {
        ForwardSequence::read(self.view, &self.at)
    }

    /// Number of complete passes over the source made before reaching this
    /// position.
    pub fn lap(&self) -> isize {
        self.at.lap
    }

    /// Position within the source.
    pub fn position(&self) -> &S::Pos {
        &self.at.pos
    }

    pub fn lapped(&self) -> &Lapped<S::Pos> {
        &self.at
    }

    pub fn view(&self) -> &'a Cycled<S> {
        self.view
    }

    pub fn is_same_view(&self, other: &Self) -> bool {
        ptr::eq(self.view, other.view)
    }

    /// Moves to the next element, wrapping around to the start of the source
    /// and counting a lap when the end of the source is reached.
    pub fn step_forward(&mut self) {
        ForwardSequence::step(self.view, &mut self.at);
    }
}

impl<'a, S: BidirectionalSequence<Extent = Finite>> CycleCursor<'a, S> {
    /// Panics when called on the very first position of the cycle.
    pub fn step_back(&mut self) {
        BidirectionalSequence::step_back(self.view, &mut self.at);
    }

    pub fn try_step_back(&mut self) -> Result<(), CycleError> {
        self.view.try_step_back_lapped(&mut self.at)
    }
}

impl<'a, S: MeasurableSequence<Extent = Finite>> CycleCursor<'a, S> {
    /// Signed number of steps from this position to `other`.
    ///
    /// Panics if the positions belong to different views.
    pub fn distance_to(&self, other: &Self) -> isize {
        assert!(
            self.is_same_view(other),
            "cannot measure between positions of different cycled views"
        );
        MeasurableSequence::distance(self.view, &self.at, &other.at)
    }

    /// Number of steps from the beginning of the cycle to this position.
    pub fn logical_index(&self) -> isize {
        MeasurableSequence::distance(self.view, &self.view.start(), &self.at)
    }
}

impl<'a, S: RandomAccessSequence<Extent = Finite>> CycleCursor<'a, S> {
    /// Moves `n` elements forward, or backward if `n` is negative, in constant
    /// time regardless of how many laps are crossed.
    ///
    /// Panics if that would move before the beginning of the cycle.
    pub fn advance_by(&mut self, n: isize) {
        RandomAccessSequence::jump(self.view, &mut self.at, n);
    }

    /// Like [`advance_by`](Self::advance_by) but leaves the position unchanged
    /// and returns an error instead of panicking.
    pub fn try_advance_by(&mut self, n: isize) -> Result<(), CycleError> {
        self.view.try_jump_lapped(&mut self.at, n)
    }
}

impl<'a, S: ForwardSequence> Clone for CycleCursor<'a, S> {
    fn clone(&self) -> Self {
        CycleCursor {
            view: self.view,
            at: self.at.clone(),
        }
    }
}

// Positions from different views are simply unequal.
impl<'a, S: ForwardSequence> PartialEq for CycleCursor<'a, S> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.view, other.view) && self.at == other.at
    }
}

impl<'a, S> Debug for CycleCursor<'a, S>
where
    S: ForwardSequence,
    S::Pos: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CycleCursor")
            .field("pos", &self.at.pos)
            .field("lap", &self.at.lap)
            .finish()
    }
}

impl<'a, S: ForwardSequence<Extent = Finite>> Iterator for CycleCursor<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.read();
        self.step_forward();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<'a, S: ForwardSequence<Extent = Finite>> FusedIterator for CycleCursor<'a, S> {}
