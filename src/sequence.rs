//! Capability traits for sequences that can be walked through explicit positions.
//!
//! A sequence hands out positions (`Pos`) and is asked to move them around. The
//! traits are layered so that a view built on top of a sequence only offers the
//! operations the sequence can actually support.

mod sealed {
    pub trait Sealed {}
}

/// Whether a sequence ever reaches its end.
pub trait Extent: sealed::Sealed {}

/// The sequence has an end position that a forward walk reaches eventually.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Finite;

/// The sequence never ends.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Unbounded;

impl sealed::Sealed for Finite {}
impl sealed::Sealed for Unbounded {}
impl Extent for Finite {}
impl Extent for Unbounded {}

pub trait ForwardSequence {
    type Item;
    type Pos: Clone + PartialEq;
    type Extent: Extent;

    fn start(&self) -> Self::Pos;

    /// True if `pos` is the end of the sequence, i.e. one past the last element.
    fn is_end(&self, pos: &Self::Pos) -> bool;

    /// Element at `pos`. Must not be called with an end position.
    fn read<'s>(&'s self, pos: &Self::Pos) -> &'s Self::Item;

    fn step(&self, pos: &mut Self::Pos);

    /// The end position, if it can be produced without walking the sequence.
    ///
    /// Sequences whose end is only recognizable by visiting it (a sentinel,
    /// say) keep the default and return `None`.
    fn known_end(&self) -> Option<Self::Pos> {
        None
    }

    fn is_empty(&self) -> bool {
        self.is_end(&self.start())
    }

    fn walk(&self) -> Walk<'_, Self> {
        Walk {
            pos: self.start(),
            sequence: self,
        }
    }
}

pub trait BidirectionalSequence: ForwardSequence {
    /// Moves `pos` one element back. Must not be called with the start position.
    fn step_back(&self, pos: &mut Self::Pos);
}

pub trait MeasurableSequence: ForwardSequence {
    /// Number of steps from `from` to `to`, negative if `to` comes first.
    fn distance(&self, from: &Self::Pos, to: &Self::Pos) -> isize;
}

pub trait RandomAccessSequence: BidirectionalSequence + MeasurableSequence {
    /// Moves `pos` by `n` elements in constant time. The result must lie
    /// between the start and the end of the sequence, inclusive.
    fn jump(&self, pos: &mut Self::Pos, n: isize);
}

impl<S: ForwardSequence + ?Sized> ForwardSequence for &S {
    type Item = S::Item;
    type Pos = S::Pos;
    type Extent = S::Extent;

    fn start(&self) -> Self::Pos {
        (**self).start()
    }

    fn is_end(&self, pos: &Self::Pos) -> bool {
        (**self).is_end(pos)
    }

    fn read<'s>(&'s self, pos: &Self::Pos) -> &'s Self::Item {
        (**self).read(pos)
    }

    fn step(&self, pos: &mut Self::Pos) {
        (**self).step(pos)
    }

    fn known_end(&self) -> Option<Self::Pos> {
        (**self).known_end()
    }
}

impl<S: BidirectionalSequence + ?Sized> BidirectionalSequence for &S {
    fn step_back(&self, pos: &mut Self::Pos) {
        (**self).step_back(pos)
    }
}

impl<S: MeasurableSequence + ?Sized> MeasurableSequence for &S {
    fn distance(&self, from: &Self::Pos, to: &Self::Pos) -> isize {
        (**self).distance(from, to)
    }
}

impl<S: RandomAccessSequence + ?Sized> RandomAccessSequence for &S {
    fn jump(&self, pos: &mut Self::Pos, n: isize) {
        (**self).jump(pos, n)
    }
}

/// Iterator over the elements of a sequence, front to back.
pub struct Walk<'a, S: ForwardSequence + ?Sized> {
    sequence: &'a S,
    pos: S::Pos,
}

impl<'a, S: ForwardSequence + ?Sized> Walk<'a, S> {
    pub fn position(&self) -> &S::Pos {
        &self.pos
    }
}

impl<'a, S: ForwardSequence + ?Sized> Clone for Walk<'a, S> {
    fn clone(&self) -> Self {
        Walk {
            sequence: self.sequence,
            pos: self.pos.clone(),
        }
    }
}

impl<'a, S: ForwardSequence + ?Sized> Iterator for Walk<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sequence.is_end(&self.pos) {
            None
        } else {
            let item = self.sequence.read(&self.pos);
            self.sequence.step(&mut self.pos);
            Some(item)
        }
    }
}
