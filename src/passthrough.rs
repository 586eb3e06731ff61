use crate::sequence::{
    BidirectionalSequence, ForwardSequence, MeasurableSequence, RandomAccessSequence, Unbounded,
    Walk,
};
use crate::unreachable::Unreachable;

/// What cycling an unbounded sequence produces: the sequence itself, with no
/// lap bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Passthrough<S> {
    source: S,
}

impl<S: ForwardSequence<Extent = Unbounded>> Passthrough<S> {
    pub fn new(source: S) -> Self {
        Passthrough { source }
    }

    pub fn begin(&self) -> Walk<'_, S> {
        self.source.walk()
    }

    pub fn end(&self) -> Unreachable {
        Unreachable
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ForwardSequence<Extent = Unbounded>> ForwardSequence for Passthrough<S> {
    type Item = S::Item;
    type Pos = S::Pos;
    type Extent = Unbounded;

    fn start(&self) -> Self::Pos {
        self.source.start()
    }

    fn is_end(&self, pos: &Self::Pos) -> bool {
        self.source.is_end(pos)
    }

    fn read<'s>(&'s self, pos: &Self::Pos) -> &'s Self::Item {
        self.source.read(pos)
    }

    fn step(&self, pos: &mut Self::Pos) {
        self.source.step(pos)
    }

    fn known_end(&self) -> Option<Self::Pos> {
        self.source.known_end()
    }
}

impl<S: BidirectionalSequence<Extent = Unbounded>> BidirectionalSequence for Passthrough<S> {
    fn step_back(&self, pos: &mut Self::Pos) {
        self.source.step_back(pos)
    }
}

impl<S: MeasurableSequence<Extent = Unbounded>> MeasurableSequence for Passthrough<S> {
    fn distance(&self, from: &Self::Pos, to: &Self::Pos) -> isize {
        self.source.distance(from, to)
    }
}

impl<S: RandomAccessSequence<Extent = Unbounded>> RandomAccessSequence for Passthrough<S> {
    fn jump(&self, pos: &mut Self::Pos, n: isize) {
        self.source.jump(pos, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle;
    use crate::repeat::repeat;

    #[test]
    fn positions_are_the_source_positions() {
        let view = cycle(repeat(7u8));
        let mut pos = view.start();
        view.jump(&mut pos, 1000);
        view.step_back(&mut pos);
        assert_eq!(pos, 999);
        assert_eq!(view.distance(&view.start(), &pos), 999);
        assert_eq!(*view.read(&pos), 7);
        assert_eq!(view.into_inner(), repeat(7u8));
    }

    #[test]
    fn cycling_twice_keeps_passing_through() {
        let once = cycle(repeat('q'));
        let twice: Passthrough<Passthrough<_>> = cycle(once);
        assert_eq!(twice.begin().nth(41), Some(&'q'));
    }
}
