use crate::sequence::{
    BidirectionalSequence, Finite, ForwardSequence, MeasurableSequence, RandomAccessSequence,
};

/// The prefix of a slice that precedes the first occurrence of a terminator
/// value, in the manner of a NUL-terminated string.
///
/// The end is only found by looking at elements, so `known_end` stays `None`
/// and a cycle over it has to discover and cache the end itself. The slice
/// need not contain the terminator; the end of the slice also ends the
/// sequence.
#[derive(Debug, Clone, Copy)]
pub struct Terminated<'a, T> {
    items: &'a [T],
    terminator: T,
}

impl<'a, T: PartialEq> Terminated<'a, T> {
    pub fn new(items: &'a [T], terminator: T) -> Self {
        assert!(items.len() <= isize::MAX as usize, "Slice too large");
        Terminated { items, terminator }
    }
}

impl<'a, T: PartialEq> ForwardSequence for Terminated<'a, T> {
    type Item = T;
    type Pos = usize;
    type Extent = Finite;

    fn start(&self) -> usize {
        0
    }

    fn is_end(&self, pos: &usize) -> bool {
        *pos >= self.items.len() || self.items[*pos] == self.terminator
    }

    fn read<'s>(&'s self, pos: &usize) -> &'s T {
        &self.items[*pos]
    }

    fn step(&self, pos: &mut usize) {
        assert!(!self.is_end(pos), "Cannot step past the end");
        *pos += 1;
    }
}

impl<'a, T: PartialEq> BidirectionalSequence for Terminated<'a, T> {
    fn step_back(&self, pos: &mut usize) {
        assert!(*pos > 0, "Cannot step back past the start");
        *pos -= 1;
    }
}

impl<'a, T: PartialEq> MeasurableSequence for Terminated<'a, T> {
    fn distance(&self, from: &usize, to: &usize) -> isize {
        *to as isize - *from as isize
    }
}

impl<'a, T: PartialEq> RandomAccessSequence for Terminated<'a, T> {
    fn jump(&self, pos: &mut usize, n: isize) {
        let target = (*pos as isize)
            .checked_add(n)
            .expect("position arithmetic overflow");
        assert!(
            target >= 0 && target as usize <= self.items.len(),
            "Position out of bounds"
        );
        *pos = target as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_terminator() {
        let bytes = b"abc\0def";
        let t = Terminated::new(&bytes[..], 0);
        assert_eq!(t.walk().copied().collect::<Vec<_>>(), b"abc");
        assert_eq!(t.known_end(), None);
    }

    #[test]
    fn stops_at_slice_end_without_terminator() {
        let t = Terminated::new(&[1, 2][..], 0);
        assert_eq!(t.walk().count(), 2);
    }

    #[test]
    fn empty_when_terminator_first() {
        let t = Terminated::new(&[0, 1, 2][..], 0);
        assert!(t.is_empty());
    }
}
