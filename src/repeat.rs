use crate::sequence::{
    BidirectionalSequence, ForwardSequence, MeasurableSequence, RandomAccessSequence, Unbounded,
};

/// A single value repeated without end.
///
/// Positions count steps from the start so that distances stay meaningful even
/// though every position reads the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repeat<T> {
    value: T,
}

pub fn repeat<T>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T> ForwardSequence for Repeat<T> {
    type Item = T;
    type Pos = isize;
    type Extent = Unbounded;

    fn start(&self) -> isize {
        0
    }

    fn is_end(&self, _: &isize) -> bool {
        false
    }

    fn read<'s>(&'s self, _: &isize) -> &'s T {
        &self.value
    }

    fn step(&self, pos: &mut isize) {
        *pos = pos.checked_add(1).expect("repeat position overflow");
    }
}

impl<T> BidirectionalSequence for Repeat<T> {
    fn step_back(&self, pos: &mut isize) {
        *pos = pos.checked_sub(1).expect("repeat position overflow");
    }
}

impl<T> MeasurableSequence for Repeat<T> {
    fn distance(&self, from: &isize, to: &isize) -> isize {
        to.checked_sub(*from).expect("repeat distance overflow")
    }
}

impl<T> RandomAccessSequence for Repeat<T> {
    fn jump(&self, pos: &mut isize, n: isize) {
        *pos = pos.checked_add(n).expect("repeat position overflow");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_ends() {
        let r = repeat('x');
        assert!(!r.is_empty());
        assert!(r.walk().take(100).all(|&c| c == 'x'));

        let mut pos = r.start();
        r.jump(&mut pos, -4);
        r.step(&mut pos);
        assert_eq!(r.distance(&r.start(), &pos), -3);
        assert!(!r.is_end(&pos));
        assert_eq!(r.known_end(), None);
    }
}
