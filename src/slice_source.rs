use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crate::sequence::{
    BidirectionalSequence, Finite, ForwardSequence, MeasurableSequence, RandomAccessSequence,
};

// Positions into contiguous storage are plain 0-based indices, with len()
// standing for the end position. Indices are kept within isize so that
// distances between any two of them can be represented.

fn check_size(len: usize) {
    assert!(len <= isize::MAX as usize, "Slice too large");
}

fn index_distance(from: usize, to: usize) -> isize {
    to as isize - from as isize
}

fn index_jump(pos: usize, n: isize, len: usize) -> usize {
    let target = (pos as isize)
        .checked_add(n)
        .expect("position arithmetic overflow");
    assert!(
        target >= 0 && target as usize <= len,
        "Position out of bounds"
    );
    target as usize
}

impl<T> ForwardSequence for [T] {
    type Item = T;
    type Pos = usize;
    type Extent = Finite;

    fn start(&self) -> usize {
        check_size(self.len());
        0
    }

    fn is_end(&self, pos: &usize) -> bool {
        *pos == self.len()
    }

    fn read<'s>(&'s self, pos: &usize) -> &'s T {
        &self[*pos]
    }

    fn step(&self, pos: &mut usize) {
        assert!(*pos < self.len(), "Cannot step past the end");
        *pos += 1;
    }

    fn known_end(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> BidirectionalSequence for [T] {
    fn step_back(&self, pos: &mut usize) {
        assert!(*pos > 0, "Cannot step back past the start");
        *pos -= 1;
    }
}

impl<T> MeasurableSequence for [T] {
    fn distance(&self, from: &usize, to: &usize) -> isize {
        index_distance(*from, *to)
    }
}

impl<T> RandomAccessSequence for [T] {
    fn jump(&self, pos: &mut usize, n: isize) {
        *pos = index_jump(*pos, n, self.len());
    }
}

// Owning containers that deref to a slice share the slice's positions.
macro_rules! slice_backed {
    ($([$($generics:tt)*] $Container:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> ForwardSequence for $Container {
                type Item = T;
                type Pos = usize;
                type Extent = Finite;

                fn start(&self) -> usize {
                    <[T] as ForwardSequence>::start(self)
                }

                fn is_end(&self, pos: &usize) -> bool {
                    <[T] as ForwardSequence>::is_end(self, pos)
                }

                fn read<'s>(&'s self, pos: &usize) -> &'s T {
                    <[T] as ForwardSequence>::read(self, pos)
                }

                fn step(&self, pos: &mut usize) {
                    <[T] as ForwardSequence>::step(self, pos)
                }

                fn known_end(&self) -> Option<usize> {
                    <[T] as ForwardSequence>::known_end(self)
                }
            }

            impl<$($generics)*> BidirectionalSequence for $Container {
                fn step_back(&self, pos: &mut usize) {
                    <[T] as BidirectionalSequence>::step_back(self, pos)
                }
            }

            impl<$($generics)*> MeasurableSequence for $Container {
                fn distance(&self, from: &usize, to: &usize) -> isize {
                    index_distance(*from, *to)
                }
            }

            impl<$($generics)*> RandomAccessSequence for $Container {
                fn jump(&self, pos: &mut usize, n: isize) {
                    <[T] as RandomAccessSequence>::jump(self, pos, n)
                }
            }
        )+
    };
}

slice_backed!(
    [T] Vec<T>,
    [T, const N: usize] [T; N],
    [T] Box<[T]>,
    [T] Rc<[T]>,
    [T] Arc<[T]>,
    [T] Arc<Vec<T>>,
);

impl<T> ForwardSequence for VecDeque<T> {
    type Item = T;
    type Pos = usize;
    type Extent = Finite;

    fn start(&self) -> usize {
        check_size(self.len());
        0
    }

    fn is_end(&self, pos: &usize) -> bool {
        *pos == self.len()
    }

    fn read<'s>(&'s self, pos: &usize) -> &'s T {
        &self[*pos]
    }

    fn step(&self, pos: &mut usize) {
        assert!(*pos < self.len(), "Cannot step past the end");
        *pos += 1;
    }

    fn known_end(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> BidirectionalSequence for VecDeque<T> {
    fn step_back(&self, pos: &mut usize) {
        assert!(*pos > 0, "Cannot step back past the start");
        *pos -= 1;
    }
}

impl<T> MeasurableSequence for VecDeque<T> {
    fn distance(&self, from: &usize, to: &usize) -> isize {
        index_distance(*from, *to)
    }
}

impl<T> RandomAccessSequence for VecDeque<T> {
    fn jump(&self, pos: &mut usize, n: isize) {
        *pos = index_jump(*pos, n, self.len());
    }
}
