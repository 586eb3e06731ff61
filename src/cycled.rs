use std::fmt::Debug;

use tracing::{debug, trace};

use crate::cycle_cursor::CycleCursor;
use crate::div_rem::WrapOffset;
use crate::end_cache::EndCache;
use crate::error::CycleError;
use crate::passthrough::Passthrough;
use crate::sequence::{
    BidirectionalSequence, Finite, ForwardSequence, MeasurableSequence, RandomAccessSequence,
    Unbounded,
};
use crate::unreachable::Unreachable;

/// A position in a cycled sequence: where we are in the source, and how many
/// times the source has been run through completely before getting there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lapped<P> {
    pub(crate) pos: P,
    // Never negative.
    pub(crate) lap: isize,
}

impl<P> Lapped<P> {
    pub fn pos(&self) -> &P {
        &self.pos
    }

    pub fn lap(&self) -> isize {
        self.lap
    }

    pub fn into_pos(self) -> P {
        self.pos
    }
}

/// A finite, non-empty sequence repeated endlessly.
///
/// Owns the source. Positions into the cycle borrow the view, so they can't
/// outlive it.
pub struct Cycled<S: ForwardSequence> {
    source: S,
    // Only used by sources that can't tell us where they end.
    end: EndCache<S::Pos>,
}

impl<S: ForwardSequence<Extent = Finite>> Cycled<S> {
    /// Panics if `source` is empty.
    pub fn new(source: S) -> Self {
        match Self::try_new(source) {
            Ok(cycled) => cycled,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(source: S) -> Result<Self, CycleError> {
        if source.is_empty() {
            debug!("refusing to cycle an empty sequence");
            return Err(CycleError::EmptySource);
        }
        Ok(Cycled {
            source,
            end: EndCache::new(),
        })
    }

    pub fn begin(&self) -> CycleCursor<'_, S> {
        CycleCursor::new(self, self.start())
    }

    pub fn end(&self) -> Unreachable {
        Unreachable
    }

    pub fn iter(&self) -> CycleCursor<'_, S> {
        self.begin()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// End position of the source as discovered so far. Always `None` for
    /// sources that report their end directly.
    pub fn cached_end(&self) -> Option<&S::Pos> {
        self.end.get()
    }

    // End position of the source, walking forward from `from` to find it if
    // the source can't say and nothing has cached it yet.
    fn source_end(&self, from: &S::Pos) -> S::Pos {
        if let Some(end) = self.source.known_end() {
            return end;
        }
        self.end
            .get_or_fill_with(|| {
                let mut pos = from.clone();
                let mut walked = 0usize;
                while !self.source.is_end(&pos) {
                    self.source.step(&mut pos);
                    walked += 1;
                }
                trace!(walked, "cached end of cycled sequence by walking");
                pos
            })
            .clone()
    }

    fn lap_len(&self, from: &S::Pos) -> isize
    where
        S: MeasurableSequence,
    {
        let end = self.source_end(from);
        self.source.distance(&self.source.start(), &end)
    }

    pub(crate) fn try_step_back_lapped(&self, at: &mut Lapped<S::Pos>) -> Result<(), CycleError>
    where
        S: BidirectionalSequence,
    {
        if at.pos == self.source.start() {
            if at.lap <= 0 {
                return Err(CycleError::BeforeFirstLap);
            }
            at.lap -= 1;
            at.pos = self.source_end(&at.pos);
        }
        self.source.step_back(&mut at.pos);
        Ok(())
    }

    pub(crate) fn try_jump_lapped(
        &self,
        at: &mut Lapped<S::Pos>,
        n: isize,
    ) -> Result<(), CycleError>
    where
        S: RandomAccessSequence,
    {
        let start = self.source.start();
        let lap_len = self.lap_len(&at.pos);
        let offset = self.source.distance(&start, &at.pos);
        let (laps, offset) = offset.wrap_offset(n, lap_len);
        let lap = at
            .lap
            .checked_add(laps)
            .expect("cycle lap counter overflow");
        if lap < 0 {
            return Err(CycleError::BeforeFirstLap);
        }
        let mut pos = start;
        self.source.jump(&mut pos, offset);
        *at = Lapped { pos, lap };
        Ok(())
    }
}

impl<S: ForwardSequence + Clone> Clone for Cycled<S> {
    fn clone(&self) -> Self {
        Cycled {
            source: self.source.clone(),
            end: self.end.clone(),
        }
    }
}

impl<S> Debug for Cycled<S>
where
    S: ForwardSequence + Debug,
    S::Pos: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cycled")
            .field("source", &self.source)
            .field("end", &self.end)
            .finish()
    }
}

impl<S: ForwardSequence<Extent = Finite>> ForwardSequence for Cycled<S> {
    type Item = S::Item;
    type Pos = Lapped<S::Pos>;
    type Extent = Unbounded;

    fn start(&self) -> Self::Pos {
        Lapped {
            pos: self.source.start(),
            lap: 0,
        }
    }

    fn is_end(&self, _: &Self::Pos) -> bool {
        false
    }

    fn read<'s>(&'s self, at: &Self::Pos) -> &'s Self::Item {
        self.source.read(&at.pos)
    }

    fn step(&self, at: &mut Self::Pos) {
        // A position resting on the source end should have wrapped already.
        assert!(
            !self.source.is_end(&at.pos),
            "cycle position is past the end of its lap"
        );
        self.source.step(&mut at.pos);
        if self.source.is_end(&at.pos) {
            at.lap = at.lap.checked_add(1).expect("cycle lap counter overflow");
            if self.end.get().is_none() && self.source.known_end().is_none() {
                let lap = at.lap;
                let end = at.pos.clone();
                self.end.get_or_fill_with(|| {
                    trace!(lap, "cached end of cycled sequence on wrap");
                    end
                });
            }
            at.pos = self.source.start();
        }
    }
}

impl<S: BidirectionalSequence<Extent = Finite>> BidirectionalSequence for Cycled<S> {
    fn step_back(&self, at: &mut Self::Pos) {
        if let Err(e) = self.try_step_back_lapped(at) {
            panic!("{}", e);
        }
    }
}

impl<S: MeasurableSequence<Extent = Finite>> MeasurableSequence for Cycled<S> {
    fn distance(&self, from: &Self::Pos, to: &Self::Pos) -> isize {
        let lap_len = self.lap_len(&from.pos);
        to.lap
            .checked_sub(from.lap)
            .and_then(|laps| laps.checked_mul(lap_len))
            .and_then(|d| d.checked_add(self.source.distance(&from.pos, &to.pos)))
            .expect("cycle distance overflow")
    }
}

impl<S: RandomAccessSequence<Extent = Finite>> RandomAccessSequence for Cycled<S> {
    fn jump(&self, at: &mut Self::Pos, n: isize) {
        if let Err(e) = self.try_jump_lapped(at, n) {
            panic!("{}", e);
        }
    }
}

/// Picks the view `cycle` builds, based on whether the source ends.
pub trait CycleMode<S> {
    type View;
    fn wrap(source: S) -> Self::View;
}

impl<S: ForwardSequence<Extent = Finite>> CycleMode<S> for Finite {
    type View = Cycled<S>;

    fn wrap(source: S) -> Cycled<S> {
        Cycled::new(source)
    }
}

// Repeating something that never ends changes nothing.
impl<S: ForwardSequence<Extent = Unbounded>> CycleMode<S> for Unbounded {
    type View = Passthrough<S>;

    fn wrap(source: S) -> Passthrough<S> {
        Passthrough::new(source)
    }
}

/// Returns a sequence that repeats `source` endlessly.
///
/// Panics if `source` is finite and empty. An already unbounded source is
/// passed through unchanged.
pub fn cycle<S>(source: S) -> <S::Extent as CycleMode<S>>::View
where
    S: ForwardSequence,
    S::Extent: CycleMode<S>,
{
    <S::Extent as CycleMode<S>>::wrap(source)
}

pub trait CycleExt: ForwardSequence + Sized {
    fn cycled(self) -> <Self::Extent as CycleMode<Self>>::View
    where
        Self::Extent: CycleMode<Self>,
    {
        cycle(self)
    }
}

impl<S: ForwardSequence> CycleExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repeat::{repeat, Repeat};
    use crate::terminated::Terminated;

    // Forward traversal only, and no way to name the end without walking.
    #[derive(Debug, Clone)]
    struct ForwardOnly(Vec<char>);

    impl ForwardSequence for ForwardOnly {
        type Item = char;
        type Pos = usize;
        type Extent = Finite;

        fn start(&self) -> usize {
            0
        }

        fn is_end(&self, pos: &usize) -> bool {
            *pos == self.0.len()
        }

        fn read<'s>(&'s self, pos: &usize) -> &'s char {
            &self.0[*pos]
        }

        fn step(&self, pos: &mut usize) {
            *pos += 1;
        }
    }

    #[test]
    fn reads_repeat_with_laps() {
        let view = cycle(vec!['a', 'b', 'c']);
        let mut cursor = view.begin();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push((*cursor.read(), cursor.lap()));
            cursor.step_forward();
        }
        assert_eq!(
            seen,
            [
                ('a', 0),
                ('b', 0),
                ('c', 0),
                ('a', 1),
                ('b', 1),
                ('c', 1),
                ('a', 2)
            ]
        );
    }

    #[test]
    fn forward_only_source() {
        let view = cycle(ForwardOnly(vec!['x', 'y']));
        assert_eq!(view.cached_end(), None);
        let collected: String = view.iter().take(5).collect();
        assert_eq!(collected, "xyxyx");
        assert_eq!(view.cached_end(), Some(&2));
    }

    #[test]
    fn read_right_after_wrap_is_start() {
        let view = cycle([1, 2]);
        let mut cursor = view.begin();
        cursor.step_forward();
        cursor.step_forward();
        assert_eq!(cursor.lap(), 1);
        assert_eq!(*cursor.position(), 0);
        assert_eq!(*cursor.read(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot cycle an empty sequence")]
    fn empty_source_panics() {
        let _ = cycle(Vec::<i32>::new());
    }

    #[test]
    fn empty_source_is_an_error() {
        assert_eq!(
            Cycled::try_new(Vec::<i32>::new()).err(),
            Some(CycleError::EmptySource)
        );
        let t = Terminated::new(&[0u8, 1][..], 0);
        assert_eq!(Cycled::try_new(t).err(), Some(CycleError::EmptySource));
    }

    #[test]
    fn common_source_never_caches() {
        let view = cycle(vec![1, 2, 3]);
        let mut cursor = view.begin();
        cursor.advance_by(10);
        cursor.step_back();
        assert_eq!(view.cached_end(), None);
    }

    #[test]
    fn terminated_source_caches_on_wrap() {
        let bytes = b"ab\0zz";
        let view = cycle(Terminated::new(&bytes[..], 0));
        let mut cursor = view.begin();
        cursor.step_forward();
        assert_eq!(view.cached_end(), None);
        cursor.step_forward();
        assert_eq!(view.cached_end(), Some(&2));
        assert_eq!(*cursor.read(), b'a');
        cursor.step_back();
        assert_eq!(*cursor.read(), b'b');
        assert_eq!(cursor.lap(), 0);
    }

    #[test]
    fn terminated_source_caches_on_jump() {
        let bytes = b"abc\0";
        let view = cycle(Terminated::new(&bytes[..], 0));
        let mut cursor = view.begin();
        cursor.advance_by(7);
        assert_eq!(view.cached_end(), Some(&3));
        assert_eq!(*cursor.read(), b'b');
        assert_eq!(cursor.lap(), 2);
    }

    #[test]
    fn terminated_source_caches_on_measure() {
        let bytes = b"abcd\0";
        let view = cycle(Terminated::new(&bytes[..], 0));
        let mut cursor = view.begin();
        cursor.step_forward();
        assert_eq!(view.cached_end(), None);
        assert_eq!(cursor.logical_index(), 1);
        assert_eq!(view.cached_end(), Some(&4));

        let view = cycle(Terminated::new(&bytes[..], 0));
        let first = view.begin();
        let mut second = view.begin();
        second.step_forward();
        second.step_forward();
        assert_eq!(first.distance_to(&second), 2);
        assert_eq!(view.cached_end(), Some(&4));
    }

    #[cfg(feature = "sync")]
    #[test]
    fn end_discovered_from_several_threads() {
        static_assertions::assert_impl_all!(Cycled<Terminated<'static, u8>>: Send, Sync);

        let bytes = b"abcde\0";
        let view = cycle(Terminated::new(&bytes[..], 0));
        std::thread::scope(|s| {
            for n in 0..8isize {
                let view = &view;
                s.spawn(move || {
                    let mut cursor = view.begin();
                    cursor.advance_by(n * 7);
                    assert_eq!(*cursor.read(), bytes[(n * 7 % 5) as usize]);
                    assert_eq!(cursor.lap(), n * 7 / 5);
                });
            }
        });
        assert_eq!(view.cached_end(), Some(&5));
    }

    #[test]
    fn clone_drops_cached_end() {
        let bytes = b"ab\0";
        let view = cycle(Terminated::new(&bytes[..], 0));
        view.iter().take(3).for_each(drop);
        assert_eq!(view.cached_end(), Some(&2));
        let copy = view.clone();
        assert_eq!(copy.cached_end(), None);
        assert_eq!(copy.iter().take(3).copied().collect::<Vec<_>>(), b"aba");
    }

    #[test]
    fn cycled_sequence_is_unbounded() {
        let view = cycle(vec![1, 2]);
        assert!(!view.is_empty());
        assert_eq!(view.known_end(), None);
        let again: Passthrough<Cycled<Vec<i32>>> = cycle(view);
        assert_eq!(
            again.begin().take(5).copied().collect::<Vec<_>>(),
            [1, 2, 1, 2, 1]
        );
    }

    #[test]
    fn unbounded_source_passes_through() {
        let view: Passthrough<Repeat<char>> = cycle(repeat('z'));
        assert_eq!(view.begin().take(3).collect::<String>(), "zzz");
        assert!(view.begin() != view.end());
    }

    #[test]
    fn method_form() {
        let view = vec![4, 5].cycled();
        assert_eq!(view.iter().nth(3), Some(&5));
        assert_eq!(view.into_inner(), [4, 5]);
    }
}
