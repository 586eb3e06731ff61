//! Lazy, endless repetition of finite sequences.
//!
//! [`cycle`] wraps a non-empty sequence in a [`Cycled`] view whose positions
//! ([`CycleCursor`]) walk the source over and over, counting laps as they go.
//! No elements are copied. The operations a cursor offers follow the
//! capabilities of the source, see the traits in [`sequence`].

pub use cycle_cursor::CycleCursor;
pub use cycled::{cycle, CycleExt, CycleMode, Cycled, Lapped};
pub use error::CycleError;
pub use passthrough::Passthrough;
pub use repeat::{repeat, Repeat};
pub use sequence::{
    BidirectionalSequence, Extent, Finite, ForwardSequence, MeasurableSequence,
    RandomAccessSequence, Unbounded, Walk,
};
pub use terminated::Terminated;
pub use unreachable::Unreachable;

mod cycle_cursor;
mod cycled;
mod div_rem;
mod end_cache;
mod error;
mod passthrough;
mod repeat;
pub mod sequence;
mod slice_source;
mod terminated;
mod unreachable;
