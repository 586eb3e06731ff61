use num_integer::Integer;
use num_traits::PrimInt;

pub(crate) trait WrapOffset: Sized {
    /// Moves the in-lap position `self` (which must be in `0..lap_len`) by
    /// `offset` and splits the result into whole laps of length `lap_len` and
    /// the position within the last lap.
    ///
    /// Division rounds towards negative infinity, so the in-lap position is
    /// always in `0..lap_len` and the lap count is negative when the target
    /// lies before the lap `self` is in. Never overflows.
    fn wrap_offset(self, offset: Self, lap_len: Self) -> (Self, Self);
}

impl<T: PrimInt + Integer> WrapOffset for T {
    fn wrap_offset(self, offset: Self, lap_len: Self) -> (Self, Self) {
        assert!(lap_len > Self::zero(), "lap length must be positive");
        assert!(
            self >= Self::zero() && self < lap_len,
            "offset must lie within a lap"
        );
        // Split the offset first; adding self to the full offset could
        // overflow even though the result fits.
        let (laps, rem) = offset.div_mod_floor(&lap_len);
        // self + rem < 2 * lap_len, which may not fit either.
        if self >= lap_len - rem {
            (laps + Self::one(), self - (lap_len - rem))
        } else {
            (laps, self + rem)
        }
    }
}
