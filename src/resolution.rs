use core::num::NonZeroUsize;

use num_traits::NumCast;

use super::NativeFloat;
use super::error::TessellationError;

/// Number of straight segments used to approximate one circle or Bezier curve.
/// Always at least one, so the parameter step of a curve is always finite.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resolution(NonZeroUsize);

impl Resolution {
    /// Resolution of a freshly created renderer
    pub const DEFAULT: Resolution = Resolution(match NonZeroUsize::new(20) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// Fails with `InvalidResolution` for n <= 0.
    pub fn new(n: i64) -> Result<Self, TessellationError> {
        <usize as NumCast>::from(n)
            .and_then(NonZeroUsize::new)
            .map(Resolution)
            .ok_or(TessellationError::InvalidResolution(n))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// The scalar representation used to compute parameter steps
    pub(crate) fn as_float(&self) -> NativeFloat {
        self.0.get() as NativeFloat
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::DEFAULT
    }
}

impl From<NonZeroUsize> for Resolution {
    fn from(n: NonZeroUsize) -> Self {
        Resolution(n)
    }
}

impl TryFrom<i64> for Resolution {
    type Error = TessellationError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Resolution::new(n)
    }
}
