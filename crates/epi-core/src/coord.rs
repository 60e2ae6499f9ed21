//! Integer grid coordinates.
//!
//! `Coord` is signed so that neighbor offsets (`x - 1`) can be formed without
//! underflow before they are wrapped (toric grid) or rejected (bounded grid).

use std::fmt;

/// A cell position on the population grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`, without any wrapping.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Coord {
        Coord::new(self.x + dx, self.y + dy)
    }

    /// Wrap both components into `[0, width) × [0, height)`.
    ///
    /// Negative components wrap from the far edge, so `(-1, 0)` on a 5-wide
    /// grid becomes `(4, 0)`.
    #[inline]
    pub fn wrapped(self, width: u32, height: u32) -> Coord {
        Coord::new(
            self.x.rem_euclid(width as i32),
            self.y.rem_euclid(height as i32),
        )
    }

    /// `true` if the coordinate lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }

    /// A stable 64-bit key: `x` in the high word, `y` in the low word.
    ///
    /// Independent of grid extents and of any hasher seed, so it can be used
    /// for ordering or as an external identifier.
    #[inline]
    pub fn key(self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
