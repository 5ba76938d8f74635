//! Axis-aligned boxes and the overlap test shared by every entity.

/// Position and extent of an entity in display units.
///
/// The position is real-valued so sub-pixel velocities accumulate; the size
/// is whole pixels and never zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(x: f32, y: f32, width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "rect dimensions must be positive");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + f32::from(self.width)
    }

    /// One past the lowest row.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + f32::from(self.height)
    }

    /// `true` when the horizontal extents intersect, ignoring height.
    #[must_use]
    pub fn spans_columns_of(&self, other: &Self) -> bool {
        self.x < other.right() && self.right() > other.x
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        overlaps(self, other)
    }
}

/// Half-open intersection test over `[x, x + width) × [y, y + height)`.
///
/// Boxes that only share an edge do not overlap.
#[must_use]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.spans_columns_of(b) && a.y < b.bottom() && a.bottom() > b.y
}
