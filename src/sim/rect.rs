//! Axis-aligned rectangle geometry shared by every arena entity
//!
//! Positions are the TOP LEFT corner in integer pixels, with y growing
//! downward. Edges are `left = x`, `right = x + width`, `top = y`,
//! `bottom = y + height`; walls narrow their right/bottom edges by one.

use glam::IVec2;

/// Anything that occupies an axis-aligned box in the arena
pub trait Rect {
    /// Top left corner
    fn position(&self) -> IVec2;

    /// Width and height (strictly positive, fixed per kind)
    fn size(&self) -> IVec2;

    #[inline]
    fn width(&self) -> i32 {
        self.size().x
    }

    #[inline]
    fn height(&self) -> i32 {
        self.size().y
    }

    #[inline]
    fn left_edge(&self) -> i32 {
        self.position().x
    }

    #[inline]
    fn right_edge(&self) -> i32 {
        self.position().x + self.width()
    }

    #[inline]
    fn top_edge(&self) -> i32 {
        self.position().y
    }

    #[inline]
    fn bottom_edge(&self) -> i32 {
        self.position().y + self.height()
    }

    /// At-rest AABB overlap; touching edges count as overlapping
    fn overlaps<R: Rect + ?Sized>(&self, other: &R) -> bool {
        other.left_edge() <= self.right_edge()
            && other.right_edge() >= self.left_edge()
            && other.top_edge() <= self.bottom_edge()
            && other.bottom_edge() >= self.top_edge()
    }

    /// Snapshot of this box, detached from the entity that owns it
    fn bounds(&self) -> Bounds {
        Bounds {
            position: self.position(),
            size: self.size(),
        }
    }
}

/// A plain rectangle value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub position: IVec2,
    pub size: IVec2,
}

impl Bounds {
    pub fn new(position: IVec2, size: IVec2) -> Self {
        debug_assert!(size.x > 0 && size.y > 0, "rectangle size must be positive");
        Self { position, size }
    }
}

impl Rect for Bounds {
    #[inline]
    fn position(&self) -> IVec2 {
        self.position
    }

    #[inline]
    fn size(&self) -> IVec2 {
        self.size
    }
}
