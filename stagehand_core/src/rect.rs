// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel rectangles.
//!
//! Hardware composers and buffer crops work in whole pixels, so placement
//! results are expressed as [`PixelRect`] rather than [`kurbo::Rect`].
//! Conversions to and from `kurbo` are provided for the places where
//! fractional transforms are involved; those always round *outward* to the
//! enclosing texel grid.

use kurbo::{Affine, Rect};

/// An axis-aligned rectangle with integer edges.
///
/// `right` and `bottom` are exclusive. A rectangle with `left >= right` or
/// `top >= bottom` is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl PixelRect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a rectangle from its edges.
    #[inline]
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates `(0, 0, width, height)`, saturating dimensions at `i32::MAX`.
    #[inline]
    #[must_use]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, saturate(width), saturate(height))
    }

    /// Width, or zero if the rectangle is inverted.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        if self.right > self.left {
            self.right - self.left
        } else {
            0
        }
    }

    /// Height, or zero if the rectangle is inverted.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        if self.bottom > self.top {
            self.bottom - self.top
        } else {
            0
        }
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Intersection of two rectangles.
    ///
    /// Disjoint inputs produce a zero-area rectangle anchored at the
    /// intersection's top-left corner, so the result never extends outside
    /// either operand's span.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right).max(left);
        let bottom = self.bottom.min(other.bottom).max(top);
        Self::new(left, top, right, bottom)
    }

    /// Trims `self` by an excluded rectangle.
    ///
    /// If `exclude` covers `self` entirely the result is [`ZERO`](Self::ZERO).
    /// If `exclude` overhangs exactly one edge, that edge is pulled in to meet
    /// it; an edge is never pushed outward, so an `exclude` that lies beside
    /// `self` leaves it unchanged. In every other case `self` is returned
    /// unchanged, since the remainder is not a single rectangle.
    #[must_use]
    pub fn reduce(self, exclude: Self) -> Self {
        if exclude.is_empty() {
            return self;
        }
        let mut mask = 0_u8;
        if exclude.left > self.left {
            mask |= 1;
        }
        if exclude.top > self.top {
            mask |= 2;
        }
        if exclude.right < self.right {
            mask |= 4;
        }
        if exclude.bottom < self.bottom {
            mask |= 8;
        }
        let mut out = self;
        match mask {
            0 => out = Self::ZERO,
            1 => out.right = out.right.min(exclude.left),
            2 => out.bottom = out.bottom.min(exclude.top),
            4 => out.left = out.left.max(exclude.right),
            8 => out.top = out.top.max(exclude.bottom),
            _ => {}
        }
        out
    }

    /// Converts to a `kurbo` rectangle.
    #[inline]
    #[must_use]
    pub fn to_kurbo(self) -> Rect {
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }

    /// Converts from a `kurbo` rectangle, rounding each edge outward.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float-to-int casts saturate; pixel edges are far inside i32 range"
    )]
    pub fn from_kurbo_outward(rect: Rect) -> Self {
        let r = rect.abs().expand();
        Self::new(r.x0 as i32, r.y0 as i32, r.x1 as i32, r.y1 as i32)
    }

    /// Maps the rectangle through `transform` and returns the outward-rounded
    /// bounding box of the result.
    #[must_use]
    pub fn transformed(self, transform: Affine) -> Self {
        Self::from_kurbo_outward(transform.transform_rect_bbox(self.to_kurbo()))
    }
}

const fn saturate(v: u32) -> i32 {
    if v > i32::MAX as u32 {
        i32::MAX
    } else {
        v as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_saturates() {
        let r = PixelRect::from_size(u32::MAX, 10);
        assert_eq!(r.right, i32::MAX);
        assert_eq!(r.bottom, 10);
    }

    #[test]
    fn intersect_overlapping() {
        let a = PixelRect::new(0, 0, 100, 100);
        let b = PixelRect::new(50, 25, 150, 75);
        assert_eq!(a.intersect(b), PixelRect::new(50, 25, 100, 75));
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let a = PixelRect::new(0, 0, 10, 10);
        let b = PixelRect::new(20, 20, 30, 30);
        let i = a.intersect(b);
        assert!(i.is_empty());
        assert_eq!(i.width(), 0);
        assert_eq!(i.height(), 0);
    }

    #[test]
    fn reduce_single_edge() {
        let win = PixelRect::new(0, 0, 100, 100);
        // Transparent strip along the bottom.
        assert_eq!(
            win.reduce(PixelRect::new(0, 80, 100, 100)),
            PixelRect::new(0, 0, 100, 80)
        );
        // Transparent strip along the left.
        assert_eq!(
            win.reduce(PixelRect::new(0, 0, 10, 100)),
            PixelRect::new(10, 0, 100, 100)
        );
    }

    #[test]
    fn reduce_by_disjoint_strip_never_grows() {
        let win = PixelRect::new(0, 0, 50, 100);
        // Aligned on three sides but entirely to the right.
        assert_eq!(win.reduce(PixelRect::new(75, 0, 100, 100)), win);
        // Entirely below.
        assert_eq!(win.reduce(PixelRect::new(0, 120, 50, 150)), win);
        // Entirely to the left and above.
        let win = PixelRect::new(50, 50, 100, 100);
        assert_eq!(win.reduce(PixelRect::new(0, 50, 20, 100)), win);
        assert_eq!(win.reduce(PixelRect::new(50, 0, 100, 20)), win);
    }

    #[test]
    fn reduce_fully_covered_is_zero() {
        let win = PixelRect::new(10, 10, 20, 20);
        assert_eq!(win.reduce(PixelRect::new(0, 0, 100, 100)), PixelRect::ZERO);
    }

    #[test]
    fn reduce_interior_hole_is_unchanged() {
        let win = PixelRect::new(0, 0, 100, 100);
        assert_eq!(win.reduce(PixelRect::new(40, 40, 60, 60)), win);
        assert_eq!(win.reduce(PixelRect::ZERO), win);
    }

    #[test]
    fn outward_rounding() {
        let r = PixelRect::from_kurbo_outward(Rect::new(0.4, 1.6, 9.2, 9.9));
        assert_eq!(r, PixelRect::new(0, 1, 10, 10));
    }

    #[test]
    fn transformed_by_scale_and_translate() {
        let r = PixelRect::new(0, 0, 10, 20);
        let t = Affine::translate((5.0, 5.0)) * Affine::scale(2.0);
        assert_eq!(r.transformed(t), PixelRect::new(5, 5, 25, 45));
    }

    #[test]
    fn transformed_by_rotation_stays_integral() {
        let r = PixelRect::new(0, 0, 10, 20);
        // 90° rotation plus a translation back into positive space.
        let t = Affine::new([0.0, 1.0, -1.0, 0.0, 20.0, 0.0]);
        assert_eq!(r.transformed(t), PixelRect::new(0, 0, 20, 10));
    }
}
