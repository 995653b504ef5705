// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame layer source state and GL-path texture windows.

use kurbo::Affine;

use crate::rect::PixelRect;

/// The active, pre-transform state of a layer's buffer for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceGeometry {
    /// Buffer width in pixels.
    pub width: u32,
    /// Buffer height in pixels.
    pub height: u32,
    /// Source crop in buffer space; `None` or empty means the whole buffer.
    pub crop: Option<PixelRect>,
    /// Layer-to-display transform.
    pub transform: Affine,
    /// Fully transparent part of the buffer, in buffer space.
    pub transparent_region: Option<PixelRect>,
}

impl SourceGeometry {
    /// Creates an uncropped, untransformed, fully opaque source.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            crop: None,
            transform: Affine::IDENTITY,
            transparent_region: None,
        }
    }

    /// Sets the source crop.
    #[must_use]
    pub const fn with_crop(mut self, crop: PixelRect) -> Self {
        self.crop = Some(crop);
        self
    }

    /// Sets the layer-to-display transform.
    #[must_use]
    pub const fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the transparent region.
    #[must_use]
    pub const fn with_transparent_region(mut self, region: PixelRect) -> Self {
        self.transparent_region = Some(region);
        self
    }

    /// The full buffer rectangle `(0, 0, width, height)`.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.width, self.height)
    }

    /// The crop if it is set and non-empty, otherwise [`bounds`](Self::bounds).
    #[must_use]
    pub const fn effective_crop(&self) -> PixelRect {
        match self.crop {
            Some(crop) if !crop.is_empty() => crop,
            _ => self.bounds(),
        }
    }
}

/// The part of a buffer sampled by the GL path, normalized to `[0, 1]`.
///
/// Coordinates are in buffer orientation (top-left origin); use
/// [`tex_coords`](Self::tex_coords) to get the flipped values a texture
/// sampler expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureWindow {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl TextureWindow {
    /// The whole texture.
    pub const FULL: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 1.0,
        bottom: 1.0,
    };

    /// Normalizes a buffer-space window by the buffer's size.
    ///
    /// A zero-sized buffer yields [`FULL`](Self::FULL).
    #[must_use]
    pub fn from_pixels(win: PixelRect, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::FULL;
        }
        let (w, h) = (width as f32, height as f32);
        Self {
            left: win.left as f32 / w,
            top: win.top as f32 / h,
            right: win.right as f32 / w,
            bottom: win.bottom as f32 / h,
        }
    }

    /// Texture coordinates for the four vertices of a fan built by
    /// [`Mesh::from_rect`](crate::mesh::Mesh::from_rect), with V flipped.
    #[must_use]
    pub const fn tex_coords(&self) -> [[f32; 2]; 4] {
        [
            [self.left, 1.0 - self.top],
            [self.left, 1.0 - self.bottom],
            [self.right, 1.0 - self.bottom],
            [self.right, 1.0 - self.top],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_crop_falls_back_to_bounds() {
        let s = SourceGeometry::new(640, 480).with_crop(PixelRect::new(10, 10, 10, 50));
        assert_eq!(s.effective_crop(), PixelRect::new(0, 0, 640, 480));
        let s = SourceGeometry::new(640, 480).with_crop(PixelRect::new(0, 0, 320, 240));
        assert_eq!(s.effective_crop(), PixelRect::new(0, 0, 320, 240));
    }

    #[test]
    fn normalize_and_flip() {
        let w = TextureWindow::from_pixels(PixelRect::new(0, 120, 320, 480), 640, 480);
        assert_eq!(w.left, 0.0);
        assert_eq!(w.top, 0.25);
        assert_eq!(w.right, 0.5);
        assert_eq!(w.bottom, 1.0);
        assert_eq!(
            w.tex_coords(),
            [[0.0, 0.75], [0.0, 0.0], [0.5, 0.0], [0.5, 0.75]]
        );
    }

    #[test]
    fn zero_sized_source_is_full_window() {
        assert_eq!(
            TextureWindow::from_pixels(PixelRect::ZERO, 0, 10),
            TextureWindow::FULL
        );
    }
}
