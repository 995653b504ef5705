// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-vertex fan meshes and stereoscopic splitting.
//!
//! A layer is drawn on the GL path as a single quad, expressed as a
//! triangle fan of four [`Vertex`] values in the order top-left,
//! bottom-left, bottom-right, top-right. Vertices are `Pod`, so a mesh can be
//! uploaded with [`Mesh::as_bytes`] directly.
//!
//! For stereoscopic content, [`split_for_stereo`] derives one mesh per eye.
//! The input mesh is never modified.

use bytemuck::{Pod, Zeroable};

use crate::buffer::{ContentKind, StereoFormat};
use crate::rect::PixelRect;

/// A mesh vertex: display-space position plus texture coordinate.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in display pixels.
    pub position: [f32; 2],
    /// Normalized texture coordinate.
    pub tex_coord: [f32; 2],
}

/// A quad drawn as a four-vertex triangle fan.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Vertices in fan order.
    pub vertices: [Vertex; 4],
}

impl Mesh {
    /// Number of vertices in every mesh.
    pub const VERTEX_COUNT: usize = 4;

    /// Creates a mesh from explicit vertices.
    #[must_use]
    pub const fn new(vertices: [Vertex; 4]) -> Self {
        Self { vertices }
    }

    /// Creates a mesh covering `rect`, with texture coordinates spanning the
    /// whole texture (V flipped).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "display-space positions fit comfortably in f32"
    )]
    pub fn from_rect(rect: kurbo::Rect) -> Self {
        let (l, t, r, b) = (rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32);
        Self::new([
            Vertex {
                position: [l, t],
                tex_coord: [0.0, 1.0],
            },
            Vertex {
                position: [l, b],
                tex_coord: [0.0, 0.0],
            },
            Vertex {
                position: [r, b],
                tex_coord: [1.0, 0.0],
            },
            Vertex {
                position: [r, t],
                tex_coord: [1.0, 1.0],
            },
        ])
    }

    /// Replaces every vertex's texture coordinate.
    pub fn set_tex_coords(&mut self, coords: [[f32; 2]; 4]) {
        for (v, c) in self.vertices.iter_mut().zip(coords) {
            v.tex_coord = c;
        }
    }

    /// Raw vertex bytes, suitable for a vertex buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// The pair of meshes produced by [`split_for_stereo`].
///
/// For side-by-side formats `left_top` is the left half; for top-bottom it
/// is the upper half.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StereoMeshes {
    /// Left (side-by-side) or top (top-bottom) eye.
    pub left_top: Mesh,
    /// Right (side-by-side) or bottom (top-bottom) eye.
    pub right_bottom: Mesh,
}

/// Splits `mesh` into one mesh per eye.
///
/// Both outputs start as copies of `mesh`. Side-by-side formats squeeze X
/// into the left half of `viewport` and shift a copy into the right half;
/// top-bottom does the same on Y. For video content the texture coordinates
/// are halved the same way, so each eye samples its half of the packed
/// frame. [`StereoFormat::None`] returns two unchanged copies.
#[must_use]
pub fn split_for_stereo(
    mesh: &Mesh,
    format: StereoFormat,
    viewport: PixelRect,
    content: ContentKind,
) -> StereoMeshes {
    let mut left_top = *mesh;
    let mut right_bottom = *mesh;
    let video = content == ContentKind::Video;

    match format {
        StereoFormat::SideBySideLR | StereoFormat::SideBySideRL => {
            let origin = viewport.left as f32;
            // Half-width is taken in whole pixels.
            let half = (viewport.width() / 2) as f32;
            for ((src, l), r) in mesh
                .vertices
                .iter()
                .zip(&mut left_top.vertices)
                .zip(&mut right_bottom.vertices)
            {
                l.position[0] = (src.position[0] - origin) / 2.0 + origin;
                r.position[0] = l.position[0] + half;
                if video {
                    l.tex_coord[0] = src.tex_coord[0] / 2.0;
                    r.tex_coord[0] = l.tex_coord[0] + 0.5;
                }
            }
        }
        StereoFormat::TopBottom => {
            let origin = viewport.top as f32;
            let half = viewport.height() as f32 / 2.0;
            for ((src, t), b) in mesh
                .vertices
                .iter()
                .zip(&mut left_top.vertices)
                .zip(&mut right_bottom.vertices)
            {
                b.position[1] = (src.position[1] - origin) / 2.0 + origin;
                t.position[1] = b.position[1] + half;
                if video {
                    b.tex_coord[1] = src.tex_coord[1] / 2.0;
                    t.tex_coord[1] = b.tex_coord[1] + 0.5;
                }
            }
        }
        StereoFormat::None => {}
    }

    StereoMeshes {
        left_top,
        right_bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh::from_rect(kurbo::Rect::new(100.0, 50.0, 900.0, 650.0))
    }

    #[test]
    fn from_rect_is_fan_ordered() {
        let m = quad();
        let p: [[f32; 2]; 4] = m.vertices.map(|v| v.position);
        assert_eq!(p, [[100.0, 50.0], [100.0, 650.0], [900.0, 650.0], [900.0, 50.0]]);
    }

    #[test]
    fn vertex_bytes_are_tightly_packed() {
        assert_eq!(core::mem::size_of::<Vertex>(), 16);
        assert_eq!(quad().as_bytes().len(), 4 * 16);
    }

    #[test]
    fn none_format_returns_copies() {
        let m = quad();
        let out = split_for_stereo(
            &m,
            StereoFormat::None,
            PixelRect::new(0, 0, 1000, 700),
            ContentKind::Video,
        );
        assert_eq!(out.left_top, m);
        assert_eq!(out.right_bottom, m);
    }

    #[test]
    fn side_by_side_halves_x_about_viewport_left() {
        let m = quad();
        let vp = PixelRect::new(0, 0, 1000, 700);
        let out = split_for_stereo(&m, StereoFormat::SideBySideLR, vp, ContentKind::Generic);
        for i in 0..Mesh::VERTEX_COUNT {
            let x = m.vertices[i].position[0];
            let lx = out.left_top.vertices[i].position[0];
            let rx = out.right_bottom.vertices[i].position[0];
            assert_eq!(lx, x / 2.0);
            assert_eq!(rx, lx + 500.0);
            // Y and texture coordinates are untouched for generic content.
            assert_eq!(out.left_top.vertices[i].position[1], m.vertices[i].position[1]);
            assert_eq!(out.left_top.vertices[i].tex_coord, m.vertices[i].tex_coord);
            assert_eq!(out.right_bottom.vertices[i].tex_coord, m.vertices[i].tex_coord);
        }
    }

    #[test]
    fn side_by_side_with_offset_viewport() {
        let m = quad();
        let vp = PixelRect::new(200, 0, 1200, 700);
        let out = split_for_stereo(&m, StereoFormat::SideBySideRL, vp, ContentKind::Generic);
        // (100 - 200) / 2 + 200 = 150
        assert_eq!(out.left_top.vertices[0].position[0], 150.0);
        assert_eq!(out.right_bottom.vertices[0].position[0], 650.0);
        // (900 - 200) / 2 + 200 = 550
        assert_eq!(out.left_top.vertices[2].position[0], 550.0);
        assert_eq!(out.right_bottom.vertices[2].position[0], 1050.0);
    }

    #[test]
    fn odd_width_uses_whole_pixel_half() {
        let m = quad();
        let vp = PixelRect::new(0, 0, 1001, 700);
        let out = split_for_stereo(&m, StereoFormat::SideBySideLR, vp, ContentKind::Generic);
        for i in 0..Mesh::VERTEX_COUNT {
            let lx = out.left_top.vertices[i].position[0];
            let rx = out.right_bottom.vertices[i].position[0];
            assert_eq!(rx - lx, 500.0);
        }
    }

    #[test]
    fn odd_height_uses_exact_half() {
        let m = quad();
        let vp = PixelRect::new(0, 0, 1000, 701);
        let out = split_for_stereo(&m, StereoFormat::TopBottom, vp, ContentKind::Generic);
        for i in 0..Mesh::VERTEX_COUNT {
            let ty = out.left_top.vertices[i].position[1];
            let by = out.right_bottom.vertices[i].position[1];
            assert_eq!(ty - by, 350.5);
        }
    }

    #[test]
    fn side_by_side_video_splits_texture_u() {
        let m = quad();
        let vp = PixelRect::new(0, 0, 1000, 700);
        let out = split_for_stereo(&m, StereoFormat::SideBySideLR, vp, ContentKind::Video);
        let lu = out.left_top.vertices.map(|v| v.tex_coord[0]);
        let ru = out.right_bottom.vertices.map(|v| v.tex_coord[0]);
        assert_eq!(lu, [0.0, 0.0, 0.5, 0.5]);
        assert_eq!(ru, [0.5, 0.5, 1.0, 1.0]);
        // V is untouched.
        assert_eq!(
            out.left_top.vertices.map(|v| v.tex_coord[1]),
            m.vertices.map(|v| v.tex_coord[1])
        );
    }

    #[test]
    fn top_bottom_halves_y_about_viewport_top() {
        let m = quad();
        let vp = PixelRect::new(0, 0, 1000, 700);
        let out = split_for_stereo(&m, StereoFormat::TopBottom, vp, ContentKind::Video);
        for i in 0..Mesh::VERTEX_COUNT {
            let y = m.vertices[i].position[1];
            let by = out.right_bottom.vertices[i].position[1];
            let ty = out.left_top.vertices[i].position[1];
            assert_eq!(by, y / 2.0);
            assert_eq!(ty, by + 350.0);
            // X is untouched.
            assert_eq!(out.left_top.vertices[i].position[0], m.vertices[i].position[0]);
            assert_eq!(out.right_bottom.vertices[i].position[0], m.vertices[i].position[0]);
        }
        assert_eq!(out.right_bottom.vertices.map(|v| v.tex_coord[1]), [0.5, 0.0, 0.0, 0.5]);
        assert_eq!(out.left_top.vertices.map(|v| v.tex_coord[1]), [1.0, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn split_does_not_touch_input() {
        let m = quad();
        let before = m;
        let _ = split_for_stereo(
            &m,
            StereoFormat::TopBottom,
            PixelRect::new(0, 0, 10, 10),
            ContentKind::Video,
        );
        assert_eq!(m, before);
    }
}
