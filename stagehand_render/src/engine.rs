// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer contract.

use stagehand_core::mesh::Mesh;
use stagehand_core::rect::PixelRect;

use crate::plan::LayerBlend;

/// The host's GPU renderer, as seen by a [`DrawPlan`](crate::DrawPlan).
///
/// Calls arrive in plan order: blending setup, optional scissor, one or two
/// mesh draws, then blending teardown.
pub trait RenderEngine {
    /// Configures blending for the layer about to be drawn.
    fn setup_layer_blending(&mut self, blend: LayerBlend);

    /// Restricts subsequent draws to `scissor`, in display pixels.
    fn set_scissor(&mut self, scissor: PixelRect);

    /// Draws a four-vertex triangle fan.
    fn draw_mesh(&mut self, mesh: &Mesh);

    /// Restores the renderer's default (disabled) blending state.
    fn disable_blending(&mut self);
}
