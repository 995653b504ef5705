// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw plan: the ordered renderer calls that compose one layer on the GL path.

use alloc::vec::Vec;

use stagehand_core::buffer::{BufferClassification, StereoFormat};
use stagehand_core::mesh::Mesh;
use stagehand_core::output::{DisplayTarget, OutputId};
use stagehand_core::policy::LayerPlacementPolicy;
use stagehand_core::rect::PixelRect;
use stagehand_core::source::SourceGeometry;
use stagehand_core::trace::{StereoSplitEvent, Tracer};

use crate::engine::RenderEngine;

/// Blending state for a layer draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerBlend {
    /// Whether the buffer's color is premultiplied by alpha.
    pub premultiplied_alpha: bool,
    /// Whether the layer is known to be fully opaque.
    pub opaque: bool,
    /// Plane alpha (0.0–1.0).
    pub alpha: f32,
}

impl Default for LayerBlend {
    fn default() -> Self {
        Self {
            premultiplied_alpha: true,
            opaque: false,
            alpha: 1.0,
        }
    }
}

/// A single renderer call in a [`DrawPlan`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`RenderEngine::setup_layer_blending`].
    SetupBlending(LayerBlend),
    /// [`RenderEngine::set_scissor`].
    SetScissor(PixelRect),
    /// [`RenderEngine::draw_mesh`].
    DrawMesh(Mesh),
    /// [`RenderEngine::disable_blending`].
    DisableBlending,
}

/// An ordered list of renderer calls for a single layer on a single output.
#[derive(Clone, Debug, Default)]
pub struct DrawPlan {
    /// Target output for this plan.
    pub output: OutputId,
    /// Renderer calls in submission order.
    pub commands: Vec<DrawCommand>,
}

impl DrawPlan {
    /// Creates an empty plan for the given output.
    #[must_use]
    pub fn new(output: OutputId) -> Self {
        Self {
            output,
            commands: Vec::new(),
        }
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Iterates over the meshes the plan draws.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::DrawMesh(mesh) => Some(mesh),
            _ => None,
        })
    }

    /// Issues every command, in order, to `engine`.
    pub fn replay<E: RenderEngine + ?Sized>(&self, engine: &mut E) {
        for command in &self.commands {
            match command {
                DrawCommand::SetupBlending(blend) => engine.setup_layer_blending(*blend),
                DrawCommand::SetScissor(rect) => engine.set_scissor(*rect),
                DrawCommand::DrawMesh(mesh) => engine.draw_mesh(mesh),
                DrawCommand::DisableBlending => engine.disable_blending(),
            }
        }
    }
}

/// Everything [`plan_gl_draw`] needs to know about one layer.
#[derive(Clone, Copy, Debug)]
pub struct GlDrawRequest<'a> {
    /// Display the layer is composed for.
    pub display: &'a DisplayTarget,
    /// Active source state.
    pub source: &'a SourceGeometry,
    /// The layer's display-space quad, as computed by the host.
    pub mesh: &'a Mesh,
    /// Buffer classification for this frame.
    pub classification: BufferClassification,
    /// Blending state.
    pub blend: LayerBlend,
}

/// Builds the draw plan for one layer on the GL path.
///
/// Texture coordinates come from
/// [`compute_texture_window`](LayerPlacementPolicy::compute_texture_window).
/// For stereoscopic formats the quad is split per eye against the display
/// bounds, the scissor is reset to the whole display, and both halves are
/// drawn (left/top first).
#[must_use]
pub fn plan_gl_draw(
    policy: &LayerPlacementPolicy,
    request: &GlDrawRequest<'_>,
    stereo: StereoFormat,
    tracer: &mut Tracer<'_>,
) -> DrawPlan {
    let mut plan = DrawPlan::new(request.display.output);
    plan_gl_draw_into(policy, request, stereo, tracer, &mut plan);
    plan
}

/// Like [`plan_gl_draw`], reusing an existing plan's allocation.
///
/// `plan` is cleared first; its output is set to the request's display.
pub fn plan_gl_draw_into(
    policy: &LayerPlacementPolicy,
    request: &GlDrawRequest<'_>,
    stereo: StereoFormat,
    tracer: &mut Tracer<'_>,
    plan: &mut DrawPlan,
) {
    plan.clear();
    plan.output = request.display.output;

    let window = policy.compute_texture_window(request.source, request.display.viewport);
    let mut mesh = *request.mesh;
    mesh.set_tex_coords(window.tex_coords());

    plan.commands.push(DrawCommand::SetupBlending(request.blend));
    if stereo.is_stereo() {
        let bounds = request.display.bounds();
        let content = request.classification.content;
        let split = policy.split_mesh_for_stereo(&mesh, stereo, bounds, content);
        if policy.config().debug_logs {
            tracer.stereo_split(&StereoSplitEvent {
                output: request.display.output,
                format: stereo,
                content,
            });
        }
        plan.commands.push(DrawCommand::SetScissor(bounds));
        plan.commands.push(DrawCommand::DrawMesh(split.left_top));
        plan.commands.push(DrawCommand::DrawMesh(split.right_bottom));
    } else {
        plan.commands.push(DrawCommand::DrawMesh(mesh));
    }
    plan.commands.push(DrawCommand::DisableBlending);
}
