// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-layer placement policy.
//!
//! [`LayerPlacementPolicy`] is built once from a [`PlacementConfig`] and then
//! consulted every frame. Every decision is a pure function of its inputs
//! plus that configuration; the only side effects are the ones the host asks
//! for explicitly (overriding an [`HwcLayer`]'s frame, consuming a buffer's
//! stereo render request) and trace events.
//!
//! # Destination overrides
//!
//! [`compute_destination_rect`](LayerPlacementPolicy::compute_destination_rect)
//! is a conditional override, evaluated in order:
//!
//! 1. External-only buffers fill the display: `(0, 0, width, height)`.
//! 2. Video on an external display in extended mode is fitted to the display
//!    preserving its aspect ratio and centered (see [`aspect_fit`]).
//! 3. Anything else: `None`, and the host keeps the frame it computed.
//!
//! # Texture windows
//!
//! The GL path samples the source crop, clipped to what is actually visible:
//! the crop is mapped to display space, intersected with the viewport,
//! mapped back, intersected with the buffer, and trimmed by the transparent
//! region. Fractional edges produced by the round trip are rounded outward to
//! whole texels.

use core::cmp::Ordering;

use crate::buffer::{
    BufferClassification, BufferMetadata, BufferRestriction, ContentKind, StereoFormat,
};
use crate::config::PlacementConfig;
use crate::error::PlacementError;
use crate::host::{BufferMetadataSource, HwcLayer};
use crate::mesh::{self, Mesh, StereoMeshes};
use crate::output::{DisplayTarget, OutputId};
use crate::rect::PixelRect;
use crate::source::{SourceGeometry, TextureWindow};
use crate::trace::{
    ClassifyEvent, DestinationEvent, FallbackEvent, OverrideReason, ProtectedGpuEvent, Tracer,
};

/// Placement policy for one compositor layer (or one display).
///
/// The policy is `Copy` and holds only its configuration, so hosts that
/// compose several displays in parallel can give each its own instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerPlacementPolicy {
    config: PlacementConfig,
}

impl LayerPlacementPolicy {
    /// Creates a policy with the given configuration.
    #[must_use]
    pub const fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &PlacementConfig {
        &self.config
    }

    // -- Classification --

    /// Classifies a buffer from its vendor metadata.
    ///
    /// A missing buffer, a buffer without metadata, or a device without
    /// vendor metadata support all classify as unrestricted generic content.
    #[must_use]
    pub fn classify_buffer<B: BufferMetadataSource + ?Sized>(
        &self,
        buffer: Option<&B>,
    ) -> BufferClassification {
        self.metadata(buffer)
            .map(BufferMetadata::classify)
            .unwrap_or_default()
    }

    /// Like [`classify_buffer`](Self::classify_buffer), reporting the outcome
    /// to `tracer`.
    pub fn classify_buffer_traced<B: BufferMetadataSource + ?Sized>(
        &self,
        buffer: Option<&B>,
        output: OutputId,
        tracer: &mut Tracer<'_>,
    ) -> BufferClassification {
        match self.metadata(buffer) {
            Ok(metadata) => {
                let classification = metadata.classify();
                if self.config.debug_logs {
                    tracer.classify(&ClassifyEvent {
                        output,
                        classification,
                    });
                }
                classification
            }
            Err(error) => {
                tracer.fallback(&FallbackEvent { output, error });
                BufferClassification::default()
            }
        }
    }

    fn metadata<'b, B: BufferMetadataSource + ?Sized>(
        &self,
        buffer: Option<&'b B>,
    ) -> Result<&'b BufferMetadata, PlacementError> {
        if !self.config.capabilities.vendor_metadata {
            return Err(PlacementError::MissingMetadata);
        }
        buffer
            .and_then(|b| b.metadata())
            .ok_or(PlacementError::MissingMetadata)
    }

    // -- Protected content --

    /// Whether protected content may be composed on the GPU.
    ///
    /// Always `false` for unprotected content; the override only concerns
    /// protected buffers.
    #[inline]
    #[must_use]
    pub const fn can_use_gpu_for_protected_content(&self, is_protected: bool) -> bool {
        is_protected && self.config.protection.allow_gpu_for_protected
    }

    /// Whether the buffer may be composed on the GPU at all.
    ///
    /// Unprotected buffers always may. Protected buffers may only if the
    /// configuration allows it; that decision is reported to `tracer`.
    /// The protected flag is honoured even on devices without the
    /// vendor-metadata capability.
    pub fn allows_gpu_composition<B: BufferMetadataSource + ?Sized>(
        &self,
        buffer: Option<&B>,
        output: OutputId,
        tracer: &mut Tracer<'_>,
    ) -> bool {
        let is_protected = buffer
            .and_then(|b| b.metadata())
            .is_some_and(BufferMetadata::is_protected);
        if !is_protected {
            return true;
        }
        let allowed = self.can_use_gpu_for_protected_content(true);
        tracer.protected_gpu(&ProtectedGpuEvent { output, allowed });
        allowed
    }

    // -- Destination frame --

    /// Computes the destination frame override for a layer, if any.
    ///
    /// See the [module docs](crate::policy) for the decision order. The result always
    /// lies within `display.bounds()`.
    #[must_use]
    pub fn compute_destination_rect(
        &self,
        display: &DisplayTarget,
        source: &SourceGeometry,
        restriction: BufferRestriction,
        content: ContentKind,
        extended_mode: bool,
    ) -> Option<PixelRect> {
        destination_override(display, source, restriction, content, extended_mode)
            .map(|(rect, _)| rect)
    }

    /// Applies [`compute_destination_rect`](Self::compute_destination_rect)
    /// to a hardware-composer layer.
    ///
    /// `layer` is only touched when there is an override, which is also
    /// returned.
    pub fn set_position<L: HwcLayer + ?Sized>(
        &self,
        layer: &mut L,
        display: &DisplayTarget,
        source: &SourceGeometry,
        classification: BufferClassification,
        extended_mode: bool,
        tracer: &mut Tracer<'_>,
    ) -> Option<PixelRect> {
        let (rect, reason) = destination_override(
            display,
            source,
            classification.restriction,
            classification.content,
            extended_mode,
        )?;
        layer.set_frame(rect);
        if self.config.debug_logs {
            tracer.destination(&DestinationEvent {
                output: display.output,
                rect,
                reason,
            });
        }
        Some(rect)
    }

    // -- GL path --

    /// Computes the normalized part of the source the GL path should sample.
    ///
    /// Viewport clipping needs the layer transform to be invertible and is
    /// skipped otherwise, as it is on devices without vendor metadata.
    #[must_use]
    pub fn compute_texture_window(
        &self,
        source: &SourceGeometry,
        viewport: PixelRect,
    ) -> TextureWindow {
        let bounds = source.bounds();
        let mut win = source.effective_crop();

        let det = source.transform.determinant();
        if self.config.capabilities.vendor_metadata && det != 0.0 && det.is_finite() {
            win = win.transformed(source.transform).intersect(viewport);
            win = win.transformed(source.transform.inverse()).intersect(bounds);
        }
        if let Some(transparent) = source.transparent_region {
            win = win.reduce(transparent);
        }

        TextureWindow::from_pixels(win, source.width, source.height)
    }

    /// Splits a mesh into per-eye meshes; see [`mesh::split_for_stereo`].
    #[must_use]
    pub fn split_mesh_for_stereo(
        &self,
        mesh: &Mesh,
        format: StereoFormat,
        viewport: PixelRect,
        content: ContentKind,
    ) -> StereoMeshes {
        mesh::split_for_stereo(mesh, format, viewport, content)
    }

    /// Determines the stereo packing the GL path should split for this frame.
    ///
    /// A buffer's stereo render request is honoured when it asks for GPU
    /// rendering and either targets `display` or the HDMI output is the
    /// logical primary. An honoured request is consumed (cleared on the
    /// buffer) so it applies to a single composition. Unknown packings fall
    /// back to [`StereoFormat::None`].
    pub fn resolve_stereo_format<B: BufferMetadataSource + ?Sized>(
        &self,
        buffer: Option<&mut B>,
        display: &DisplayTarget,
        tracer: &mut Tracer<'_>,
    ) -> StereoFormat {
        let caps = self.config.capabilities;
        if !(caps.vendor_metadata && caps.stereo_rendering) {
            return StereoFormat::None;
        }
        let Some(buffer) = buffer else {
            return StereoFormat::None;
        };
        let Some(request) = buffer.metadata().and_then(|m| m.stereo) else {
            return StereoFormat::None;
        };
        let targets_display = request.display_id == display.hwc_id || self.config.hdmi_primary;
        if !(request.gpu_render && targets_display) {
            return StereoFormat::None;
        }

        buffer.clear_stereo_request();
        StereoFormat::try_from(request.gpu_format).unwrap_or_else(|error| {
            tracer.fallback(&FallbackEvent {
                output: display.output,
                error,
            });
            StereoFormat::None
        })
    }
}

fn destination_override(
    display: &DisplayTarget,
    source: &SourceGeometry,
    restriction: BufferRestriction,
    content: ContentKind,
    extended_mode: bool,
) -> Option<(PixelRect, OverrideReason)> {
    if restriction == BufferRestriction::ExternalOnly {
        Some((display.bounds(), OverrideReason::ExternalOnly))
    } else if display.kind.is_external() && extended_mode && content == ContentKind::Video {
        let rect = aspect_fit(display.width, display.height, source.width, source.height);
        Some((rect, OverrideReason::AspectFit))
    } else {
        None
    }
}

/// Fits a `src_w`×`src_h` source into a `fb_w`×`fb_h` display, preserving
/// aspect ratio, and centers it.
///
/// All arithmetic is integer with truncating division. A source with a zero
/// dimension has no aspect ratio and fills the display.
#[must_use]
pub fn aspect_fit(fb_w: u32, fb_h: u32, src_w: u32, src_h: u32) -> PixelRect {
    if src_w == 0 || src_h == 0 {
        return PixelRect::from_size(fb_w, fb_h);
    }
    let (fb_w, fb_h) = (i64::from(fb_w), i64::from(fb_h));
    let (src_w, src_h) = (i64::from(src_w), i64::from(src_h));

    let (w, h) = match (src_w * fb_h).cmp(&(fb_w * src_h)) {
        // Wider than the display: full width, letterboxed.
        Ordering::Greater => (fb_w, fb_w * src_h / src_w),
        // Taller than the display: full height, pillarboxed.
        Ordering::Less => (fb_h * src_w / src_h, fb_h),
        Ordering::Equal => (fb_w, fb_h),
    };
    let x = (fb_w - w) / 2;
    let y = (fb_h - h) / 2;
    PixelRect::new(clamp(x), clamp(y), clamp(x + w), clamp(y + h))
}

fn clamp(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
