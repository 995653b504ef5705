// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host compositor contract.
//!
//! Stagehand does not own buffers, displays, or hardware-composer layers.
//! The host compositor exposes them through the traits in this module and
//! keeps a [`LayerPlacementPolicy`](crate::policy::LayerPlacementPolicy)
//! alongside each of its layers:
//!
//! - **Buffers** implement [`BufferMetadataSource`] so the policy can read
//!   (and, for stereo requests, consume) their vendor metadata.
//! - **Hardware-composer layers** implement [`HwcLayer`] so the policy can
//!   override their destination frame.
//! - **Render engines** implement `RenderEngine` from `stagehand_render`
//!   for the GL path.
//!
//! # Frame pseudocode
//!
//! ```rust,ignore
//! fn compose_layer(layer: &mut HostLayer, display: &DisplayTarget, tracer: &mut Tracer<'_>) {
//!     let class = policy.classify_buffer_traced(layer.buffer(), display.output, tracer);
//!
//!     // HWC path: let the policy override the frame the host computed.
//!     policy.set_position(&mut layer.hwc, display, &layer.source, class, extended, tracer);
//!
//!     // GL path: only if the policy permits it for protected content.
//!     if policy.allows_gpu_composition(layer.buffer(), display.output, tracer) {
//!         let stereo = policy.resolve_stereo_format(layer.buffer_mut(), display, tracer);
//!         let plan = plan_gl_draw(&policy, &request, stereo, tracer);
//!         plan.replay(&mut engine);
//!     }
//! }
//! ```

use crate::buffer::BufferMetadata;
use crate::rect::PixelRect;

/// A buffer handle that may carry vendor metadata.
pub trait BufferMetadataSource {
    /// Returns the buffer's decoded metadata, or `None` if it has none
    /// (for example, software-rendered buffers).
    fn metadata(&self) -> Option<&BufferMetadata>;

    /// Clears the buffer's pending stereo render request once it has been
    /// acted upon.
    fn clear_stereo_request(&mut self);
}

impl BufferMetadataSource for BufferMetadata {
    fn metadata(&self) -> Option<&BufferMetadata> {
        Some(self)
    }

    fn clear_stereo_request(&mut self) {
        self.stereo = None;
    }
}

impl BufferMetadataSource for Option<BufferMetadata> {
    fn metadata(&self) -> Option<&BufferMetadata> {
        self.as_ref()
    }

    fn clear_stereo_request(&mut self) {
        if let Some(m) = self {
            m.stereo = None;
        }
    }
}

/// A hardware-composer layer whose destination frame can be overridden.
pub trait HwcLayer {
    /// Sets the on-screen destination rectangle for the current frame.
    fn set_frame(&mut self, frame: PixelRect);
}
