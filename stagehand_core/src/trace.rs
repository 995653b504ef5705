// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for placement decisions.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! policy calls as it makes decisions. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Classification, destination and stereo events are only emitted when
//! [`PlacementConfig::debug_logs`](crate::config::PlacementConfig::debug_logs)
//! is set. Fallback and protected-content events are always emitted.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::buffer::{BufferClassification, ContentKind, StereoFormat};
use crate::error::PlacementError;
use crate::output::OutputId;
use crate::rect::PixelRect;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why the policy overrode a layer's destination frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverrideReason {
    /// The buffer is external-only and fills the display.
    ExternalOnly,
    /// Video on an external display in extended mode, aspect-fit and centered.
    AspectFit,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a buffer is classified from its metadata.
#[derive(Clone, Copy, Debug)]
pub struct ClassifyEvent {
    /// Which output the layer is being composed for.
    pub output: OutputId,
    /// The classification.
    pub classification: BufferClassification,
}

/// Emitted when the policy overrides a layer's destination frame.
#[derive(Clone, Copy, Debug)]
pub struct DestinationEvent {
    /// Which output.
    pub output: OutputId,
    /// The new destination frame.
    pub rect: PixelRect,
    /// Why it was overridden.
    pub reason: OverrideReason,
}

/// Emitted when a mesh is split for stereoscopic output.
#[derive(Clone, Copy, Debug)]
pub struct StereoSplitEvent {
    /// Which output.
    pub output: OutputId,
    /// The packing being split.
    pub format: StereoFormat,
    /// Content kind (video also splits texture coordinates).
    pub content: ContentKind,
}

/// Emitted when a protected buffer is checked against the GPU policy.
#[derive(Clone, Copy, Debug)]
pub struct ProtectedGpuEvent {
    /// Which output.
    pub output: OutputId,
    /// Whether GPU composition was permitted.
    pub allowed: bool,
}

/// Emitted when the policy falls back to a default.
#[derive(Clone, Copy, Debug)]
pub struct FallbackEvent {
    /// Which output.
    pub output: OutputId,
    /// The condition that caused the fallback.
    pub error: PlacementError,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the placement policy.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a buffer is classified.
    fn on_classify(&mut self, e: &ClassifyEvent) {
        _ = e;
    }

    /// Called when a destination frame is overridden.
    fn on_destination(&mut self, e: &DestinationEvent) {
        _ = e;
    }

    /// Called when a mesh is split for stereo output.
    fn on_stereo_split(&mut self, e: &StereoSplitEvent) {
        _ = e;
    }

    /// Called when protected content is checked against the GPU policy.
    fn on_protected_gpu(&mut self, e: &ProtectedGpuEvent) {
        _ = e;
    }

    /// Called when the policy falls back to a default.
    fn on_fallback(&mut self, e: &FallbackEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ClassifyEvent`].
    #[inline]
    pub fn classify(&mut self, e: &ClassifyEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_classify(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DestinationEvent`].
    #[inline]
    pub fn destination(&mut self, e: &DestinationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_destination(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StereoSplitEvent`].
    #[inline]
    pub fn stereo_split(&mut self, e: &StereoSplitEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_stereo_split(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ProtectedGpuEvent`].
    #[inline]
    pub fn protected_gpu(&mut self, e: &ProtectedGpuEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_protected_gpu(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FallbackEvent`].
    #[inline]
    pub fn fallback(&mut self, e: &FallbackEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_fallback(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
