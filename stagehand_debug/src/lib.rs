// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON-lines export for stagehand placement
//! diagnostics.
//!
//! This crate provides [`TraceSink`](stagehand_core::trace::TraceSink)
//! implementations for development and log collection:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`json::JsonLinesSink`]: one JSON object per event, newline-delimited.

pub mod json;
pub mod pretty;

use stagehand_core::buffer::{BufferRestriction, ContentKind, StereoFormat};
use stagehand_core::trace::OverrideReason;

pub(crate) fn restriction_name(r: BufferRestriction) -> &'static str {
    match r {
        BufferRestriction::None => "none",
        BufferRestriction::ExternalOnly => "external-only",
        BufferRestriction::InternalOnly => "internal-only",
        BufferRestriction::SecureDisplay => "secure-display",
    }
}

pub(crate) fn content_name(c: ContentKind) -> &'static str {
    match c {
        ContentKind::Generic => "generic",
        ContentKind::Video => "video",
    }
}

pub(crate) fn stereo_name(f: StereoFormat) -> &'static str {
    match f {
        StereoFormat::None => "none",
        StereoFormat::SideBySideLR => "side-by-side-lr",
        StereoFormat::SideBySideRL => "side-by-side-rl",
        StereoFormat::TopBottom => "top-bottom",
    }
}

pub(crate) fn reason_name(r: OverrideReason) -> &'static str {
    match r {
        OverrideReason::ExternalOnly => "external-only",
        OverrideReason::AspectFit => "aspect-fit",
    }
}
