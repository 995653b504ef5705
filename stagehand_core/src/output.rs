// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display output identification and per-frame display state.
//!
//! [`OutputId`] is a lightweight handle identifying a specific display.
//! [`DisplayTarget`] is the snapshot of that display the host supplies each
//! frame; core never owns or mutates it.

use core::fmt;

use crate::rect::PixelRect;

/// Identifies a specific display output.
///
/// Hosts assign output IDs to distinguish multiple displays. Core code
/// passes them through without interpreting the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OutputId(pub u32);

impl fmt::Debug for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutputId({})", self.0)
    }
}

/// What kind of display a [`DisplayTarget`] describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    /// The built-in panel.
    #[default]
    Primary,
    /// A connected external display (HDMI, `DisplayPort`, wireless).
    External,
    /// An off-screen virtual display.
    Virtual,
}

impl DisplayKind {
    /// Returns `true` for every display other than the primary panel.
    #[inline]
    #[must_use]
    pub const fn is_external(self) -> bool {
        !matches!(self, Self::Primary)
    }
}

/// Per-frame description of the display a layer is composed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayTarget {
    /// Host-assigned output handle (used for tracing).
    pub output: OutputId,
    /// Hardware-composer display id, matched against stereo render requests.
    pub hwc_id: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Display kind.
    pub kind: DisplayKind,
    /// Visible viewport in display space.
    pub viewport: PixelRect,
}

impl DisplayTarget {
    /// Creates a target whose viewport covers the whole display.
    ///
    /// The hardware-composer display id defaults to `output.0`. Hosts whose
    /// composer numbers displays differently must set it with
    /// [`with_hwc_id`](Self::with_hwc_id), since stereo render requests are
    /// matched against it.
    #[must_use]
    pub const fn new(output: OutputId, width: u32, height: u32, kind: DisplayKind) -> Self {
        Self {
            output,
            hwc_id: output.0,
            width,
            height,
            kind,
            viewport: PixelRect::from_size(width, height),
        }
    }

    /// Overrides the hardware-composer display id.
    #[must_use]
    pub const fn with_hwc_id(mut self, hwc_id: u32) -> Self {
        self.hwc_id = hwc_id;
        self
    }

    /// Overrides the visible viewport.
    #[must_use]
    pub const fn with_viewport(mut self, viewport: PixelRect) -> Self {
        self.viewport = viewport;
        self
    }

    /// The full display rectangle `(0, 0, width, height)`.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_primary_is_internal() {
        assert!(!DisplayKind::Primary.is_external());
        assert!(DisplayKind::External.is_external());
        assert!(DisplayKind::Virtual.is_external());
    }

    #[test]
    fn new_target_viewport_is_bounds() {
        let d = DisplayTarget::new(OutputId(1), 1920, 1080, DisplayKind::External);
        assert_eq!(d.viewport, d.bounds());
        assert_eq!(d.bounds(), PixelRect::new(0, 0, 1920, 1080));
        assert_eq!(d.hwc_id, 1);
    }

    #[test]
    fn hwc_id_is_independent_of_output() {
        let d = DisplayTarget::new(OutputId(7), 1280, 720, DisplayKind::External).with_hwc_id(1);
        assert_eq!(d.output, OutputId(7));
        assert_eq!(d.hwc_id, 1);
    }
}
