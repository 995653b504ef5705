// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vendor buffer metadata and its classification.
//!
//! Allocators tag each buffer with a private flag word, a buffer type, and
//! (for stereoscopic video) a render request written by the video pipeline.
//! [`BufferMetadata`] is the decoded form of that record. Classification
//! reduces it to the two facts placement cares about:
//!
//! - a single [`BufferRestriction`] (where the buffer may be shown), and
//! - a [`ContentKind`] (whether it holds video).
//!
//! Both are fixed for the lifetime of a buffer.

use crate::error::PlacementError;

bitflags::bitflags! {
    /// Private allocation flags attached to a buffer.
    ///
    /// Bits not named here are preserved but ignored.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BufferFlags: u32 {
        /// Show only on external displays, full screen.
        const EXTERNAL_ONLY  = 0x0000_2000;
        /// Never show on external displays.
        const INTERNAL_ONLY  = 0x0000_4000;
        /// Show only on a secure display path.
        const SECURE_DISPLAY = 0x0010_0000;
        /// DRM-protected content.
        const PROTECTED      = 0x0000_0080;
    }
}

/// Allocator-level buffer type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BufferType {
    /// RGB user-interface content.
    #[default]
    Ui,
    /// YUV video content.
    Video,
}

/// Where a buffer may be shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BufferRestriction {
    /// No restriction.
    #[default]
    None,
    /// External displays only, occupying the whole output.
    ExternalOnly,
    /// Internal display only.
    InternalOnly,
    /// Secure display path only.
    SecureDisplay,
}

/// What a buffer holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Anything that is not video.
    #[default]
    Generic,
    /// Decoded video frames.
    Video,
}

/// Packing of a stereoscopic frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StereoFormat {
    /// Ordinary 2-D content.
    #[default]
    None,
    /// Left eye in the left half, right eye in the right half.
    SideBySideLR,
    /// Right eye in the left half, left eye in the right half.
    SideBySideRL,
    /// One eye above the other.
    TopBottom,
}

impl StereoFormat {
    /// Returns `true` for any packing other than [`None`](Self::None).
    #[inline]
    #[must_use]
    pub const fn is_stereo(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl TryFrom<u32> for StereoFormat {
    type Error = PlacementError;

    /// Decodes the hardware composer's S3D mode numbering.
    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::None),
            1 => Ok(Self::SideBySideLR),
            2 => Ok(Self::SideBySideRL),
            3 => Ok(Self::TopBottom),
            other => Err(PlacementError::UnsupportedStereoFormat(other)),
        }
    }
}

/// A stereoscopic render request attached to a video buffer.
///
/// The video pipeline sets this when it wants the GPU, rather than the
/// display hardware, to split the frame for a particular display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StereoRenderRequest {
    /// Hardware-composer display the request targets.
    pub display_id: u32,
    /// Whether the GPU path should perform the split.
    pub gpu_render: bool,
    /// Raw S3D mode (see [`StereoFormat`]'s `TryFrom<u32>`).
    pub gpu_format: u32,
}

/// Decoded per-buffer vendor metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BufferMetadata {
    /// Private allocation flags.
    pub flags: BufferFlags,
    /// Allocator buffer type.
    pub buffer_type: BufferType,
    /// Pending stereo render request, if any.
    pub stereo: Option<StereoRenderRequest>,
}

/// The result of [`BufferMetadata::classify`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BufferClassification {
    /// Placement restriction.
    pub restriction: BufferRestriction,
    /// Content kind.
    pub content: ContentKind,
}

impl BufferMetadata {
    /// Creates metadata with no stereo request.
    #[must_use]
    pub const fn new(flags: BufferFlags, buffer_type: BufferType) -> Self {
        Self {
            flags,
            buffer_type,
            stereo: None,
        }
    }

    /// Attaches a stereo render request.
    #[must_use]
    pub const fn with_stereo(mut self, request: StereoRenderRequest) -> Self {
        self.stereo = Some(request);
        self
    }

    /// The buffer's single restriction.
    ///
    /// If an allocator sets several restriction bits, the first of
    /// external-only, internal-only, secure-display wins.
    #[must_use]
    pub fn restriction(&self) -> BufferRestriction {
        if self.flags.contains(BufferFlags::EXTERNAL_ONLY) {
            BufferRestriction::ExternalOnly
        } else if self.flags.contains(BufferFlags::INTERNAL_ONLY) {
            BufferRestriction::InternalOnly
        } else if self.flags.contains(BufferFlags::SECURE_DISPLAY) {
            BufferRestriction::SecureDisplay
        } else {
            BufferRestriction::None
        }
    }

    /// The buffer's content kind.
    #[must_use]
    pub const fn content_kind(&self) -> ContentKind {
        match self.buffer_type {
            BufferType::Video => ContentKind::Video,
            BufferType::Ui => ContentKind::Generic,
        }
    }

    /// Whether the buffer holds DRM-protected content.
    #[inline]
    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.flags.contains(BufferFlags::PROTECTED)
    }

    /// Classifies the buffer.
    #[must_use]
    pub fn classify(&self) -> BufferClassification {
        BufferClassification {
            restriction: self.restriction(),
            content: self.content_kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metadata_is_unrestricted_generic() {
        let c = BufferMetadata::default().classify();
        assert_eq!(c.restriction, BufferRestriction::None);
        assert_eq!(c.content, ContentKind::Generic);
    }

    #[test]
    fn each_flag_maps_to_its_restriction() {
        let cases = [
            (BufferFlags::EXTERNAL_ONLY, BufferRestriction::ExternalOnly),
            (BufferFlags::INTERNAL_ONLY, BufferRestriction::InternalOnly),
            (BufferFlags::SECURE_DISPLAY, BufferRestriction::SecureDisplay),
            (BufferFlags::PROTECTED, BufferRestriction::None),
        ];
        for (flags, expected) in cases {
            let m = BufferMetadata::new(flags, BufferType::Ui);
            assert_eq!(m.restriction(), expected, "flags {flags:?}");
        }
    }

    #[test]
    fn at_most_one_restriction() {
        let m = BufferMetadata::new(
            BufferFlags::INTERNAL_ONLY | BufferFlags::EXTERNAL_ONLY | BufferFlags::SECURE_DISPLAY,
            BufferType::Ui,
        );
        assert_eq!(m.restriction(), BufferRestriction::ExternalOnly);
        let m = BufferMetadata::new(
            BufferFlags::SECURE_DISPLAY | BufferFlags::INTERNAL_ONLY,
            BufferType::Ui,
        );
        assert_eq!(m.restriction(), BufferRestriction::InternalOnly);
    }

    #[test]
    fn unknown_bits_are_ignored() {
        let m = BufferMetadata::new(BufferFlags::from_bits_retain(0x8000_0001), BufferType::Video);
        let c = m.classify();
        assert_eq!(c.restriction, BufferRestriction::None);
        assert_eq!(c.content, ContentKind::Video);
        assert!(!m.is_protected());
    }

    #[test]
    fn stereo_format_decoding() {
        assert_eq!(StereoFormat::try_from(0), Ok(StereoFormat::None));
        assert_eq!(StereoFormat::try_from(1), Ok(StereoFormat::SideBySideLR));
        assert_eq!(StereoFormat::try_from(2), Ok(StereoFormat::SideBySideRL));
        assert_eq!(StereoFormat::try_from(3), Ok(StereoFormat::TopBottom));
        // Frame packing has no GPU split.
        assert_eq!(
            StereoFormat::try_from(4),
            Err(PlacementError::UnsupportedStereoFormat(4))
        );
        assert!(!StereoFormat::None.is_stereo());
        assert!(StereoFormat::TopBottom.is_stereo());
    }
}
