// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Nothing in placement is fatal. [`PlacementError`] names the conditions
//! that make the policy fall back to treating a layer as ordinary,
//! unrestricted 2-D content; callers normally only see them through
//! [`FallbackEvent`](crate::trace::FallbackEvent)s.

use alloc::string::String;
use core::fmt;

/// Conditions under which placement degrades to its defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlacementError {
    /// The buffer carries no recognizable vendor metadata.
    MissingMetadata,
    /// The buffer requested a stereo packing this policy cannot split.
    UnsupportedStereoFormat(u32),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMetadata => f.write_str("buffer has no vendor metadata"),
            Self::UnsupportedStereoFormat(raw) => {
                write!(f, "unsupported stereo format ({raw})")
            }
        }
    }
}

impl core::error::Error for PlacementError {}

/// Errors from strict configuration parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A property held a value that is not a recognized boolean.
    InvalidValue {
        /// Property key.
        key: String,
        /// Offending value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value {value:?} for property {key}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(
            PlacementError::MissingMetadata.to_string(),
            "buffer has no vendor metadata"
        );
        assert_eq!(
            PlacementError::UnsupportedStereoFormat(4).to_string(),
            "unsupported stereo format (4)"
        );
        let e = ConfigError::InvalidValue {
            key: "persist.sys.is_hdmi_primary".into(),
            value: "maybe".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid value \"maybe\" for property persist.sys.is_hdmi_primary"
        );
    }
}
