// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement configuration.
//!
//! Everything the policy needs to know about the device is captured once, at
//! construction, in a [`PlacementConfig`]. Hosts that keep these switches in
//! a system-property store can build the config with
//! [`PlacementConfig::from_properties`], which reads the keys below through
//! any [`PropertySource`]:
//!
//! | key | meaning |
//! |---|---|
//! | [`PROTECTED_GPU_KEY`] | integer; `1` lets protected content use the GPU path |
//! | [`HDMI_PRIMARY_KEY`] | integer; `1` marks the external HDMI output as primary |
//! | [`DEBUG_LOGS_KEY`] | `1` or `true` enables verbose placement trace events |

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::error::ConfigError;

/// Property that allows protected content on the GPU composition path.
pub const PROTECTED_GPU_KEY: &str = "persist.gralloc.cp.level3";

/// Property that marks the external HDMI display as the primary one.
pub const HDMI_PRIMARY_KEY: &str = "persist.sys.is_hdmi_primary";

/// Property that enables verbose placement diagnostics.
pub const DEBUG_LOGS_KEY: &str = "persist.debug.qdframework.logs";

/// Read-only key/value lookup for configuration properties.
pub trait PropertySource {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&str>;
}

impl PropertySource for [(&str, &str)] {
    fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

impl<const N: usize> PropertySource for [(&str, &str); N] {
    fn get(&self, key: &str) -> Option<&str> {
        PropertySource::get(self.as_slice(), key)
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

#[cfg(feature = "std")]
impl<S: core::hash::BuildHasher> PropertySource for std::collections::HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        std::collections::HashMap::get(self, key).map(String::as_str)
    }
}

/// Policy for DRM-protected content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProtectionPolicy {
    /// Whether protected buffers may be composed on the GPU.
    pub allow_gpu_for_protected: bool,
}

/// Which optional device integrations are available.
///
/// These replace what would otherwise be build-time switches, so a single
/// build can serve devices with and without them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Buffers carry vendor metadata and displays report a viewport.
    pub vendor_metadata: bool,
    /// The GPU path can split stereoscopic frames.
    pub stereo_rendering: bool,
}

impl Capabilities {
    /// Every integration available.
    pub const ALL: Self = Self {
        vendor_metadata: true,
        stereo_rendering: true,
    };

    /// No integrations: every buffer is treated as plain 2-D content.
    pub const NONE: Self = Self {
        vendor_metadata: false,
        stereo_rendering: false,
    };
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// Configuration for a [`LayerPlacementPolicy`](crate::policy::LayerPlacementPolicy).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlacementConfig {
    /// Protected-content policy.
    pub protection: ProtectionPolicy,
    /// Whether the external HDMI display is the logical primary.
    ///
    /// When set, stereo render requests are honoured on every display, not
    /// only the one they name.
    pub hdmi_primary: bool,
    /// Whether verbose placement trace events are emitted.
    pub debug_logs: bool,
    /// Available device integrations.
    pub capabilities: Capabilities,
}

impl PlacementConfig {
    /// All integrations available, every policy switch off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            protection: ProtectionPolicy {
                allow_gpu_for_protected: false,
            },
            hdmi_primary: false,
            debug_logs: false,
            capabilities: Capabilities::ALL,
        }
    }

    /// Sets whether protected content may use the GPU path.
    #[must_use]
    pub const fn with_gpu_for_protected(mut self, allow: bool) -> Self {
        self.protection.allow_gpu_for_protected = allow;
        self
    }

    /// Sets whether the HDMI output is the logical primary display.
    #[must_use]
    pub const fn with_hdmi_primary(mut self, primary: bool) -> Self {
        self.hdmi_primary = primary;
        self
    }

    /// Enables or disables verbose trace events.
    #[must_use]
    pub const fn with_debug_logs(mut self, enabled: bool) -> Self {
        self.debug_logs = enabled;
        self
    }

    /// Replaces the capability set.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Builds a config from system properties, leniently.
    ///
    /// Integer properties are parsed the way C's `atoi` does: leading
    /// whitespace and sign are accepted, parsing stops at the first
    /// non-digit, and garbage reads as zero. Missing keys leave the
    /// corresponding switch off. Capabilities are [`Capabilities::ALL`].
    #[must_use]
    pub fn from_properties<P: PropertySource + ?Sized>(props: &P) -> Self {
        let int_flag = |key: &str| props.get(key).is_some_and(|v| parse_int_lenient(v) == 1);
        Self::new()
            .with_gpu_for_protected(int_flag(PROTECTED_GPU_KEY))
            .with_hdmi_primary(int_flag(HDMI_PRIMARY_KEY))
            .with_debug_logs(
                props
                    .get(DEBUG_LOGS_KEY)
                    .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
            )
    }

    /// Builds a config from system properties, rejecting malformed values.
    ///
    /// Each present key must hold one of `0`, `1`, `true` or `false`
    /// (case-insensitive); see [`parse_flag`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first malformed value.
    pub fn try_from_properties<P: PropertySource + ?Sized>(props: &P) -> Result<Self, ConfigError> {
        let flag = |key: &str| match props.get(key) {
            Some(v) => parse_flag(key, v),
            None => Ok(false),
        };
        Ok(Self::new()
            .with_gpu_for_protected(flag(PROTECTED_GPU_KEY)?)
            .with_hdmi_primary(flag(HDMI_PRIMARY_KEY)?)
            .with_debug_logs(flag(DEBUG_LOGS_KEY)?))
    }
}

/// Parses a boolean property value strictly.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] unless `value` is `0`, `1`, `true`
/// or `false` (case-insensitive, surrounding whitespace ignored).
pub fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    let v = value.trim();
    if v == "1" || v.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if v == "0" || v.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

fn parse_int_lenient(value: &str) -> i64 {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut n: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        n = n.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative { -n } else { n }
}
