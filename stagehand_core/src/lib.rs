// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buffer classification and on-screen placement policy for compositor layers.
//!
//! `stagehand_core` is the piece of a display compositor that decides *where*
//! and *how* a single layer's buffer may be shown, based on vendor metadata
//! carried by the buffer and on the display it is being composed for. It is
//! `no_std` compatible (with `alloc`) and holds no global state: the host
//! compositor builds one [`LayerPlacementPolicy`](policy::LayerPlacementPolicy)
//! per display (or per layer) and delegates to it.
//!
//! # Architecture
//!
//! ```text
//!   BufferMetadataSource ──► classify_buffer() ──► BufferClassification
//!                                                        │
//!        DisplayTarget + SourceGeometry ─────────────────┤
//!                                                        ▼
//!   HWC path:  set_position() ──► HwcLayer::set_frame()
//!   GL path:   compute_texture_window() ──► Mesh ──► split_mesh_for_stereo()
//! ```
//!
//! **[`buffer`]**: Metadata flag word, restriction and content-kind
//! classification, stereo formats.
//!
//! **[`policy`]**: [`LayerPlacementPolicy`](policy::LayerPlacementPolicy):
//! destination-rect overrides, texture windows, protected-content gating,
//! stereo resolution.
//!
//! **[`mesh`]**: Four-vertex fan meshes and stereoscopic splitting.
//!
//! **[`config`]**: [`PlacementConfig`](config::PlacementConfig) and the
//! [`PropertySource`](config::PropertySource) lookup used to build it from
//! system properties.
//!
//! **[`host`]**: Traits the host compositor implements for its buffers and
//! hardware-composer layers.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! placement diagnostics, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies and
//!   a [`PropertySource`](config::PropertySource) impl for `HashMap`.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod buffer;
pub mod config;
pub mod error;
pub mod host;
pub mod mesh;
pub mod output;
pub mod policy;
pub mod rect;
pub mod source;
pub mod trace;
