// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GL-path draw planning for stagehand.
//!
//! This crate sits between [`stagehand_core`]'s placement decisions and a
//! host's GPU renderer. It defines:
//!
//! - [`RenderEngine`]: the renderer contract the host implements
//! - [`DrawCommand`]: a single renderer call
//! - [`DrawPlan`]: an ordered list of renderer calls for one layer
//! - [`plan_gl_draw`]: builds the plan for a layer, including stereoscopic
//!   splitting

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod engine;
mod plan;

pub use engine::RenderEngine;
pub use plan::{DrawCommand, DrawPlan, GlDrawRequest, LayerBlend, plan_gl_draw, plan_gl_draw_into};
