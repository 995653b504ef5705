// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Newline-delimited JSON trace output.
//!
//! [`JsonLinesSink`] writes each event as a single-line JSON object with an
//! `"event"` discriminator, suitable for `jq` or any log collector.

use std::io::Write;

use serde_json::{Value, json};

use stagehand_core::trace::{
    ClassifyEvent, DestinationEvent, FallbackEvent, ProtectedGpuEvent, StereoSplitEvent, TraceSink,
};

use crate::{content_name, reason_name, restriction_name, stereo_name};

/// Writes one JSON object per event to a [`Write`] destination.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink").finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, value: &Value) {
        if serde_json::to_writer(&mut self.writer, value).is_ok() {
            let _ = self.writer.write_all(b"\n");
        }
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_classify(&mut self, e: &ClassifyEvent) {
        self.emit(&json!({
            "event": "classify",
            "output": e.output.0,
            "restriction": restriction_name(e.classification.restriction),
            "content": content_name(e.classification.content),
        }));
    }

    fn on_destination(&mut self, e: &DestinationEvent) {
        self.emit(&json!({
            "event": "destination",
            "output": e.output.0,
            "rect": [e.rect.left, e.rect.top, e.rect.right, e.rect.bottom],
            "reason": reason_name(e.reason),
        }));
    }

    fn on_stereo_split(&mut self, e: &StereoSplitEvent) {
        self.emit(&json!({
            "event": "stereo_split",
            "output": e.output.0,
            "format": stereo_name(e.format),
            "content": content_name(e.content),
        }));
    }

    fn on_protected_gpu(&mut self, e: &ProtectedGpuEvent) {
        self.emit(&json!({
            "event": "protected_gpu",
            "output": e.output.0,
            "allowed": e.allowed,
        }));
    }

    fn on_fallback(&mut self, e: &FallbackEvent) {
        self.emit(&json!({
            "event": "fallback",
            "output": e.output.0,
            "error": e.error.to_string(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_core::buffer::{ContentKind, StereoFormat};
    use stagehand_core::error::PlacementError;
    use stagehand_core::output::OutputId;
    use stagehand_core::rect::PixelRect;
    use stagehand_core::trace::OverrideReason;

    fn parse(sink: JsonLinesSink<Vec<u8>>) -> Vec<Value> {
        let text = String::from_utf8(sink.into_inner()).unwrap();
        text.lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn each_event_is_one_json_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.on_destination(&DestinationEvent {
            output: OutputId(1),
            rect: PixelRect::new(0, 0, 1920, 1080),
            reason: OverrideReason::ExternalOnly,
        });
        sink.on_stereo_split(&StereoSplitEvent {
            output: OutputId(1),
            format: StereoFormat::TopBottom,
            content: ContentKind::Video,
        });
        sink.on_fallback(&FallbackEvent {
            output: OutputId(3),
            error: PlacementError::MissingMetadata,
        });

        let events = parse(sink);
        assert_eq!(events.len(), 3);

        assert_eq!(events[0]["event"], "destination");
        assert_eq!(events[0]["rect"], json!([0, 0, 1920, 1080]));
        assert_eq!(events[0]["reason"], "external-only");

        assert_eq!(events[1]["event"], "stereo_split");
        assert_eq!(events[1]["format"], "top-bottom");
        assert_eq!(events[1]["content"], "video");

        assert_eq!(events[2]["output"], 3);
        assert_eq!(events[2]["error"], "buffer has no vendor metadata");
    }

    #[test]
    fn protected_gpu_records_verdict() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.on_protected_gpu(&ProtectedGpuEvent {
            output: OutputId(0),
            allowed: true,
        });
        let events = parse(sink);
        assert_eq!(events[0]["allowed"], true);
    }
}
