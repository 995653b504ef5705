// Copyright 2026 the Stagehand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use stagehand_core::trace::{
    ClassifyEvent, DestinationEvent, FallbackEvent, ProtectedGpuEvent, StereoSplitEvent, TraceSink,
};

use crate::{content_name, reason_name, restriction_name, stereo_name};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_classify(&mut self, e: &ClassifyEvent) {
        let _ = writeln!(
            self.writer,
            "[classify] output={} restriction={} content={}",
            e.output.0,
            restriction_name(e.classification.restriction),
            content_name(e.classification.content),
        );
    }

    fn on_destination(&mut self, e: &DestinationEvent) {
        let r = e.rect;
        let _ = writeln!(
            self.writer,
            "[destination] output={} rect=({}, {}, {}, {}) reason={}",
            e.output.0,
            r.left,
            r.top,
            r.right,
            r.bottom,
            reason_name(e.reason),
        );
    }

    fn on_stereo_split(&mut self, e: &StereoSplitEvent) {
        let _ = writeln!(
            self.writer,
            "[stereo] output={} format={} content={}",
            e.output.0,
            stereo_name(e.format),
            content_name(e.content),
        );
    }

    fn on_protected_gpu(&mut self, e: &ProtectedGpuEvent) {
        let verdict = if e.allowed { "allowed" } else { "DENIED" };
        let _ = writeln!(self.writer, "[protected] output={} gpu={verdict}", e.output.0);
    }

    fn on_fallback(&mut self, e: &FallbackEvent) {
        let _ = writeln!(self.writer, "[fallback] output={} {}", e.output.0, e.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_core::buffer::{BufferClassification, BufferRestriction, ContentKind};
    use stagehand_core::error::PlacementError;
    use stagehand_core::output::OutputId;
    use stagehand_core::rect::PixelRect;
    use stagehand_core::trace::OverrideReason;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_classify() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_classify(&ClassifyEvent {
            output: OutputId(1),
            classification: BufferClassification {
                restriction: BufferRestriction::ExternalOnly,
                content: ContentKind::Video,
            },
        });
        let output = output(sink);
        assert_eq!(
            output,
            "[classify] output=1 restriction=external-only content=video\n"
        );
    }

    #[test]
    fn pretty_print_destination() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_destination(&DestinationEvent {
            output: OutputId(2),
            rect: PixelRect::new(240, 0, 1680, 1080),
            reason: OverrideReason::AspectFit,
        });
        let output = output(sink);
        assert!(output.contains("[destination]"), "got: {output}");
        assert!(output.contains("rect=(240, 0, 1680, 1080)"), "got: {output}");
        assert!(output.contains("reason=aspect-fit"), "got: {output}");
    }

    #[test]
    fn pretty_print_one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_protected_gpu(&ProtectedGpuEvent {
            output: OutputId(0),
            allowed: false,
        });
        sink.on_fallback(&FallbackEvent {
            output: OutputId(0),
            error: PlacementError::UnsupportedStereoFormat(4),
        });
        let output = output(sink);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[protected] output=0 gpu=DENIED");
        assert_eq!(lines[1], "[fallback] output=0 unsupported stereo format (4)");
    }
}
