//! Newline-delimited JSON stream accumulation
//!
//! The generate endpoint streams its reply as NDJSON: one JSON object per
//! line, each optionally carrying a `response` text fragment. Fragments are
//! concatenated in arrival order. Lines that fail to parse are logged and
//! skipped; they never abort the stream. Network chunk boundaries carry no
//! meaning, so bytes are buffered until a full line is available.

use serde::Deserialize;

/// Longest prefix of a malformed line echoed into the warning log
const MALFORMED_PREVIEW_CHARS: usize = 120;

/// One line of the generate stream
///
/// Only the `response` fragment matters here; all other fields the model
/// server emits (timings, context, done flags) are ignored.
#[derive(Debug, Deserialize)]
struct GenerateRecord {
    response: Option<String>,
}

/// Incremental NDJSON decoder for a generate stream
///
/// Feed raw body chunks with [`push_chunk`](Self::push_chunk); call
/// [`finish`](Self::finish) once the stream ends to flush any trailing
/// unterminated line and take the concatenated output.
#[derive(Debug, Default)]
pub struct FragmentAccumulator {
    buffer: Vec<u8>,
    output: String,
    records: usize,
    skipped: usize,
    bytes: usize,
}

impl FragmentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw body chunk and process every complete line it closes
    pub fn push_chunk(&mut self, chunk: &[u8]) {
        self.bytes += chunk.len();
        self.buffer.extend_from_slice(chunk);

        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            // Drop the terminating newline before parsing
            self.process_line(&line[..line.len() - 1]);
        }
    }

    /// Flush any trailing unterminated line and return the concatenated output
    pub fn finish(mut self) -> String {
        if !self.buffer.is_empty() {
            let line = std::mem::take(&mut self.buffer);
            self.process_line(&line);
        }

        tracing::debug!(
            records = self.records,
            skipped = self.skipped,
            bytes_received = self.bytes,
            "Generate stream drained"
        );

        self.output
    }

    /// Parsed records seen so far
    pub fn records(&self) -> usize {
        self.records
    }

    /// Malformed lines skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Raw body bytes consumed so far
    pub fn bytes_received(&self) -> usize {
        self.bytes
    }

    fn process_line(&mut self, line: &[u8]) {
        // Tolerate CRLF line endings
        let line = match line.last() {
            Some(b'\r') => &line[..line.len() - 1],
            _ => line,
        };

        if line.is_empty() {
            return;
        }

        match serde_json::from_slice::<GenerateRecord>(line) {
            Ok(record) => {
                self.records += 1;
                if let Some(fragment) = record.response {
                    self.output.push_str(&fragment);
                }
            }
            Err(error) => {
                self.skipped += 1;
                tracing::warn!(
                    error = %error,
                    line = %malformed_preview(line),
                    "Skipping malformed stream record"
                );
            }
        }
    }
}

/// Short lossy rendering of a malformed line for log output
fn malformed_preview(line: &[u8]) -> String {
    let text = String::from_utf8_lossy(line);
    if text.chars().count() <= MALFORMED_PREVIEW_CHARS {
        text.into_owned()
    } else {
        let mut preview: String = text.chars().take(MALFORMED_PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    }
}
