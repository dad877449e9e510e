//! Frame reassembly.
//!
//! Text arrives in pieces whose boundaries have nothing to do with SSE
//! framing. [`FrameBuffer`] accumulates it and hands back each frame once
//! its terminating blank line has been seen.

/// Accumulator that splits decoded text into complete SSE frames.
///
/// Line terminators are normalized to `\n` on the way in (`\r\n` and a lone
/// `\r` both count as one terminator). A `\r` that ends a chunk is
/// remembered so that a `\n` starting the next chunk is not counted twice.
///
/// After every [`ingest`](Self::ingest) the buffer holds at most one
/// incomplete trailing frame.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    pending: String,
    skip_leading_lf: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` and return every frame it completes, in order.
    pub fn ingest(&mut self, text: &str) -> Vec<String> {
        self.append_normalized(text);

        let mut frames = Vec::new();
        while let Some(pos) = self.pending.find("\n\n") {
            frames.push(self.pending[..pos].to_string());
            self.pending.drain(..pos + 2);
        }
        frames
    }

    /// Text received but not yet closed by a blank line.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Drop the unterminated residue at end of stream.
    ///
    /// Returns the discarded text when it held anything besides whitespace.
    pub fn discard_residue(&mut self) -> Option<String> {
        self.skip_leading_lf = false;
        let residue = std::mem::take(&mut self.pending);
        if residue.trim().is_empty() {
            None
        } else {
            Some(residue)
        }
    }

    fn append_normalized(&mut self, text: &str) {
        let mut chars = text.chars().peekable();

        if self.skip_leading_lf {
            match chars.peek() {
                Some('\n') => {
                    chars.next();
                    self.skip_leading_lf = false;
                }
                Some(_) => self.skip_leading_lf = false,
                None => return,
            }
        }

        while let Some(c) = chars.next() {
            if c != '\r' {
                self.pending.push(c);
                continue;
            }
            self.pending.push('\n');
            match chars.peek() {
                Some('\n') => {
                    chars.next();
                }
                None => self.skip_leading_lf = true,
                Some(_) => {}
            }
        }
    }
}
