//! Incremental UTF-8 decoding.

/// Decodes a byte stream chunk by chunk without corrupting code points that
/// straddle chunk boundaries.
///
/// An incomplete sequence at the end of a chunk is held back and completed
/// by the next chunk. Bytes that can never form valid UTF-8 are replaced
/// with U+FFFD, as a browser `TextDecoder` would.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode as much of `pending + chunk` as is complete.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::with_capacity(self.pending.len());
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    out.push_str(text);
                    self.pending.clear();
                    break;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&self.pending[..valid]));
                    match e.error_len() {
                        // Truncated sequence: wait for the rest
                        None => {
                            self.pending.drain(..valid);
                            break;
                        }
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid + len);
                        }
                    }
                }
            }
        }
        out
    }

    /// End of input: drop any truncated sequence, returning how many bytes were lost.
    pub fn finish(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }
}
