//! The proprietary run-length compression used by several city-file chunks.
//!
//! The stream is a sequence of spans, each introduced by one control byte:
//! 1..=127 is a literal span of that many following bytes, 129..=255 is a
//! compressed span of `control - 127` copies of the single following byte.
//! 0 and 128 never occur in valid data. The output length is not encoded
//! anywhere; the stream simply ends when the input does.

use crate::error::{Error, Result};
use tracing::trace;

/// Decompress a whole chunk payload in one pass.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() * 2);
    let mut pos = 0;

    while pos < input.len() {
        let control = input[pos];
        let control_offset = pos;
        pos += 1;

        match control {
            0 | 128 => {
                return Err(Error::InvalidRunControl {
                    offset: control_offset,
                    control,
                });
            }
            1..=127 => {
                let len = control as usize;
                if pos + len > input.len() {
                    return Err(Error::RunSpanOverrun {
                        offset: control_offset,
                        need: len,
                        have: input.len() - pos,
                    });
                }
                trace!(offset = control_offset, len, "literal span");
                out.extend_from_slice(&input[pos..pos + len]);
                pos += len;
            }
            _ => {
                // 129..=255: replicate one byte, 2..=128 times.
                let len = control as usize - 127;
                if pos >= input.len() {
                    return Err(Error::RunSpanOverrun {
                        offset: control_offset,
                        need: 1,
                        have: 0,
                    });
                }
                trace!(offset = control_offset, len, "compressed span");
                let byte = input[pos];
                pos += 1;
                out.resize(out.len() + len, byte);
            }
        }
    }

    Ok(out)
}
