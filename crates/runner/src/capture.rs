// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded stream capture.
//!
//! A reader keeps at most `limit` bytes. Once the limit is reached it stops
//! accumulating, marks the capture truncated and keeps reading until EOF, so
//! a child producing unbounded output never blocks on a full pipe.

use std::io::ErrorKind;

use tokio::io::{AsyncRead, AsyncReadExt};

/// Appended to a capture that hit its byte limit.
pub const TRUNCATION_NOTICE: &str = "\n ... Output truncated\n";

const CHUNK_SIZE: usize = 64 * 1024;

/// Text read from one stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Captured {
    pub text: String,
    pub truncated: bool,
}

/// Drain `reader` to EOF, keeping at most `limit` bytes. Output that fills
/// the limit exactly counts as truncated.
pub(crate) async fn read_capped<R>(mut reader: R, limit: usize) -> Captured
where
    R: AsyncRead + Unpin,
{
    let mut kept: Vec<u8> = Vec::new();
    let mut chunk = vec![0u8; CHUNK_SIZE];
    let mut truncated = false;

    loop {
        let n = match reader.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::debug!(error = %e, "capture stream read failed");
                break;
            }
        };
        if truncated {
            continue;
        }
        let room = limit - kept.len();
        if n >= room {
            kept.extend_from_slice(&chunk[..room]);
            truncated = true;
        } else {
            kept.extend_from_slice(&chunk[..n]);
        }
    }

    Captured {
        text: into_text(&kept, limit, truncated),
        truncated,
    }
}

/// Lossy UTF-8 conversion that never exceeds `limit` bytes before the notice.
///
/// Replacement characters can make the lossy text longer than the raw bytes,
/// so the result is cut back on a char boundary when needed.
fn into_text(bytes: &[u8], limit: usize, truncated: bool) -> String {
    let lossy = String::from_utf8_lossy(bytes);
    let mut text = if lossy.len() > limit {
        let mut end = limit;
        while end > 0 && !lossy.is_char_boundary(end) {
            end -= 1;
        }
        lossy[..end].to_string()
    } else {
        lossy.into_owned()
    };
    if truncated {
        text.push_str(TRUNCATION_NOTICE);
    }
    text
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
