//! Tag note header detection

use crate::error::{DentryError, Result};
use std::io;

/// Signature every tag note starts with
pub const HEADER_SIGNATURE: &[u8] = b"!Tagnotes";

/// Return the first line of `buf` without its terminating newline.
///
/// Input that never reaches a newline has no readable line.
fn first_line(buf: &[u8]) -> Option<&[u8]> {
    buf.iter().position(|&b| b == b'\n').map(|end| &buf[..end])
}

/// Check whether a buffer starts with the tag note header line.
///
/// Only the first line is inspected, and the signature must start at its
/// first byte; anything after the signature is ignored.
///
/// # Errors
///
/// Returns [`DentryError::HeaderRead`] when the buffer holds no
/// newline-terminated line, which includes empty input.
pub fn is_tag_note(buf: &[u8]) -> Result<bool> {
    let line = first_line(buf).ok_or_else(|| {
        DentryError::HeaderRead(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input before first line terminator",
        ))
    })?;

    Ok(line.starts_with(HEADER_SIGNATURE))
}
