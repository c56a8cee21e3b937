//! Entry splitting
//!
//! A tag note body is a sequence of chunks. Each chunk starts with `(#)` at
//! the beginning of a line, carries a comma-separated tag section closed by
//! `#)` and a newline, and continues with free text up to the next chunk:
//!
//! ```text
//! !Tagnotes
//! (#)work, ideas#)
//! Some text
//! (#)personal#)
//! More text
//! ```

use crate::domain::notes::Entry;
use crate::error::{Result, ScanError};
use std::borrow::Cow;

/// Marks the start of a chunk; only valid right after a newline
const DELIMITER: &[u8] = b"\n(#)";

/// Stripped from every chunk wherever it occurs
const MARKER: &str = "(#)";

/// Separates the tag section from the content
const CLOSING_MARKER: &str = "#)\n";

/// A raw slice of the document ending right after a delimiter, or at the end
/// of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Byte offset of the chunk within the document
    pub offset: usize,
    pub bytes: &'a [u8],
}

/// Lazy iterator over the chunks of a document
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    data: &'a [u8],
    pos: usize,
    finished: bool,
}

impl<'a> Chunks<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            finished: false,
        }
    }
}

/// Find the end of the first delimiter in `data`, if any
fn find_delimiter_end(data: &[u8]) -> Option<usize> {
    data.windows(DELIMITER.len())
        .position(|w| w == DELIMITER)
        .map(|start| start + DELIMITER.len())
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        if self.finished {
            return None;
        }

        let offset = self.pos;
        let rest = &self.data[offset..];

        match find_delimiter_end(rest) {
            Some(end) => {
                self.pos += end;
                Some(Chunk {
                    offset,
                    bytes: &rest[..end],
                })
            }
            None => {
                // Tail after the last delimiter
                self.finished = true;
                Some(Chunk {
                    offset,
                    bytes: rest,
                })
            }
        }
    }
}

/// Turn one chunk of text into an entry.
///
/// Returns `None` when the chunk has no closing marker.
pub fn classify_chunk(text: &str) -> Option<Entry> {
    let cleaned = text.replace(MARKER, "");
    let (tag_section, content) = cleaned.split_once(CLOSING_MARKER)?;

    let tags = tag_section
        .split(',')
        .map(|tag| tag.trim().to_string())
        .collect();

    Some(Entry::new(tags, content.to_string()))
}

/// Splits tag note buffers into entries
///
/// Chunk length is unbounded unless a limit is set; callers that read from
/// disk already bound the whole buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntrySplitter {
    max_chunk_size: Option<usize>,
}

impl EntrySplitter {
    /// Create a splitter with an optional chunk size limit in bytes
    pub fn new(max_chunk_size: Option<usize>) -> Self {
        Self { max_chunk_size }
    }

    /// Create a splitter that refuses chunks longer than `limit` bytes
    pub fn with_max_chunk_size(limit: usize) -> Self {
        Self::new(Some(limit))
    }

    /// Split a whole buffer into entries, in document order.
    ///
    /// Chunks without a closing marker are skipped. The header line and any
    /// preamble form the first chunk and follow the same rule. Bytes that
    /// are not valid UTF-8 are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if a chunk exceeds the configured size limit.
    /// No entries are returned in that case.
    pub fn split(&self, buf: &[u8]) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for chunk in Chunks::new(buf) {
            self.check_len(chunk)?;

            let text = String::from_utf8_lossy(chunk.bytes);
            match classify_chunk(&text) {
                Some(entry) => {
                    if let Cow::Owned(_) = text {
                        log::warn!("Entry at byte {} is not valid UTF-8", chunk.offset);
                    }
                    log::debug!("Tags: {:?} content: {:?}", entry.tags, entry.content);
                    entries.push(entry);
                }
                None => {
                    log::trace!("Skipping chunk at byte {} without closing marker", chunk.offset)
                }
            }
        }

        Ok(entries)
    }

    fn check_len(&self, chunk: Chunk<'_>) -> std::result::Result<(), ScanError> {
        match self.max_chunk_size {
            Some(limit) if chunk.bytes.len() > limit => Err(ScanError::ChunkTooLong {
                offset: chunk.offset,
                len: chunk.bytes.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// Split a buffer with no chunk size limit
pub fn split_entries(buf: &[u8]) -> Result<Vec<Entry>> {
    EntrySplitter::default().split(buf)
}
