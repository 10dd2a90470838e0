//! Structure-aware document splitting
//!
//! Splits markdown into size-bounded chunks on line boundaries, where a
//! line ends at `\n`, a lone `\r` or any other Unicode line break. Chunks are
//! borrowed slices of the input and concatenate back to it exactly.
//!
//! While a line is read the chunker tracks whether it sits inside a fenced
//! code block or a table. A boundary that falls inside such a region is
//! placed before the line that overflowed, never within it, and the next
//! chunk is tagged with the region it opens in. A single line longer than
//! the limit is emitted alone as an oversized chunk rather than cut.

mod regions;

use crate::model::{Chunk, Region};
use regions::RegionTracker;

/// Default chunk size limit in characters (10 KiB)
pub const DEFAULT_CHUNK_LIMIT: usize = 10 * 1024;

/// Splits documents into chunks of at most `limit` characters
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    limit: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_LIMIT)
    }
}

impl Chunker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Lazily split `content` into chunks
    pub fn split<'a>(&self, content: &'a str) -> Chunks<'a> {
        Chunks {
            content,
            limit: self.limit,
            pos: 0,
            start: 0,
            len: 0,
            starts_in: None,
            regions: RegionTracker::default(),
        }
    }
}

/// Iterator over the chunks of one document
pub struct Chunks<'a> {
    content: &'a str,
    limit: usize,
    /// Byte offset of the next unread line
    pos: usize,
    /// Byte offset where the pending chunk begins
    start: usize,
    /// Characters in the pending chunk
    len: usize,
    starts_in: Option<Region>,
    regions: RegionTracker,
}

impl<'a> Chunks<'a> {
    /// Emit the pending chunk, which ends right before `self.pos`
    fn flush(&mut self) -> Chunk<'a> {
        let chunk = Chunk {
            text: &self.content[self.start..self.pos],
            offset: self.start,
            starts_in: self.starts_in,
        };
        self.start = self.pos;
        self.len = 0;
        chunk
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        while self.pos < self.content.len() {
            let rest = &self.content[self.pos..];
            let line_end = line_end(rest);
            let line = &rest[..line_end];
            let line_len = line.chars().count();
            let region = self.regions.observe(line);

            // Inside or outside a region the overflowing line seeds the next
            // chunk whole; the region only changes how that chunk is tagged.
            let emitted = if self.pos > self.start && self.len + line_len > self.limit {
                Some(self.flush())
            } else {
                None
            };

            if self.pos == self.start {
                self.starts_in = region;
            }
            self.len += line_len;
            self.pos += line_end;

            if emitted.is_some() {
                return emitted;
            }
        }

        if self.pos > self.start {
            return Some(self.flush());
        }
        None
    }
}

/// Byte length of the first line of `text`, terminator included.
///
/// Line breaks are the Unicode set markdown editors and Python's
/// `str.splitlines` agree on: `\n`, `\r`, `\r\n`, vertical tab, form feed,
/// the file/group/record separators, NEL and the line/paragraph separators.
fn line_end(text: &str) -> usize {
    for (i, c) in text.char_indices() {
        match c {
            '\r' if text[i + 1..].starts_with('\n') => return i + 2,
            '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}' => return i + c.len_utf8(),
            _ => {}
        }
    }
    text.len()
}

/// Split `content` into chunks of at most `limit` characters
pub fn split(content: &str, limit: usize) -> Vec<Chunk<'_>> {
    Chunker::new(limit).split(content).collect()
}
