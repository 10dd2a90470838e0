/// Structural region a chunk boundary can fall into
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Region {
    CodeFence,
    Table,
}

/// A contiguous slice of a document, borrowed from the source text
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Chunk<'a> {
    /// Chunk text, including the line endings of every line it holds
    pub text: &'a str,
    /// Byte offset of `text` within the source document
    pub offset: usize,
    /// Region the first line of the chunk was read in, if the boundary
    /// before it fell inside a code fence or table
    pub starts_in: Option<Region>,
}

impl<'a> Chunk<'a> {
    /// Size in characters, the unit the chunk limit is expressed in
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte range of this chunk within the source document
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.text.len()
    }
}
