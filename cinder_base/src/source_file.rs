//! Contains the source text buffer handed to the front-end and the spans pointing into it.

use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::{Hash, Hasher},
    iter::Peekable,
    ops::Range,
    path::{Path, PathBuf},
    str::CharIndices,
    sync::Arc,
};

use derive_more::Display;
use getset::{CopyGetters, Getters};
use thiserror::Error;

/// Represents an error that occurs when loading a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Represents a source text buffer given to the front-end.
///
/// The buffer is shared through an [`Arc`] so that every [`Span`] can refer back to it.
#[derive(Getters)]
pub struct SourceFile {
    content: String,

    /// Gets the path used to label the diagnostics of the source file.
    #[get = "pub"]
    full_path: PathBuf,

    /// The byte range of every line, including its line terminator.
    lines: Vec<Range<ByteIndex>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("line_number", &self.lines.len())
            .finish_non_exhaustive()
    }
}

impl SourceFile {
    /// Creates a source file from an in-memory text buffer.
    ///
    /// The `full_path` is only used to label diagnostics; nothing is read from it.
    #[must_use]
    pub fn new(full_path: impl Into<PathBuf>, content: impl Into<String>) -> Arc<Self> {
        let content = content.into();
        let lines = line_ranges(&content);

        Arc::new(Self {
            content,
            full_path: full_path.into(),
            lines,
        })
    }

    /// Reads the whole file at the given path into a new source file.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when reading the file.
    /// - [`Error::Utf8Error`]: The file content is not valid UTF-8.
    pub fn load(path: &Path) -> Result<Arc<Self>, Error> {
        let content = String::from_utf8(std::fs::read(path)?)?;

        Ok(Self::new(path, content))
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    /// Gets the line of the source file at the given line number, including its line terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        let range = self.lines.get(line.checked_sub(1)?)?;
        Some(&self.content[range.clone()])
    }

    /// Gets the [`Iterator`] over the characters of the source file.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> Iterator<'a> {
        Iterator {
            source_file: self,
            iterator: self.content.char_indices().peekable(),
        }
    }

    /// Gets the number of lines in the source file.
    ///
    /// The text after the last line terminator counts as a line even when it is empty.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// The index one past the last character is located right after the final character of the
    /// last line. Returns `None` if the index is past that or not on a character boundary.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if !self.content.is_char_boundary(byte_index) {
            return None;
        }

        // the lines are sorted, so the first line that ends after the index contains it
        let line = self
            .lines
            .partition_point(|range| range.end <= byte_index)
            .min(self.lines.len() - 1);

        let line_start = self.lines[line].start;
        let column = self.content[line_start..byte_index].chars().count() + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Represents a range of characters in a source file.
///
/// Two spans are equal only if they point into the very same [`SourceFile`] instance.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// Returns `None` if the range is reversed, out of bounds or does not fall on character
    /// boundaries.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();

        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Gets the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the starting [`Location`] of the span.
    #[must_use]
    pub fn start_location(&self) -> Location {
        // the start index is validated by `Span::new`
        self.source_file.get_location(self.start).unwrap()
    }

    /// Gets the ending [`Location`] of the span.
    #[must_use]
    pub fn end_location(&self) -> Option<Location> { self.source_file.get_location(self.end) }

    fn key(&self) -> (*const SourceFile, ByteIndex, ByteIndex) {
        (Arc::as_ptr(&self.source_file), self.start, self.end)
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool { self.key() == other.key() }
}

impl Eq for Span {}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering { self.key().cmp(&other.key()) }
}

impl Hash for Span {
    fn hash<H: Hasher>(&self, state: &mut H) { self.key().hash(state) }
}

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
#[display(fmt = "{}:{}", line, column)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location, counted in characters (starts at 1).
    pub column: usize,
}

/// Is an iterator over the characters of a source file and their byte indices that can be peeked
/// at.
#[derive(Debug, Clone, CopyGetters)]
pub struct Iterator<'a> {
    /// Gets the source file that the iterator is iterating over.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,
    iterator: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator<'a> {
    /// Peeks at the next character in the source file.
    pub fn peek(&mut self) -> Option<(ByteIndex, char)> { self.iterator.peek().copied() }

    /// Gets the byte index of the next character, or the length of the content if the iterator
    /// is exhausted.
    pub fn position(&mut self) -> ByteIndex {
        let len = self.source_file.content().len();
        self.peek().map_or(len, |(index, _)| index)
    }
}

impl<'a> std::iter::Iterator for Iterator<'a> {
    type Item = (ByteIndex, char);

    fn next(&mut self) -> Option<Self::Item> { self.iterator.next() }
}

/// Splits the text into line ranges. `\n`, `\r\n` and a lone `\r` all end a line.
fn line_ranges(text: &str) -> Vec<Range<ByteIndex>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut line_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        let line_end = match bytes[index] {
            b'\r' if bytes.get(index + 1) == Some(&b'\n') => index + 2,
            b'\r' | b'\n' => index + 1,
            _ => {
                index += 1;
                continue;
            }
        };

        ranges.push(line_start..line_end);
        line_start = line_end;
        index = line_end;
    }

    ranges.push(line_start..text.len());

    ranges
}
