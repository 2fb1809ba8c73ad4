use derive_more::Display;

/// One raw TLE entry: a name line followed by the two element lines
/// https://en.wikipedia.org/wiki/Two-line_element_set
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{}", "satellite_name")]
pub struct TleEntry {
    pub satellite_name: String,
    pub line1: String,
    pub line2: String,
}

impl TleEntry {
    pub fn new<N, L1, L2>(satellite_name: N, line1: L1, line2: L2) -> Self
    where
        N: Into<String>,
        L1: Into<String>,
        L2: Into<String>,
    {
        Self {
            satellite_name: satellite_name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}

/// Which of the two element lines a field lives on
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum ElementLine {
    #[display(fmt = "line 1")]
    Line1,
    #[display(fmt = "line 2")]
    Line2,
}

/// A fixed-width field within an element line.
///
/// Offsets count characters from the start of the trimmed line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[display(fmt = "{} ({}, {}+{})", "name", "line", "offset", "len")]
pub struct Column {
    pub name: &'static str,
    pub line: ElementLine,
    pub offset: usize,
    pub len: usize,
}

impl Column {
    pub const fn new(name: &'static str, line: ElementLine, offset: usize, len: usize) -> Self {
        Self {
            name,
            line,
            offset,
            len,
        }
    }

    /// Slice this column out of `line`.
    ///
    /// Short lines are clipped: a column that starts past the end of the line
    /// yields an empty string, one that runs past the end yields what's there.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        let byte_offset = |n: usize| {
            line.char_indices()
                .nth(n)
                .map(|(idx, _)| idx)
                .unwrap_or(line.len())
        };
        let start = byte_offset(self.offset);
        let end = byte_offset(self.offset + self.len);
        &line[start..end]
    }

    /// Slice this column out of the matching line of `entry`
    pub fn extract<'a>(&self, entry: &'a TleEntry) -> &'a str {
        let line = match self.line {
            ElementLine::Line1 => &entry.line1,
            ElementLine::Line2 => &entry.line2,
        };
        self.slice(line.trim())
    }
}
