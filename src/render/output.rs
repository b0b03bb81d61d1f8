//! Rendered glyph grid and its ANSI serialization.

use std::fmt;

use super::color::PaletteIndex;

/// Reset all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// Upper half block (U+2580).
pub const UPPER_HALF_BLOCK: char = '\u{2580}';

/// A single character cell with optional 256-color styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledGlyph {
    pub glyph: char,
    pub fg: Option<PaletteIndex>,
    pub bg: Option<PaletteIndex>,
}

impl StyledGlyph {
    pub fn new(glyph: char, fg: Option<PaletteIndex>, bg: Option<PaletteIndex>) -> Self {
        Self { glyph, fg, bg }
    }

    /// Glyph drawn over a background color.
    pub fn background(glyph: char, bg: PaletteIndex) -> Self {
        Self::new(glyph, None, Some(bg))
    }

    /// Glyph drawn in a foreground color.
    pub fn foreground(glyph: char, fg: PaletteIndex) -> Self {
        Self::new(glyph, Some(fg), None)
    }

    fn is_styled(&self) -> bool {
        self.fg.is_some() || self.bg.is_some()
    }
}

impl fmt::Display for StyledGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(bg) = self.bg {
            write!(f, "\x1b[48;5;{}m", bg)?;
        }
        if let Some(fg) = self.fg {
            write!(f, "\x1b[38;5;{}m", fg)?;
        }
        write!(f, "{}", self.glyph)?;
        if self.is_styled() {
            f.write_str(RESET)?;
        }
        Ok(())
    }
}

/// One terminal row of glyphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    glyphs: Vec<StyledGlyph>,
}

impl Line {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            glyphs: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, glyph: StyledGlyph) {
        self.glyphs.push(glyph);
    }

    pub fn glyphs(&self) -> &[StyledGlyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl FromIterator<StyledGlyph> for Line {
    fn from_iter<I: IntoIterator<Item = StyledGlyph>>(iter: I) -> Self {
        Self {
            glyphs: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

/// A rendered image: rows of styled glyphs, top to bottom.
///
/// `Display` produces the raw escape-coded text with every row
/// newline-terminated, ready to print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    lines: Vec<Line>,
}

impl Output {
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            lines: Vec::with_capacity(rows),
        }
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Grid size as `(columns, rows)`.
    pub fn dimensions(&self) -> (usize, usize) {
        let columns = self.lines.iter().map(Line::len).max().unwrap_or(0);
        (columns, self.lines.len())
    }

    /// Every glyph in row-major order.
    pub fn glyphs(&self) -> impl Iterator<Item = &StyledGlyph> {
        self.lines.iter().flat_map(|line| line.glyphs.iter())
    }

    /// Serialize to ANSI text.
    pub fn to_ansi(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
