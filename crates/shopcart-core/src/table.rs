//! # Text Table
//!
//! Fixed-width, column-aligned plain text tables.
//!
//! ## Layout
//! ```text
//! # Item      Price Quan. Discount  Total      ◄── header
//! ---------------------------------------      ◄── separator
//! 1 Apple      $.99     5        -  $4.95      ◄── row
//! ---------------------------------------      ◄── separator (after every row)
//! 1                                 $4.95      ◄── footer
//! ```
//!
//! - Column width = widest cell in that column, over header, rows and footer
//! - Every cell is padded to its width and followed by one space
//! - Separator length = sum of widths + (columns - 1), i.e. the row without
//!   its trailing space
//! - Lengths are counted in chars, not bytes

/// Horizontal placement of text inside a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    /// Odd padding goes after the text.
    Center,
    Right,
}

/// Formats one cell: truncated to `width` chars (left-most kept), padded per
/// `alignment`, plus one trailing space.
///
/// ## Example
/// ```rust
/// use shopcart_core::table::{format_cell, Alignment};
///
/// assert_eq!(format_cell("ab", Alignment::Left, 4), "ab   ");
/// assert_eq!(format_cell("ab", Alignment::Right, 4), "  ab ");
/// assert_eq!(format_cell("ab", Alignment::Center, 5), " ab   ");
/// assert_eq!(format_cell("abcdef", Alignment::Left, 3), "abc ");
/// ```
pub fn format_cell(value: &str, alignment: Alignment, width: usize) -> String {
    let mut out = String::with_capacity(width + 1);
    write_cell(&mut out, value, alignment, width);
    out
}

fn write_cell(out: &mut String, value: &str, alignment: Alignment, width: usize) {
    let (shown, len) = match value.char_indices().nth(width) {
        Some((cut, _)) => (&value[..cut], width),
        None => (value, value.chars().count()),
    };

    let free = width - len;
    let before = match alignment {
        Alignment::Left => 0,
        Alignment::Center => free / 2,
        Alignment::Right => free,
    };
    let after = free - before;

    pad(out, before);
    out.push_str(shown);
    pad(out, after);
    out.push(' ');
}

fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}

/// Builder for a [`Alignment`]-aware text table.
///
/// Rows shorter than the widest row are padded with empty cells. Columns
/// without an explicit alignment are left-aligned.
///
/// ## Example
/// ```rust
/// use shopcart_core::table::{Alignment, TextTable};
///
/// let text = TextTable::new()
///     .header(["#", "Name"])
///     .alignments(&[Alignment::Right, Alignment::Left])
///     .row(["1", "Tea"])
///     .footer(["1", ""])
///     .render();
///
/// assert_eq!(text, "# Name \n------\n1 Tea  \n------\n1      ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    header: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl TextTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = cells.into_iter().map(Into::into).collect();
        self
    }

    pub fn alignments(mut self, alignments: &[Alignment]) -> Self {
        self.alignments = alignments.to_vec();
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows<R, I, S>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rows.into_iter().fold(self, |table, row| table.row(row))
    }

    pub fn footer<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footer = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    fn all_lines(&self) -> impl Iterator<Item = &Vec<String>> {
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .chain(self.footer.iter())
    }

    /// Number of columns: the longest of header, rows and footer.
    pub fn column_count(&self) -> usize {
        self.all_lines().map(Vec::len).max().unwrap_or(0)
    }

    /// Widest cell per column, in chars.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for line in self.all_lines() {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Renders header, separator, each row followed by a separator, then the
    /// footer. Lines are joined with `\n`; there is no trailing newline.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let separator_len = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        let separator = "-".repeat(separator_len);

        let mut out = String::new();
        self.write_line(&mut out, &self.header, &widths);
        out.push('\n');
        out.push_str(&separator);

        for row in &self.rows {
            out.push('\n');
            self.write_line(&mut out, row, &widths);
            out.push('\n');
            out.push_str(&separator);
        }

        if let Some(footer) = &self.footer {
            out.push('\n');
            self.write_line(&mut out, footer, &widths);
        }

        out
    }

    fn write_line(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            write_cell(out, cell, alignment, *width);
        }
    }
}

impl std::fmt::Display for TextTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
