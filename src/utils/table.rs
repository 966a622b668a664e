/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A simple text table for terminal output
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers, all columns left aligned
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| display_width(h)).collect();
        let aligns = vec![Align::Left; headers.len()];
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            aligns,
            rows: Vec::new(),
            footer: None,
            col_widths,
        }
    }

    pub fn align(mut self, column: usize, align: Align) -> Self {
        if let Some(slot) = self.aligns.get_mut(column) {
            *slot = align;
        }
        self
    }

    /// Add a row to the table. Cells beyond the header count are ignored.
    pub fn add_row<S: AsRef<str>>(&mut self, row: Vec<S>) {
        let row = self.track_widths(row);
        self.rows.push(row);
    }

    /// Row printed below a second separator, e.g. totals
    pub fn set_footer<S: AsRef<str>>(&mut self, row: Vec<S>) {
        let row = self.track_widths(row);
        self.footer = Some(row);
    }

    fn track_widths<S: AsRef<str>>(&mut self, row: Vec<S>) -> Vec<String> {
        let row: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.as_ref().to_string())
            .collect();
        for (width, col) in self.col_widths.iter_mut().zip(&row) {
            *width = (*width).max(display_width(col));
        }
        row
    }

    pub fn render(&self) -> String {
        let mut lines = vec![self.render_row(&self.headers), self.render_separator()];
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        if let Some(footer) = &self.footer {
            lines.push(self.render_separator());
            lines.push(self.render_row(footer));
        }
        lines.join("\n")
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = self
            .col_widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let col = row.get(i).map(String::as_str).unwrap_or("");
                let pad = " ".repeat(width - display_width(col));
                match self.aligns[i] {
                    Align::Left => format!("{}{}", col, pad),
                    Align::Right => format!("{}{}", pad, col),
                }
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

/// Width in characters, so `€` and umlauts count as one column
fn display_width(s: &str) -> usize {
    s.chars().count()
}
