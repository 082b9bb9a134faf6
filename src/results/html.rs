//! Tolerant HTML table extraction.
//!
//! Scans `<table>` blocks case-insensitively and pulls the text of every
//! `<th>`/`<td>` cell, row by row. No DOM is built; unclosed cells and rows
//! end at the next sibling tag.

/// One HTML table as rows of cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// First row, treated as the header.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Index of a header cell, compared case-insensitively after trimming.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header()?
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
    }
}

/// Every table in the document, in order of appearance.
pub fn extract_tables(html: &str) -> Vec<Table> {
    // ASCII lowercasing keeps byte offsets aligned with `html`
    let lower = html.to_ascii_lowercase();
    let mut tables = Vec::new();
    let mut pos = 0;

    while let Some(start) = find_tag(&lower, "table", pos) {
        let end = lower[start..]
            .find("</table")
            .map(|i| start + i)
            .unwrap_or(lower.len());
        tables.push(parse_table(&html[start..end], &lower[start..end]));
        pos = end;
    }

    tables
}

fn parse_table(html: &str, lower: &str) -> Table {
    let mut rows = Vec::new();
    let mut pos = 0;

    while let Some(start) = find_tag(lower, "tr", pos) {
        let body_start = tag_end(lower, start);
        let next_row = find_tag(lower, "tr", body_start).unwrap_or(lower.len());
        let end = lower[body_start..next_row]
            .find("</tr")
            .map(|i| body_start + i)
            .unwrap_or(next_row);

        let cells = parse_cells(&html[body_start..end], &lower[body_start..end]);
        if !cells.is_empty() {
            rows.push(cells);
        }
        pos = end;
    }

    Table { rows }
}

fn parse_cells(html: &str, lower: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0;

    while let Some(start) = next_cell(lower, pos) {
        let body_start = tag_end(lower, start);
        let next = next_cell(lower, body_start).unwrap_or(lower.len());
        let end = [lower[body_start..next].find("</td"), lower[body_start..next].find("</th")]
            .into_iter()
            .flatten()
            .min()
            .map(|i| body_start + i)
            .unwrap_or(next);

        cells.push(cell_text(&html[body_start..end]));
        pos = end;
    }

    cells
}

fn next_cell(lower: &str, from: usize) -> Option<usize> {
    match (find_tag(lower, "td", from), find_tag(lower, "th", from)) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Position of the next opening `<name` tag (not `<name-suffix` or `<names`).
fn find_tag(lower: &str, name: &str, from: usize) -> Option<usize> {
    let needle = format!("<{}", name);
    let mut pos = from;

    while let Some(i) = lower.get(pos..)?.find(&needle) {
        let at = pos + i;
        let after = lower.as_bytes().get(at + needle.len()).copied();
        match after {
            None | Some(b'>') | Some(b'/') => return Some(at),
            Some(c) if c.is_ascii_whitespace() => return Some(at),
            _ => pos = at + needle.len(),
        }
    }

    None
}

/// Byte index just after the `>` closing the tag that starts at `start`.
fn tag_end(lower: &str, start: usize) -> usize {
    lower[start..]
        .find('>')
        .map(|i| start + i + 1)
        .unwrap_or(lower.len())
}

/// Strip tags, decode entities and collapse whitespace.
fn cell_text(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;

    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    decode_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&ndash;", "-")
        .replace("&#8211;", "-")
        // last, so "&amp;lt;" stays "&lt;"
        .replace("&amp;", "&")
}
