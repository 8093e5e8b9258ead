//!
//! The results table extraction.
//!

use crate::codec::column::Column;

///
/// A table row, as `(header, cell text)` pairs in column order.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record(pub Vec<(String, String)>);

impl Record {
    ///
    /// Returns the cell under the first header naming `column`.
    ///
    pub fn get(&self, column: Column) -> Option<&str> {
        self.0
            .iter()
            .find(|(header, _)| column.matches(header))
            .map(|(_, cell)| cell.as_str())
    }
}

///
/// The table contents as plain text.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// The header texts.
    pub headers: Vec<String>,
    /// The data rows.
    pub records: Vec<Record>,
}

impl Table {
    ///
    /// Whether the header names `column`.
    ///
    pub fn has(&self, column: Column) -> bool {
        self.headers.iter().any(|header| column.matches(header))
    }
}

impl From<scraper::ElementRef<'_>> for Table {
    fn from(table: scraper::ElementRef<'_>) -> Self {
        let row_selector = scraper::Selector::parse("tr").expect("Always valid");
        let header_selector = scraper::Selector::parse("th").expect("Always valid");
        let cell_selector = scraper::Selector::parse("td").expect("Always valid");

        let mut result = Self::default();
        for row in table.select(&row_selector) {
            if result.headers.is_empty() {
                let headers: Vec<String> = row.select(&header_selector).map(text).collect();
                if !headers.is_empty() {
                    result.headers = headers;
                    continue;
                }
            }

            let cells: Vec<String> = row.select(&cell_selector).map(text).collect();
            if cells.is_empty() {
                continue;
            }
            result
                .records
                .push(Record(result.headers.iter().cloned().zip(cells).collect()));
        }
        result
    }
}

///
/// Escapes text for embedding into HTML.
///
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            character => result.push(character),
        }
    }
    result
}

fn text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}
