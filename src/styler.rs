//! Presentation layer for a [`Table`]: one CSS declaration string per cell, rendered
//! as an HTML table. The underlying values are never touched.

use crate::table::Table;
use itertools::Itertools;
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct Styler<'a> {
    table: &'a Table,
    styles: Vec<Vec<String>>,
    precision: usize,
    caption: Option<String>,
}

impl<'a> Styler<'a> {
    pub fn new(table: &'a Table) -> Self {
        let (rows, columns) = table.shape();
        Styler {
            table,
            styles: vec![vec![String::new(); columns]; rows],
            precision: 6,
            caption: None,
        }
    }

    /// Style whole columns: `f` gets a column's values and returns one style per value.
    ///
    /// Missing styles are left as they were, extra ones are ignored.
    pub fn apply<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&[f64]) -> Vec<String>,
    {
        for column in 0..self.table.shape().1 {
            let values: Vec<f64> = self.table.column(column).collect();
            for (row, style) in f(&values).into_iter().enumerate().take(values.len()) {
                self.styles[row][column] = style;
            }
        }
        self
    }

    /// Style each cell on its own.
    pub fn applymap<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(f64) -> String,
    {
        for (styles, values) in self.styles.iter_mut().zip(self.table.rows()) {
            for (style, value) in styles.iter_mut().zip(values) {
                *style = f(*value);
            }
        }
        self
    }

    /// Number of decimals shown for each value.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn caption<S: Into<String>>(mut self, caption: S) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn table(&self) -> &Table {
        self.table
    }

    pub fn style_at(&self, row: usize, column: usize) -> Option<&str> {
        self.styles
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    fn format_value(&self, value: f64) -> String {
        if value.is_nan() {
            "nan".to_string()
        } else {
            format!("{:.*}", self.precision, value)
        }
    }

    /// The styled table as an HTML `<table>` element.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table>\n");
        if let Some(caption) = &self.caption {
            let _ = writeln!(html, "  <caption>{}</caption>", escape(caption));
        }
        let corner = if self.table.index().is_some() {
            "<th></th>"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "  <thead>\n    <tr>{}{}</tr>\n  </thead>",
            corner,
            self.table
                .columns()
                .iter()
                .map(|c| format!("<th>{}</th>", escape(c)))
                .join("")
        );
        html.push_str("  <tbody>\n");
        for (row, values) in self.table.rows().iter().enumerate() {
            html.push_str("    <tr>");
            if let Some(index) = self.table.index() {
                let _ = write!(html, "<th>{}</th>", escape(&index[row]));
            }
            for (column, value) in values.iter().enumerate() {
                let style = &self.styles[row][column];
                if style.is_empty() {
                    let _ = write!(html, "<td>{}</td>", self.format_value(*value));
                } else {
                    let _ = write!(
                        html,
                        "<td style=\"{}\">{}</td>",
                        escape(style),
                        self.format_value(*value)
                    );
                }
            }
            html.push_str("</tr>\n");
        }
        html.push_str("  </tbody>\n</table>\n");
        html
    }

    /// A standalone HTML page containing [`Styler::to_html`].
    pub fn to_document(&self, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
table {{ border-collapse: collapse; font-family: monospace; }}
th, td {{ padding: 0.25em 0.75em; text-align: right; }}
</style>
</head>
<body>
{table}</body>
</html>
"#,
            title = escape(title),
            table = self.to_html()
        )
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> Table {
        Table::new(
            vec!["a<b".to_string(), "c".to_string()],
            vec![vec![1.0, 2.0], vec![3.0, f64::NAN]],
        )
        .unwrap()
    }

    #[test]
    fn unstyled_by_default() {
        let table = table();
        let styler = Styler::new(&table);
        assert_eq!(styler.style_at(0, 0), Some(""));
        assert_eq!(styler.style_at(2, 0), None);
    }

    #[test]
    fn apply_styles_by_column() {
        let table = table();
        let styler = Styler::new(&table).apply(|col| {
            col.iter()
                .map(|v| format!("width: {}px", col.len() as f64 * v))
                .collect()
        });
        assert_eq!(styler.style_at(1, 0), Some("width: 6px"));
        assert_eq!(styler.style_at(0, 1), Some("width: 4px"));
    }

    #[test]
    fn applymap_styles_by_cell() {
        let table = table();
        let styler = Styler::new(&table).applymap(|v| format!("v{}", v));
        assert_eq!(styler.style_at(1, 0), Some("v3"));
        assert_eq!(styler.style_at(1, 1), Some("vNaN"));
    }

    #[test]
    fn html_output() {
        let table = table();
        let html = Styler::new(&table)
            .applymap(|_| "color: red".to_string())
            .precision(2)
            .caption("scores")
            .to_html();
        assert!(html.contains("<caption>scores</caption>"));
        assert!(html.contains("<th>a&lt;b</th><th>c</th>"));
        assert!(html.contains("<td style=\"color: red\">1.00</td>"));
        assert!(html.contains("<td style=\"color: red\">nan</td>"));
        assert!(!html.contains("<th></th>"));
    }

    #[test]
    fn html_with_index() {
        let table = table()
            .with_index(vec!["first".to_string(), "second".to_string()])
            .unwrap();
        let html = Styler::new(&table).precision(0).to_html();
        assert!(html.contains("<tr><th></th><th>a&lt;b</th><th>c</th></tr>"));
        assert!(html.contains("<tr><th>second</th><td>3</td><td>nan</td></tr>"));
    }

    #[test]
    fn document_wraps_table() {
        let table = table();
        let styler = Styler::new(&table);
        let doc = styler.to_document("a & b");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>a &amp; b</title>"));
        assert!(doc.contains(&styler.to_html()));
    }
}
