use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use itertools::{Itertools, MinMaxResult};
use log::*;
use std::io::Read;
use std::path::Path;
use std::{ffi::OsStr, fs::File};

/// Smallest and largest value of a column, NaN cells left out.
///
/// Infinities count, so a column holding `inf` has `max == inf`. A column without any
/// numbers has `min > max`, which the color scale treats as an empty range.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
}

impl Summary {
    fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Self {
        match values.into_iter().filter(|v| !v.is_nan()).minmax() {
            MinMaxResult::NoElements => Summary::empty(),
            MinMaxResult::OneElement(v) => Summary { min: v, max: v },
            MinMaxResult::MinMax(min, max) => Summary { min, max },
        }
    }
}

/// Numeric table with named columns and optional row labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index: Option<Vec<String>>,
    rows: Vec<Vec<f64>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != columns.len())
        {
            return Err(Error::RaggedRow {
                row,
                found: values.len(),
                expected: columns.len(),
            });
        }
        Ok(Table {
            columns,
            index: None,
            rows,
        })
    }

    /// Attach row labels, one per row.
    pub fn with_index(mut self, labels: Vec<String>) -> Result<Self> {
        if labels.len() != self.rows.len() {
            return Err(Error::IndexLength {
                found: labels.len(),
                expected: self.rows.len(),
            });
        }
        self.index = Some(labels);
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> Option<&[String]> {
        self.index.as_deref()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Values of one column, top to bottom. Empty when `column` is out of range.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |r| r.get(column).copied())
    }

    pub fn column_summary(&self, column: usize) -> Summary {
        Summary::of(self.column(column))
    }

    pub fn summaries(&self) -> Vec<Summary> {
        (0..self.columns.len())
            .map(|c| self.column_summary(c))
            .collect()
    }

    /// Parse a CSV table with a header row.
    ///
    /// Empty cells and `nan`/`-nan` become NaN. With `has_index` the first column holds
    /// row labels instead of values.
    pub fn from_reader<R: Read>(reader: R, has_index: bool) -> Result<Self> {
        let mut reader = read_csv(reader);
        let skip = if has_index { 1 } else { 0 };
        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .skip(skip)
            .map(str::to_string)
            .collect();
        let mut labels = Vec::new();
        let mut rows = Vec::new();
        for (row, result) in reader.into_records().enumerate() {
            let record = result?;
            if has_index {
                labels.push(record.get(0).unwrap_or_default().to_string());
            }
            let values = record
                .iter()
                .skip(skip)
                .enumerate()
                .map(|(column, cell)| {
                    parse_cell(cell).ok_or_else(|| Error::InvalidCell {
                        row,
                        column: columns.get(column).cloned().unwrap_or_default(),
                        value: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            if values.len() != columns.len() {
                return Err(Error::RaggedRow {
                    row,
                    found: values.len(),
                    expected: columns.len(),
                });
            }
            rows.push(values);
        }
        debug!("Parsed {} rows of {} columns", rows.len(), columns.len());
        let table = Table::new(columns, rows)?;
        if has_index {
            table.with_index(labels)
        } else {
            Ok(table)
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P, has_index: bool) -> Result<Self> {
        Table::from_reader(open_file(path)?, has_index)
    }
}

fn parse_cell(s: &str) -> Option<f64> {
    match s {
        "" | "nan" | "-nan" | "NaN" => Some(f64::NAN),
        _ => s.parse().ok(),
    }
}

/// Opens `path`, decompressing on the fly when it ends in `.gz`.
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    match path.extension() {
        Some(ext) if ext == OsStr::new("gz") => Ok(Box::new(GzDecoder::new(file))),
        _ => Ok(Box::new(file)),
    }
}

fn read_csv<R: Read>(file: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn summary_skips_nan() {
        assert_eq!(
            Summary::of(vec![3.0, f64::NAN, -1.0, 2.0]),
            Summary { min: -1.0, max: 3.0 }
        );
        assert_eq!(
            Summary::of(vec![0.0, 5.0, f64::INFINITY]),
            Summary {
                min: 0.0,
                max: f64::INFINITY
            }
        );
        assert_eq!(Summary::of(vec![4.0]), Summary { min: 4.0, max: 4.0 });
        let empty = Summary::of(vec![f64::NAN]);
        assert!(empty.min > empty.max);
    }

    #[test]
    fn column_summaries() {
        let table = Table::new(
            names(&["a", "b"]),
            vec![vec![1.0, 10.0], vec![5.0, -10.0], vec![3.0, 0.0]],
        )
        .unwrap();
        assert_eq!(table.shape(), (3, 2));
        assert_eq!(
            table.summaries(),
            vec![
                Summary { min: 1.0, max: 5.0 },
                Summary {
                    min: -10.0,
                    max: 10.0
                }
            ]
        );
    }

    #[test]
    fn column_out_of_range_is_empty() {
        let table = Table::new(names(&["a"]), vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(table.column(1).count(), 0);
        let summary = table.column_summary(1);
        assert!(summary.min > summary.max);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Table::new(names(&["a", "b"]), vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRow {
                row: 1,
                found: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn index_length_checked() {
        let table = Table::new(names(&["a"]), vec![vec![1.0], vec![2.0]]).unwrap();
        assert!(matches!(
            table.clone().with_index(names(&["x"])),
            Err(Error::IndexLength {
                found: 1,
                expected: 2
            })
        ));
        let table = table.with_index(names(&["x", "y"])).unwrap();
        assert_eq!(table.index(), Some(&names(&["x", "y"])[..]));
    }

    #[test]
    fn parse_csv() {
        let csv = "a, b ,c\n0.5,1, nan\n-2,,3e2\n";
        let table = Table::from_reader(csv.as_bytes(), false).unwrap();
        assert_eq!(table.columns(), &names(&["a", "b", "c"])[..]);
        assert_eq!(table.get(0, 0), Some(0.5));
        assert_eq!(table.get(1, 2), Some(300.0));
        assert!(table.get(0, 2).unwrap().is_nan());
        assert!(table.get(1, 1).unwrap().is_nan());
        assert_eq!(table.index(), None);
    }

    #[test]
    fn parse_csv_with_index() {
        let csv = "model,precision,recall\nbaseline,0.7,0.4\ntuned,0.9,0.8\n";
        let table = Table::from_reader(csv.as_bytes(), true).unwrap();
        assert_eq!(table.columns(), &names(&["precision", "recall"])[..]);
        assert_eq!(table.index(), Some(&names(&["baseline", "tuned"])[..]));
        assert_eq!(table.column(1).collect::<Vec<_>>(), vec![0.4, 0.8]);
    }

    #[test]
    fn parse_csv_invalid_cell() {
        let csv = "a,b\n1,2\n3,four\n";
        match Table::from_reader(csv.as_bytes(), false) {
            Err(Error::InvalidCell { row, column, value }) => {
                assert_eq!((row, column.as_str(), value.as_str()), (1, "b", "four"));
            }
            other => panic!("expected invalid cell, got {:?}", other),
        }
    }

    #[test]
    fn parse_csv_ragged() {
        let csv = "a,b\n1,2\n3\n";
        assert!(matches!(
            Table::from_reader(csv.as_bytes(), false),
            Err(Error::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn gzipped_matches_plain() {
        let plain = Table::from_path("samples/metrics.csv", true).unwrap();
        let gzipped = Table::from_path("samples/metrics.csv.gz", true).unwrap();
        assert_eq!(gzipped, plain);
    }
}
