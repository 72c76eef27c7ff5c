use serde::{Deserialize, Serialize};

use crate::history::MetricHistory;

/// The previous run's per-epoch log as a table: named columns, one row per
/// epoch, most recent epoch last.
///
/// Cells are optional because such logs may contain blanks (for example a
/// column that was only written for some epochs).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviousHistory {
    columns: Vec<String>,
    rows: Vec<Vec<Option<f64>>>,
}

impl PreviousHistory {
    /// Creates an empty table with the given column names.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        PreviousHistory {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a table from whole columns. Shorter columns are padded with
    /// blank cells at the end so every row has one cell per column.
    pub fn from_columns<S: Into<String>>(columns: impl IntoIterator<Item = (S, Vec<f64>)>) -> Self {
        let (names, values): (Vec<String>, Vec<Vec<f64>>) =
            columns.into_iter().map(|(n, v)| (n.into(), v)).unzip();
        let n_rows = values.iter().map(Vec::len).max().unwrap_or(0);

        let rows = (0..n_rows)
            .map(|r| values.iter().map(|col| col.get(r).copied()).collect())
            .collect();

        PreviousHistory { columns: names, rows }
    }

    /// Appends one epoch. Cells beyond the known columns are dropped and
    /// missing trailing cells are blank.
    pub fn push_row(&mut self, mut row: Vec<Option<f64>>) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Deserializes a table previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<PreviousHistory, crate::ReportError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let mut history: PreviousHistory = serde_json::from_reader(reader)?;
        let width = history.columns.len();
        for row in &mut history.rows {
            row.resize(width, None);
        }
        Ok(history)
    }

    pub fn save_json(&self, path: &str) -> Result<(), crate::ReportError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

impl MetricHistory for PreviousHistory {
    fn last_value(&self, key: &str) -> Option<f64> {
        let idx = self.column_index(key)?;
        self.rows.last()?.get(idx).copied().flatten()
    }

    fn keys(&self) -> Vec<&str> {
        self.columns.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_reads_last_row() {
        let history = PreviousHistory::from_columns(vec![
            ("loss", vec![0.9, 0.6, 0.5]),
            ("accuracy", vec![0.6, 0.7, 0.8]),
        ]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last_value("loss"), Some(0.5));
        assert_eq!(history.last_value("accuracy"), Some(0.8));
        assert_eq!(history.last_value("lr"), None);
    }

    #[test]
    fn test_short_column_is_blank_in_last_row() {
        let history = PreviousHistory::from_columns(vec![
            ("loss", vec![0.9, 0.6]),
            ("lr", vec![0.01]),
        ]);
        assert_eq!(history.last_value("lr"), None);
        assert!(history.has_column("lr"));
    }

    #[test]
    fn test_push_row_fits_columns() {
        let mut history = PreviousHistory::new(["loss", "accuracy"]);
        history.push_row(vec![Some(0.4), Some(0.9), Some(0.001)]);
        history.push_row(vec![Some(0.3)]);
        assert_eq!(history.last_value("loss"), Some(0.3));
        assert_eq!(history.last_value("accuracy"), None);
    }

    #[test]
    fn test_empty_table() {
        let history = PreviousHistory::new(["loss"]);
        assert!(history.is_empty());
        assert_eq!(history.last_value("loss"), None);
        assert_eq!(history.keys(), vec!["loss"]);
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("metrics-report-prev-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let history = PreviousHistory::from_columns(vec![("loss", vec![0.5]), ("val_loss", vec![0.7])]);
        history.save_json(path).unwrap();
        let loaded = PreviousHistory::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded, history);
    }
}
