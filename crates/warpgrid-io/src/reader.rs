//! CSV reader for labelled time series datasets.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::domain::LabelledDataset;
use crate::IoError;

/// Reads labelled time series from a CSV file.
///
/// Expected CSV format:
/// - Header row required (first column is the class label, remaining are positional time steps)
/// - `class,t0,t1,...,tn`
/// - One row per instance, all rows must have the same number of columns
///
/// Class labels are kept as strings and may repeat.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::NoSeriesColumns`] | Header has only the class column |
/// | [`IoError::EmptyDataset`] | Zero data rows after header |
/// | [`IoError::InconsistentRowLength`] | Row has different column count than header |
/// | [`IoError::NonFiniteValue`] | Cell is NaN, Inf, or unparseable float |
pub struct DatasetReader {
    path: PathBuf,
}

impl DatasetReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn csv_error(&self, e: csv::Error) -> IoError {
        IoError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        }
    }

    /// Read and validate the CSV file, returning a [`LabelledDataset`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<LabelledDataset, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) so that short rows surface as InconsistentRowLength.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let expected_cols = rdr.headers().map_err(|e| self.csv_error(e))?.len();
        if expected_cols < 2 {
            return Err(IoError::NoSeriesColumns {
                path: self.path.clone(),
            });
        }
        debug!(expected_cols, "read CSV header");

        let mut labels = Vec::new();
        let mut series = Vec::new();

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| self.csv_error(e))?;

            if record.len() != expected_cols {
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    expected: expected_cols,
                    got: record.len(),
                });
            }

            let mut values = Vec::with_capacity(expected_cols - 1);
            for (col_index, raw) in record.iter().skip(1).enumerate() {
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| IoError::NonFiniteValue {
                        path: self.path.clone(),
                        row_index,
                        col_index,
                        raw: raw.to_string(),
                    })?;
                values.push(value);
            }

            labels.push(record.get(0).unwrap_or("").to_string());
            series.push(values);
        }

        if series.is_empty() {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        let dataset = LabelledDataset::new(labels, series);
        info!(
            n_instances = dataset.n_instances(),
            n_timesteps = expected_cols - 1,
            "dataset loaded"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use warpgrid_space::DatasetStats;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn read_valid_dataset() {
        let csv = "class,t0,t1,t2,t3\n1,0.0,0.1,0.0,0.1\n2,5.0,5.1,5.0,5.1\n1,0.1,0.0,0.1,0.0\n";
        let f = write_csv(csv);
        let ds = DatasetReader::new(f.path()).read().unwrap();
        assert_eq!(ds.n_instances(), 3);
        assert_eq!(ds.labels(), &["1", "2", "1"]);
        assert_eq!(ds.series()[1], vec![5.0, 5.1, 5.0, 5.1]);
        assert_eq!(ds.attribute_count(), 5);
    }

    #[test]
    fn repeated_labels_allowed() {
        let csv = "class,t0\nA,1.0\nA,2.0\n";
        let f = write_csv(csv);
        let ds = DatasetReader::new(f.path()).read().unwrap();
        assert_eq!(ds.labels(), &["A", "A"]);
    }

    #[test]
    fn whitespace_trimmed() {
        let csv = "class, t0, t1\nA, 1.5 , 2.5\n";
        let f = write_csv(csv);
        let ds = DatasetReader::new(f.path()).read().unwrap();
        assert_eq!(ds.series()[0], vec![1.5, 2.5]);
    }

    #[test]
    fn error_file_not_found() {
        let result = DatasetReader::new(Path::new("/nonexistent/train.csv")).read();
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn error_empty_dataset() {
        let f = write_csv("class,t0,t1\n");
        let result = DatasetReader::new(f.path()).read();
        assert!(matches!(result, Err(IoError::EmptyDataset { .. })));
    }

    #[test]
    fn error_no_series_columns() {
        let f = write_csv("class\nA\n");
        let result = DatasetReader::new(f.path()).read();
        assert!(matches!(result, Err(IoError::NoSeriesColumns { .. })));
    }

    #[test]
    fn error_inconsistent_row_length() {
        let f = write_csv("class,t0,t1,t2\nA,1.0,2.0,3.0\nB,1.0,2.0\n");
        let result = DatasetReader::new(f.path()).read();
        assert!(matches!(
            result,
            Err(IoError::InconsistentRowLength { row_index: 1, got: 3, .. })
        ));
    }

    #[test]
    fn error_non_finite_nan() {
        let f = write_csv("class,t0,t1\nA,1.0,NaN\n");
        let result = DatasetReader::new(f.path()).read();
        assert!(matches!(
            result,
            Err(IoError::NonFiniteValue { row_index: 0, col_index: 1, .. })
        ));
    }

    #[test]
    fn error_unparseable_value() {
        let f = write_csv("class,t0,t1\nA,abc,1.0\n");
        let result = DatasetReader::new(f.path()).read();
        assert!(matches!(
            result,
            Err(IoError::NonFiniteValue { col_index: 0, .. })
        ));
    }
}
