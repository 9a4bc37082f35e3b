//! CSV Data Loader Module
//! Reads the salary CSV with Polars and extracts the raw string records the
//! aggregators work on.

use polars::prelude::*;
use thiserror::Error;

/// Columns the dashboard needs; anything else in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["work_year", "salary_in_usd", "job_title"];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column `{0}`")]
    MissingColumn(&'static str),
}

/// One CSV data row, string-typed exactly as parsed. Validation and numeric
/// interpretation happen downstream in the aggregators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub work_year: String,
    pub salary_in_usd: String,
    pub job_title: String,
}

/// Handles CSV file loading with Polars.
pub struct SalaryLoader;

impl SalaryLoader {
    /// Load a CSV file and extract its salary records.
    ///
    /// Schema inference is disabled so every column comes back as a string;
    /// the yearly aggregator decides which rows qualify, not the reader.
    pub fn load_csv(file_path: &str) -> Result<Vec<RawRecord>, LoaderError> {
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(0))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        Self::extract_records(&df)
    }

    /// Pull the three required columns out of a DataFrame, row by row.
    pub fn extract_records(df: &DataFrame) -> Result<Vec<RawRecord>, LoaderError> {
        let column = |name: &'static str| {
            df.column(name).map_err(|_| LoaderError::MissingColumn(name))
        };

        let years = column(REQUIRED_COLUMNS[0])?;
        let salaries = column(REQUIRED_COLUMNS[1])?;
        let titles = column(REQUIRED_COLUMNS[2])?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let cell = |col: &Column| {
                col.get(i)
                    .ok()
                    .filter(|v| !v.is_null())
                    .map(|v| v.to_string().trim_matches('"').to_string())
                    .unwrap_or_default()
            };

            records.push(RawRecord {
                work_year: cell(years),
                salary_in_usd: cell(salaries),
                job_title: cell(titles),
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_records_in_row_order() {
        let file = write_csv(
            "work_year,salary_in_usd,job_title\n\
             2021,100000,ML Engineer\n\
             2022,95000,Data Scientist\n",
        );

        let records = SalaryLoader::load_csv(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            records,
            vec![
                RawRecord {
                    work_year: "2021".into(),
                    salary_in_usd: "100000".into(),
                    job_title: "ML Engineer".into(),
                },
                RawRecord {
                    work_year: "2022".into(),
                    salary_in_usd: "95000".into(),
                    job_title: "Data Scientist".into(),
                },
            ]
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = write_csv(
            "work_year,experience_level,salary_in_usd,job_title,company_size\n\
             2023,SE,120000,ML Engineer,M\n",
        );

        let records = SalaryLoader::load_csv(file.path().to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].job_title, "ML Engineer");
        assert_eq!(records[0].salary_in_usd, "120000");
    }

    #[test]
    fn numeric_looking_values_stay_strings() {
        let file = write_csv(
            "work_year,salary_in_usd,job_title\n\
             2020,85000.50,Analyst\n",
        );

        let records = SalaryLoader::load_csv(file.path().to_str().unwrap()).unwrap();
        assert_eq!(records[0].work_year, "2020");
        assert_eq!(records[0].salary_in_usd, "85000.50");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let file = write_csv(
            "work_year,job_title\n\
             2021,ML Engineer\n",
        );

        let err = SalaryLoader::load_csv(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn("salary_in_usd")));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = SalaryLoader::load_csv("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoaderError::Csv(_)));
    }
}
