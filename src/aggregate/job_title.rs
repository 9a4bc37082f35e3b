//! Job-Title Aggregator Module
//! Per-year drilldown: counts job titles among the records of one year.

use crate::data::RawRecord;
use std::collections::HashMap;

/// One row of the drilldown table for the selected year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTitleCount {
    pub job_title: String,
    pub count: usize,
}

/// Count job titles among the records whose `work_year` parses to `year`.
///
/// Always recomputed from the full record set, never maintained
/// incrementally. Both sides of the year comparison are normalized to an
/// integer (the clicked table row carries an `i32`, the record field is
/// trim-parsed). Output order is first-occurrence order of the titles; a
/// year with no matching records yields an empty vec.
pub fn count_job_titles(records: &[RawRecord], year: i32) -> Vec<JobTitleCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for record in records {
        if record.work_year.trim().parse::<i32>().ok() != Some(year) {
            continue;
        }

        let count = counts.entry(record.job_title.as_str()).or_insert_with(|| {
            order.push(record.job_title.as_str());
            0
        });
        *count += 1;
    }

    order
        .into_iter()
        .map(|job_title| JobTitleCount {
            job_title: job_title.to_string(),
            count: counts[job_title],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(work_year: &str, job_title: &str) -> RawRecord {
        RawRecord {
            work_year: work_year.into(),
            salary_in_usd: "100000".into(),
            job_title: job_title.into(),
        }
    }

    #[test]
    fn counts_titles_for_the_selected_year_only() {
        let records = vec![
            record("2021", "ML Engineer"),
            record("2021", "Data Scientist"),
            record("2022", "ML Engineer"),
            record("2021", "ML Engineer"),
        ];

        let counts = count_job_titles(&records, 2021);
        assert_eq!(
            counts,
            vec![
                JobTitleCount {
                    job_title: "ML Engineer".into(),
                    count: 2,
                },
                JobTitleCount {
                    job_title: "Data Scientist".into(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn titles_keep_first_occurrence_order() {
        let records = vec![
            record("2023", "Analyst"),
            record("2023", "ML Engineer"),
            record("2023", "Analyst"),
            record("2023", "Researcher"),
        ];

        let titles: Vec<&str> = count_job_titles(&records, 2023)
            .iter()
            .map(|c| c.job_title.as_str())
            .collect();
        assert_eq!(titles, vec!["Analyst", "ML Engineer", "Researcher"]);
    }

    #[test]
    fn year_with_no_matches_yields_empty_vec() {
        let records = vec![record("2021", "ML Engineer")];
        assert!(count_job_titles(&records, 2024).is_empty());
    }

    #[test]
    fn year_comparison_is_numeric_after_trimming() {
        let records = vec![
            record(" 2021 ", "ML Engineer"),
            record("2021", "ML Engineer"),
            record("not a year", "ML Engineer"),
        ];

        let counts = count_job_titles(&records, 2021);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].count, 2);
    }
}
