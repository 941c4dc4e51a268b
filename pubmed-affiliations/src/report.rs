//! Report output: CSV file or tab-separated standard output

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::classify::AffiliationCategory;
use crate::error::Result;
use crate::extract::ArticleRecord;

/// Notice emitted instead of writing an empty report
pub const EMPTY_REPORT_NOTICE: &str = "No results to save.";

/// Column headers, in row order
pub fn report_header(category: AffiliationCategory) -> [String; 6] {
    [
        "PubMed ID".to_string(),
        "Title".to_string(),
        "Publication Date".to_string(),
        format!("{} Author(s)", category.author_label()),
        "Company Affiliation(s)".to_string(),
        "Corresponding Author(s) Email".to_string(),
    ]
}

/// Where a report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSink {
    /// CSV file with a header row
    Csv(PathBuf),
    /// Tab-separated rows on standard output, no header
    Stdout,
}

impl ReportSink {
    /// `Csv` when a file name was given, `Stdout` otherwise
    pub fn from_file(file: Option<PathBuf>) -> Self {
        match file {
            Some(path) => ReportSink::Csv(path),
            None => ReportSink::Stdout,
        }
    }

    /// Write `records` to this sink and return the number of rows written
    ///
    /// With no records nothing is written. A CSV sink creates no file and
    /// logs the empty-report notice instead.
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub fn emit(&self, records: &[ArticleRecord], category: AffiliationCategory) -> Result<usize> {
        match self {
            ReportSink::Csv(_) if records.is_empty() => {
                info!("{}", EMPTY_REPORT_NOTICE);
            }
            ReportSink::Csv(path) => {
                write_csv(path, records, category)?;
                info!(path = %path.display(), "Results written to {}", path.display());
            }
            ReportSink::Stdout => {
                let stdout = io::stdout();
                write_tsv(stdout.lock(), records)?;
            }
        }

        Ok(records.len())
    }
}

/// Write a CSV report (header plus one row per record) to `path`
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    records: &[ArticleRecord],
    category: AffiliationCategory,
) -> Result<()> {
    let file = File::create(path)?;
    write_csv_to(file, records, category)
}

/// Write a CSV report to any writer
pub fn write_csv_to<W: Write>(
    writer: W,
    records: &[ArticleRecord],
    category: AffiliationCategory,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(report_header(category))?;
    for record in records {
        csv_writer.write_record(record.to_row())?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write each record's fields tab-joined, one line per record
pub fn write_tsv<W: Write>(mut writer: W, records: &[ArticleRecord]) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", record.to_row().join("\t"))?;
    }
    writer.flush()?;
    Ok(())
}
