//! Report files produced from parsed EFetch XML

mod common;

use pubmed_affiliations::{
    AffiliationCategory, ReportSink, extract_records_from_xml, report_header,
};
use tempfile::tempdir;

use common::MIXED_EFETCH_RESPONSE;

#[test]
fn test_industry_csv_report() {
    let records =
        extract_records_from_xml(MIXED_EFETCH_RESPONSE, AffiliationCategory::Industry).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("industry.csv");
    let written = ReportSink::Csv(path.clone())
        .emit(&records, AffiliationCategory::Industry)
        .unwrap();
    assert_eq!(written, 2);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        report_header(AffiliationCategory::Industry).to_vec()
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "38000001");
    assert_eq!(&rows[0][3], "Ana Lee, Bo Chen");
    assert_eq!(
        &rows[0][4],
        "Genentech, Inc., South San Francisco, CA, USA. lee.ana@gene.com., Amgen Biosciences LLC, Thousand Oaks, CA, USA."
    );
    assert_eq!(&rows[1][2], "2022");
}

#[test]
fn test_academic_csv_report_header() {
    let records =
        extract_records_from_xml(MIXED_EFETCH_RESPONSE, AffiliationCategory::Academic).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("academic.csv");
    ReportSink::Csv(path.clone())
        .emit(&records, AffiliationCategory::Academic)
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert!(lines.next().unwrap().contains(",Academic Author(s),"));
    assert!(lines.next().unwrap().starts_with("38000002,"));
    assert!(lines.next().is_none());
}

#[test]
fn test_no_records_creates_no_file() {
    let records = extract_records_from_xml("", AffiliationCategory::Industry).unwrap();
    assert!(records.is_empty());

    let dir = tempdir().unwrap();
    let path = dir.path().join("nothing.csv");
    let written = ReportSink::Csv(path.clone())
        .emit(&records, AffiliationCategory::Industry)
        .unwrap();

    assert_eq!(written, 0);
    assert!(!path.exists());
}

#[test]
fn test_unwritable_path_is_io_error() {
    let records =
        extract_records_from_xml(MIXED_EFETCH_RESPONSE, AffiliationCategory::Industry).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.csv");
    let result = ReportSink::Csv(path).emit(&records, AffiliationCategory::Industry);

    assert!(matches!(
        result,
        Err(pubmed_affiliations::PubMedError::IoError(_))
    ));
}
