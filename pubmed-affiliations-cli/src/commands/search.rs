use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pubmed_affiliations::{AffiliationCategory, MAX_SEARCH_RESULTS, PaperFinder, ReportSink};
use tracing::debug;

use super::create_pubmed_client;

#[derive(Args, Debug)]
pub struct Search {
    /// PubMed search query (full PubMed syntax)
    #[arg(value_name = "QUERY")]
    query: String,

    /// Save results to a CSV file instead of printing them
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Which authors to report
    #[arg(long, value_enum, default_value_t = CategoryArg::Industry)]
    category: CategoryArg,

    /// Number of PMIDs to search for
    #[arg(
        long,
        default_value_t = MAX_SEARCH_RESULTS as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_SEARCH_RESULTS as i64)
    )]
    limit: u16,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 5)]
    timeout: u64,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CategoryArg {
    /// Universities, hospitals, research institutes
    Academic,
    /// Pharmaceutical and biotech companies
    Industry,
}

impl From<CategoryArg> for AffiliationCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Academic => AffiliationCategory::Academic,
            CategoryArg::Industry => AffiliationCategory::Industry,
        }
    }
}

impl Search {
    pub async fn execute_with_config(
        &self,
        api_key: Option<&str>,
        email: Option<&str>,
        tool: &str,
    ) -> Result<()> {
        let client =
            create_pubmed_client(api_key, email, tool, Duration::from_secs(self.timeout))?;
        let finder =
            PaperFinder::new(client, self.category.into()).with_limit(self.limit as usize);

        debug!(
            query = %self.query,
            category = %finder.category(),
            limit = finder.limit(),
            "Starting paper search"
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Searching PubMed for \"{}\"", self.query));

        let result = finder.find(&self.query).await;
        spinner.finish_and_clear();
        let records = result?;

        self.sink().emit(&records, finder.category())?;
        Ok(())
    }

    fn sink(&self) -> ReportSink {
        ReportSink::from_file(self.file.clone())
    }
}
