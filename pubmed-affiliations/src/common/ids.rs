//! PMID validation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PubMedError, Result};

/// A validated PubMed ID (PMID)
///
/// PMIDs are positive integers. Parsing trims surrounding whitespace.
///
/// ```
/// use pubmed_affiliations::common::PubMedId;
///
/// let pmid = PubMedId::parse("  31978945 ").unwrap();
/// assert_eq!(pmid.as_u32(), 31978945);
/// assert_eq!(pmid.to_string(), "31978945");
///
/// assert!(PubMedId::parse("").is_err());
/// assert!(PubMedId::parse("0").is_err());
/// assert!(PubMedId::parse("PMC123").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PubMedId {
    value: u32,
}

impl PubMedId {
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || PubMedError::InvalidPmid {
            pmid: s.to_string(),
        };

        let value = s.trim().parse::<u32>().map_err(|_| invalid())?;
        if value == 0 {
            return Err(invalid());
        }

        Ok(Self { value })
    }

    pub fn as_u32(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for PubMedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for PubMedId {
    type Err = PubMedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
