use std::fmt;
use std::str::FromStr;

use crate::models::Error;
use crate::types::{CompanyAlias, CompanyName, NormalizedName};

/// Why a company was reported by the community. Categories are mutually
/// exclusive per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCategory {
    Spam,
    Ghost,
    Scam,
}

impl ReportCategory {
    /// The category-specific reason phrase used in advisory messages.
    pub fn advisory_reason(&self) -> &'static str {
        match self {
            ReportCategory::Spam => "posting spam job listings",
            ReportCategory::Ghost => "posting ghost jobs (jobs that may not actually exist)",
            ReportCategory::Scam => "potentially scam job postings",
        }
    }
}

impl FromStr for ReportCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spam" => Ok(ReportCategory::Spam),
            "ghost" => Ok(ReportCategory::Ghost),
            "scam" => Ok(ReportCategory::Scam),
            other => Err(Error::ParserError(format!(
                "Unknown report category: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportCategory::Spam => write!(f, "spam"),
            ReportCategory::Ghost => write!(f, "ghost"),
            ReportCategory::Scam => write!(f, "scam"),
        }
    }
}

/// A single community-reported company record.
///
/// `normalized_name` and every entry of `aliases` are stored already
/// normalized; the preprocessor applies
/// [`normalize_company_name`](crate::normalize_company_name) at load time so
/// the dataset never carries un-normalized keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedCompany {
    /// Display-form canonical name, e.g. "JP Morgan Chase".
    pub name: CompanyName,
    /// Normalized form of `name`; unique exact-lookup key.
    pub normalized_name: NormalizedName,
    /// Additional normalized spellings that resolve to this record.
    pub aliases: Vec<CompanyAlias>,
    pub category: ReportCategory,
    /// ISO-8601 date the record was last curated. Informational only.
    pub last_updated: String,
}

/// The full curated dataset, in declaration order. Matching iterates this
/// order, so results are deterministic.
pub type ReportedCompanyList = Vec<ReportedCompany>;
