mod constants;
pub mod models;
pub use models::{
    has_compensation_signal, CategoryCounts, DetectorStats, Error, JobInput, MatchResult,
    MatchType, ReportCategory, ReportedCompany, ReportedCompanyDetector, ReportedCompanyList,
    ReportedCompanyListPreprocessor,
};
pub mod types;
mod utils;
pub use types::{CompanyAlias, CompanyName, ConfidenceScore, NormalizedName};
pub use utils::normalize_company_name;

use once_cell::sync::Lazy;

// Embedded curated dataset; shipped with the crate so matching works fully
// offline. Append-only between releases.
const EMBEDDED_REPORTED_COMPANY_CSV: &str =
    include_str!("../embedded_storage/reported_companies.csv");

static EMBEDDED_DETECTOR: Lazy<Result<ReportedCompanyDetector, Error>> = Lazy::new(|| {
    let reported_company_list =
        ReportedCompanyListPreprocessor::read_reported_company_list_from_string(
            EMBEDDED_REPORTED_COMPANY_CSV,
        )?;

    Ok(ReportedCompanyDetector::new(reported_company_list))
});

/// The process-wide detector over the embedded dataset, built lazily on
/// first use and immutable afterwards. Errors only if the embedded CSV is
/// malformed.
pub fn embedded_detector() -> Result<&'static ReportedCompanyDetector, Error> {
    match &*EMBEDDED_DETECTOR {
        Ok(detector) => Ok(detector),
        Err(e) => Err(e.clone()),
    }
}

/// Analyzes a job posting against the embedded reported-company dataset.
///
/// ```
/// use reported_company_sniffer::{analyze_job, JobInput};
///
/// let result = analyze_job(&JobInput::from_company("Accenture")).unwrap();
/// assert!(result.detected);
/// ```
pub fn analyze_job(job: &JobInput) -> Result<MatchResult, Error> {
    Ok(embedded_detector()?.analyze(job))
}

/// Index-only membership test against the embedded dataset.
pub fn quick_check(company_name: &str) -> Result<bool, Error> {
    Ok(embedded_detector()?.quick_check(company_name))
}

/// Aggregate counts over the embedded dataset.
pub fn detector_stats() -> Result<DetectorStats, Error> {
    Ok(embedded_detector()?.get_stats())
}
