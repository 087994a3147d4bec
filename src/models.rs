pub mod compensation_classifier;
pub use compensation_classifier::has_compensation_signal;

pub mod error;
pub use error::Error;

pub mod reported_company;
pub use reported_company::{ReportCategory, ReportedCompany, ReportedCompanyList};

pub mod reported_company_detector;
pub use reported_company_detector::{
    CategoryCounts, DetectorStats, JobInput, MatchResult, MatchType, ReportedCompanyDetector,
};

pub mod reported_company_list_preprocessor;
pub use reported_company_list_preprocessor::ReportedCompanyListPreprocessor;
