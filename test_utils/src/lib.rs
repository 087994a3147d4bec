use std::error::Error;
use std::fs;

use reported_company_sniffer::{
    ReportedCompanyDetector, ReportedCompanyList, ReportedCompanyListPreprocessor,
};

/// Utility to load a reported-company CSV fixture for testing and benchmarking.
pub fn load_reported_companies_from_file(
    file_path: &str,
) -> Result<ReportedCompanyList, Box<dyn Error>> {
    let csv = fs::read_to_string(file_path)?;
    let reported_company_list =
        ReportedCompanyListPreprocessor::read_reported_company_list_from_string(&csv)?;

    Ok(reported_company_list)
}

/// Builds a detector over a CSV fixture in one step.
pub fn load_detector_from_file(file_path: &str) -> Result<ReportedCompanyDetector, Box<dyn Error>> {
    Ok(ReportedCompanyDetector::new(load_reported_companies_from_file(file_path)?))
}
