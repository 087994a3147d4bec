use csv::ReaderBuilder;
use std::io::Cursor;

use crate::models::{Error, ReportedCompany, ReportedCompanyList};
use crate::utils::normalize_company_name;

pub struct ReportedCompanyListPreprocessor {}

impl ReportedCompanyListPreprocessor {
    /// Parses a CSV document with columns `Company Name`, `Category`,
    /// `Aliases`, `Last Updated` into a [`ReportedCompanyList`].
    ///
    /// The display name and every alias are normalized here, at load time.
    /// Aliases are comma-separated within their field; empty entries (and
    /// entries that normalize to empty) are discarded.
    pub fn read_reported_company_list_from_string(csv: &str) -> Result<ReportedCompanyList, Error> {
        let mut reported_company_list = ReportedCompanyList::new();

        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(csv));

        // Extract column headers
        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let column = |name: &str| -> Result<usize, Error> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
        };

        let name_column = column("Company Name")?;
        let category_column = column("Category")?;
        let aliases_column = column("Aliases")?;
        let last_updated_column = column("Last Updated")?;

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let name = record
                .get(name_column)
                .ok_or_else(|| Error::ParserError("Missing 'Company Name' field".to_string()))?
                .trim();

            let normalized_name = normalize_company_name(name);
            if normalized_name.is_empty() {
                return Err(Error::ParserError(format!(
                    "Company name '{}' normalizes to an empty key",
                    name
                )));
            }

            let category = record
                .get(category_column)
                .ok_or_else(|| Error::ParserError("Missing 'Category' field".to_string()))?
                .parse()?;

            let comma_separated_aliases = record.get(aliases_column);

            let aliases: Vec<String> = if let Some(aliases) = comma_separated_aliases {
                aliases
                    .split(',')
                    .map(normalize_company_name)
                    .filter(|alias| !alias.is_empty())
                    .collect()
            } else {
                Vec::new()
            };

            let last_updated = record
                .get(last_updated_column)
                .unwrap_or_default()
                .trim()
                .to_string();

            reported_company_list.push(ReportedCompany {
                name: name.to_string(),
                normalized_name,
                aliases,
                category,
                last_updated,
            });
        }

        Ok(reported_company_list)
    }
}
