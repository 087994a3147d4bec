// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents the display-form name of a company as an owned `String`
/// (e.g. "JP Morgan Chase").
pub type CompanyName = String;

/// Represents a company name after passing through
/// [`normalize_company_name`](crate::normalize_company_name): lowercased,
/// punctuation-stripped, corporate suffixes removed. Used as the lookup key
/// for exact matching.
pub type NormalizedName = String;

/// Represents an alternate spelling or abbreviation of a company's canonical
/// name, stored already normalized, that should resolve to the same record.
pub type CompanyAlias = String;

/// A confidence score in `[0.0, 1.0]`. Fixed per match type rather than
/// continuously graded.
pub type ConfidenceScore = f32;
