use crate::constants::CORPORATE_SUFFIXES;
use crate::types::NormalizedName;

/// Canonicalizes a free-text company name into a comparable key.
///
/// Steps, in order: lowercase, trim, strip every character that is not a
/// word character (alphanumeric or `_`) or whitespace, collapse whitespace
/// runs into single spaces, then drop standalone corporate-suffix tokens
/// (see [`CORPORATE_SUFFIXES`]).
///
/// The result may be empty (e.g. for all-punctuation input). The function
/// is idempotent, so pre-normalized dataset keys pass through unchanged.
///
/// ```
/// use reported_company_sniffer::normalize_company_name;
///
/// assert_eq!(normalize_company_name("Aha!"), "aha");
/// assert_eq!(normalize_company_name("  Accenture Inc  "), "accenture");
/// assert_eq!(normalize_company_name("1-800-Pack-Rat"), "1800packrat");
/// ```
pub fn normalize_company_name(raw: &str) -> NormalizedName {
    let stripped: String = raw
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    // split_whitespace both collapses runs and handles the final trim
    stripped
        .split_whitespace()
        .filter(|token| !CORPORATE_SUFFIXES.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}
