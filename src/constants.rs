use crate::types::ConfidenceScore;

/// Corporate-entity suffix tokens removed during normalization when they
/// appear as standalone words ("Accenture Inc" and "Accenture" normalize to
/// the same key).
pub const CORPORATE_SUFFIXES: &[&str] =
    &["inc", "llc", "ltd", "corp", "corporation", "company", "co"];

/// Minimum length the shorter side of a substring comparison must have
/// before it is allowed to trigger a partial or alias match. Guards against
/// short-token false positives ("EY" must not match inside "MONKEY").
pub const MIN_SUBSTRING_MATCH_LEN: usize = 3;

/// Confidence reported for a direct index hit on a primary name or alias.
pub const EXACT_MATCH_CONFIDENCE: ConfidenceScore = 1.0;

/// Confidence reported for a substring-level alias hit.
pub const ALIAS_MATCH_CONFIDENCE: ConfidenceScore = 0.9;

/// Confidence reported for a bidirectional substring hit on a primary name.
pub const PARTIAL_MATCH_CONFIDENCE: ConfidenceScore = 0.85;
