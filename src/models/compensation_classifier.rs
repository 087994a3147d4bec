use once_cell::sync::Lazy;
use regex::Regex;

fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern)
                .unwrap_or_else(|e| panic!("Invalid compensation pattern '{}': {}", pattern, e))
        })
        .collect()
}

/// Explicit hourly-rate formats. The most specific tier, checked first.
/// Ranges accept both `-` and `–`.
static HOURLY_RATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"(?i)\$[\d,.]+\s*(?:/|-|–|per|an|a)\s*(?:hr|hour)",
        r"(?i)\$[\d,.]+\s*[-–]\s*\$?[\d,.]+\s*(?:/|-|per|an|a)\s*(?:hr|hour)",
        r"(?i)\$[\d,.]+\s*hourly",
        r"(?i)\$[\d,.]+\s*[-–]\s*\$?[\d,.]+\s*hourly",
        r"(?i)hourly\s*[:.]?\s*\$[\d,.]+",
        r"(?i)(?:estimated|est\.?)\s*\$[\d,.]+\s*[-–]?\s*\$?[\d,.]*\s*(?:/|-|per|an|a)?\s*(?:hr|hour|hourly)?",
    ])
});

/// General salary formats: dollar amounts with a period unit, `k`
/// abbreviations, or "salary:"/"from"/"up to" prefixes.
static SALARY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"(?i)\$[\d,]+(?:\s*[-–]\s*\$?[\d,]+)?\s*/?\s*(?:yr|year|annually|annual|month|mo|week|wk)",
        r"(?i)\$[\d,]+k\s*[-–]?\s*\$?\d*k?",
        r"(?i)(?:salary|pay|compensation)\s*[:.]?\s*\$[\d,]+",
        r"(?i)\bfrom\s+\$[\d,]+",
        r"(?i)\bup\s+to\s+\$[\d,]+",
        r"(?i)\$[\d,]+\s*[-–]\s*\$[\d,]+\s*(?:a\s+)?year",
        r"(?i)\d+k\s*[-–]\s*\d+k",
    ])
});

/// Loose indicators: a dollar range or a bare unit word anywhere in the
/// text, without requiring an adjacent amount. The most permissive tier,
/// checked last.
static LOOSE_INDICATOR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"\$[\d,]+\s*[-–]\s*\$[\d,]+",
        r"(?i)/yr\b",
        r"(?i)/hr\b",
        r"(?i)per\s+hour",
        r"(?i)an\s+hour",
        r"(?i)a\s+hour",
        r"(?i)per\s+year",
        r"(?i)a\s+year",
        r"(?i)\bhourly\b",
        r"(?i)\bannually\b",
    ])
});

/// Decides whether free text carries a salary or hourly-rate signal.
///
/// Tiers are evaluated in order (hourly, salary, loose indicators) with the
/// first matching pattern winning; the tier order only affects
/// short-circuiting here since the contract is a plain boolean. Empty input
/// returns `false` without evaluating any pattern.
///
/// ```
/// use reported_company_sniffer::has_compensation_signal;
///
/// assert!(has_compensation_signal("$20/hr"));
/// assert!(has_compensation_signal("$50,000 - $70,000 a year"));
/// assert!(!has_compensation_signal("Entry level"));
/// ```
pub fn has_compensation_signal(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    HOURLY_RATE_PATTERNS
        .iter()
        .chain(SALARY_PATTERNS.iter())
        .chain(LOOSE_INDICATOR_PATTERNS.iter())
        .any(|pattern| pattern.is_match(text))
}
