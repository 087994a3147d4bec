use log::debug;
use std::collections::HashMap;

use crate::constants::{
    ALIAS_MATCH_CONFIDENCE, EXACT_MATCH_CONFIDENCE, MIN_SUBSTRING_MATCH_LEN,
    PARTIAL_MATCH_CONFIDENCE,
};
use crate::models::{ReportCategory, ReportedCompany, ReportedCompanyList};
use crate::types::{ConfidenceScore, NormalizedName};
use crate::utils::normalize_company_name;

/// Job posting fields as supplied by the caller (scraped from a job card).
/// Only `company` participates in reported-company matching; the remaining
/// fields are carried for sibling detectors.
#[derive(Debug, Clone, Default)]
pub struct JobInput {
    pub company: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl JobInput {
    pub fn from_company(company: &str) -> Self {
        Self {
            company: company.to_string(),
            ..Self::default()
        }
    }
}

/// Which matching strategy produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Direct index hit on a primary normalized name or alias.
    Exact,
    /// Substring-level alias hit.
    Alias,
    /// Bidirectional substring hit on a primary normalized name.
    Partial,
    None,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Alias => "alias",
            MatchType::Partial => "partial",
            MatchType::None => "none",
        }
    }
}

/// Verdict for a single [`JobInput`]. Constructed fresh per call and
/// immediately consumed by the caller.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub detected: bool,
    pub confidence: ConfidenceScore,
    pub match_type: MatchType,
    pub matched_company: Option<ReportedCompany>,
    /// The literal normalized string that triggered the match. Diagnostic.
    pub matched_on: String,
    /// Human-readable advisory sentence, category-specific. Empty on no match.
    pub message: String,
}

impl MatchResult {
    fn no_match() -> Self {
        Self {
            detected: false,
            confidence: 0.0,
            match_type: MatchType::None,
            matched_company: None,
            matched_on: String::new(),
            message: String::new(),
        }
    }

    fn detection(
        company: &ReportedCompany,
        match_type: MatchType,
        confidence: ConfidenceScore,
        matched_on: &str,
    ) -> Self {
        Self {
            detected: true,
            confidence,
            match_type,
            matched_company: Some(company.clone()),
            matched_on: matched_on.to_string(),
            message: format!(
                "{} has been reported for {}",
                company.name,
                company.category.advisory_reason()
            ),
        }
    }
}

/// Aggregate dataset counts, for diagnostics and admin display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorStats {
    pub total_companies: usize,
    pub total_aliases: usize,
    pub categories: CategoryCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    pub spam: usize,
    pub ghost: usize,
    pub scam: usize,
}

/// Matches job-posting company names against the curated reported-company
/// dataset.
///
/// Strategies are tried in strict order with first-match-wins semantics:
/// exact index lookup, then per record in dataset declaration order a
/// bidirectional substring check on the primary name, then on each alias.
/// Iteration order is the `Vec` order of the injected list, so verdicts are
/// reproducible.
///
/// The detector is read-only after construction and safe to share across
/// threads without synchronization.
pub struct ReportedCompanyDetector {
    companies: ReportedCompanyList,
    // Every normalized name and alias, mapped to its record's position.
    index: HashMap<NormalizedName, usize>,
}

impl ReportedCompanyDetector {
    /// Builds a detector over an injected dataset. The lookup index is
    /// derived here, once; it always holds at least one entry per record.
    pub fn new(companies: ReportedCompanyList) -> Self {
        let mut index = HashMap::new();

        for (record_index, company) in companies.iter().enumerate() {
            index.insert(company.normalized_name.clone(), record_index);

            for alias in &company.aliases {
                index.insert(alias.clone(), record_index);
            }
        }

        debug!(
            "Built reported-company index: {} records, {} keys",
            companies.len(),
            index.len()
        );

        Self { companies, index }
    }

    /// Analyzes a job posting's company name. Never fails; empty or
    /// whitespace-only input yields the no-match result.
    pub fn analyze(&self, job: &JobInput) -> MatchResult {
        if job.company.trim().is_empty() {
            return MatchResult::no_match();
        }

        let normalized = normalize_company_name(&job.company);
        if normalized.is_empty() {
            return MatchResult::no_match();
        }

        // 1. Exact lookup covers primary names and aliases alike; the index
        // does not distinguish which one was hit.
        if let Some(&record_index) = self.index.get(&normalized) {
            let company = &self.companies[record_index];
            debug!("Exact match for '{}' -> {}", normalized, company.name);

            return MatchResult::detection(
                company,
                MatchType::Exact,
                EXACT_MATCH_CONFIDENCE,
                &normalized,
            );
        }

        // 2. Fall back to substring containment, dataset order, first match
        // wins. The shorter side must clear MIN_SUBSTRING_MATCH_LEN.
        for company in &self.companies {
            if company.normalized_name.chars().count() >= MIN_SUBSTRING_MATCH_LEN
                && normalized.contains(&company.normalized_name)
            {
                return MatchResult::detection(
                    company,
                    MatchType::Partial,
                    PARTIAL_MATCH_CONFIDENCE,
                    &company.normalized_name,
                );
            }

            if normalized.chars().count() >= MIN_SUBSTRING_MATCH_LEN
                && company.normalized_name.contains(&normalized)
            {
                return MatchResult::detection(
                    company,
                    MatchType::Partial,
                    PARTIAL_MATCH_CONFIDENCE,
                    &normalized,
                );
            }

            for alias in &company.aliases {
                if alias.chars().count() >= MIN_SUBSTRING_MATCH_LEN
                    && normalized.contains(alias.as_str())
                {
                    return MatchResult::detection(
                        company,
                        MatchType::Alias,
                        ALIAS_MATCH_CONFIDENCE,
                        alias,
                    );
                }

                if normalized.chars().count() >= MIN_SUBSTRING_MATCH_LEN
                    && alias.contains(&normalized)
                {
                    return MatchResult::detection(
                        company,
                        MatchType::Alias,
                        ALIAS_MATCH_CONFIDENCE,
                        &normalized,
                    );
                }
            }
        }

        MatchResult::no_match()
    }

    /// Index-only membership test, for cheap pre-filtering. Returns `true`
    /// exactly when [`analyze`](Self::analyze) would report an exact match.
    pub fn quick_check(&self, company_name: &str) -> bool {
        let normalized = normalize_company_name(company_name);
        self.index.contains_key(&normalized)
    }

    pub fn get_stats(&self) -> DetectorStats {
        let mut categories = CategoryCounts {
            spam: 0,
            ghost: 0,
            scam: 0,
        };

        for company in &self.companies {
            match company.category {
                ReportCategory::Spam => categories.spam += 1,
                ReportCategory::Ghost => categories.ghost += 1,
                ReportCategory::Scam => categories.scam += 1,
            }
        }

        DetectorStats {
            total_companies: self.companies.len(),
            total_aliases: self.index.len() - self.companies.len(),
            categories,
        }
    }

    /// Number of records in the injected dataset.
    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    /// Number of keys in the derived lookup index.
    pub fn index_size(&self) -> usize {
        self.index.len()
    }
}
