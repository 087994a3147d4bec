use reported_company_sniffer::has_compensation_signal;

#[cfg(test)]
mod compensation_classifier_tests {
    use super::*;

    #[test]
    fn test_detects_hourly_rate_formats() {
        let hourly_snippets = [
            "$20/hr",
            "$20/hour",
            "$18.50/hr",
            "$18.50/hour",
            "$20 an hour",
            "$20 per hour",
            "$18 - $22 an hour",
            "$18-$22/hr",
            "$18 - $22 per hour",
            "$20 hourly",
            "$18-$22 hourly",
            "hourly: $20",
            "hourly $18",
            "Estimated $18-$22 an hour",
            "Est. $20/hr",
            "$15.00 - $18.00 per hour",
            "$22.50 an hour",
            "$17-$21 an hour",
        ];

        for snippet in hourly_snippets {
            assert!(
                has_compensation_signal(snippet),
                "hourly rate not detected in {:?}",
                snippet
            );
        }
    }

    #[test]
    fn test_detects_annual_salary_formats() {
        let salary_snippets = [
            "$50,000/yr",
            "$50,000 a year",
            "$50,000 - $70,000 a year",
            "$50k-$60k",
            "50k-60k",
            "salary: $50,000",
            "from $50,000",
            "up to $100,000",
            "$80,000/year",
            "$70,000 annually",
        ];

        for snippet in salary_snippets {
            assert!(
                has_compensation_signal(snippet),
                "salary not detected in {:?}",
                snippet
            );
        }
    }

    #[test]
    fn test_detects_en_dash_ranges() {
        assert!(has_compensation_signal("$18 – $22 an hour"));
        assert!(has_compensation_signal("$50,000 – $70,000 a year"));
    }

    #[test]
    fn test_ignores_text_without_compensation() {
        let plain_snippets = [
            "Software Engineer",
            "Full-time position",
            "Great benefits",
            "Remote work available",
            "Entry level",
            "Join our team",
        ];

        for snippet in plain_snippets {
            assert!(
                !has_compensation_signal(snippet),
                "false positive on {:?}",
                snippet
            );
        }
    }

    #[test]
    fn test_empty_input_returns_false() {
        assert!(!has_compensation_signal(""));
        assert!(!has_compensation_signal("   "));
    }

    #[test]
    fn test_is_case_insensitive() {
        assert!(has_compensation_signal("$20 PER HOUR"));
        assert!(has_compensation_signal("SALARY: $90,000"));
    }

    #[test]
    fn test_bare_unit_words_count_as_loose_indicators() {
        assert!(has_compensation_signal("compensation reviewed annually"));
        assert!(has_compensation_signal("rate quoted per hour"));
    }
}
