use reported_company_sniffer::normalize_company_name;

#[cfg(test)]
mod normalize_company_name_tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize_company_name("  Accenture  "), "accenture");
        assert_eq!(normalize_company_name("ACCENTURE"), "accenture");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize_company_name("Aha!"), "aha");
        assert_eq!(normalize_company_name("Files.com"), "filescom");
        assert_eq!(normalize_company_name("Kraft & Kennedy"), "kraft kennedy");
        assert_eq!(normalize_company_name("Caesar's"), "caesars");
    }

    #[test]
    fn test_hyphenated_names_concatenate() {
        assert_eq!(normalize_company_name("1-800-Pack-Rat"), "1800packrat");
        assert_eq!(normalize_company_name("Cedars-Sinai"), "cedarssinai");
    }

    #[test]
    fn test_removes_corporate_suffixes() {
        assert_eq!(normalize_company_name("Accenture Inc"), "accenture");
        assert_eq!(normalize_company_name("Accenture LLC"), "accenture");
        assert_eq!(normalize_company_name("Accenture Ltd"), "accenture");
        assert_eq!(normalize_company_name("Accenture Corp"), "accenture");
        assert_eq!(normalize_company_name("Accenture Corporation"), "accenture");
        assert_eq!(normalize_company_name("Accenture Company"), "accenture");
        assert_eq!(normalize_company_name("Accenture Co"), "accenture");
    }

    #[test]
    fn test_suffix_removal_is_word_boundary_aware() {
        // "co" appears mid-word here and must survive
        assert_eq!(normalize_company_name("Costco"), "costco");
        assert_eq!(normalize_company_name("Incline Village"), "incline village");
        // trailing punctuation on the suffix is stripped first, then the token drops
        assert_eq!(normalize_company_name("Acme, Inc."), "acme");
    }

    #[test]
    fn test_interior_suffix_tokens_drop_without_double_spaces() {
        assert_eq!(
            normalize_company_name("Acme Inc Holdings"),
            "acme holdings"
        );
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(
            normalize_company_name("JP   Morgan\t Chase"),
            "jp morgan chase"
        );
    }

    #[test]
    fn test_degenerate_input_yields_empty_string() {
        assert_eq!(normalize_company_name(""), "");
        assert_eq!(normalize_company_name("   "), "");
        assert_eq!(normalize_company_name("!!! ???"), "");
        assert_eq!(normalize_company_name("Inc"), "");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "JP Morgan Chase",
            "  Accenture Inc  ",
            "1-800-Pack-Rat",
            "Acme Inc Holdings",
            "Files.com",
            "",
            "!!!",
        ];

        for sample in samples {
            let once = normalize_company_name(sample);
            assert_eq!(
                normalize_company_name(&once),
                once,
                "normalization not idempotent for {:?}",
                sample
            );
        }
    }
}
