//! Property-based tests for fieldcheck.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fieldcheck::grammar::{RuleChain, normalize_spacing, split_key_value, split_tokens};
use fieldcheck::prelude::*;
use proptest::prelude::*;

/// A checker whose only rule, `tick`, counts its invocations.
fn counting_checker() -> (Checker, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let checker = RegistryBuilder::new()
        .rule(
            "tick",
            rule_fn(move |_field, _arg| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        )
        .build();
    (checker, calls)
}

fn ticking_record(idents: &[String]) -> FieldMap {
    idents
        .iter()
        .fold(FieldMap::new(), |record, ident| record.annotated(ident.as_str(), "", "tick tick"))
}

// ============================================================================
// GRAMMAR
// ============================================================================

proptest! {
    #[test]
    fn normalize_spacing_idempotent(s in "\\PC*") {
        let once = normalize_spacing(&s);
        prop_assert_eq!(normalize_spacing(&once), once);
    }

    #[test]
    fn normalized_tokens_are_non_empty(s in "[a-z= \t\n]{0,40}") {
        let normalized = normalize_spacing(&s);
        for token in split_tokens(&normalized) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(char::is_whitespace));
        }
    }

    #[test]
    fn key_value_round_trip(name in "[a-zA-Z]{1,12}", value in "[^\n]{1,24}") {
        let token = format!("{name}={value}");
        prop_assert_eq!(split_key_value(&token), Some((name.as_str(), value.as_str())));
    }

    #[test]
    fn chain_token_count_matches_words(words in prop::collection::vec("[a-z]{1,6}", 0..8)) {
        let chain = RuleChain::parse(&words.join("   "));
        prop_assert_eq!(chain.tokens().count(), words.len());
    }
}

// ============================================================================
// SELECTION: empty selections never reach a rule
// ============================================================================

proptest! {
    #[test]
    fn only_with_no_idents_never_runs_rules(
        idents in prop::collection::vec("[A-Z][a-z]{0,6}", 0..6),
    ) {
        let (checker, calls) = counting_checker();
        let record = ticking_record(&idents);

        prop_assert!(checker.validate_only(&record, Vec::<String>::new()).is_ok());
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn except_all_idents_never_runs_rules(
        idents in prop::collection::vec("[A-Z][a-z]{0,6}", 0..6),
    ) {
        let (checker, calls) = counting_checker();
        let record = ticking_record(&idents);

        prop_assert!(checker.validate_except(&record, idents.clone()).is_ok());
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn validate_all_runs_every_token_once(
        idents in prop::collection::hash_set("[A-Z][a-z]{0,6}", 0..6),
    ) {
        let idents: Vec<String> = idents.into_iter().collect();
        let (checker, calls) = counting_checker();
        let record = ticking_record(&idents);

        prop_assert!(checker.validate_all(&record).is_ok());
        prop_assert_eq!(calls.load(Ordering::SeqCst), idents.len() * 2);
    }
}

// ============================================================================
// BUILT-INS
// ============================================================================

proptest! {
    #[test]
    fn num_accepts_digit_strings(s in "[0-9]{1,20}") {
        let field = Field::new("N", &s);
        prop_assert!(Checker::default().validate_field("num", &field).is_ok());
    }

    #[test]
    fn len_counts_characters(s in "\\PC{0,16}") {
        let field = Field::new("S", &s);
        let chain = format!("len={}", s.chars().count());
        prop_assert!(Checker::default().validate_field(&chain, &field).is_ok());
    }

    #[test]
    fn min_and_max_agree_on_boundary(s in "[a-z]{0,16}", n in 0usize..16) {
        let field = Field::new("S", &s);
        let checker = Checker::default();
        let min_ok = checker.validate_field(&format!("min={n}"), &field).is_ok();
        let max_ok = checker.validate_field(&format!("max={n}"), &field).is_ok();
        prop_assert_eq!(min_ok, s.len() >= n);
        prop_assert_eq!(max_ok, s.len() <= n);
    }
}
