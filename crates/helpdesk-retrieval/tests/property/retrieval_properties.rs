use helpdesk_core::config::HelpdeskConfig;
use helpdesk_core::models::TemplateRecord;
use helpdesk_retrieval::{substitute_placeholder, HelpdeskEngine};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "password", "reset", "order", "refund", "shipping", "address", "invoice", "account",
    "delivery", "payment", "card", "hours", "cancel", "package", "damaged", "agent",
];

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(WORDS).prop_map(str::to_string)
}

fn phrase(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..=max).prop_map(|w| w.join(" "))
}

/// Corpora whose documents are pairwise distinct as unigram sets, so every
/// document is its own unique nearest neighbour.
fn distinct_corpus() -> impl Strategy<Value = Vec<TemplateRecord>> {
    prop::collection::btree_set(prop::collection::btree_set(0..WORDS.len(), 1..4), 1..8).prop_map(
        |docs| {
            docs.into_iter()
                .enumerate()
                .map(|(i, idxs)| {
                    let words: Vec<&str> = idxs.into_iter().map(|j| WORDS[j]).collect();
                    let (flags, instruction) = words.split_at(1);
                    TemplateRecord::new(
                        flags.join(" "),
                        if instruction.is_empty() {
                            "please".to_string()
                        } else {
                            instruction.join(" ")
                        },
                        "cat",
                        format!("intent_{i}"),
                        "resp",
                    )
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn score_is_bounded(corpus in distinct_corpus(), query in ".{0,60}") {
        let engine = HelpdeskEngine::build(corpus, HelpdeskConfig::default()).unwrap();
        let m = engine.best_match(&query).unwrap();
        prop_assert!((0.0..=1.0).contains(&m.score), "score {} out of range", m.score);
        prop_assert!(m.index < engine.corpus().size());
    }

    #[test]
    fn lookup_is_deterministic(corpus in distinct_corpus(), query in phrase(5)) {
        let a = HelpdeskEngine::build(corpus.clone(), HelpdeskConfig::default()).unwrap();
        let b = HelpdeskEngine::build(corpus, HelpdeskConfig::default()).unwrap();
        let first = a.best_match(&query).unwrap();
        prop_assert_eq!(first, a.best_match(&query).unwrap());
        prop_assert_eq!(first, b.best_match(&query).unwrap());
    }

    #[test]
    fn every_document_is_its_own_best_match(corpus in distinct_corpus()) {
        let engine = HelpdeskEngine::build(corpus.clone(), HelpdeskConfig::default()).unwrap();
        for (i, record) in corpus.iter().enumerate() {
            let m = engine.best_match(&record.document_text()).unwrap();
            prop_assert_eq!(m.index, i);
            prop_assert!((m.score - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn stop_word_queries_are_degenerate(corpus in distinct_corpus(),
                                        query in prop::collection::vec(
                                            prop::sample::select(&["the", "a", "an", "my", "to", "of"][..]), 1..6)) {
        let engine = HelpdeskEngine::build(corpus, HelpdeskConfig::default()).unwrap();
        let m = engine.best_match(&query.join(" ")).unwrap();
        prop_assert_eq!(m.index, 0);
        prop_assert_eq!(m.score, 0.0);
    }

    #[test]
    fn substitution_leaves_no_placeholder(prefix in "[a-z ]{0,20}", order in "[A-Z0-9]{1,10}") {
        let text = format!("{prefix}{{{{Order Number}}}} and {{{{Order Number}}}}");
        let out = substitute_placeholder(&text, Some(&order));
        prop_assert!(!out.contains("{{Order Number}}"));
        prop_assert_eq!(out.matches(order.as_str()).count() >= 2, true);
        prop_assert_eq!(substitute_placeholder(&text, None), text);
    }
}
