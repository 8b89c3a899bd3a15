use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use meowly::diagnosis::{DiagnosisEngine, MATCHES_FOUND_MESSAGE, NO_MATCH_MESSAGE};
use meowly::knowledge::default_knowledge_base;
use proptest::prelude::*;

fn engine() -> DiagnosisEngine {
    DiagnosisEngine::new(Arc::new(default_knowledge_base()))
}

/// Codes G1..G50: the catalog plus a few it does not define.
fn code_set() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set((1u32..=50).prop_map(|n| format!("G{}", n)), 0..12)
}

#[test]
fn ringworm_scenario() {
    let outcome = engine().diagnose(["G1", "G4", "G6", "G11"]);

    assert_eq!(outcome.message, MATCHES_FOUND_MESSAGE);
    let top = &outcome.results[0];
    assert_eq!(top.name, "Ringworm / kurap / dermathopysis");
    assert_eq!(top.match_percentage, 100.0);
    assert_eq!(top.matched_symptoms_count, 4);
    assert_eq!(top.total_symptoms, 4);
    assert!(outcome.results[1..]
        .iter()
        .all(|c| c.match_percentage < 100.0));
}

#[test]
fn alopecia_scenario() {
    let outcome = engine().diagnose(["G5"]);

    assert_eq!(outcome.results[0].name, "Alopecia");
    assert_eq!(outcome.results[0].match_percentage, 100.0);

    let kutuan = outcome
        .results
        .iter()
        .position(|c| c.name == "Kutuan / Infeksi Kutu")
        .expect("Kutuan should partially match");
    assert_eq!(outcome.results[kutuan].match_percentage, 10.0);
    assert!(kutuan > 0);
}

#[test]
fn empty_and_unknown_scenarios() {
    let engine = engine();

    let empty = engine.diagnose(Vec::<String>::new());
    assert_eq!(empty.message, NO_MATCH_MESSAGE);
    assert!(empty.results.is_empty());

    let unknown = engine.diagnose(["G999"]);
    assert_eq!(unknown, empty);
}

#[test]
fn outcome_json_shape() {
    let outcome = engine().diagnose(["G7"]);
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["message"], MATCHES_FOUND_MESSAGE);
    let first = &json["results"][0];
    assert_eq!(first["name"], "Pruritus");
    assert_eq!(first["match_percentage"], 100.0);
    assert_eq!(first["matched_symptoms_count"], 1);
    assert_eq!(first["total_symptoms"], 1);
    assert_eq!(first["solution"], "a. Pemberian obat anti radang");
}

#[test]
fn concurrent_callers_share_one_engine() {
    let engine = engine();
    let expected = engine.diagnose(["G5", "G38", "G40"]);

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| engine.diagnose(["G5", "G38", "G40"])))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

proptest! {
    /// Same submission, same answer
    #[test]
    fn diagnosis_is_deterministic(codes in code_set()) {
        let engine = engine();
        prop_assert_eq!(engine.diagnose(&codes), engine.diagnose(&codes));
    }

    /// Non-increasing percentages; ties in catalog order
    #[test]
    fn results_sorted_with_stable_ties(codes in code_set()) {
        let engine = engine();
        let kb = engine.knowledge_base();
        let position = |name: &str| kb.rules().iter().position(|r| r.name() == name).unwrap();

        let outcome = engine.diagnose(&codes);
        for pair in outcome.results.windows(2) {
            prop_assert!(pair[0].match_percentage >= pair[1].match_percentage);
            if pair[0].match_percentage == pair[1].match_percentage {
                prop_assert!(position(&pair[0].name) < position(&pair[1].name));
            }
        }
    }

    /// Percentage is against the disease's own total, and only overlapping diseases appear
    #[test]
    fn candidates_reflect_overlap(codes in code_set()) {
        let engine = engine();
        let kb = engine.knowledge_base();
        let outcome = engine.diagnose(&codes);

        let overlapping = kb
            .rules()
            .iter()
            .filter(|r| r.required_symptoms().iter().any(|c| codes.contains(c)))
            .count();
        prop_assert_eq!(outcome.results.len(), overlapping);

        for candidate in &outcome.results {
            prop_assert!(candidate.matched_symptoms_count >= 1);
            prop_assert!(candidate.matched_symptoms_count <= candidate.total_symptoms);
            let exact = 100.0 * candidate.matched_symptoms_count as f64 / candidate.total_symptoms as f64;
            prop_assert!((candidate.match_percentage - exact).abs() <= 0.005 + 1e-9);
        }
    }

    /// Adding a required symptom never lowers that disease's score
    #[test]
    fn adding_a_symptom_is_monotone(codes in code_set(), extra in 1u32..=44) {
        let engine = engine();
        let extra = format!("G{}", extra);
        let before = engine.diagnose(&codes);

        let mut grown = codes.clone();
        grown.insert(extra);
        let after = engine.diagnose(&grown);

        for candidate in &before.results {
            let later = after.results.iter().find(|c| c.name == candidate.name);
            prop_assert!(later.is_some());
            prop_assert!(later.unwrap().match_percentage >= candidate.match_percentage);
        }
    }

    /// Codes outside the catalog change nothing
    #[test]
    fn unknown_codes_are_ignored(codes in code_set(), junk in proptest::collection::vec("X[0-9]{1,3}", 0..5)) {
        let engine = engine();
        let known: BTreeSet<String> = codes
            .iter()
            .filter(|c| engine.knowledge_base().symptom(c).is_some())
            .cloned()
            .collect();

        let mut noisy = codes.clone();
        noisy.extend(junk);

        prop_assert_eq!(engine.diagnose(&noisy), engine.diagnose(&known));
    }
}
