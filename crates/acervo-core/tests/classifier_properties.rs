//! Property tests for the criticality classifier.

use acervo_core::{
    CriticalityLevel, Evidence, QuestionSlot, RuleId, SectorResponse, classify, explain, rule,
    rules,
};
use proptest::prelude::*;

/// Answers the rules react to.
const VOCABULARY: [&str; 17] = [
    "Ruim",
    "Inadequado",
    "Bom",
    "Razoável",
    "Regular",
    "Moderada",
    "Sim",
    "Não",
    "Baixa",
    "Ocasional",
    "Desafios Significativos",
    "Alta Criticidade",
    "Até 200",
    "201 a 500",
    "501 a 1000",
    "1001 a 2000",
    "Mais de 2000",
];

/// Answers drawn from the vocabulary, plus noise.
fn answer() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(VOCABULARY.to_vec()).prop_map(String::from),
        1 => "[a-zA-Z ]{0,12}",
    ]
}

fn question() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("O setor ainda produz documentos?".to_string()),
        "[a-zA-Z ?]{0,16}",
    ]
}

fn response() -> impl Strategy<Value = SectorResponse> {
    (question(), answer()).prop_map(|(q, a)| SectorResponse::new(q, a))
}

fn responses() -> impl Strategy<Value = Vec<SectorResponse>> {
    prop::collection::vec(response(), 0..12)
}

fn expected_score(level: CriticalityLevel) -> u8 {
    match level {
        CriticalityLevel::High => 100,
        CriticalityLevel::Moderate => 60,
        CriticalityLevel::Low => 20,
        CriticalityLevel::NeedsReview => 50,
    }
}

#[test]
fn empty_survey_is_needs_review_baseline() {
    let verdict = classify(&[]);
    assert_eq!(verdict.level, CriticalityLevel::NeedsReview);
    assert_eq!(verdict.score, 50);
}

#[test]
fn every_rule_is_reachable() {
    let cases: Vec<(RuleId, Vec<SectorResponse>)> = vec![
        (
            RuleId::HighProblemsWithVolume,
            vec![
                SectorResponse::tagged(QuestionSlot::ManagementProblems, "P", "Alta Criticidade"),
                SectorResponse::tagged(QuestionSlot::DocumentVolume, "V", "1001 a 2000"),
            ],
        ),
        (
            RuleId::HighVolume,
            vec![SectorResponse::tagged(QuestionSlot::DocumentVolume, "V", "Mais de 2000")],
        ),
        (
            RuleId::HighPoorConditions,
            vec![SectorResponse::tagged(QuestionSlot::SiteConditions, "S", "Ruim")],
        ),
        (
            RuleId::HighAccumulatedIssues,
            vec![
                SectorResponse::new("A", "Ruim"),
                SectorResponse::new("B", "Ruim"),
                SectorResponse::new("C", "Inadequado"),
            ],
        ),
        (
            RuleId::Moderate,
            vec![
                SectorResponse::tagged(QuestionSlot::DocumentVolume, "V", "501 a 1000"),
                SectorResponse::new("A", "Regular"),
                SectorResponse::new("B", "Moderada"),
            ],
        ),
        (
            RuleId::LowStable,
            vec![
                SectorResponse::tagged(QuestionSlot::DocumentVolume, "V", "Até 200"),
                SectorResponse::tagged(QuestionSlot::UsageFrequency, "U", "Ocasional"),
            ],
        ),
    ];

    for (expected, responses) in cases {
        assert_eq!(classify(&responses).rule, Some(expected), "case {expected}");

        let evidence = Evidence::gather(&responses);
        let fired = rule(expected).and_then(|r| r.evaluate(&evidence));
        assert!(fired.is_some(), "rule {expected} evaluated alone");
    }
}

proptest! {
    #[test]
    fn prop_verdict_is_well_formed(responses in responses()) {
        let verdict = classify(&responses);
        prop_assert!(CriticalityLevel::ALL.contains(&verdict.level));
        prop_assert_eq!(verdict.score, expected_score(verdict.level));
        prop_assert!(!verdict.reasons.is_empty());
        prop_assert_eq!(verdict.color.as_str(), verdict.level.color());
        prop_assert_eq!(verdict.icon.as_str(), verdict.level.icon());
    }

    #[test]
    fn prop_classify_is_idempotent(responses in responses()) {
        prop_assert_eq!(classify(&responses), classify(&responses));
    }

    #[test]
    fn prop_over_2000_is_always_high(mut responses in prop::collection::vec(response(), 8..12)) {
        responses[3].answer = "Mais de 2000".to_string();
        let verdict = classify(&responses);
        prop_assert_eq!(verdict.level, CriticalityLevel::High);
        prop_assert_eq!(verdict.score, 100);
    }

    #[test]
    fn prop_poor_conservation_or_site_is_high(
        mut responses in prop::collection::vec(response(), 8..12),
        position in prop_oneof![Just(4usize), Just(5usize)],
    ) {
        responses[position].answer = "Ruim".to_string();
        let verdict = classify(&responses);
        prop_assert_eq!(verdict.level, CriticalityLevel::High);
        prop_assert_eq!(verdict.score, 100);
    }

    #[test]
    fn prop_explain_agrees_with_classify(responses in responses()) {
        let verdict = classify(&responses);
        let trace = explain(&responses);
        prop_assert_eq!(trace.len(), rules().len());

        let selected: Vec<_> = trace.iter().filter(|o| o.selected).map(|o| o.rule).collect();
        prop_assert_eq!(selected.first().copied(), verdict.rule);
        prop_assert!(selected.len() <= 1);
    }

    #[test]
    fn prop_tagging_is_order_independent(
        problems in answer(),
        volume in answer(),
        conservation in answer(),
        site in answer(),
        usage in answer(),
    ) {
        let tagged = vec![
            SectorResponse::tagged(QuestionSlot::ManagementProblems, "P", problems),
            SectorResponse::tagged(QuestionSlot::DocumentVolume, "V", volume),
            SectorResponse::tagged(QuestionSlot::ConservationState, "C", conservation),
            SectorResponse::tagged(QuestionSlot::SiteConditions, "S", site),
            SectorResponse::tagged(QuestionSlot::UsageFrequency, "U", usage),
        ];
        let mut reversed = tagged.clone();
        reversed.reverse();

        prop_assert_eq!(classify(&tagged), classify(&reversed));
    }
}
