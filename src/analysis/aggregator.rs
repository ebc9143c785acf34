//! Outcome aggregation and verdict computation.
//!
//! This module orders the collected outcomes by case and folds their
//! behaviors into a single pass/fail verdict.

use crate::config::VerdictConfig;
use crate::models::{Behavior, TestOutcome, Verdict};
use std::collections::BTreeMap;

/// Behaviors accepted as a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictRules {
    passing_behaviors: Vec<String>,
}

impl VerdictRules {
    pub fn new(passing_behaviors: Vec<String>) -> Self {
        Self { passing_behaviors }
    }

    /// Exact, case-sensitive match against the passing set.
    pub fn is_passing(&self, outcome: &TestOutcome) -> bool {
        self.passing_behaviors.iter().any(|b| *b == outcome.behavior)
    }
}

impl Default for VerdictRules {
    fn default() -> Self {
        Self::from(&VerdictConfig::default())
    }
}

impl From<&VerdictConfig> for VerdictRules {
    fn from(config: &VerdictConfig) -> Self {
        Self::new(config.passing_behaviors.clone())
    }
}

/// Aggregated view of one run's outcomes.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Number of outcomes successfully loaded.
    pub total: usize,
    /// Outcomes sorted ascending by case.
    pub outcomes: Vec<TestOutcome>,
    /// Overall verdict.
    pub verdict: Verdict,
    rules: VerdictRules,
}

impl Summary {
    /// Outcomes whose behavior is not passing.
    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !self.rules.is_passing(o))
    }
}

/// Sort outcomes by case (stable, so duplicate cases keep listing order).
pub fn sort_by_case(outcomes: &mut [TestOutcome]) {
    outcomes.sort_by(|a, b| a.case.cmp(&b.case));
}

/// Fold outcomes into a verdict. An empty set passes.
pub fn verdict<'a>(
    outcomes: impl IntoIterator<Item = &'a TestOutcome>,
    rules: &VerdictRules,
) -> Verdict {
    let all_pass = outcomes
        .into_iter()
        .fold(true, |acc, o| acc && rules.is_passing(o));
    Verdict::from(all_pass)
}

/// Sort and classify a scan's outcomes.
pub fn summarize(mut outcomes: Vec<TestOutcome>, rules: &VerdictRules) -> Summary {
    let total = outcomes.len();
    sort_by_case(&mut outcomes);
    let verdict = verdict(&outcomes, rules);

    Summary {
        total,
        outcomes,
        verdict,
        rules: rules.clone(),
    }
}

/// Count outcomes per behavior.
pub fn behavior_counts(outcomes: &[TestOutcome]) -> BTreeMap<Behavior, usize> {
    let mut counts: BTreeMap<Behavior, usize> = BTreeMap::new();

    for outcome in outcomes {
        *counts.entry(outcome.behavior()).or_default() += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_case() {
        let mut outcomes = vec![
            TestOutcome::new("b", "OK"),
            TestOutcome::new("a", "OK"),
            TestOutcome::new("c", "OK"),
        ];

        sort_by_case(&mut outcomes);

        let cases: Vec<_> = outcomes.iter().map(|o| o.case.to_string()).collect();
        assert_eq!(cases, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_is_stable_for_duplicate_cases() {
        let mut outcomes = vec![
            TestOutcome::new("1.1.1", "FAILED"),
            TestOutcome::new("1.1.1", "OK"),
        ];

        sort_by_case(&mut outcomes);

        assert_eq!(outcomes[0].behavior, "FAILED");
        assert_eq!(outcomes[1].behavior, "OK");
    }

    #[test]
    fn test_verdict_passing_behaviors() {
        let outcomes = vec![
            TestOutcome::new("1", "OK"),
            TestOutcome::new("2", "NON-STRICT"),
            TestOutcome::new("3", "INFORMATIONAL"),
        ];
        assert_eq!(verdict(&outcomes, &VerdictRules::default()), Verdict::Passed);
    }

    #[test]
    fn test_verdict_single_failure_flips() {
        for failing in ["FAILED", "WRONG_CODE", "UNCLEAN", "ok", ""] {
            let outcomes = vec![TestOutcome::new("1", "OK"), TestOutcome::new("2", failing)];
            assert_eq!(
                verdict(&outcomes, &VerdictRules::default()),
                Verdict::Failed,
                "behavior {:?}",
                failing
            );
        }
    }

    #[test]
    fn test_summarize_empty_is_vacuous_pass() {
        let summary = summarize(Vec::new(), &VerdictRules::default());
        assert_eq!(summary.total, 0);
        assert!(summary.outcomes.is_empty());
        assert_eq!(summary.verdict, Verdict::Passed);
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(
            vec![
                TestOutcome::new("1.1.2", "FAILED"),
                TestOutcome::new("1.1.1", "OK"),
            ],
            &VerdictRules::default(),
        );

        assert_eq!(summary.total, 2);
        assert_eq!(summary.outcomes[0], TestOutcome::new("1.1.1", "OK"));
        assert_eq!(summary.verdict, Verdict::Failed);

        let failures: Vec<_> = summary.failures().collect();
        assert_eq!(failures, vec![&TestOutcome::new("1.1.2", "FAILED")]);
    }

    #[test]
    fn test_behavior_counts() {
        let outcomes = vec![
            TestOutcome::new("1", "OK"),
            TestOutcome::new("2", "OK"),
            TestOutcome::new("3", "UNIMPLEMENTED"),
        ];

        let counts = behavior_counts(&outcomes);

        assert_eq!(counts.get(&Behavior::Ok), Some(&2));
        assert_eq!(counts.get(&Behavior::Unimplemented), Some(&1));
        assert_eq!(counts.get(&Behavior::Failed), None);
    }

    #[test]
    fn test_behavior_counts_keep_unknown_labels() {
        let outcomes = vec![
            TestOutcome::new("1", "WRONG CODE"),
            TestOutcome::new("2", "WRONG_CODE"),
        ];

        let counts = behavior_counts(&outcomes);
        let labels: Vec<_> = counts.keys().map(|b| b.to_string()).collect();

        assert_eq!(counts.get(&Behavior::WrongCode), Some(&1));
        assert!(labels.contains(&"WRONG_CODE".to_string()));
    }

    #[test]
    fn test_custom_passing_behaviors() {
        let strict = VerdictRules::new(vec!["OK".to_string()]);

        let summary = summarize(vec![TestOutcome::new("1", "NON-STRICT")], &strict);
        assert_eq!(summary.verdict, Verdict::Failed);
        assert_eq!(summary.failures().count(), 1);

        let lenient = VerdictRules::new(vec!["OK".to_string(), "UNIMPLEMENTED".to_string()]);
        let outcomes = vec![
            TestOutcome::new("1", "OK"),
            TestOutcome::new("2", "UNIMPLEMENTED"),
        ];
        assert_eq!(verdict(&outcomes, &lenient), Verdict::Passed);
    }

    #[test]
    fn test_rules_from_config() {
        let config: crate::config::Config =
            toml::from_str("[verdict]\npassing_behaviors = [\"OK\"]\n").unwrap();
        let rules = VerdictRules::from(&config.verdict);

        assert!(rules.is_passing(&TestOutcome::new("1", "OK")));
        assert!(!rules.is_passing(&TestOutcome::new("2", "NON-STRICT")));
        assert_eq!(
            summarize(vec![TestOutcome::new("2", "NON-STRICT")], &rules).verdict,
            Verdict::Failed
        );
    }
}
