//! Mock study-plan generator.
//!
//! Search never hits a backend. A query is interpolated into three fixed
//! plan templates, so the same query always yields the same plans.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Word used in the crisis plan title when the query has no trailing word.
const FALLBACK_SUBJECT: &str = "Exam";

/// Category label shown on each plan card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanKind {
    CrisisMode,
    DeepDive,
    Minimalist,
}

impl PlanKind {
    /// Badge text for the card header
    pub fn label(&self) -> &'static str {
        match self {
            PlanKind::CrisisMode => "CRISIS MODE",
            PlanKind::DeepDive => "DEEP DIVE",
            PlanKind::Minimalist => "MINIMALIST",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One generated study plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub kind: PlanKind,
    pub title: String,
    pub description: String,
    /// Estimated active study time, e.g. "6 Hours Active"
    pub time: String,
    pub tools: Vec<String>,
    pub score: u8,
}

/// Last whitespace-delimited word of the query, falling back to "Exam"
/// for a blank query.
pub fn subject_word(query: &str) -> &str {
    query.split_whitespace().next_back().unwrap_or(FALLBACK_SUBJECT)
}

/// Build the three mock plans for a query.
///
/// Only the first plan depends on the query; its title echoes the last word.
pub fn generate_mock_results(query: &str) -> Vec<SearchResult> {
    vec![
        SearchResult {
            kind: PlanKind::CrisisMode,
            title: format!("The 12-Hour {} Cram", subject_word(query)),
            description: "Emergency protocol. Focuses only on high-yield concepts and \
                          memorization techniques. 50/10 study intervals."
                .to_string(),
            time: "6 Hours Active".to_string(),
            tools: tools(&["Flashcards", "Summary Sheet", "Pomodoro"]),
            score: 95,
        },
        SearchResult {
            kind: PlanKind::DeepDive,
            title: "Concept Mastery Plan".to_string(),
            description: "For when you need to actually understand the material. \
                          Includes video explainers and practice problems."
                .to_string(),
            time: "12 Hours Active".to_string(),
            tools: tools(&["Video Lectures", "Practice Quiz", "Mind Map"]),
            score: 98,
        },
        SearchResult {
            kind: PlanKind::Minimalist,
            title: "The \"Pass the Class\" Route".to_string(),
            description: "Minimum effective dose. Covers just enough to get a B- \
                          without burning out."
                .to_string(),
            time: "3 Hours Active".to_string(),
            tools: tools(&["Key Terms List", "Chapter Summary"]),
            score: 85,
        },
    ]
}

fn tools(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_title_echoes_last_word() {
        let results = generate_mock_results("Bio 101 Exam in 12 hours");
        assert_eq!(results[0].title, "The 12-Hour hours Cram");
    }

    #[test]
    fn test_always_three_plans_in_fixed_order() {
        let results = generate_mock_results("Calc");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].kind, PlanKind::CrisisMode);
        assert_eq!(results[1].kind, PlanKind::DeepDive);
        assert_eq!(results[2].kind, PlanKind::Minimalist);
    }

    #[test]
    fn test_other_plans_ignore_query() {
        let a = generate_mock_results("Organic Chemistry");
        let b = generate_mock_results("History");
        assert_eq!(a[1], b[1]);
        assert_eq!(a[2], b[2]);
        assert_ne!(a[0].title, b[0].title);
    }

    #[test]
    fn test_single_word_query() {
        assert_eq!(subject_word("Physics"), "Physics");
    }

    #[test]
    fn test_trailing_whitespace_and_tabs_use_last_token() {
        for (query, token) in [("Calc II ", "II"), ("Bio\tFinal", "Final"), ("  Stats \n", "Stats")] {
            let results = generate_mock_results(query);
            assert!(
                results.iter().any(|r| r.title.contains(token)),
                "no title contains {:?} for {:?}",
                token,
                query
            );
            assert!(!results[0].title.contains('\t'));
        }
    }

    #[test]
    fn test_blank_query_falls_back_to_exam() {
        assert_eq!(subject_word(""), "Exam");
        assert_eq!(subject_word(" \t "), "Exam");
    }

    #[test]
    fn test_scores_and_tools() {
        let results = generate_mock_results("x");
        let scores: Vec<u8> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![95, 98, 85]);
        assert_eq!(results[2].tools, vec!["Key Terms List", "Chapter Summary"]);
    }

    #[test]
    fn test_kind_serializes_as_screaming_snake() {
        let json = serde_json::to_string(&PlanKind::CrisisMode).unwrap();
        assert_eq!(json, "\"CRISIS_MODE\"");
    }
}
