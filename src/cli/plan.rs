//! `study-monk plan <query>`: the search mock without the TUI.

use crate::error::{StudyError, StudyResult};
use crate::models::generate_mock_results;

/// Pretty JSON for the three plans of `query`.
///
/// Rejects empty queries, matching the search box.
pub fn plan_json(query: &str) -> StudyResult<String> {
    if query.trim().is_empty() {
        return Err(StudyError::EmptyQuery);
    }
    Ok(serde_json::to_string_pretty(&generate_mock_results(query))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_json_shape() {
        let json = plan_json("Bio 101 Exam in 12 hours").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let plans = value.as_array().unwrap();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0]["title"], "The 12-Hour hours Cram");
        assert_eq!(plans[0]["kind"], "CRISIS_MODE");
        assert_eq!(plans[1]["score"], 98);
    }

    #[test]
    fn test_plan_json_rejects_blank_query() {
        assert!(matches!(plan_json("  "), Err(StudyError::EmptyQuery)));
    }
}
