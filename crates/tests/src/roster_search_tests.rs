use pretty_assertions::assert_eq;
use shared_types::{filter_roster, fixtures};

fn names(query: &str) -> Vec<String> {
    let roster = fixtures::roster();
    filter_roster(&roster, query)
        .into_iter()
        .map(|e| e.name.clone())
        .collect()
}

#[test]
fn empty_query_keeps_everyone() {
    assert_eq!(names("").len(), fixtures::roster().len());
}

#[test]
fn name_match_ignores_case() {
    assert_eq!(names("PRIYA"), vec!["Priya Patel".to_string()]);
}

#[test]
fn roll_number_prefix_matches_department() {
    assert_eq!(names("u4ece"), vec!["Arun Kumar".to_string()]);
}

#[test]
fn no_match_yields_empty_list() {
    assert!(names("zzz").is_empty());
}
