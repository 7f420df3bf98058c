use qsel_structs::{
    api::RecommendResp,
    config::SolverConfig,
    core::{ItemData, Question, Quiz, QuizBank, SolveRequest},
};
use qsel_utils::{dejsonify, jsonify};
use serde_json::json;

fn question(id: &str, score: u32, minutes: u32) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Question {}", id),
        score,
        minutes,
        tags: None,
    }
}

#[test]
fn test_item_data_payload_defaults_to_none() {
    let item: ItemData = dejsonify(r#"{"id": 1, "value": 10, "weight": 3}"#).unwrap();
    assert_eq!(item.id, json!(1));
    assert_eq!(item.payload(), None);
    assert_eq!(jsonify(&item).unwrap(), r#"{"id":1,"value":10,"weight":3}"#);
}

#[test]
fn test_solve_request_totals() {
    let request: SolveRequest = dejsonify(
        r#"{"capacity": 13, "items": [
            {"id": 1, "value": 10, "weight": 3},
            {"id": 2, "value": 15, "weight": 5}
        ]}"#,
    )
    .unwrap();
    assert_eq!(request.total_weight(), 8);
    assert_eq!(request.total_value(), 25);
}

#[test]
fn test_quiz_bank_lookup() {
    let bank = QuizBank {
        quizzes: vec![Quiz {
            id: "rust-101".to_string(),
            title: "Rust basics".to_string(),
            questions: vec![question("q1", 5, 2), question("q2", 8, 4)],
        }],
    };
    let quiz = bank.find_quiz("rust-101").unwrap();
    assert_eq!(quiz.total_score(), 13);
    assert_eq!(quiz.total_minutes(), 6);
    assert!(bank.find_quiz("missing").is_none());
}

#[test]
fn test_question_tags_getter() {
    let mut q = question("q1", 5, 2);
    assert!(q.tags().is_none());
    q.tags = Some(vec!["ownership".to_string()]);
    assert_eq!(q.tags().map(|t| t.len()), Some(1));
}

#[test]
fn test_recommend_resp_question_ids() {
    let resp = RecommendResp {
        quiz_id: "rust-101".to_string(),
        questions: vec![question("q1", 5, 2), question("q3", 1, 1)],
        total_score: 6,
        total_minutes: 3,
        available_minutes: 10,
    };
    assert_eq!(resp.question_ids(), vec!["q1", "q3"]);
}

#[test]
fn test_solver_config_partial_json() {
    let config: SolverConfig = dejsonify(r#"{"allow_zero_weight": true}"#).unwrap();
    assert!(config.allow_zero_weight);
    assert_eq!(config.max_capacity, SolverConfig::default().max_capacity);
    assert_eq!(config.max_table_cells, SolverConfig::default().max_table_cells);
}

#[test]
fn test_table_cells() {
    assert_eq!(SolverConfig::table_cells(4, 13), 56);
    assert_eq!(SolverConfig::table_cells(0, 13), 0);
    assert_eq!(SolverConfig::table_cells(usize::MAX, u32::MAX), u64::MAX);
}
