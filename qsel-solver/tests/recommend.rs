use qsel_solver::{recommend::recommend, SolverError};
use qsel_structs::{
    api::RecommendReq,
    config::SolverConfig,
    core::{Question, Quiz, QuizBank},
};

fn question(id: &str, score: u32, minutes: u32) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Question {}", id),
        score,
        minutes,
        tags: None,
    }
}

fn bank() -> QuizBank {
    QuizBank {
        quizzes: vec![
            Quiz {
                id: "rust-101".to_string(),
                title: "Rust basics".to_string(),
                questions: vec![
                    question("q1", 10, 3),
                    question("q2", 15, 5),
                    question("q3", 20, 8),
                    question("q4", 25, 10),
                ],
            },
            Quiz {
                id: "empty".to_string(),
                title: "Nothing yet".to_string(),
                questions: Vec::new(),
            },
        ],
    }
}

fn req(quiz_id: &str, minutes: u32) -> RecommendReq {
    RecommendReq {
        quiz_id: quiz_id.to_string(),
        minutes,
    }
}

#[test]
fn test_recommend_best_questions() {
    let resp = recommend(&bank(), &req("rust-101", 13), &SolverConfig::default()).unwrap();
    assert_eq!(resp.question_ids(), vec!["q2", "q3"]);
    assert_eq!(resp.total_score, 35);
    assert_eq!(resp.total_minutes, 13);
    assert_eq!(resp.available_minutes, 13);
    assert_eq!(resp.questions[1], question("q3", 20, 8));
}

#[test]
fn test_empty_quiz_is_not_an_error() {
    let resp = recommend(&bank(), &req("empty", 30), &SolverConfig::default()).unwrap();
    assert!(resp.questions.is_empty());
    assert_eq!(resp.total_score, 0);
}

#[test]
fn test_too_little_time_is_not_an_error() {
    let resp = recommend(&bank(), &req("rust-101", 2), &SolverConfig::default()).unwrap();
    assert!(resp.questions.is_empty());
    assert_eq!(resp.total_minutes, 0);
}

#[test]
fn test_unknown_quiz() {
    let err = recommend(&bank(), &req("nope", 10), &SolverConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Quiz 'nope' does not exist");
}

#[test]
fn test_request_too_large() {
    let config = SolverConfig {
        max_table_cells: 20,
        ..SolverConfig::default()
    };
    let err = recommend(&bank(), &req("rust-101", 13), &config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<SolverError>(),
        Some(&SolverError::RequestTooLarge {
            num_items: 4,
            capacity: 13,
            max_table_cells: 20
        })
    );
}

#[test]
fn test_zero_minute_question_rejected_by_default() {
    let mut bank = bank();
    bank.quizzes[0].questions.push(question("q5", 1, 0));
    let err = recommend(&bank, &req("rust-101", 13), &SolverConfig::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SolverError>(),
        Some(SolverError::InvalidItems { errors }) if errors[0].field == "questions[4].minutes"
    ));

    let config = SolverConfig {
        allow_zero_weight: true,
        ..SolverConfig::default()
    };
    let resp = recommend(&bank, &req("rust-101", 13), &config).unwrap();
    assert_eq!(resp.question_ids(), vec!["q2", "q3", "q5"]);
    assert_eq!(resp.total_score, 36);
}
