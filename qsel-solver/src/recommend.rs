use crate::{
    knapsack::{self, Item},
    limits::check_limits,
    validate::check_weights,
    SolverError,
};
use anyhow::{anyhow, Result};
use qsel_structs::{
    api::{RecommendReq, RecommendResp},
    config::SolverConfig,
    core::{Question, QuizBank},
};
use tracing::info;

/// Picks the questions of a quiz that maximize the total score within the
/// requested minutes.
///
/// A quiz without questions, or one where no question fits, gives an empty
/// recommendation rather than an error.
pub fn recommend(bank: &QuizBank, req: &RecommendReq, config: &SolverConfig) -> Result<RecommendResp> {
    let quiz = bank
        .find_quiz(&req.quiz_id)
        .ok_or_else(|| anyhow!("Quiz '{}' does not exist", req.quiz_id))?;

    check_limits(quiz.questions.len(), req.minutes, config)?;
    let errors = check_weights(
        "questions",
        quiz.questions.iter().map(|q| &q.minutes),
        "minutes",
        config,
    );
    if !errors.is_empty() {
        return Err(SolverError::InvalidItems { errors }.into());
    }

    let items: Vec<Item<&str, &Question>> = quiz
        .questions
        .iter()
        .map(|q| Item::new(q.id.as_str(), q.score, q.minutes, q))
        .collect();
    let solution = knapsack::solve(&items, req.minutes);

    info!(
        quiz_id = %quiz.id,
        available_minutes = req.minutes,
        num_questions = quiz.questions.len(),
        num_selected = solution.selected.len(),
        total_score = solution.total_value,
        "recommendation computed"
    );

    Ok(RecommendResp {
        quiz_id: quiz.id.clone(),
        questions: solution
            .selected
            .iter()
            .map(|item| item.payload.clone())
            .collect(),
        total_score: solution.total_value,
        total_minutes: solution.total_weight,
        available_minutes: req.minutes,
    })
}
