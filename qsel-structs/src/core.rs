use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Generic knapsack wire types
serializable_struct_with_getters! {
    ItemData {
        id: Value,
        value: u32,
        weight: u32,
        payload: Option<Value>,
    }
}
serializable_struct_with_getters! {
    SolveRequest {
        items: Vec<ItemData>,
        capacity: u32,
    }
}
serializable_struct_with_getters! {
    SolutionData {
        ids: Vec<Value>,
        total_value: u64,
        total_weight: u64,
    }
}

impl SolveRequest {
    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| item.weight as u64).sum()
    }

    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|item| item.value as u64).sum()
    }
}

impl SolutionData {
    pub fn empty() -> Self {
        Self {
            ids: Vec::new(),
            total_value: 0,
            total_weight: 0,
        }
    }
}

// Quiz domain
serializable_struct_with_getters! {
    Question {
        id: String,
        text: String,
        score: u32,
        minutes: u32,
        tags: Option<Vec<String>>,
    }
}
serializable_struct_with_getters! {
    Quiz {
        id: String,
        title: String,
        questions: Vec<Question>,
    }
}
serializable_struct_with_getters! {
    QuizBank {
        quizzes: Vec<Quiz>,
    }
}

impl Quiz {
    pub fn total_score(&self) -> u64 {
        self.questions.iter().map(|q| q.score as u64).sum()
    }

    pub fn total_minutes(&self) -> u64 {
        self.questions.iter().map(|q| q.minutes as u64).sum()
    }
}

impl QuizBank {
    pub fn find_quiz(&self, quiz_id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id == quiz_id)
    }
}
