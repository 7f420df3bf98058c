use crate::{core::*, serializable_struct_with_getters};
use serde::{Deserialize, Serialize};

serializable_struct_with_getters! {
    RecommendReq {
        quiz_id: String,
        minutes: u32,
    }
}

serializable_struct_with_getters! {
    RecommendResp {
        quiz_id: String,
        questions: Vec<Question>,
        total_score: u64,
        total_minutes: u64,
        available_minutes: u32,
    }
}

impl RecommendResp {
    pub fn question_ids(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.id.as_str()).collect()
    }
}
