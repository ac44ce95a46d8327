use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    #[serde(default)]
    pub id: i64, // Assigned by the repository on create
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    #[serde(default)]
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub answer_id: i64, // Zero until resolved against `choices`
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    #[serde(default)]
    pub id: i64,
    pub text: String,
}

impl Quiz {
    pub fn new(title: &str, questions: Vec<Question>) -> Self {
        Quiz {
            id: 0,
            title: title.to_string(),
            questions,
        }
    }

    /// Points every question's `answer_id` at the choice whose text equals its
    /// answer. Matching is exact and the last matching choice wins; questions
    /// without a match keep their current id.
    pub fn resolve_answer_ids(&mut self) {
        for question in &mut self.questions {
            for choice in &question.choices {
                if choice.text == question.answer {
                    question.answer_id = choice.id;
                }
            }
        }
    }
}

impl Question {
    pub fn new(question: &str, answer: &str, choices: Vec<Choice>) -> Self {
        Question {
            question: question.to_string(),
            answer: answer.to_string(),
            answer_id: 0,
            choices,
        }
    }
}

impl Choice {
    pub fn new(id: i64, text: &str) -> Self {
        Choice {
            id,
            text: text.to_string(),
        }
    }
}
