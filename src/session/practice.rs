use super::AnswerOutcome;
use crate::model::McqQuestion;
use crate::questions::answers_match;

/// Una pregunta suelta de práctica sobre una lección. Sólo admite una respuesta.
#[derive(Debug, Clone)]
pub struct PracticeRound {
    pub lesson_id: String,
    pub lesson_title: String,
    pub question: McqQuestion,
    outcome: Option<AnswerOutcome>,
}

impl PracticeRound {
    pub fn new(lesson_id: impl Into<String>, lesson_title: impl Into<String>, question: McqQuestion) -> Self {
        Self {
            lesson_id: lesson_id.into(),
            lesson_title: lesson_title.into(),
            question,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> Option<&AnswerOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_answered(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn answer(&mut self, value: &str) -> Option<AnswerOutcome> {
        if self.outcome.is_some() {
            return None;
        }
        let outcome = AnswerOutcome {
            correct: answers_match(value, &self.question.correct_answer),
            picked: value.to_string(),
            expected: self.question.correct_answer.clone(),
        };
        self.outcome = Some(outcome.clone());
        Some(outcome)
    }
}
