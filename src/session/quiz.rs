use super::AnswerOutcome;
use crate::model::{Question, QuizMode};
use crate::questions::answers_match;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingAnswer,
    /// Respondida; se espera a `next()` para avanzar.
    Feedback(AnswerOutcome),
    Finished,
}

/// Quiz de longitud fija. Un acierto suma 1; fallar o saltar suma 0 y no
/// termina la sesión.
#[derive(Debug, Clone)]
pub struct QuizSession {
    mode: QuizMode,
    questions: Vec<Question>,
    index: usize,
    score: u32,
    phase: QuizPhase,
}

impl QuizSession {
    pub fn new(mode: QuizMode, questions: Vec<Question>) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::AwaitingAnswer
        };
        Self {
            mode,
            questions,
            index: 0,
            score: 0,
            phase,
        }
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Índice 0-based de la pregunta actual.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    pub fn current(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Finished => None,
            _ => self.questions.get(self.index),
        }
    }

    /// Corrige la respuesta. Una segunda respuesta a la misma pregunta se ignora.
    pub fn answer(&mut self, value: &str) -> Option<AnswerOutcome> {
        if self.phase != QuizPhase::AwaitingAnswer {
            return None;
        }
        let question = self.questions.get(self.index)?;
        let expected = question.correct_answer().to_string();
        let correct = answers_match(value, &expected);
        if correct {
            self.score += 1;
        }
        let outcome = AnswerOutcome {
            correct,
            picked: value.to_string(),
            expected,
        };
        self.phase = QuizPhase::Feedback(outcome.clone());
        Some(outcome)
    }

    /// Pasa a la siguiente pregunta. Devuelve `true` si con esto el quiz terminó.
    pub fn next(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.index += 1;
        if self.index >= self.questions.len() {
            self.phase = QuizPhase::Finished;
            true
        } else {
            self.phase = QuizPhase::AwaitingAnswer;
            false
        }
    }

    /// Saltar cuenta como fallo silencioso y avanza enseguida.
    pub fn skip(&mut self) -> bool {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Direction, TypingQuestion};

    fn typing(answer: &str) -> Question {
        Question::Typing(TypingQuestion {
            direction: Direction::SourceToTarget,
            prompt: format!("Type: {answer}"),
            correct_answer: answer.to_string(),
        })
    }

    fn session() -> QuizSession {
        QuizSession::new(QuizMode::Typing, vec![typing("sini"), typing("sana"), typing("mana")])
    }

    #[test]
    fn correct_answers_score_and_wrong_ones_do_not_end_the_quiz() {
        let mut quiz = session();
        assert!(quiz.answer("  SINI ").unwrap().correct);
        assert!(!quiz.next());
        let wrong = quiz.answer("situ").unwrap();
        assert!(!wrong.correct);
        assert_eq!(wrong.expected, "sana");
        assert!(!quiz.next());
        assert_eq!(quiz.score(), 1);
        assert!(quiz.current().is_some());
    }

    #[test]
    fn double_answer_is_ignored() {
        let mut quiz = session();
        quiz.answer("sini");
        assert_eq!(quiz.answer("sini"), None);
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn skipping_scores_zero_and_advances() {
        let mut quiz = session();
        assert!(!quiz.skip());
        assert_eq!(quiz.index(), 1);
        assert_eq!(quiz.phase(), &QuizPhase::AwaitingAnswer);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn finishes_after_fixed_length() {
        let mut quiz = session();
        assert!(!quiz.skip());
        assert!(!quiz.skip());
        assert!(quiz.skip(), "third advance finishes");
        assert!(quiz.is_finished());
        assert!(quiz.current().is_none());
        assert!(!quiz.next(), "finishing is reported once");
        assert_eq!(quiz.answer("mana"), None);
    }

    #[test]
    fn empty_quiz_starts_finished() {
        let quiz = QuizSession::new(QuizMode::Mixed, Vec::new());
        assert!(quiz.is_empty());
        assert!(quiz.is_finished());
        assert_eq!(quiz.mode(), QuizMode::Mixed);
        assert!(!session().is_empty());
    }
}
