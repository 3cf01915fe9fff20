use super::AnswerOutcome;
use crate::model::McqQuestion;
use crate::questions::answers_match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    WrongAnswer,
    TimeUp,
    Stopped,
}

impl GameOverReason {
    pub fn message(self) -> &'static str {
        match self {
            GameOverReason::WrongAnswer => "⏱️ Oops! Wrong answer.",
            GameOverReason::TimeUp => "⏱️ Time’s up!",
            GameOverReason::Stopped => "Stopped.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingAnswer,
    /// Acierto mostrado; la cuenta atrás está parada hasta `next_round`.
    Feedback,
    Over(GameOverReason),
}

/// Speed Match: una vida, una cuenta atrás por pregunta.
#[derive(Debug, Clone)]
pub struct GameSession {
    seconds_per_question: u32,
    time_left: u32,
    score: u32,
    question: McqQuestion,
    phase: GamePhase,
    last_outcome: Option<AnswerOutcome>,
}

impl GameSession {
    pub fn new(seconds_per_question: u32, first: McqQuestion) -> Self {
        Self {
            seconds_per_question,
            time_left: seconds_per_question,
            score: 0,
            question: first,
            phase: GamePhase::AwaitingAnswer,
            last_outcome: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }

    pub fn question(&self) -> &McqQuestion {
        &self.question
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.phase, GamePhase::Over(_))
    }

    /// Un segundo menos. Devuelve `true` si con este tick se acabó el tiempo.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::AwaitingAnswer {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.phase = GamePhase::Over(GameOverReason::TimeUp);
            return true;
        }
        false
    }

    /// El primer fallo termina la partida; un acierto pasa a feedback.
    pub fn answer(&mut self, value: &str) -> Option<AnswerOutcome> {
        if self.phase != GamePhase::AwaitingAnswer {
            return None;
        }
        let outcome = AnswerOutcome {
            correct: answers_match(value, &self.question.correct_answer),
            picked: value.to_string(),
            expected: self.question.correct_answer.clone(),
        };
        if outcome.correct {
            self.score += 1;
            self.phase = GamePhase::Feedback;
        } else {
            self.phase = GamePhase::Over(GameOverReason::WrongAnswer);
        }
        self.last_outcome = Some(outcome.clone());
        Some(outcome)
    }

    /// Carga la siguiente pregunta con el reloj lleno.
    pub fn next_round(&mut self, question: McqQuestion) -> bool {
        if self.phase != GamePhase::Feedback {
            return false;
        }
        self.question = question;
        self.time_left = self.seconds_per_question;
        self.phase = GamePhase::AwaitingAnswer;
        self.last_outcome = None;
        true
    }

    /// Devuelve `false` si la partida ya había terminado.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = GamePhase::Over(GameOverReason::Stopped);
        true
    }
}
