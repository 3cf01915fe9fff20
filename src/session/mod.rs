//! Sesiones efímeras (quiz, Speed Match y práctica) y sus temporizadores.

pub mod game;
pub mod practice;
pub mod quiz;
pub mod timer;

pub use game::{GameOverReason, GamePhase, GameSession};
pub use practice::PracticeRound;
pub use quiz::{QuizPhase, QuizSession};
pub use timer::{Scheduler, SessionId, TimerKind};

/// Resultado de contestar una pregunta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub picked: String,
    pub expected: String,
}
