pub const STORAGE_KEY: &str = "malay_core_basics_v1";
pub const RECORD_VERSION: &str = "1.0.0";

/// Dónde empieza un día para la racha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DayBoundary {
    #[default]
    Utc,
    Local,
}

/// Reglas de puntuación y ritmo del motor.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub storage_key: String,
    pub quiz_length: usize,
    pub lesson_done_xp: i32,
    pub game_correct_xp: i32,
    pub practice_correct_xp: i32,
    /// Segundos entre ticks de la cuenta atrás del juego.
    pub tick_period: f64,
    /// Pausa tras un acierto en el juego antes de la siguiente pregunta.
    pub game_feedback_pause: f64,
    pub day_boundary: DayBoundary,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            quiz_length: 10,
            lesson_done_xp: 10,
            game_correct_xp: 2,
            practice_correct_xp: 3,
            tick_period: 1.0,
            game_feedback_pause: 0.26,
            day_boundary: DayBoundary::Utc,
        }
    }
}
