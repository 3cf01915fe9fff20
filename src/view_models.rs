// src/view_models.rs

use crate::engine::Stats;

#[derive(Clone, Debug)]
pub struct LessonCard {
    pub id: String,
    pub number: u32,
    pub emoji: String,
    pub title: String,
    pub tags: Vec<String>,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct StatsInfo {
    pub xp: u32,
    pub streak: u32,
    pub learned: usize,
    pub total: usize,
    pub percent: u32,
    pub quiz_best: Option<i32>,
    pub quiz_length: usize,
    pub game_best: u32,
}

/// Resumen al terminar un quiz.
#[derive(Clone, Debug)]
pub struct QuizSummary {
    pub score: u32,
    pub length: usize,
    pub best: Option<i32>,
}

impl LessonCard {
    pub fn label(&self) -> String {
        let mark = if self.done { "✅" } else { "⬜" };
        format!("{} {}. {}  {mark}", self.emoji, self.number, self.title)
    }
}

impl From<Stats> for StatsInfo {
    fn from(s: Stats) -> Self {
        Self {
            xp: s.xp,
            streak: s.streak,
            learned: s.learned,
            total: s.total_lessons,
            percent: s.percent,
            quiz_best: s.quiz_best,
            quiz_length: s.quiz_length,
            game_best: s.game_best,
        }
    }
}

impl StatsInfo {
    /// Textos de la cabecera, en orden.
    pub fn chips(&self) -> Vec<String> {
        let best = self
            .quiz_best
            .map(|b| b.to_string())
            .unwrap_or_else(|| "—".to_string());
        vec![
            format!("🍬 {} XP", self.xp),
            format!("🔥 {} day streak", self.streak),
            format!("📚 {}/{} learned ({}%)", self.learned, self.total, self.percent),
            format!("🏆 Quiz best {best}/{}", self.quiz_length),
        ]
    }

    pub fn fraction(&self) -> f32 {
        self.percent as f32 / 100.0
    }
}

impl QuizSummary {
    pub fn percent(&self) -> u32 {
        if self.length == 0 {
            return 0;
        }
        ((self.score as f64 / self.length as f64) * 100.0).round() as u32
    }

    pub fn label(&self) -> String {
        format!("Score: {} / {} ({}%)", self.score, self.length, self.percent())
    }

    pub fn best_label(&self) -> String {
        match self.best {
            Some(b) => format!("🏆 Best: {b} / {}", self.length),
            None => format!("🏆 Best: — / {}", self.length),
        }
    }
}
