use serde::{Deserialize, Serialize};

/// Frase tal como aparece en el catálogo (palabra clave o ejemplo).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub source: String, // idioma del alumno
    pub target: String, // idioma que se aprende
}

/// Par de vocabulario usado por el quiz y el minijuego.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabularyPair {
    pub source: String,
    pub target: String,
    pub lesson_id: String,
}

impl VocabularyPair {
    /// Lado que se muestra como enunciado según la dirección.
    pub fn prompt_side(&self, direction: Direction) -> &str {
        match direction {
            Direction::SourceToTarget => &self.source,
            Direction::TargetToSource => &self.target,
        }
    }

    /// Lado que el alumno debe contestar.
    pub fn answer_side(&self, direction: Direction) -> &str {
        match direction {
            Direction::SourceToTarget => &self.target,
            Direction::TargetToSource => &self.source,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Lesson {
    pub id: String,
    pub number: u32,
    #[serde(default)]
    pub emoji: Option<String>,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<Phrase>,
    #[serde(default)]
    pub examples: Vec<Phrase>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl Lesson {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Busca en título, palabras clave y ejemplos (sin distinguir mayúsculas).
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let haystack = std::iter::once(self.title.clone())
            .chain(
                self.keywords
                    .iter()
                    .chain(&self.examples)
                    .map(|p| format!("{} {}", p.target, p.source)),
            )
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        haystack.contains(&query)
    }
}

/// Catálogo completo tal como viene del YAML embebido.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Course {
    pub version: String,
    pub title: String,
    pub source_language: String,
    pub target_language: String,
    pub lessons: Vec<Lesson>,
}

/// Qué lado del par es el enunciado y cuál la respuesta.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Enunciado en el idioma del alumno, respuesta en el idioma estudiado.
    SourceToTarget,
    /// Enunciado en el idioma estudiado, respuesta en el del alumno.
    TargetToSource,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum QuizMode {
    #[default]
    Mixed,
    SourceToTarget,
    TargetToSource,
    Typing,
}

impl QuizMode {
    pub const ALL: [QuizMode; 4] = [
        QuizMode::Mixed,
        QuizMode::SourceToTarget,
        QuizMode::TargetToSource,
        QuizMode::Typing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuizMode::Mixed => "Mixed",
            QuizMode::SourceToTarget => "English → Malay",
            QuizMode::TargetToSource => "Malay → English",
            QuizMode::Typing => "Typing",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn seconds_per_question(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Normal => 7,
            Difficulty::Hard => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (10s)",
            Difficulty::Normal => "Normal (7s)",
            Difficulty::Hard => "Hard (5s)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McqQuestion {
    pub direction: Direction,
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingQuestion {
    pub direction: Direction,
    pub prompt: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Mcq(McqQuestion),
    Typing(TypingQuestion),
}

impl Question {
    pub fn prompt(&self) -> &str {
        match self {
            Question::Mcq(q) => &q.prompt,
            Question::Typing(q) => &q.prompt,
        }
    }

    pub fn correct_answer(&self) -> &str {
        match self {
            Question::Mcq(q) => &q.correct_answer,
            Question::Typing(q) => &q.correct_answer,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            Question::Mcq(q) => Some(&q.options),
            Question::Typing(_) => None,
        }
    }
}

/// Vistas de la interfaz.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Lessons,
    Quiz,
    Game,
    Settings,
}

impl View {
    /// Orden de las pestañas para los botones anterior/siguiente.
    pub const ORDER: [View; 5] = [View::Home, View::Lessons, View::Quiz, View::Game, View::Settings];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "🏠 Home",
            View::Lessons => "📚 Lessons",
            View::Quiz => "🧠 Quiz",
            View::Game => "🎮 Game",
            View::Settings => "⚙ Settings",
        }
    }

    /// Pestaña vecina, dando la vuelta en los extremos.
    pub fn step(self, delta: isize) -> View {
        let len = Self::ORDER.len() as isize;
        let idx = Self::ORDER.iter().position(|v| *v == self).unwrap_or(0) as isize;
        Self::ORDER[(idx + delta).rem_euclid(len) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson() -> Lesson {
        Lesson {
            id: "here-there".into(),
            number: 1,
            emoji: None,
            title: "Here & There".into(),
            tags: vec!["starter".into()],
            keywords: vec![Phrase { source: "here".into(), target: "sini".into() }],
            examples: vec![Phrase { source: "Where are you?".into(), target: "Di mana awak?".into() }],
            hint: None,
        }
    }

    #[test]
    fn lesson_query_searches_title_keywords_and_examples() {
        let l = lesson();
        assert!(l.matches_query("  "));
        assert!(l.matches_query("THERE"));
        assert!(l.matches_query("sini"));
        assert!(l.matches_query("mana awak"));
        assert!(!l.matches_query("makan"));
    }

    #[test]
    fn only_choice_questions_have_options() {
        let mcq = Question::Mcq(McqQuestion {
            direction: Direction::SourceToTarget,
            prompt: "here".into(),
            options: vec!["sini".into(), "sana".into()],
            correct_answer: "sini".into(),
        });
        let typing = Question::Typing(TypingQuestion {
            direction: Direction::TargetToSource,
            prompt: "sini".into(),
            correct_answer: "here".into(),
        });
        assert_eq!(mcq.options().map(<[String]>::len), Some(2));
        assert_eq!(typing.options(), None);
    }

    #[test]
    fn view_step_wraps_around() {
        assert_eq!(View::Home.step(-1), View::Settings);
        assert_eq!(View::Settings.step(1), View::Home);
        assert_eq!(View::Lessons.step(1), View::Quiz);
    }

    #[test]
    fn pair_sides_follow_direction() {
        let p = VocabularyPair { source: "here".into(), target: "sini".into(), lesson_id: "x".into() };
        assert_eq!(p.prompt_side(Direction::SourceToTarget), "here");
        assert_eq!(p.answer_side(Direction::SourceToTarget), "sini");
        assert_eq!(p.answer_side(Direction::TargetToSource), "here");
    }
}
