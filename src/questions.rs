//! Generación de preguntas para quiz, minijuego y práctica.
//!
//! Todas las funciones reciben el RNG desde fuera para poder fijar la semilla
//! en los tests.

use crate::data::phrase_pairs;
use crate::error::CatalogError;
use crate::model::{Course, Direction, Lesson, McqQuestion, Question, QuizMode, TypingQuestion, VocabularyPair};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

pub const MCQ_OPTIONS: usize = 4;
/// Probabilidad de que una pregunta escrita pida el idioma estudiado.
const TYPING_ASK_TARGET: f64 = 0.7;

/// Normaliza una respuesta: minúsculas y sin espacios en los extremos.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

pub fn answers_match(given: &str, expected: &str) -> bool {
    normalize(given) == normalize(expected)
}

/// Hasta `count` distractores distintos del pool, ninguno igual a `correct`
/// (sin distinguir mayúsculas). Saca sin reemplazo; si el pool se agota
/// devuelve menos.
pub fn build_distractors<R, S>(correct: &str, pool: &[S], count: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let correct = normalize(correct);
    let mut seen = HashSet::new();
    let mut candidates: Vec<&str> = pool
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| {
            let key = normalize(s);
            key != correct && seen.insert(key)
        })
        .collect();

    let mut out = Vec::with_capacity(count.min(candidates.len()));
    while out.len() < count && !candidates.is_empty() {
        let idx = rng.gen_range(0..candidates.len());
        out.push(candidates.swap_remove(idx).to_string());
    }
    out
}

/// Opciones barajadas (Fisher–Yates): la correcta más los distractores.
fn shuffled_options<R: Rng + ?Sized>(correct: &str, distractors: Vec<String>, rng: &mut R) -> Vec<String> {
    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct.to_string());
    options.extend(distractors);
    options.shuffle(rng);
    options
}

pub struct QuestionGenerator {
    pairs: Vec<VocabularyPair>,
    source_language: String,
    target_language: String,
}

impl QuestionGenerator {
    /// El pool no puede estar vacío: es la precondición de todo lo demás.
    pub fn new(
        pairs: Vec<VocabularyPair>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        if pairs.is_empty() {
            return Err(CatalogError::EmptyPool);
        }
        Ok(Self {
            pairs,
            source_language: source_language.into(),
            target_language: target_language.into(),
        })
    }

    pub fn from_course(course: &Course) -> Result<Self, CatalogError> {
        Self::new(phrase_pairs(course), &course.source_language, &course.target_language)
    }

    pub fn pairs(&self) -> &[VocabularyPair] {
        &self.pairs
    }

    pub fn pick_random_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> &VocabularyPair {
        &self.pairs[rng.gen_range(0..self.pairs.len())]
    }

    /// Respuestas posibles en una dirección: el lado respuesta de cada par.
    fn answer_pool(&self, direction: Direction) -> Vec<&str> {
        self.pairs.iter().map(|p| p.answer_side(direction)).collect()
    }

    fn mcq_prompt(&self, pair: &VocabularyPair, direction: Direction) -> String {
        match direction {
            Direction::SourceToTarget => {
                format!("What is “{}” in {}?", pair.source, self.target_language)
            }
            Direction::TargetToSource => format!("What does “{}” mean?", pair.target),
        }
    }

    pub fn build_mcq_question<R: Rng + ?Sized>(&self, direction: Direction, rng: &mut R) -> McqQuestion {
        let pair = self.pick_random_pair(rng);
        self.build_mcq_for_pair(pair, direction, rng)
    }

    /// MCQ para un par concreto con distractores del pool entero.
    pub fn build_mcq_for_pair<R: Rng + ?Sized>(
        &self,
        pair: &VocabularyPair,
        direction: Direction,
        rng: &mut R,
    ) -> McqQuestion {
        let correct = pair.answer_side(direction);
        let distractors = build_distractors(correct, &self.answer_pool(direction), MCQ_OPTIONS - 1, rng);
        McqQuestion {
            direction,
            prompt: self.mcq_prompt(pair, direction),
            correct_answer: correct.to_string(),
            options: shuffled_options(correct, distractors, rng),
        }
    }

    pub fn build_typing_question<R: Rng + ?Sized>(&self, rng: &mut R) -> TypingQuestion {
        let pair = self.pick_random_pair(rng);
        let direction = if rng.gen_bool(TYPING_ASK_TARGET) {
            Direction::SourceToTarget
        } else {
            Direction::TargetToSource
        };
        let language = match direction {
            Direction::SourceToTarget => &self.target_language,
            Direction::TargetToSource => &self.source_language,
        };
        TypingQuestion {
            direction,
            prompt: format!("Type the {language} for: “{}”", pair.prompt_side(direction)),
            correct_answer: pair.answer_side(direction).to_string(),
        }
    }

    pub fn build_question<R: Rng + ?Sized>(&self, mode: QuizMode, rng: &mut R) -> Question {
        let direction = match mode {
            QuizMode::Typing => return Question::Typing(self.build_typing_question(rng)),
            QuizMode::SourceToTarget => Direction::SourceToTarget,
            QuizMode::TargetToSource => Direction::TargetToSource,
            QuizMode::Mixed => {
                if rng.gen_bool(0.5) {
                    Direction::SourceToTarget
                } else {
                    Direction::TargetToSource
                }
            }
        };
        Question::Mcq(self.build_mcq_question(direction, rng))
    }

    /// `length` preguntas independientes; un par puede repetirse dentro del set.
    pub fn build_quiz_set<R: Rng + ?Sized>(&self, mode: QuizMode, length: usize, rng: &mut R) -> Vec<Question> {
        (0..length).map(|_| self.build_question(mode, rng)).collect()
    }

    /// Pregunta del Speed Match: frase en el idioma estudiado, opciones en el del alumno.
    pub fn build_game_question<R: Rng + ?Sized>(&self, rng: &mut R) -> McqQuestion {
        self.build_mcq_question(Direction::TargetToSource, rng)
    }

    /// Pregunta de práctica de una lección: la correcta sale de sus palabras
    /// clave y los distractores de `keyword_pool`. `None` si no tiene palabras clave.
    pub fn build_practice_question<R, S>(&self, lesson: &Lesson, keyword_pool: &[S], rng: &mut R) -> Option<McqQuestion>
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        let keyword = lesson.keywords.choose(rng)?;
        let pair = VocabularyPair {
            source: keyword.source.clone(),
            target: keyword.target.clone(),
            lesson_id: lesson.id.clone(),
        };
        let direction = Direction::SourceToTarget;
        let distractors = build_distractors(&pair.target, keyword_pool, MCQ_OPTIONS - 1, rng);
        Some(McqQuestion {
            direction,
            prompt: self.mcq_prompt(&pair, direction),
            correct_answer: pair.target.clone(),
            options: shuffled_options(&pair.target, distractors, rng),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Phrase;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pair(source: &str, target: &str) -> VocabularyPair {
        VocabularyPair {
            source: source.into(),
            target: target.into(),
            lesson_id: "here-there".into(),
        }
    }

    fn small_pool() -> Vec<VocabularyPair> {
        vec![
            pair("here", "sini"),
            pair("there", "sana"),
            pair("where", "mana"),
            pair("at", "di"),
        ]
    }

    fn generator() -> QuestionGenerator {
        QuestionGenerator::new(small_pool(), "English", "Malay").unwrap()
    }

    fn count_matches(options: &[String], answer: &str) -> usize {
        options.iter().filter(|o| answers_match(o, answer)).count()
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Saya Di Sini.  "), "saya di sini.");
        assert!(answers_match(" SINI", "sini "));
        assert!(!answers_match("sini", "sana"));
        assert!(!answers_match("si ni", "sini"));
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(
            QuestionGenerator::new(Vec::new(), "English", "Malay"),
            Err(CatalogError::EmptyPool)
        ));
    }

    #[test]
    fn distractors_exclude_correct_and_duplicates() {
        let pool = ["Sini", "sana", "SANA", "mana", " sini ", "di", "mana"];
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = build_distractors("sini", &pool, 3, &mut rng);
            assert_eq!(out.len(), 3);
            assert!(out.iter().all(|d| !answers_match(d, "sini")));
            let unique: HashSet<String> = out.iter().map(|d| normalize(d)).collect();
            assert_eq!(unique.len(), out.len());
        }
    }

    #[test]
    fn distractors_degrade_when_pool_runs_out() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = build_distractors("sini", &["sini", "sana", "Sana"], 3, &mut rng);
        assert_eq!(out, ["sana"]);
        let none = build_distractors("sini", &["SINI"], 3, &mut rng);
        assert!(none.is_empty());
        let zero = build_distractors("sini", &["sana"], 0, &mut rng);
        assert!(zero.is_empty());
    }

    #[test]
    fn distractor_draw_reaches_every_candidate() {
        let pool = ["a", "b", "c", "d", "e"];
        let mut seen = HashSet::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            seen.extend(build_distractors("x", &pool, 1, &mut rng));
        }
        assert_eq!(seen.len(), pool.len());
    }

    #[test]
    fn mcq_for_here_offers_sini_once_with_three_other_words() {
        let generator = generator();
        let here = pair("here", "sini");
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = generator.build_mcq_for_pair(&here, Direction::SourceToTarget, &mut rng);
            assert_eq!(q.correct_answer, "sini");
            assert_eq!(q.options.len(), 4);
            assert_eq!(count_matches(&q.options, "sini"), 1);
            let others: HashSet<&str> = q.options.iter().map(String::as_str).filter(|o| *o != "sini").collect();
            assert_eq!(others, HashSet::from(["sana", "mana", "di"]));
            assert_eq!(q.prompt, "What is “here” in Malay?");
        }
    }

    #[test]
    fn mcq_always_contains_correct_answer_once() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(42);
        for direction in [Direction::SourceToTarget, Direction::TargetToSource] {
            for _ in 0..100 {
                let q = generator.build_mcq_question(direction, &mut rng);
                assert_eq!(q.options.len(), MCQ_OPTIONS);
                assert_eq!(count_matches(&q.options, &q.correct_answer), 1);
            }
        }
    }

    #[test]
    fn mcq_shrinks_with_a_tiny_pool() {
        let generator = QuestionGenerator::new(vec![pair("here", "sini"), pair("there", "sana")], "English", "Malay").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let q = generator.build_mcq_question(Direction::TargetToSource, &mut rng);
        assert_eq!(q.options.len(), 2);
        assert_eq!(count_matches(&q.options, &q.correct_answer), 1);
    }

    #[test]
    fn typing_asks_mostly_for_the_target_language() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(11);
        let total = 2000;
        let to_target = (0..total)
            .map(|_| generator.build_typing_question(&mut rng))
            .filter(|q| q.direction == Direction::SourceToTarget)
            .count();
        let ratio = to_target as f64 / total as f64;
        assert!((0.65..0.75).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn typing_prompt_names_the_answer_language() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let q = generator.build_typing_question(&mut rng);
            match q.direction {
                Direction::SourceToTarget => assert!(q.prompt.starts_with("Type the Malay for")),
                Direction::TargetToSource => assert!(q.prompt.starts_with("Type the English for")),
            }
        }
    }

    #[test]
    fn quiz_set_has_exact_length_and_matching_kinds() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(9);
        let typing = generator.build_quiz_set(QuizMode::Typing, 10, &mut rng);
        assert_eq!(typing.len(), 10);
        assert!(typing.iter().all(|q| matches!(q, Question::Typing(_))));

        let fixed = generator.build_quiz_set(QuizMode::TargetToSource, 10, &mut rng);
        assert!(fixed.iter().all(|q| matches!(q, Question::Mcq(m) if m.direction == Direction::TargetToSource)));

        let mixed = generator.build_quiz_set(QuizMode::Mixed, 200, &mut rng);
        let forward = mixed
            .iter()
            .filter(|q| matches!(q, Question::Mcq(m) if m.direction == Direction::SourceToTarget))
            .count();
        assert!(forward > 60 && forward < 140, "forward {forward}");
    }

    #[test]
    fn game_question_asks_meaning_of_target_phrase() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(2);
        let q = generator.build_game_question(&mut rng);
        assert_eq!(q.direction, Direction::TargetToSource);
        assert!(q.prompt.starts_with("What does"));
        assert_eq!(q.options.len(), 4);
    }

    #[test]
    fn practice_draws_from_lesson_keywords() {
        let generator = generator();
        let lesson = Lesson {
            id: "liking".into(),
            number: 2,
            emoji: None,
            title: "Liking".into(),
            tags: vec![],
            keywords: vec![Phrase { source: "like".into(), target: "suka".into() }],
            examples: vec![],
            hint: None,
        };
        let pool = ["suka", "sini", "sana", "mana", "di"];
        let mut rng = StdRng::seed_from_u64(4);
        let q = generator.build_practice_question(&lesson, &pool, &mut rng).unwrap();
        assert_eq!(q.correct_answer, "suka");
        assert_eq!(q.options.len(), 4);
        assert_eq!(count_matches(&q.options, "suka"), 1);

        let empty = Lesson { keywords: vec![], ..lesson };
        assert!(generator.build_practice_question(&empty, &pool, &mut rng).is_none());
    }
}
