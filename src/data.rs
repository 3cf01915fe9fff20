// src/data.rs

use crate::error::CatalogError;
use crate::model::{Course, Lesson, Phrase, VocabularyPair};
use std::collections::HashSet;

/// Carga el catálogo de lecciones desde el YAML embebido
pub fn read_course_embedded() -> Result<Course, CatalogError> {
    let file_content = include_str!("data/lessons.yaml");
    parse_course(file_content)
}

/// Parsea y valida un catálogo en YAML.
pub fn parse_course(yaml: &str) -> Result<Course, CatalogError> {
    let mut course: Course = serde_yaml::from_str(yaml)?;

    let mut seen_ids = HashSet::new();
    for lesson in &mut course.lessons {
        if lesson.id.trim().is_empty() || lesson.title.trim().is_empty() {
            return Err(CatalogError::EmptyLesson(lesson.id.clone()));
        }
        if !seen_ids.insert(lesson.id.clone()) {
            return Err(CatalogError::DuplicateLesson(lesson.id.clone()));
        }
        // Frases a medias no sirven ni para preguntar ni como distractor
        lesson.keywords.retain(is_complete);
        lesson.examples.retain(is_complete);
    }

    if phrase_pairs(&course).is_empty() {
        return Err(CatalogError::EmptyPool);
    }
    Ok(course)
}

fn is_complete(p: &Phrase) -> bool {
    !p.source.trim().is_empty() && !p.target.trim().is_empty()
}

/// Banco de pares para quiz y juego: palabras clave y luego ejemplos, lección a
/// lección, sin repetidos (clave `(source, target)` normalizada). Conserva el orden.
pub fn phrase_pairs(course: &Course) -> Vec<VocabularyPair> {
    let mut seen = HashSet::new();
    course
        .lessons
        .iter()
        .flat_map(|lesson| {
            lesson
                .keywords
                .iter()
                .chain(&lesson.examples)
                .map(move |p| VocabularyPair {
                    source: p.source.clone(),
                    target: p.target.clone(),
                    lesson_id: lesson.id.clone(),
                })
        })
        .filter(|p| {
            let key = (p.source.trim().to_lowercase(), p.target.trim().to_lowercase());
            seen.insert(key)
        })
        .collect()
}

/// Lado `target` de todas las palabras clave (distractores de la práctica).
pub fn keyword_targets(course: &Course) -> Vec<String> {
    course
        .lessons
        .iter()
        .flat_map(|l| &l.keywords)
        .map(|k| k.target.clone())
        .collect()
}

impl Course {
    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub fn lesson_ids(&self) -> HashSet<String> {
        self.lessons.iter().map(|l| l.id.clone()).collect()
    }

    /// Lecciones ordenadas por número.
    pub fn sorted_lessons(&self) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self.lessons.iter().collect();
        lessons.sort_by_key(|l| l.number);
        lessons
    }

    /// Siguiente lección por número; tras la última vuelve a la primera.
    pub fn next_lesson(&self, id: &str) -> Option<&Lesson> {
        let sorted = self.sorted_lessons();
        match sorted.iter().position(|l| l.id == id) {
            Some(idx) => sorted.get(idx + 1).or(sorted.first()).copied(),
            None => sorted.first().copied(),
        }
    }

    /// Etiquetas distintas, ordenadas alfabéticamente
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .lessons
            .iter()
            .flat_map(|l| l.tags.iter().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        tags.sort();
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
version: "1.0.0"
title: "Test"
source_language: "English"
target_language: "Malay"
lessons:
  - id: "b"
    number: 2
    title: "Second"
    tags: ["daily"]
    keywords:
      - { source: "here", target: "sini" }
    examples: []
  - id: "a"
    number: 1
    title: "First"
    tags: ["starter", "daily"]
    keywords:
      - { source: "Here", target: "Sini " }
      - { source: "there", target: "sana" }
      - { source: "", target: "kosong" }
    examples:
      - { source: "I'm here.", target: "Saya di sini." }
"#;

    #[test]
    fn embedded_catalog_parses() {
        let course = read_course_embedded().expect("embedded catalog ok");
        assert_eq!(course.lessons.len(), 18);
        assert_eq!(course.target_language, "Malay");
        assert!(course.lesson("here-there").is_some());
        assert!(!phrase_pairs(&course).is_empty());
    }

    #[test]
    fn pairs_are_deduplicated_case_insensitively_in_order() {
        let course = parse_course(SMALL).unwrap();
        let pairs = phrase_pairs(&course);
        let sources: Vec<&str> = pairs.iter().map(|p| p.source.as_str()).collect();
        // "Here/Sini " de la lección `a` repite a "here/sini" de `b`
        assert_eq!(sources, ["here", "there", "I'm here."]);
        assert_eq!(pairs[0].lesson_id, "b");
    }

    #[test]
    fn incomplete_phrases_are_dropped() {
        let course = parse_course(SMALL).unwrap();
        let a = course.lesson("a").unwrap();
        assert_eq!(a.keywords.len(), 2);
        assert!(keyword_targets(&course).iter().all(|t| t != "kosong"));
    }

    #[test]
    fn duplicate_lesson_ids_are_rejected() {
        let yaml = SMALL.replace("id: \"b\"", "id: \"a\"");
        assert!(matches!(parse_course(&yaml), Err(CatalogError::DuplicateLesson(id)) if id == "a"));
    }

    #[test]
    fn catalog_without_pairs_is_rejected() {
        let yaml = r#"
version: "1"
title: "Empty"
source_language: "English"
target_language: "Malay"
lessons:
  - { id: "x", number: 1, title: "Nothing" }
"#;
        assert!(matches!(parse_course(yaml), Err(CatalogError::EmptyPool)));
    }

    #[test]
    fn next_lesson_wraps_by_number() {
        let course = parse_course(SMALL).unwrap();
        assert_eq!(course.next_lesson("a").unwrap().id, "b");
        assert_eq!(course.next_lesson("b").unwrap().id, "a");
        assert_eq!(course.next_lesson("missing").unwrap().id, "a");
        assert_eq!(course.tags(), ["daily", "starter"]);
    }
}
