use super::*;
use crate::model::Lesson;

impl CourseApp {
    /// Lecciones que pasan la búsqueda y el filtro de etiqueta, por número.
    pub fn visible_lessons(&self) -> Vec<&Lesson> {
        let query = self.search.trim();
        self.engine
            .course()
            .sorted_lessons()
            .into_iter()
            .filter(|l| self.tag_filter.as_deref().is_none_or(|tag| l.has_tag(tag)))
            .filter(|l| query.is_empty() || l.matches_query(query))
            .collect()
    }

    pub fn all_tags(&self) -> Vec<String> {
        self.engine.course().tags()
    }

    pub fn is_expanded(&self, lesson_id: &str) -> bool {
        self.expanded.contains(lesson_id)
    }

    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.engine.course().lesson(lesson_id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;

    #[test]
    fn search_matches_keywords_case_insensitively() {
        let mut app = app();
        app.search = "SINI".into();
        let ids: Vec<&str> = app.visible_lessons().iter().map(|l| l.id.as_str()).collect();
        assert!(ids.contains(&"here-there"));
        assert!(ids.len() < app.engine.course().lessons.len());
    }

    #[test]
    fn unmatched_search_is_empty() {
        let mut app = app();
        app.search = "zzzz-nothing".into();
        assert!(app.visible_lessons().is_empty());
    }

    #[test]
    fn tag_filter_narrows_and_keeps_order() {
        let mut app = app();
        let tag = app.all_tags().first().cloned().unwrap();
        app.tag_filter = Some(tag.clone());
        let lessons = app.visible_lessons();
        assert!(!lessons.is_empty());
        assert!(lessons.iter().all(|l| l.has_tag(&tag)));
        assert!(lessons.windows(2).all(|w| w[0].number < w[1].number));
    }
}
