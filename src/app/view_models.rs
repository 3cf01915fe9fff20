use super::*;

impl CourseApp {
    pub fn lesson_cards(&self) -> Vec<LessonCard> {
        self.visible_lessons()
            .into_iter()
            .map(|l| LessonCard {
                id: l.id.clone(),
                number: l.number,
                emoji: l.emoji.clone().unwrap_or_else(|| "💗".to_string()),
                title: l.title.clone(),
                tags: l.tags.clone(),
                done: self.engine.is_lesson_done(&l.id),
            })
            .collect()
    }

    pub fn stats_info(&self) -> StatsInfo {
        self.engine.stats().into()
    }

    /// `Some` sólo con un quiz terminado.
    pub fn quiz_summary(&self) -> Option<QuizSummary> {
        let quiz = self.engine.quiz().filter(|q| q.is_finished())?;
        Some(QuizSummary {
            score: quiz.score(),
            length: quiz.len(),
            best: self.engine.progress().quiz.best_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;

    #[test]
    fn cards_reflect_completion() {
        let mut app = app();
        app.mark_lesson_done("liking");
        let cards = app.lesson_cards();
        assert_eq!(cards.len(), 18);
        let liking = cards.iter().find(|c| c.id == "liking").unwrap();
        assert!(liking.done);
        assert!(liking.label().ends_with("✅"));
        assert!(cards.iter().filter(|c| c.done).count() == 1);
        assert_eq!(app.stats_info().learned, 1);
    }

    #[test]
    fn summary_appears_once_quiz_ends() {
        let mut app = app();
        app.start_quiz();
        assert!(app.quiz_summary().is_none());
        for _ in 0..10 {
            app.skip_question();
        }
        let summary = app.quiz_summary().unwrap();
        assert_eq!(summary.score, 0);
        assert_eq!(summary.length, 10);
        assert_eq!(summary.best, Some(0));
    }
}
