//! Motor de la app: une catálogo, generador de preguntas, progreso y sesiones.
//!
//! La interfaz sólo llama a los métodos públicos de `Engine` y recibe avisos a
//! través de `UiCollaborator`; el motor nunca lee estado de la interfaz.
//! Todo el tiempo entra por `tick(now)`.

use crate::config::EngineConfig;
use crate::data::keyword_targets;
use crate::error::CatalogError;
use crate::model::{Course, Difficulty, QuizMode, View};
use crate::progress::{Clock, ProgressState, ProgressStore, SettingKey, SystemClock};
use crate::questions::QuestionGenerator;
use crate::session::{AnswerOutcome, GameSession, PracticeRound, QuizSession, Scheduler, TimerKind};
use crate::sound::Tone;
use crate::storage::{KeyValueStore, default_backend};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Lo que el motor necesita de la interfaz.
pub trait UiCollaborator {
    fn on_toast(&mut self, message: &str);
    fn on_stats_changed(&mut self);
    fn on_view_requested(&mut self, view: View);
    /// Pitido de acierto o fallo; sólo llega con el sonido activado.
    fn on_feedback(&mut self, tone: Tone);
}

/// Resumen para la cabecera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub xp: u32,
    pub streak: u32,
    pub learned: usize,
    pub total_lessons: usize,
    pub percent: u32,
    pub quiz_best: Option<i32>,
    pub quiz_length: usize,
    pub game_best: u32,
}

pub struct Engine<U: UiCollaborator> {
    config: EngineConfig,
    course: Course,
    generator: QuestionGenerator,
    keyword_pool: Vec<String>,
    store: ProgressStore,
    rng: StdRng,
    ui: U,
    game_timers: Scheduler,
    now: f64,
    quiz: Option<QuizSession>,
    game: Option<GameSession>,
    practice: Option<PracticeRound>,
    last_lesson: Option<String>,
}

impl<U: UiCollaborator> Engine<U> {
    pub fn new(
        course: Course,
        backend: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
        ui: U,
        config: EngineConfig,
        rng: StdRng,
    ) -> Result<Self, CatalogError> {
        let generator = QuestionGenerator::from_course(&course)?;
        let keyword_pool = keyword_targets(&course);
        let store = ProgressStore::open(
            backend,
            clock,
            config.storage_key.clone(),
            course.lesson_ids(),
            config.lesson_done_xp,
        );
        log::info!(
            "Loaded {} lessons ({} pairs), {} XP stored",
            course.lessons.len(),
            generator.pairs().len(),
            store.state().xp
        );
        Ok(Self {
            config,
            course,
            generator,
            keyword_pool,
            store,
            rng,
            ui,
            game_timers: Scheduler::new(),
            now: 0.0,
            quiz: None,
            game: None,
            practice: None,
            last_lesson: None,
        })
    }

    /// Almacén de la plataforma, reloj del sistema y RNG con entropía.
    pub fn with_platform_defaults(course: Course, ui: U, config: EngineConfig) -> Result<Self, CatalogError> {
        let clock = Box::new(SystemClock::new(config.day_boundary));
        Self::new(course, default_backend(), clock, ui, config, StdRng::from_entropy())
    }

    // ---------- Lectura ----------

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn progress(&self) -> &ProgressState {
        self.store.state()
    }

    pub fn is_lesson_done(&self, lesson_id: &str) -> bool {
        self.store.is_lesson_done(lesson_id)
    }

    pub fn stats(&self) -> Stats {
        let state = self.store.state();
        let learned = self.store.completed_count();
        let total = self.course.lessons.len();
        let percent = if total == 0 {
            0
        } else {
            ((learned as f64 / total as f64) * 100.0).round() as u32
        };
        Stats {
            xp: state.xp,
            streak: state.streak,
            learned,
            total_lessons: total,
            percent,
            quiz_best: state.quiz.best_score,
            quiz_length: self.config.quiz_length,
            game_best: state.game_best_score,
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    pub fn practice(&self) -> Option<&PracticeRound> {
        self.practice.as_ref()
    }

    pub fn last_lesson(&self) -> Option<&str> {
        self.last_lesson.as_deref()
    }

    /// Próximo vencimiento de un temporizador, para programar el repintado.
    pub fn next_timer_due(&self) -> Option<f64> {
        self.game_timers.next_due()
    }

    // ---------- Tiempo ----------

    /// Avanza el reloj del motor y ejecuta los temporizadores vencidos.
    pub fn tick(&mut self, now: f64) {
        self.now = now;
        for fired in self.game_timers.poll(now) {
            match fired.kind {
                TimerKind::GameCountdown => {
                    let timed_out = self.game.as_mut().is_some_and(|g| g.tick());
                    if timed_out {
                        self.finish_game();
                    }
                }
                TimerKind::GameNextRound => {
                    let Some(game) = self.game.as_mut() else { continue };
                    let question = self.generator.build_game_question(&mut self.rng);
                    if game.next_round(question) {
                        self.game_timers.set_interval(
                            fired.session,
                            TimerKind::GameCountdown,
                            self.config.tick_period,
                            now,
                        );
                    }
                }
            }
        }
    }

    /// Saludo de la primera vez.
    pub fn greet(&mut self) {
        if self.store.mark_welcomed() {
            self.ui.on_toast("💗 Welcome! Tap Lessons to start.");
        }
    }

    // ---------- Quiz ----------

    pub fn start_quiz(&mut self, mode: QuizMode) {
        let questions = self
            .generator
            .build_quiz_set(mode, self.config.quiz_length, &mut self.rng);
        log::info!("Quiz started ({mode:?}, {} questions)", questions.len());
        self.quiz = Some(QuizSession::new(mode, questions));
        self.ui.on_view_requested(View::Quiz);
        self.ui.on_toast("🧠 Quiz started!");
    }

    pub fn answer_question(&mut self, value: &str) -> Option<AnswerOutcome> {
        let outcome = self.quiz.as_mut()?.answer(value)?;
        self.beep(Tone::quiz(outcome.correct));
        Some(outcome)
    }

    pub fn next_question(&mut self) {
        let finished = self.quiz.as_mut().is_some_and(|q| q.next());
        if finished {
            self.finish_quiz();
        }
    }

    pub fn skip_question(&mut self) {
        let finished = self.quiz.as_mut().is_some_and(|q| q.skip());
        if finished {
            self.finish_quiz();
        }
    }

    fn finish_quiz(&mut self) {
        let Some(quiz) = self.quiz.as_ref() else { return };
        let (score, max) = (quiz.score() as i32, quiz.len() as i32);
        self.store.record_quiz_score(score, max);
        self.ui.on_stats_changed();
    }

    // ---------- Speed Match ----------

    /// Empieza (o reinicia) una partida; anula cualquier cuenta atrás previa.
    pub fn start_game(&mut self, difficulty: Difficulty) {
        let session = self.game_timers.begin_session();
        let first = self.generator.build_game_question(&mut self.rng);
        self.game = Some(GameSession::new(difficulty.seconds_per_question(), first));
        self.game_timers.set_interval(
            session,
            TimerKind::GameCountdown,
            self.config.tick_period,
            self.now,
        );
        log::info!("Game started ({difficulty:?})");
        self.ui.on_view_requested(View::Game);
        self.ui.on_toast("🎮 Game started!");
    }

    pub fn answer_game(&mut self, value: &str) -> Option<AnswerOutcome> {
        let outcome = self.game.as_mut()?.answer(value)?;
        self.beep(Tone::game(outcome.correct));
        if outcome.correct {
            self.store.add_xp(self.config.game_correct_xp);
            self.ui.on_toast(&format!("⭐ Nice! +{} XP", self.config.game_correct_xp));
            self.ui.on_stats_changed();
            if let Some(session) = self.game_timers.current() {
                self.game_timers.clear_interval();
                self.game_timers.defer(
                    session,
                    TimerKind::GameNextRound,
                    self.config.game_feedback_pause,
                    self.now,
                );
            }
        } else {
            self.finish_game();
        }
        Some(outcome)
    }

    pub fn stop_game(&mut self) {
        if self.game.as_mut().is_some_and(|g| g.stop()) {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.game_timers.end_session();
        let Some(game) = self.game.as_ref() else { return };
        let score = game.score();
        log::info!("Game over ({:?}), score {score}", game.phase());
        if self.store.record_game_score(score) {
            self.ui.on_toast("🏆 New best!");
        }
        self.ui.on_stats_changed();
    }

    // ---------- Lecciones y práctica ----------

    /// Una pregunta de práctica para la lección; no hace nada si no existe.
    pub fn open_practice(&mut self, lesson_id: &str) -> bool {
        let Some(lesson) = self.course.lesson(lesson_id) else {
            return false;
        };
        self.last_lesson = Some(lesson.id.clone());
        let question = self
            .generator
            .build_practice_question(lesson, &self.keyword_pool, &mut self.rng);
        self.practice = question.map(|q| PracticeRound::new(&lesson.id, &lesson.title, q));
        self.ui.on_view_requested(View::Lessons);
        if self.practice.is_none() {
            self.ui.on_toast("No practice available for this topic yet.");
            return false;
        }
        true
    }

    pub fn answer_practice(&mut self, value: &str) -> Option<AnswerOutcome> {
        let outcome = self.practice.as_mut()?.answer(value)?;
        if outcome.correct {
            self.store.add_xp(self.config.practice_correct_xp);
            self.ui
                .on_toast(&format!("🎉 Betul! (+{} XP)", self.config.practice_correct_xp));
            self.ui.on_stats_changed();
        } else {
            self.ui.on_toast(&format!("😅 Almost! Answer: {}", outcome.expected));
        }
        Some(outcome)
    }

    pub fn practice_again(&mut self) {
        if let Some(id) = self.practice.as_ref().map(|p| p.lesson_id.clone()) {
            self.open_practice(&id);
        }
    }

    pub fn practice_next(&mut self) {
        let current = self.practice.as_ref().map(|p| p.lesson_id.clone());
        let next = current
            .and_then(|id| self.course.next_lesson(&id))
            .map(|l| l.id.clone());
        if let Some(id) = next {
            self.open_practice(&id);
        }
    }

    pub fn close_practice(&mut self) {
        self.practice = None;
    }

    pub fn random_lesson(&mut self) {
        let Some(lesson) = self.course.lessons.choose(&mut self.rng) else {
            return;
        };
        let (id, title) = (lesson.id.clone(), lesson.title.clone());
        self.open_practice(&id);
        self.ui.on_toast(&format!("🎲 Random: {title}"));
    }

    /// Práctica de la última lección abierta, o de la primera si no hay ninguna.
    pub fn quick_practice(&mut self) {
        let id = self
            .last_lesson
            .clone()
            .or_else(|| self.course.sorted_lessons().first().map(|l| l.id.clone()));
        if let Some(id) = id {
            self.open_practice(&id);
        }
    }

    pub fn start_course(&mut self) {
        self.ui.on_view_requested(View::Lessons);
        self.ui.on_toast("🌸 Let’s go!");
    }

    pub fn continue_course(&mut self) {
        self.ui.on_view_requested(View::Lessons);
        match self.last_lesson.clone() {
            Some(id) => {
                self.open_practice(&id);
            }
            None => self.ui.on_toast("✨ Pick any lesson to continue!"),
        }
    }

    pub fn mark_lesson_done(&mut self, lesson_id: &str) -> bool {
        let Some(title) = self.course.lesson(lesson_id).map(|l| l.title.clone()) else {
            return false;
        };
        if !self.store.mark_lesson_done(lesson_id) {
            return false;
        }
        self.ui.on_toast(&format!(
            "✅ Marked done: {title} (+{} XP)",
            self.config.lesson_done_xp
        ));
        self.ui.on_stats_changed();
        true
    }

    fn beep(&mut self, tone: Tone) {
        if self.store.state().settings.sound {
            self.ui.on_feedback(tone);
        }
    }

    // ---------- Ajustes ----------

    pub fn set_setting(&mut self, key: SettingKey, value: bool) {
        self.store.set_setting(key, value);
        self.ui.on_stats_changed();
    }

    pub fn toggle_setting(&mut self, key: SettingKey) -> bool {
        let on = self.store.toggle_setting(key);
        let message = match (key, on) {
            (SettingKey::Sparkles, true) => "✨ Sparkles ON",
            (SettingKey::Sparkles, false) => "✨ Sparkles OFF",
            (SettingKey::Sound, true) => "🔊 Sound ON",
            (SettingKey::Sound, false) => "🔇 Sound OFF",
        };
        self.ui.on_toast(message);
        on
    }

    pub fn reset_progress(&mut self) {
        self.store.reset_all();
        log::info!("Progress reset");
        self.ui.on_toast("🧹 Reset done!");
        self.ui.on_stats_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_course_embedded;
    use crate::model::{Direction, McqQuestion, Question};
    use crate::progress::clock::FixedClock;
    use crate::session::{GameOverReason, GamePhase, QuizPhase};
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct RecordingUi {
        toasts: Vec<String>,
        stats_changed: usize,
        views: Vec<View>,
        tones: Vec<Tone>,
    }

    impl UiCollaborator for RecordingUi {
        fn on_toast(&mut self, message: &str) {
            self.toasts.push(message.to_string());
        }
        fn on_stats_changed(&mut self) {
            self.stats_changed += 1;
        }
        fn on_view_requested(&mut self, view: View) {
            self.views.push(view);
        }
        fn on_feedback(&mut self, tone: Tone) {
            self.tones.push(tone);
        }
    }

    fn engine_with(backend: MemoryStore, seed: u64) -> Engine<RecordingUi> {
        Engine::new(
            read_course_embedded().unwrap(),
            Box::new(backend),
            Box::new(FixedClock::new(2026, 10, 14)),
            RecordingUi::default(),
            EngineConfig::default(),
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    fn engine() -> Engine<RecordingUi> {
        engine_with(MemoryStore::new(), 1)
    }

    fn wrong_option(q: &McqQuestion) -> String {
        q.options
            .iter()
            .find(|o| **o != q.correct_answer)
            .cloned()
            .unwrap()
    }

    #[test]
    fn quiz_records_score_once_after_ten_questions() {
        let mut e = engine();
        e.start_quiz(QuizMode::Mixed);
        assert_eq!(e.ui().views, [View::Quiz]);
        assert_eq!(e.ui().toasts, ["🧠 Quiz started!"]);
        for i in 0..10 {
            let answer = e.quiz().unwrap().current().unwrap().correct_answer().to_string();
            if i < 7 {
                assert!(e.answer_question(&answer).unwrap().correct);
            } else {
                assert!(!e.answer_question("definitely wrong").unwrap().correct);
            }
            e.next_question();
        }
        let quiz = e.quiz().unwrap();
        assert_eq!(quiz.phase(), &QuizPhase::Finished);
        assert_eq!(quiz.score(), 7);
        assert_eq!(e.progress().quiz.best_score, Some(7));
        assert_eq!(e.progress().quiz.last_score, Some(7));
        assert_eq!(e.progress().xp, 7);

        // Más llamadas no vuelven a puntuar
        e.next_question();
        e.skip_question();
        assert_eq!(e.progress().xp, 7);
        assert_eq!(e.progress().streak, 1);
    }

    #[test]
    fn skipped_quiz_still_records_zero() {
        let mut e = engine();
        e.start_quiz(QuizMode::Typing);
        assert!(matches!(e.quiz().unwrap().current(), Some(Question::Typing(_))));
        for _ in 0..10 {
            e.skip_question();
        }
        assert_eq!(e.progress().quiz.last_score, Some(0));
        assert_eq!(e.progress().xp, 0);
    }

    #[test]
    fn game_ends_when_countdown_runs_out() {
        let mut e = engine();
        e.tick(100.0);
        e.start_game(Difficulty::Hard);
        assert_eq!(e.ui().toasts.last().map(String::as_str), Some("🎮 Game started!"));
        for t in 1..5 {
            e.tick(100.0 + t as f64);
            assert!(e.game().unwrap().is_running());
        }
        e.tick(105.0);
        let game = e.game().unwrap();
        assert_eq!(game.phase(), GamePhase::Over(GameOverReason::TimeUp));
        assert_eq!(game.score(), 0);
        assert_eq!(e.next_timer_due(), None);
    }

    #[test]
    fn correct_game_answers_award_xp_and_refresh_the_question() {
        let mut e = engine();
        e.start_game(Difficulty::Normal);
        e.tick(3.0);
        let answer = e.game().unwrap().question().correct_answer.clone();
        assert!(e.answer_game(&answer).unwrap().correct);
        assert_eq!(e.progress().xp, 2);
        assert_eq!(e.game().unwrap().phase(), GamePhase::Feedback);

        // Durante la pausa no corre el reloj
        e.tick(3.2);
        assert_eq!(e.game().unwrap().time_left(), 4);
        e.tick(3.3);
        let game = e.game().unwrap();
        assert_eq!(game.phase(), GamePhase::AwaitingAnswer);
        assert_eq!(game.time_left(), 7);
        assert_eq!(game.score(), 1);

        // La cuenta atrás nueva arranca en el instante de la nueva pregunta
        e.tick(4.29);
        assert_eq!(e.game().unwrap().time_left(), 7);
        e.tick(4.31);
        assert_eq!(e.game().unwrap().time_left(), 6);
    }

    #[test]
    fn wrong_game_answer_ends_and_keeps_best() {
        let mut e = engine();
        e.start_game(Difficulty::Easy);
        let answer = e.game().unwrap().question().correct_answer.clone();
        e.answer_game(&answer);
        e.tick(1.0);
        let wrong = wrong_option(e.game().unwrap().question());
        assert!(!e.answer_game(&wrong).unwrap().correct);
        assert_eq!(e.game().unwrap().phase(), GamePhase::Over(GameOverReason::WrongAnswer));
        assert_eq!(e.progress().game_best_score, 1);
        assert!(e.ui().toasts.iter().any(|t| t == "🏆 New best!"));
        assert_eq!(e.progress().quiz.best_score, None);
    }

    #[test]
    fn restarting_game_cancels_stale_timers() {
        let mut e = engine();
        e.start_game(Difficulty::Hard);
        let answer = e.game().unwrap().question().correct_answer.clone();
        e.answer_game(&answer);
        // Reinicio antes de que venza la pausa de la partida vieja
        e.tick(0.1);
        e.start_game(Difficulty::Hard);
        let first = e.game().unwrap().question().clone();
        e.tick(0.5);
        let game = e.game().unwrap();
        assert_eq!(game.question(), &first, "old next-round timer must not fire");
        assert_eq!(game.score(), 0);
        assert_eq!(game.time_left(), 5);
        e.tick(1.2);
        assert_eq!(e.game().unwrap().time_left(), 4);
    }

    #[test]
    fn stopping_game_records_result() {
        let mut e = engine();
        e.start_game(Difficulty::Normal);
        let answer = e.game().unwrap().question().correct_answer.clone();
        e.answer_game(&answer);
        e.stop_game();
        assert_eq!(e.game().unwrap().phase(), GamePhase::Over(GameOverReason::Stopped));
        assert_eq!(e.progress().game_best_score, 1);
        e.tick(10.0);
        assert!(!e.game().unwrap().is_running());
    }

    #[test]
    fn practice_awards_smaller_bonus_once() {
        let mut e = engine();
        assert!(e.open_practice("here-there"));
        let round = e.practice().unwrap();
        assert_eq!(round.question.direction, Direction::SourceToTarget);
        let keywords: Vec<&str> = e
            .course()
            .lesson("here-there")
            .unwrap()
            .keywords
            .iter()
            .map(|k| k.target.as_str())
            .collect();
        assert!(keywords.contains(&round.question.correct_answer.as_str()));

        let answer = round.question.correct_answer.clone();
        assert!(e.answer_practice(&answer).unwrap().correct);
        assert_eq!(e.answer_practice(&answer), None);
        assert_eq!(e.progress().xp, 3);
        assert_eq!(e.last_lesson(), Some("here-there"));
    }

    #[test]
    fn practice_for_unknown_lesson_is_a_no_op() {
        let mut e = engine();
        assert!(!e.open_practice("nope"));
        assert!(e.practice().is_none());
        assert!(e.ui().views.is_empty());
        assert_eq!(e.answer_practice("x"), None);
    }

    #[test]
    fn practice_next_moves_to_following_lesson() {
        let mut e = engine();
        e.open_practice("here-there");
        e.practice_next();
        assert_eq!(e.practice().unwrap().lesson_id, "liking");
        e.open_practice("connectors");
        e.practice_next();
        assert_eq!(e.practice().unwrap().lesson_id, "here-there", "wraps to first");
    }

    #[test]
    fn quick_practice_prefers_last_lesson() {
        let mut e = engine();
        e.quick_practice();
        assert_eq!(e.practice().unwrap().lesson_id, "here-there");
        e.open_practice("liking");
        e.close_practice();
        e.quick_practice();
        assert_eq!(e.practice().unwrap().lesson_id, "liking");
    }

    #[test]
    fn lesson_bonus_is_not_repeated() {
        let mut e = engine();
        assert!(e.mark_lesson_done("liking"));
        assert!(!e.mark_lesson_done("liking"));
        assert!(!e.mark_lesson_done("ghost"));
        let stats = e.stats();
        assert_eq!(stats.xp, 10);
        assert_eq!(stats.learned, 1);
        assert_eq!(stats.total_lessons, 18);
        assert_eq!(stats.percent, 6);
        assert_eq!(e.ui().stats_changed, 1);
    }

    #[test]
    fn progress_survives_a_restart() {
        let backend = MemoryStore::new();
        let mut e = engine_with(backend.clone(), 3);
        e.greet();
        e.mark_lesson_done("here-there");
        e.toggle_setting(SettingKey::Sound);
        let before = e.progress().clone();

        let mut again = engine_with(backend, 4);
        again.greet();
        assert_eq!(again.progress(), &before);
        assert!(again.ui().toasts.is_empty(), "welcome is shown once per profile");
    }

    #[test]
    fn set_setting_persists_and_refreshes_stats() {
        let backend = MemoryStore::new();
        let mut e = engine_with(backend.clone(), 5);
        e.set_setting(SettingKey::Sparkles, false);
        e.set_setting(SettingKey::Sound, false);
        assert!(!e.progress().settings.sparkles);
        assert!(!e.progress().settings.sound);
        assert_eq!(e.ui().stats_changed, 2);
        assert!(e.ui().toasts.is_empty());

        // Poner el mismo valor no lo invierte
        e.set_setting(SettingKey::Sound, false);
        assert!(!e.progress().settings.sound);

        let again = engine_with(backend, 6);
        assert!(!again.progress().settings.sparkles);
        assert!(!again.progress().settings.sound);
    }

    #[test]
    fn answer_tones_follow_the_sound_setting() {
        let mut e = engine();
        assert!(e.progress().settings.sound);
        e.start_quiz(QuizMode::SourceToTarget);
        let answer = e.quiz().unwrap().current().unwrap().correct_answer().to_string();
        e.answer_question(&answer);
        assert_eq!(e.ui().tones, [Tone::quiz(true)]);
        // Una segunda respuesta a la misma pregunta no suena
        e.answer_question(&answer);
        assert_eq!(e.ui().tones.len(), 1);

        e.next_question();
        e.set_setting(SettingKey::Sound, false);
        e.answer_question("definitely wrong");
        assert_eq!(e.ui().tones.len(), 1);

        e.set_setting(SettingKey::Sound, true);
        e.start_game(Difficulty::Normal);
        let answer = e.game().unwrap().question().correct_answer.clone();
        e.answer_game(&answer);
        e.tick(1.0);
        let wrong = wrong_option(e.game().unwrap().question());
        e.answer_game(&wrong);
        assert_eq!(e.ui().tones[1..], [Tone::game(true), Tone::game(false)]);

        // La práctica no suena
        e.open_practice("liking");
        let answer = e.practice().unwrap().question.correct_answer.clone();
        e.answer_practice(&answer);
        assert_eq!(e.ui().tones.len(), 3);
    }

    #[test]
    fn reset_discards_history() {
        let mut e = engine();
        e.mark_lesson_done("here-there");
        e.reset_progress();
        assert_eq!(e.progress(), &ProgressState::default());
        assert_eq!(e.ui().toasts.last().map(String::as_str), Some("🧹 Reset done!"));
    }

    #[test]
    fn continue_without_history_asks_to_pick_a_lesson() {
        let mut e = engine();
        e.continue_course();
        assert_eq!(e.ui().views, [View::Lessons]);
        assert!(e.practice().is_none());
        e.random_lesson();
        assert!(e.practice().is_some());
        assert!(e.ui().toasts.last().unwrap().starts_with("🎲 Random:"));
    }
}
