use super::*;
use crate::progress::SettingKey;
use crate::session::AnswerOutcome;
use rand::Rng;

const SPARKLE_GLYPHS: [&str; 4] = ["✨", "💗", "⭐", "🌸"];
const SPARKLES_PER_BURST: usize = 6;

impl CourseApp {
    /// Ejecuta una acción del motor y recoge sus avisos enseguida.
    fn act<R>(&mut self, f: impl FnOnce(&mut Engine<UiEvents>) -> R) -> R {
        let result = f(&mut self.engine);
        self.pump_events();
        result
    }

    // ---------- Inicio ----------

    pub fn start_course(&mut self) {
        self.act(|e| e.start_course());
    }

    pub fn continue_course(&mut self) {
        self.act(|e| e.continue_course());
    }

    pub fn random_lesson(&mut self) {
        self.act(|e| e.random_lesson());
    }

    pub fn quick_practice(&mut self) {
        self.act(|e| e.quick_practice());
    }

    // ---------- Quiz ----------

    pub fn start_quiz(&mut self) {
        self.typing_input.clear();
        let mode = self.prefs.quiz_mode;
        self.act(|e| e.start_quiz(mode));
    }

    pub fn answer_quiz(&mut self, value: &str) -> Option<AnswerOutcome> {
        self.act(|e| e.answer_question(value))
    }

    pub fn submit_typing(&mut self) -> Option<AnswerOutcome> {
        let value = self.typing_input.trim().to_string();
        if value.is_empty() {
            return None;
        }
        self.answer_quiz(&value)
    }

    pub fn next_question(&mut self) {
        self.typing_input.clear();
        self.act(|e| e.next_question());
    }

    pub fn skip_question(&mut self) {
        self.typing_input.clear();
        self.act(|e| e.skip_question());
    }

    // ---------- Speed Match ----------

    pub fn start_game(&mut self) {
        let difficulty = self.prefs.difficulty;
        self.act(|e| e.start_game(difficulty));
    }

    pub fn answer_game(&mut self, value: &str) -> Option<AnswerOutcome> {
        self.act(|e| e.answer_game(value))
    }

    pub fn stop_game(&mut self) {
        self.act(|e| e.stop_game());
    }

    // ---------- Lecciones ----------

    pub fn open_practice(&mut self, lesson_id: &str) {
        self.act(|e| e.open_practice(lesson_id));
    }

    pub fn answer_practice(&mut self, value: &str) -> Option<AnswerOutcome> {
        self.act(|e| e.answer_practice(value))
    }

    pub fn practice_again(&mut self) {
        self.act(|e| e.practice_again());
    }

    pub fn practice_next(&mut self) {
        self.act(|e| e.practice_next());
    }

    pub fn close_practice(&mut self) {
        self.engine.close_practice();
    }

    pub fn mark_lesson_done(&mut self, lesson_id: &str) {
        self.act(|e| e.mark_lesson_done(lesson_id));
    }

    pub fn toggle_expanded(&mut self, lesson_id: &str) {
        if !self.expanded.remove(lesson_id) {
            self.expanded.insert(lesson_id.to_string());
        }
    }

    // ---------- Ajustes ----------

    pub fn toggle_setting(&mut self, key: SettingKey) -> bool {
        self.act(|e| e.toggle_setting(key))
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark: bool) {
        self.prefs.dark_mode = dark;
        ctx.set_visuals(self.prefs.visuals());
    }

    /// Ráfaga de chispas en `pos`, si el ajuste está activo.
    pub fn spark(&mut self, pos: Pos2) {
        if !self.engine.progress().settings.sparkles {
            return;
        }
        let mut rng = rand::thread_rng();
        for i in 0..SPARKLES_PER_BURST {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed: f32 = rng.gen_range(40.0..110.0);
            self.sparkles.push(Sparkle {
                origin: pos,
                velocity: Vec2::angled(angle) * speed,
                born: self.now,
                glyph: SPARKLE_GLYPHS[i % SPARKLE_GLYPHS.len()],
            });
        }
    }
}
