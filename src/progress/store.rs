use super::{Clock, ProgressState, SettingKey};
use crate::error::StorageError;
use crate::storage::KeyValueStore;
use std::collections::HashSet;

/// Dueño único del `ProgressState`. Cada mutación se guarda al momento; los
/// fallos de almacenamiento se registran y nunca llegan al llamador.
pub struct ProgressStore {
    backend: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    key: String,
    known_lessons: HashSet<String>,
    lesson_bonus: i32,
    state: ProgressState,
}

impl ProgressStore {
    /// Abre el almacén y carga el registro guardado (o el de por defecto).
    pub fn open(
        backend: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
        key: impl Into<String>,
        known_lessons: HashSet<String>,
        lesson_bonus: i32,
    ) -> Self {
        let mut store = Self {
            backend,
            clock,
            key: key.into(),
            known_lessons,
            lesson_bonus,
            state: ProgressState::default(),
        };
        store.state = store.load();
        store
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Lee el registro persistido. Ausente o ilegible → valores por defecto.
    pub fn load(&self) -> ProgressState {
        match self.try_load() {
            Ok(Some(mut state)) => {
                // Ids que ya no existen en el catálogo no cuentan como completados
                state
                    .completed_lessons
                    .retain(|id| self.known_lessons.contains(id));
                state
            }
            Ok(None) => ProgressState::default(),
            Err(e) => {
                log::warn!("Storage load failed, resetting: {e}");
                ProgressState::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<ProgressState>, StorageError> {
        match self.backend.get(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Persiste el registro completo; si falla, la app sigue con lo que hay en memoria.
    pub fn save(&mut self) {
        if let Err(e) = self.try_save() {
            log::warn!("Storage save failed: {e}");
        }
    }

    fn try_save(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.state)?;
        self.backend.set(&self.key, &json)
    }

    // ---------- Racha ----------

    pub fn touch_day(&mut self) {
        self.apply_day();
        self.save();
    }

    fn apply_day(&mut self) {
        let today = self.clock.today();
        match self.state.last_active_day {
            None => self.state.streak = 1,
            Some(prev) if prev == today => return,
            Some(prev) => {
                if (today - prev).num_days() == 1 {
                    self.state.streak += 1;
                } else {
                    // Hueco de más de un día o reloj hacia atrás
                    self.state.streak = 1;
                }
            }
        }
        self.state.last_active_day = Some(today);
    }

    // ---------- XP ----------

    pub fn add_xp(&mut self, amount: i32) {
        let xp = (i64::from(self.state.xp) + i64::from(amount)).clamp(0, i64::from(u32::MAX));
        self.state.xp = xp as u32;
        self.apply_day();
        self.save();
    }

    // ---------- Lecciones ----------

    /// Devuelve `true` sólo la primera vez que se completa una lección conocida.
    pub fn mark_lesson_done(&mut self, lesson_id: &str) -> bool {
        if !self.known_lessons.contains(lesson_id) || self.is_lesson_done(lesson_id) {
            return false;
        }
        self.state.completed_lessons.insert(lesson_id.to_string());
        self.add_xp(self.lesson_bonus);
        true
    }

    pub fn is_lesson_done(&self, lesson_id: &str) -> bool {
        self.state.completed_lessons.contains(lesson_id)
    }

    pub fn completed_count(&self) -> usize {
        self.state.completed_lessons.len()
    }

    // ---------- Quiz y juego ----------

    pub fn record_quiz_score(&mut self, score: i32, max_score: i32) {
        let quiz = &mut self.state.quiz;
        quiz.last_score = Some(score);
        if quiz.best_score.is_none_or(|best| score > best) {
            quiz.best_score = Some(score);
        }
        log::info!("Quiz finished: {score}/{max_score}");
        self.add_xp(score.max(0));
    }

    /// Devuelve `true` si la puntuación supera la mejor marca del juego.
    pub fn record_game_score(&mut self, score: u32) -> bool {
        if score <= self.state.game_best_score {
            return false;
        }
        self.state.game_best_score = score;
        self.save();
        true
    }

    // ---------- Ajustes ----------

    pub fn set_setting(&mut self, key: SettingKey, value: bool) {
        self.state.settings.set(key, value);
        self.save();
    }

    pub fn toggle_setting(&mut self, key: SettingKey) -> bool {
        let value = !self.state.settings.get(key);
        self.set_setting(key, value);
        value
    }

    /// Marca la bienvenida como mostrada; `true` sólo la primera vez.
    pub fn mark_welcomed(&mut self) -> bool {
        if self.state.welcomed {
            return false;
        }
        self.state.welcomed = true;
        self.save();
        true
    }

    /// Borra todo el historial de forma irreversible.
    pub fn reset_all(&mut self) {
        self.state = ProgressState::default();
        self.save();
    }
}
