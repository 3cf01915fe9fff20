//! Registro de progreso del alumno: XP, racha, lecciones y mejores marcas.

use crate::config::RECORD_VERSION;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod clock;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use store::ProgressStore;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub sparkles: bool,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sparkles: true,
            sound: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKey {
    Sparkles,
    Sound,
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Sparkles => self.sparkles,
            SettingKey::Sound => self.sound,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::Sparkles => self.sparkles = value,
            SettingKey::Sound => self.sound = value,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizScores {
    pub best_score: Option<i32>,
    pub last_score: Option<i32>,
}

/// Documento persistido. Los campos ausentes toman el valor por defecto y los
/// desconocidos se ignoran, así registros viejos y nuevos cargan igual.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressState {
    pub version: String,
    pub xp: u32,
    pub streak: u32,
    pub last_active_day: Option<NaiveDate>,
    #[serde(with = "lesson_set")]
    pub completed_lessons: BTreeSet<String>,
    pub quiz: QuizScores,
    #[serde(rename = "gameBest")]
    pub game_best_score: u32,
    pub settings: Settings,
    #[serde(rename = "_welcomed")]
    pub welcomed: bool,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            xp: 0,
            streak: 0,
            last_active_day: None,
            completed_lessons: BTreeSet::new(),
            quiz: QuizScores::default(),
            game_best_score: 0,
            settings: Settings::default(),
            welcomed: false,
        }
    }
}

/// `completedLessons` se guarda como `{ "id": true }`; al leer también vale
/// una lista de ids.
mod lesson_set {
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::{BTreeMap, BTreeSet};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Map(BTreeMap<String, bool>),
        List(Vec<String>),
    }

    pub fn serialize<S: Serializer>(set: &BTreeSet<String>, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(set.len()))?;
        for id in set {
            map.serialize_entry(id, &true)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeSet<String>, D::Error> {
        Ok(match Repr::deserialize(d)? {
            Repr::Map(map) => map.into_iter().filter(|(_, done)| *done).map(|(id, _)| id).collect(),
            Repr::List(ids) => ids.into_iter().collect(),
        })
    }
}
