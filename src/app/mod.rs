use crate::config::EngineConfig;
use crate::data::read_course_embedded;
use crate::engine::Engine;
use crate::error::CatalogError;
use crate::model::{Difficulty, QuizMode, View};
use crate::sound::{Beeper, Tone};
use eframe::egui::{self, Pos2, Vec2, Visuals};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod events;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{LessonCard, QuizSummary, StatsInfo};
pub use events::UiEvents;
pub use navigation::Shortcut;

/// Segundos que un aviso queda en pantalla.
pub const TOAST_SECONDS: f64 = 1.4;
/// Vida de una chispa.
pub const SPARKLE_SECONDS: f64 = 0.8;

/// Preferencias de interfaz; se guardan con la persistencia de eframe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiPrefs {
    pub dark_mode: bool,
    pub quiz_mode: QuizMode,
    pub difficulty: Difficulty,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            dark_mode: true,
            quiz_mode: QuizMode::default(),
            difficulty: Difficulty::default(),
        }
    }
}

impl UiPrefs {
    pub fn visuals(&self) -> Visuals {
        if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub until: f64,
}

#[derive(Clone, Debug)]
pub struct Sparkle {
    pub origin: Pos2,
    pub velocity: Vec2,
    pub born: f64,
    pub glyph: &'static str,
}

impl Sparkle {
    pub fn position(&self, now: f64) -> Pos2 {
        self.origin + self.velocity * (now - self.born) as f32
    }

    /// 1.0 al nacer, 0.0 al desaparecer.
    pub fn alpha(&self, now: f64) -> f32 {
        (1.0 - (now - self.born) / SPARKLE_SECONDS).clamp(0.0, 1.0) as f32
    }
}

pub struct CourseApp {
    pub engine: Engine<UiEvents>,
    pub prefs: UiPrefs,
    pub view: View,
    pub search: String,
    pub tag_filter: Option<String>,
    pub expanded: HashSet<String>,
    pub typing_input: String,
    pub toast: Option<Toast>,
    pub sparkles: Vec<Sparkle>,
    pub confirm_reset: bool,
    /// Pitido pendiente; se reproduce en el siguiente frame.
    pub tone: Option<Tone>,
    pub beeper: Beeper,
    /// Pedir foco para la búsqueda de lecciones en el siguiente frame.
    pub focus_search: bool,
    pub now: f64,
}

impl CourseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, CatalogError> {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(prefs.visuals());

        let course = read_course_embedded()?;
        let engine = Engine::with_platform_defaults(course, UiEvents::default(), EngineConfig::default())?;
        Ok(Self::with_engine(engine, prefs))
    }

    /// Monta la app sobre un motor ya construido y lanza el saludo inicial.
    pub fn with_engine(engine: Engine<UiEvents>, prefs: UiPrefs) -> Self {
        let mut app = Self {
            engine,
            prefs,
            view: View::Home,
            search: String::new(),
            tag_filter: None,
            expanded: HashSet::new(),
            typing_input: String::new(),
            toast: None,
            sparkles: Vec::new(),
            confirm_reset: false,
            tone: None,
            beeper: Beeper::default(),
            focus_search: false,
            now: 0.0,
        };
        app.engine.greet();
        app.pump_events();
        app
    }
}
