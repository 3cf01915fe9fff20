mod helpers;
pub mod layout;
pub mod views;

use crate::app::{CourseApp, Shortcut};
use crate::model::View;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::{Context, Key, Modifiers};
use layout::{bottom_panel, paint_sparkles, toast_overlay, top_panel};
use std::time::Duration;

impl App for CourseApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.advance(now);

        // Atajos antes de pintar, para que el campo de texto no se quede Ctrl+K
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.on_shortcut(Shortcut::GoHome);
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::K)) {
            self.on_shortcut(Shortcut::FocusSearch);
        }

        // Chispas en cada clic principal
        if let Some(pos) = ctx.input(|i| {
            i.pointer
                .primary_clicked()
                .then(|| i.pointer.interact_pos())
                .flatten()
        }) {
            self.spark(pos);
        }

        // PANEL SUPERIOR: pestañas y estadísticas
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por vista
        match self.view {
            View::Home => views::home::ui_home(self, ctx),
            View::Lessons => views::lessons::ui_lessons(self, ctx),
            View::Quiz => views::quiz::ui_quiz(self, ctx),
            View::Game => views::game::ui_game(self, ctx),
            View::Settings => views::settings::ui_settings(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }

        if let Some(tone) = self.tone.take() {
            self.beeper.play(tone);
        }

        toast_overlay(self, ctx);
        paint_sparkles(self, ctx);

        // Sin entrada no hay frames: hay que despertar para los temporizadores
        if let Some(wake) = self.next_wake() {
            let delay = (wake - now).max(0.0);
            if self.sparkles.is_empty() {
                ctx.request_repaint_after(Duration::from_secs_f64(delay));
            } else {
                ctx.request_repaint();
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
