// src/ui/helpers.rs
use crate::questions::answers_match;
use crate::session::AnswerOutcome;
use egui::{Button, Color32, RichText, Ui, Vec2};

const CORRECT: Color32 = Color32::from_rgb(46, 160, 67);
const WRONG: Color32 = Color32::from_rgb(200, 55, 75);

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Opciones de una pregunta, en dos columnas. Con `outcome` ya contestada:
/// botones bloqueados, la correcta en verde y la elegida (si falló) en rojo.
/// Devuelve la opción pulsada.
pub fn answer_grid(ui: &mut Ui, options: &[String], outcome: Option<&AnswerOutcome>, width: f32) -> Option<String> {
    let btn_w = ((width - 8.0) / 2.0).max(80.0);
    let mut picked = None;
    for row in options.chunks(2) {
        ui.horizontal(|ui| {
            for option in row {
                let mut button = Button::new(RichText::new(option).size(16.0)).min_size(Vec2::new(btn_w, 40.0));
                if let Some(o) = outcome {
                    if answers_match(option, &o.expected) {
                        button = button.fill(CORRECT);
                    } else if !o.correct && answers_match(option, &o.picked) {
                        button = button.fill(WRONG);
                    }
                }
                if ui.add_enabled(outcome.is_none(), button).clicked() {
                    picked = Some(option.clone());
                }
            }
        });
    }
    picked
}

/// Línea de feedback bajo la pregunta.
pub fn feedback_label(ui: &mut Ui, outcome: &AnswerOutcome) {
    if outcome.correct {
        ui.colored_label(CORRECT, "✅ Betul! (Correct)");
    } else {
        ui.colored_label(WRONG, format!("❌ Not quite. Answer: {}", outcome.expected));
    }
}
