use crate::CourseApp;
use crate::model::Difficulty;
use crate::session::GamePhase;
use crate::ui::helpers::{answer_grid, big_button};
use crate::ui::layout::centered_panel;
use egui::{Align, Context, ProgressBar, RichText};

pub fn ui_game(app: &mut CourseApp, ctx: &Context) {
    let game = app.engine.game().cloned();
    let best = app.engine.progress().game_best_score;

    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("🎮 Speed Match");
            ui.label("Pick the meaning before the timer runs out. One mistake ends the run.");
            ui.add_space(8.0);

            let running = game.as_ref().is_some_and(|g| g.is_running());
            ui.add_enabled_ui(!running, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for difficulty in Difficulty::ALL {
                        ui.selectable_value(&mut app.prefs.difficulty, difficulty, difficulty.label());
                    }
                });
            });
            ui.add_space(8.0);

            let Some(game) = &game else {
                let w = (ui.available_width() * 0.8).clamp(120.0, 320.0);
                if big_button(ui, "▶ Start", w, 40.0, true) {
                    app.start_game();
                }
                ui.label(format!("🏆 Best: {best}"));
                return;
            };

            ui.label(
                RichText::new(format!(
                    "⏱ {}s   •   Score {}   •   Best {best}",
                    game.time_left(),
                    game.score()
                ))
                .strong(),
            );
            let fraction = game.time_left() as f32 / game.seconds_per_question().max(1) as f32;
            ui.add(ProgressBar::new(fraction).desired_height(6.0));
            ui.add_space(10.0);

            ui.label(RichText::new(&game.question().prompt).size(22.0).strong());
            ui.add_space(10.0);

            let width = ui.available_width().min(520.0);
            let locked = match game.phase() {
                GamePhase::AwaitingAnswer => None,
                _ => game.last_outcome(),
            };
            let awaiting = game.phase() == GamePhase::AwaitingAnswer;
            let picked = ui
                .add_enabled_ui(awaiting, |ui| answer_grid(ui, &game.question().options, locked, width))
                .inner;
            if let Some(picked) = picked {
                app.answer_game(&picked);
            }
            ui.add_space(10.0);

            match game.phase() {
                GamePhase::Over(reason) => {
                    ui.label(RichText::new(reason.message()).strong());
                    ui.label(format!("Score: {} • Best: {best}", game.score()));
                    let w = (ui.available_width() * 0.8).clamp(120.0, 320.0);
                    if big_button(ui, "🔁 Play again", w, 40.0, true) {
                        app.start_game();
                    }
                }
                _ => {
                    if ui.button("⏹ Stop").clicked() {
                        app.stop_game();
                    }
                }
            }
        });
    });
}
