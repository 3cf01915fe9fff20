use crate::CourseApp;
use crate::model::{QuizMode, View};
use crate::session::{QuizPhase, QuizSession};
use crate::ui::helpers::{answer_grid, big_button, feedback_label};
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Align, Context, Key, RichText, TextEdit, Ui};

pub fn ui_quiz(app: &mut CourseApp, ctx: &Context) {
    let quiz = app.engine.quiz().cloned();
    let summary = app.quiz_summary();

    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| match (&quiz, summary) {
            (Some(session), _) if session.is_empty() => {
                ui.label("No questions available yet.");
                quiz_menu(app, ui);
            }
            (Some(_), Some(summary)) => {
                ui.heading("🏁 Quiz complete!");
                ui.add_space(8.0);
                ui.label(RichText::new(summary.label()).strong().size(18.0));
                ui.label(format!("🍬 XP earned: {} XP", summary.score));
                ui.label(summary.best_label());
                ui.add_space(14.0);
                let width = ui.available_width().min(420.0);
                let (again, lessons) = two_button_row(ui, width, "🔁 Play again", "📚 Back to lessons");
                if again {
                    app.start_quiz();
                }
                if lessons {
                    app.go_to(View::Lessons);
                }
            }
            (Some(session), None) => active_quiz(app, ui, session),
            (None, _) => quiz_menu(app, ui),
        });
    });
}

fn quiz_menu(app: &mut CourseApp, ui: &mut Ui) {
    ui.heading("🧠 Quiz");
    ui.label(format!("{} questions. Each correct answer is +1 XP.", app.engine.config().quiz_length));
    ui.add_space(12.0);
    ui.horizontal_wrapped(|ui| {
        for mode in QuizMode::ALL {
            ui.selectable_value(&mut app.prefs.quiz_mode, mode, mode.label());
        }
    });
    ui.add_space(12.0);
    let w = (ui.available_width() * 0.8).clamp(120.0, 320.0);
    if big_button(ui, "🧠 Start quiz", w, 40.0, true) {
        app.start_quiz();
    }
}

fn active_quiz(app: &mut CourseApp, ui: &mut Ui, session: &QuizSession) {
    let Some(question) = session.current() else { return };
    let outcome = match session.phase() {
        QuizPhase::Feedback(o) => Some(o),
        _ => None,
    };

    ui.label(format!(
        "{}   •   Question {} / {}   •   Score {}",
        session.mode().label(),
        session.index() + 1,
        session.len(),
        session.score()
    ));
    ui.add_space(8.0);
    ui.label(RichText::new(question.prompt()).size(20.0).strong());
    ui.add_space(10.0);

    let width = ui.available_width().min(520.0);
    match question.options() {
        Some(options) => {
            if let Some(picked) = answer_grid(ui, options, outcome, width) {
                app.answer_quiz(&picked);
            }
        }
        None => {
            let response = ui.add_enabled(
                outcome.is_none(),
                TextEdit::singleline(&mut app.typing_input)
                    .hint_text("Type your answer")
                    .desired_width(width * 0.8),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if ui.add_enabled(outcome.is_none(), egui::Button::new("Submit")).clicked() || entered {
                app.submit_typing();
            }
        }
    }

    ui.add_space(8.0);
    if let Some(o) = outcome {
        feedback_label(ui, o);
    }
    ui.add_space(10.0);

    let (next, skip) = two_button_row(ui, width, "Next ➡", "Skip");
    if next && outcome.is_some() {
        app.next_question();
    }
    if skip && outcome.is_none() {
        app.skip_question();
    }
}
