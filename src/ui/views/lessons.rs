use crate::CourseApp;
use crate::app::LessonCard;
use crate::session::PracticeRound;
use crate::ui::helpers::{answer_grid, feedback_label};
use crate::ui::layout::scroll_panel;
use egui::{Button, ComboBox, Context, Frame, RichText, TextEdit, Ui};

const DEFAULT_HINT: &str = "Say each example out loud 3x ✨";

pub fn ui_lessons(app: &mut CourseApp, ctx: &Context) {
    let cards = app.lesson_cards();
    let tags = app.all_tags();
    let practice = app.engine.practice().cloned();

    scroll_panel(ctx, 720.0, |ui| {
        ui.heading("📚 Lessons");
        ui.add_space(6.0);

        if let Some(round) = &practice {
            practice_card(app, ui, round);
            ui.add_space(10.0);
        }

        // ----------- BÚSQUEDA Y FILTRO -----------
        ui.horizontal(|ui| {
            ui.label("🔎");
            let search = ui.add(
                TextEdit::singleline(&mut app.search)
                    .hint_text("Search words or phrases (Ctrl+K)")
                    .desired_width(260.0),
            );
            if std::mem::take(&mut app.focus_search) {
                search.request_focus();
            }
            let selected = app.tag_filter.clone().unwrap_or_else(|| "All".to_string());
            ComboBox::from_id_salt("tag_filter")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut app.tag_filter, None, "All");
                    for tag in &tags {
                        ui.selectable_value(&mut app.tag_filter, Some(tag.clone()), tag.as_str());
                    }
                });
        });
        ui.add_space(8.0);

        if cards.is_empty() {
            ui.label("No lessons found. Try a different search 💗");
        }
        for card in &cards {
            lesson_card(app, ui, card);
            ui.add_space(6.0);
        }
    });
}

fn lesson_card(app: &mut CourseApp, ui: &mut Ui, card: &LessonCard) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(card.label()).strong().size(16.0));
            for tag in &card.tags {
                ui.small(format!("#{tag}"));
            }
        });

        let expanded = app.is_expanded(&card.id);
        ui.horizontal(|ui| {
            let toggle = if expanded { "▲ Hide" } else { "▼ Words & examples" };
            if ui.button(toggle).clicked() {
                app.toggle_expanded(&card.id);
            }
            if ui.add_enabled(!card.done, Button::new("✅ Mark done")).clicked() {
                app.mark_lesson_done(&card.id);
            }
            if ui.button("🧪 Practice").clicked() {
                app.open_practice(&card.id);
            }
        });

        if !expanded {
            return;
        }
        let Some(lesson) = app.lesson(&card.id) else { return };
        ui.add_space(4.0);
        ui.label(RichText::new("Keywords").strong());
        for k in &lesson.keywords {
            ui.label(format!("•  {}  →  {}", k.target, k.source));
        }
        if !lesson.examples.is_empty() {
            ui.label(RichText::new("Examples").strong());
            for e in &lesson.examples {
                ui.label(format!("•  {}", e.target));
                ui.small(format!("    {}", e.source));
            }
        }
        ui.label(format!("💡 {}", lesson.hint.as_deref().unwrap_or(DEFAULT_HINT)));
    });
}

fn practice_card(app: &mut CourseApp, ui: &mut Ui, round: &PracticeRound) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(format!("🧪 Practice: {}", round.lesson_title)).strong().size(16.0));
        ui.add_space(4.0);
        ui.label(RichText::new(&round.question.prompt).size(18.0));
        ui.add_space(6.0);

        let width = ui.available_width().min(520.0);
        if let Some(picked) = answer_grid(ui, &round.question.options, round.outcome(), width) {
            app.answer_practice(&picked);
        }
        if let Some(outcome) = round.outcome() {
            feedback_label(ui, outcome);
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("🔁 Again").clicked() {
                app.practice_again();
            }
            if ui.button("➡ Next topic").clicked() {
                app.practice_next();
            }
            if ui.button("✖ Close").clicked() {
                app.close_practice();
            }
        });
    });
}
