use crate::CourseApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Align, Context, RichText};

pub fn ui_home(app: &mut CourseApp, ctx: &Context) {
    let course_title = app.engine.course().title.clone();
    let target = app.engine.course().target_language.clone();
    let has_last = app.engine.last_lesson().is_some();

    centered_panel(ctx, 320.0, 480.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new(format!("🌸 {course_title}")).strong());
            ui.label(format!("Core {target} in small, sweet steps."));
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 360.0);
            let btn_h = 40.0;

            if big_button(ui, "🌸 Start course", btn_w, btn_h, true) {
                app.start_course();
            }
            ui.add_space(5.0);
            let continue_label = if has_last {
                "▶ Continue where I left off"
            } else {
                "▶ Continue"
            };
            if big_button(ui, continue_label, btn_w, btn_h, true) {
                app.continue_course();
            }
            ui.add_space(5.0);
            if big_button(ui, "🎲 Random lesson", btn_w, btn_h, true) {
                app.random_lesson();
            }
            ui.add_space(5.0);
            if big_button(ui, "🧪 Quick practice", btn_w, btn_h, true) {
                app.quick_practice();
            }
        });
    });
}
