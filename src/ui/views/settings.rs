use crate::CourseApp;
use crate::progress::SettingKey;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_settings(app: &mut CourseApp, ctx: &Context) {
    let settings = app.engine.progress().settings.clone();
    let mut dark = app.prefs.dark_mode;

    centered_panel(ctx, 300.0, 480.0, |ui| {
        ui.heading("⚙ Settings");
        ui.add_space(10.0);

        let mut sparkles = settings.sparkles;
        if ui.checkbox(&mut sparkles, "✨ Sparkles on tap").changed() {
            app.toggle_setting(SettingKey::Sparkles);
        }
        let mut sound = settings.sound;
        if ui.checkbox(&mut sound, "🔊 Sound").changed() {
            app.toggle_setting(SettingKey::Sound);
        }
        if ui.checkbox(&mut dark, "🌙 Dark mode").changed() {
            app.set_dark_mode(ctx, dark);
        }

        ui.add_space(18.0);
        ui.separator();
        ui.label(RichText::new("Danger zone").color(Color32::from_rgb(200, 55, 75)));
        let w = (ui.available_width() * 0.8).clamp(120.0, 320.0);
        if big_button(ui, "🧹 Reset all progress", w, 36.0, true) {
            app.confirm_reset = true;
        }
    });
}
