use super::*;

impl CourseApp {
    pub fn reset_progress(&mut self) {
        self.engine.reset_progress();
        self.engine.close_practice();
        self.expanded.clear();
        self.typing_input.clear();
        self.confirm_reset = false;
        self.pump_events();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirm reset")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Erase all XP, streak and completed lessons? This cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, erase").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    #[test]
    fn reset_clears_progress_and_ui_state() {
        let mut app = app();
        app.mark_lesson_done("liking");
        app.open_practice("liking");
        app.toggle_expanded("liking");
        app.confirm_reset = true;

        app.reset_progress();
        assert_eq!(app.engine.progress().xp, 0);
        assert!(app.engine.practice().is_none());
        assert!(app.expanded.is_empty());
        assert!(!app.confirm_reset);
        assert_eq!(app.visible_toast(), Some("🧹 Reset done!"));
        assert_eq!(app.view, View::Lessons);
    }
}
