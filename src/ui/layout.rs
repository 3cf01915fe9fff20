use crate::CourseApp;
use crate::model::View;
use egui::{
    Align2, Button, CentralPanel, Color32, Context, FontId, Frame, Id, LayerId, Order, ProgressBar, RichText,
    ScrollArea, Ui,
};

pub fn top_panel(app: &mut CourseApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            if ui.button("◀").on_hover_text("Previous tab").clicked() {
                app.step_view(-1);
            }
            for view in View::ORDER {
                if ui.selectable_label(app.view == view, view.label()).clicked() {
                    app.go_to(view);
                }
            }
            if ui.button("▶").on_hover_text("Next tab").clicked() {
                app.step_view(1);
            }
        });

        // ----------- ESTADÍSTICAS -----------
        let stats = app.stats_info();
        ui.horizontal_wrapped(|ui| {
            for chip in stats.chips() {
                ui.label(RichText::new(chip).strong());
                ui.separator();
            }
        });
        ui.add(
            ProgressBar::new(stats.fraction())
                .desired_height(6.0)
                .fill(Color32::from_rgb(255, 79, 168)),
        );
        ui.add_space(4.0);
    });
}

pub fn bottom_panel(app: &mut CourseApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                app.set_dark_mode(ctx, true);
            }
            if ui.button("☀ Light mode").clicked() {
                app.set_dark_mode(ctx, false);
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    // Ajusta anchura
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll para listas largas.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(12, 12))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
            });
        });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}

/// Aviso flotante abajo en el centro.
pub fn toast_overlay(app: &CourseApp, ctx: &Context) {
    let Some(message) = app.visible_toast() else { return };
    egui::Area::new(Id::new("toast"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, [0.0, -64.0])
        .interactable(false)
        .show(ctx, |ui| {
            Frame::popup(ui.style())
                .inner_margin(egui::Margin::symmetric(14, 10))
                .show(ui, |ui| {
                    ui.label(RichText::new(message).strong().size(16.0));
                });
        });
}

pub fn paint_sparkles(app: &CourseApp, ctx: &Context) {
    if app.sparkles.is_empty() {
        return;
    }
    let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("sparkles")));
    for sparkle in &app.sparkles {
        let alpha = (sparkle.alpha(app.now) * 255.0) as u8;
        painter.text(
            sparkle.position(app.now),
            Align2::CENTER_CENTER,
            sparkle.glyph,
            FontId::proportional(18.0),
            Color32::from_rgba_unmultiplied(255, 79, 168, alpha),
        );
    }
}
