use egui::{Color32, Slider};

use crate::DrawerApp;
use crate::shape::ShapeKind;

pub fn tools_panel(app: &mut DrawerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.vertical(|ui| {
                let can_undo = app.editor().history().can_undo();
                let can_redo = app.editor().history().can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
                if ui.button("Clear").clicked() {
                    app.clear();
                }
            });
            ui.separator();

            ui.vertical(|ui| {
                let current = app.editor().settings().shape_kind;
                for kind in ShapeKind::ALL {
                    if ui.selectable_label(current == kind, kind.label()).clicked() {
                        log::info!("Shape selected from UI: {}", kind.label());
                        app.editor_mut().settings_mut().shape_kind = kind;
                    }
                }
            });
            ui.separator();

            let (min_width, max_width) = app.stroke_width_range();
            ui.vertical(|ui| {
                let settings = app.editor_mut().settings_mut();
                ui.label("Stroke Width");
                ui.add(Slider::new(&mut settings.stroke_width, min_width..=max_width));
                ui.checkbox(&mut settings.fill, "Fill");
            });
            ui.separator();

            ui.vertical(|ui| {
                if ui.button("Help").clicked() {
                    app.show_help();
                }
                color_sliders(ui, &mut app.editor_mut().settings_mut().color);
            });
        });

        // Sample line showing the current stroke
        let settings = app.editor().settings();
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(150.0, max_sample_height(app)),
            egui::Sense::hover(),
        );
        ui.painter().line_segment(
            [rect.left_center(), rect.left_center() + egui::vec2(150.0, 0.0)],
            egui::Stroke::new(settings.stroke_width as f32, settings.color),
        );
        ui.label(format!("Mode: {}", app.editor().mode().label()));
    });
}

fn max_sample_height(app: &DrawerApp) -> f32 {
    app.stroke_width_range().1 as f32
}

fn color_sliders(ui: &mut egui::Ui, color: &mut Color32) {
    let [mut r, mut g, mut b, _] = color.to_array();
    ui.add(Slider::new(&mut r, 0..=255).text("Red"));
    ui.add(Slider::new(&mut g, 0..=255).text("Green"));
    ui.add(Slider::new(&mut b, 0..=255).text("Blue"));
    *color = Color32::from_rgb(r, g, b);
}
