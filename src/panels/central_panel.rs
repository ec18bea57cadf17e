use crate::DrawerApp;
use crate::input::PointerSample;

pub fn central_panel(app: &mut DrawerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Dialogs over the canvas must not start gestures on it
        if !app.has_open_dialog() {
            let sample = ctx.input(|input| PointerSample::from_egui(input, canvas_rect));
            app.handle_pointer(&sample);
        }

        app.renderer().render(&painter, canvas_rect, app.editor().document());
    });
}
