use crate::app::MedQuizApp;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_not_found(app: &mut MedQuizApp, ctx: &Context) {
    let message = if app.message.is_empty() {
        "The page you are looking for does not exist.".to_string()
    } else {
        app.message.clone()
    };

    centered_panel(ctx, 160.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🔎 Not found");
            ui.add_space(8.0);
            ui.label(message);
            ui.add_space(12.0);
            if ui.button("⬅ Back to systems").clicked() {
                app.open_systems();
            }
        });
    });
}
