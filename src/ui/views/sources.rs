use crate::app::MedQuizApp;
use crate::ui::layout::scroll_panel;
use egui::Context;

pub fn ui_sources(app: &mut MedQuizApp, ctx: &Context) {
    scroll_panel(ctx, 760.0, |ui| {
        ui.heading("Sources & Resources");
        ui.label("Textbooks and references the questions draw on, plus material for further study.");
        ui.add_space(10.0);

        for section in &app.sources.sections {
            ui.strong(&section.title);
            ui.add_space(4.0);
            for resource in &section.resources {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&resource.title).strong());
                        ui.weak(format!("[{}]", resource.kind));
                    });
                    ui.weak(&resource.author);
                    ui.label(&resource.description);
                    ui.hyperlink_to("Open ↗", &resource.url);
                });
                ui.add_space(4.0);
            }
            ui.add_space(10.0);
        }
    });
}
