use crate::app::MedQuizApp;
use crate::ui::helpers::{accent_color, big_list_button, card};
use crate::ui::layout::scroll_panel;
use egui::{Context, RichText};

pub fn ui_systems(app: &mut MedQuizApp, ctx: &Context) {
    let infos = app.system_infos();

    scroll_panel(ctx, 760.0, |ui| {
        ui.heading("Medical Systems");
        ui.label("Choose a system to study its anatomy, physiology and pathology questions.");
        ui.add_space(10.0);

        let mut clicked = None;
        for info in &infos {
            let accent = accent_color(&info.accent);
            card(ui, accent, |ui| {
                ui.label(RichText::new(&info.name).strong().color(accent).size(18.0));
                ui.label(&info.description);
                ui.add_space(4.0);
                ui.weak(format!(
                    "{} · {} questions",
                    info.categories_label(),
                    info.question_count
                ));
                ui.add_space(4.0);
                let w = ui.available_width().min(220.0);
                if big_list_button(ui, "Study this system ➡".to_string(), w, 30.0, true) {
                    clicked = Some(info.id.clone());
                }
            });
            ui.add_space(8.0);
        }

        if let Some(id) = clicked {
            app.open_system(&id);
        }
    });
}
