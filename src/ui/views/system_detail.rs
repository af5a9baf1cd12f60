use crate::app::MedQuizApp;
use crate::ui::helpers::{accent_color, big_list_button};
use crate::ui::layout::scroll_panel;
use egui::{Context, RichText};

pub fn ui_system_detail(app: &mut MedQuizApp, ctx: &Context) {
    let Some(info) = app.selected_system_info() else {
        app.show_not_found("No system selected.".into());
        return;
    };
    let (overview, topics) = app
        .corpus
        .system(&info.id)
        .map(|s| (s.overview.clone(), s.key_topics.clone()))
        .unwrap_or_default();
    let accent = accent_color(&info.accent);

    scroll_panel(ctx, 720.0, |ui| {
        if ui.link("⬅ All systems").clicked() {
            app.open_systems();
            return;
        }
        ui.add_space(6.0);
        ui.label(RichText::new(&info.name).heading().color(accent));
        ui.label(&info.description);
        ui.add_space(10.0);

        ui.strong("Overview");
        ui.label(&overview);
        ui.add_space(10.0);

        if !topics.is_empty() {
            ui.strong("Key topics");
            for topic in &topics {
                ui.label(format!("• {topic}"));
            }
            ui.add_space(10.0);
        }

        ui.strong("Quizzes");
        ui.add_space(4.0);
        let w = ui.available_width().min(420.0);
        let mut start = None;
        for category in &info.categories {
            let enabled = category.question_count > 0;
            if big_list_button(ui, format!("▶ {}", category.label()), w, 36.0, enabled) {
                start = Some(category.id.clone());
            }
            ui.add_space(4.0);
        }
        if let Some(category_id) = start {
            app.start_category_quiz(&info.id, &category_id);
        }
    });
}
