use crate::app::MedQuizApp;
use crate::ui::helpers::{accent_color, card};
use crate::ui::layout::scroll_panel;
use egui::{Button, Context, RichText};

const FEATURES: [(&str, &str); 4] = [
    ("🧠 System-based learning", "Questions organised by organ system and discipline."),
    ("📝 Practice tests", "Mixed, system-focused or timed sessions drawn at random."),
    ("💡 Detailed explanations", "Every answer comes with the reasoning behind it."),
    ("📊 Instant results", "Score, time taken and a full review when you finish."),
];

pub fn ui_home(app: &mut MedQuizApp, ctx: &Context) {
    let featured: Vec<_> = app.system_infos().into_iter().take(3).collect();
    let total = app.corpus.total_questions();
    let systems = app.corpus.systems.len();

    scroll_panel(ctx, 760.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading(RichText::new("Master Medicine, One System at a Time").size(28.0));
            ui.add_space(6.0);
            ui.label(format!(
                "{total} multiple-choice questions across {systems} medical systems, \
                 with explanations for every answer."
            ));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - 328.0) / 2.0).max(0.0));
                if ui.add_sized([160.0, 36.0], Button::new("🔍 Explore systems")).clicked() {
                    app.open_systems();
                }
                if ui.add_sized([160.0, 36.0], Button::new("📝 Practice tests")).clicked() {
                    app.open_practice_setup();
                }
            });
        });

        ui.add_space(20.0);
        egui::Grid::new("home_features")
            .num_columns(2)
            .spacing([16.0, 12.0])
            .show(ui, |ui| {
                for (i, (title, text)) in FEATURES.iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.strong(*title);
                        ui.label(*text);
                    });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(20.0);
        ui.heading("Featured systems");
        ui.add_space(6.0);
        for info in &featured {
            card(ui, accent_color(&info.accent), |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.strong(&info.name);
                        ui.label(&info.description);
                        ui.weak(format!("{} questions", info.question_count));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Open ➡").clicked() {
                            app.open_system(&info.id);
                        }
                    });
                });
            });
            ui.add_space(6.0);
        }
    });
}
