use crate::app::MedQuizApp;
use crate::model::PracticeMode;
use crate::ui::helpers::card;
use crate::ui::layout::scroll_panel;
use egui::{Button, Color32, Context, RichText};

pub fn ui_practice_setup(app: &mut MedQuizApp, ctx: &Context) {
    let counts = app.config.question_counts.clone();
    let limits = app.config.time_limits_min.clone();
    let systems: Vec<(String, String)> = app
        .corpus
        .systems
        .iter()
        .map(|s| (s.id.clone(), s.name.clone()))
        .collect();

    scroll_panel(ctx, 760.0, |ui| {
        ui.heading("Practice Tests");
        ui.label("Pick a mode, tune the settings and start a randomly drawn test.");
        ui.add_space(10.0);

        // ----------- MODOS -----------
        for mode in PracticeMode::ALL {
            let selected = app.setup.mode == Some(mode);
            let accent = if selected {
                ui.visuals().selection.stroke.color
            } else {
                ui.visuals().widgets.noninteractive.bg_stroke.color
            };
            card(ui, accent, |ui| {
                if ui
                    .selectable_label(selected, RichText::new(mode.title()).strong().size(17.0))
                    .clicked()
                {
                    app.setup.mode = Some(mode);
                    app.message.clear();
                }
                ui.label(mode.description());
                for feature in mode.features() {
                    ui.weak(format!("✔ {feature}"));
                }
            });
            ui.add_space(6.0);
        }

        let Some(mode) = app.setup.mode else {
            ui.add_space(6.0);
            ui.weak("Select a practice mode to continue.");
            return;
        };

        // ----------- AJUSTES -----------
        ui.add_space(10.0);
        ui.strong("Number of questions");
        ui.horizontal(|ui| {
            for n in &counts {
                ui.radio_value(&mut app.setup.question_count, *n, n.to_string());
            }
        });

        if mode == PracticeMode::Timed {
            ui.add_space(8.0);
            ui.strong("Time limit");
            ui.horizontal(|ui| {
                for m in &limits {
                    ui.radio_value(&mut app.setup.time_limit_min, *m, format!("{m} min"));
                }
            });
        }

        if mode == PracticeMode::Systems {
            ui.add_space(8.0);
            ui.strong("Systems");
            egui::Grid::new("practice_systems")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    for (i, (id, name)) in systems.iter().enumerate() {
                        let mut checked = app.setup.is_selected(id);
                        if ui.checkbox(&mut checked, name).changed() {
                            app.setup.toggle_system(id);
                        }
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
            let n = app.setup.systems.len();
            ui.add_space(4.0);
            if n == 0 {
                ui.colored_label(Color32::RED, "Select at least one system to start.");
            } else {
                ui.weak(format!("{n} system(s) selected"));
            }
        }

        ui.add_space(14.0);
        if !app.message.is_empty() {
            ui.colored_label(Color32::RED, &app.message);
            ui.add_space(6.0);
        }
        let start = ui.add_enabled(
            app.setup.can_start(),
            Button::new("▶ Start Practice Test").min_size(egui::vec2(220.0, 40.0)),
        );
        if start.clicked() {
            app.start_practice();
        }
    });
}
