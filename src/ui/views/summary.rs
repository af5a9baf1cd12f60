use crate::app::{MedQuizApp, QuizKind};
use crate::ui::helpers::{CORRECT, INCORRECT};
use crate::ui::layout::{scroll_panel, two_button_row};
use crate::view_models::ReviewStatus;
use egui::{Color32, Context, Grid, RichText};

pub fn ui_summary(app: &mut MedQuizApp, ctx: &Context) {
    let Some(results) = app.results_screen() else {
        app.go_home();
        return;
    };
    let is_practice = matches!(
        app.active.as_ref().map(|a| &a.kind),
        Some(QuizKind::Practice(_))
    );

    scroll_panel(ctx, 720.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(&results.heading);
            ui.weak(&results.caption);
            ui.add_space(10.0);
            ui.label(RichText::new(format!("{}%", results.percentage)).size(40.0).strong());
            ui.label(format!("{} of {} correct", results.correct, results.total));
            ui.label(format!(
                "Answered {} of {} · Time {}",
                results.answered, results.total, results.time_taken
            ));
            if results.time_up {
                ui.colored_label(Color32::from_rgb(230, 140, 30), "⌛ Time's up!");
            }
        });

        ui.add_space(14.0);
        ui.strong("Review");
        ui.add_space(4.0);
        Grid::new("quiz_results_grid")
            .striped(true)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label("#");
                ui.label("System");
                ui.label("Category");
                ui.label("Yours");
                ui.label("Correct");
                ui.label("Status");
                ui.end_row();

                for r in &results.rows {
                    ui.label(r.number.to_string());
                    ui.label(&r.system_name);
                    ui.label(&r.category);
                    ui.label(r.chosen.map_or("-".to_string(), |c| c.to_string()));
                    ui.label(r.correct.to_string());
                    let color = match r.status {
                        ReviewStatus::Correct => CORRECT,
                        ReviewStatus::Incorrect => INCORRECT,
                        ReviewStatus::Unanswered => ui.visuals().weak_text_color(),
                    };
                    ui.colored_label(color, r.status.label());
                    ui.end_row();
                }
            });

        // Botones de control
        ui.add_space(16.0);
        let width = ui.available_width().min(480.0);
        let back_label = if is_practice {
            "📝 New practice test"
        } else {
            "⬅ Back to system"
        };
        let (retake, back) = two_button_row(ui, width, "🔄 Retake", back_label);
        ui.add_space(6.0);
        let explore = ui
            .vertical_centered(|ui| ui.button("🔍 Explore systems").clicked())
            .inner;

        if retake {
            app.retake();
        } else if back {
            app.back_from_quiz();
        } else if explore {
            app.open_systems();
        }
    });
}
