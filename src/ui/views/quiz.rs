use crate::app::MedQuizApp;
use crate::ui::helpers::{CORRECT, INCORRECT, option_button};
use crate::ui::layout::scroll_panel;
use crate::view_models::option_letter;
use egui::{Button, Color32, Context, ProgressBar, RichText, Vec2};

pub fn ui_quiz(app: &mut MedQuizApp, ctx: &Context) {
    let Some(screen) = app.quiz_screen() else {
        // Sesión vacía o ya cerrada
        app.check_finished();
        return;
    };

    scroll_panel(ctx, 720.0, |ui| {
        // ----------- CABECERA -----------
        ui.horizontal(|ui| {
            if ui.button("⬅ Back").clicked() {
                app.back_from_quiz();
            }
            ui.heading(&screen.title);
        });
        ui.horizontal(|ui| {
            ui.label(format!("⏱ {}", screen.elapsed));
            if let Some(remaining) = &screen.remaining {
                ui.separator();
                ui.colored_label(Color32::from_rgb(230, 140, 30), format!("⌛ {remaining} left"));
            }
            ui.separator();
            ui.label(format!("Score: {}%", screen.running_percentage));
        });
        ui.add_space(6.0);
        ui.label(format!("Question {} of {}", screen.position + 1, screen.total));
        ui.add(ProgressBar::new(screen.progress()).desired_height(8.0));
        ui.weak(&screen.caption);
        ui.add_space(10.0);

        // ----------- PREGUNTA -----------
        ui.label(RichText::new(&screen.question.prompt).size(17.0));
        ui.add_space(10.0);

        let revealed = screen.show_explanation();
        let width = ui.available_width();
        let mut picked = None;
        for (i, text) in screen.question.options.iter().enumerate() {
            let label = format!("{}. {text}", option_letter(i));
            if option_button(
                ui,
                label,
                width,
                screen.question.is_correct(i),
                screen.chosen == Some(i),
                revealed && screen.locked,
                !screen.locked,
            ) {
                picked = Some(i);
            }
            ui.add_space(4.0);
        }
        if let Some(i) = picked {
            app.choose_option(i);
        }

        if let (Some(chosen), true) = (screen.chosen, screen.locked) {
            ui.add_space(8.0);
            let (text, color) = if screen.question.is_correct(chosen) {
                ("✅ Correct!", CORRECT)
            } else {
                ("❌ Incorrect", INCORRECT)
            };
            ui.colored_label(color, RichText::new(text).strong());
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.strong("Explanation");
                ui.label(&screen.question.explanation);
            });
            if ui.button("✏ Change answer").clicked() {
                app.unlock_answer();
            }
        }

        // ----------- NAVEGACIÓN -----------
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let prev = ui.add_enabled(screen.position > 0, Button::new("⬅ Previous"));
            let next_label = if screen.is_last { "🏁 Finish" } else { "Next ➡" };
            let next = ui.button(next_label);
            let finish = ui.button("⏹ Finish now");
            if prev.clicked() {
                app.previous_question();
            } else if next.clicked() {
                app.next_question();
            } else if finish.clicked() {
                app.finish_now();
            }
        });

        ui.add_space(12.0);
        ui.weak("Questions");
        ui.horizontal_wrapped(|ui| {
            for cell in &screen.palette {
                let mut button = Button::new(format!("{}", cell.index + 1)).min_size(Vec2::new(32.0, 28.0));
                if cell.answered {
                    button = button.fill(ui.visuals().selection.bg_fill);
                }
                let response = ui.add(button.selected(cell.current));
                if response.clicked() && !cell.current {
                    app.jump_to(cell.index);
                }
            }
        });
    });
}
