use super::*;
use crate::model::System;
use crate::scoring::{format_clock, score};
use crate::session::FinishReason;
use crate::view_models::{
    CategoryInfo, PaletteCell, QuizScreen, ResultsScreen, ReviewRow, ReviewStatus, SystemInfo,
    capitalize, option_letter,
};

fn system_info(system: &System) -> SystemInfo {
    SystemInfo {
        id: system.id.clone(),
        name: system.name.clone(),
        description: system.description.clone(),
        accent: system.accent.clone(),
        categories: system
            .categories
            .iter()
            .map(|c| CategoryInfo {
                id: c.id.clone(),
                question_count: c.questions.len(),
            })
            .collect(),
        question_count: system.question_count(),
    }
}

impl MedQuizApp {
    pub fn system_infos(&self) -> Vec<SystemInfo> {
        self.corpus.systems.iter().map(system_info).collect()
    }

    pub fn selected_system_info(&self) -> Option<SystemInfo> {
        let id = self.selected_system.as_deref()?;
        self.corpus.system(id).map(system_info)
    }

    fn quiz_title(&self, kind: &QuizKind) -> String {
        match kind {
            QuizKind::Category {
                system_id,
                category_id,
            } => {
                let name = self
                    .corpus
                    .system(system_id)
                    .map(|s| s.name.as_str())
                    .unwrap_or(system_id.as_str());
                format!("{name} - {}", capitalize(category_id))
            }
            QuizKind::Practice(config) => match config.mode {
                PracticeMode::Mixed => "🔀 Mixed Questions Practice".to_string(),
                PracticeMode::Systems => "🎯 System-Based Practice".to_string(),
                PracticeMode::Timed => "⏱ Timed Practice".to_string(),
            },
        }
    }

    pub fn quiz_screen(&self) -> Option<QuizScreen> {
        let active = self.active.as_ref()?;
        let session = &active.session;
        let current = session.current_question()?;
        let report = score(session);

        Some(QuizScreen {
            title: self.quiz_title(&active.kind),
            position: session.current_index(),
            total: session.len(),
            caption: format!("{} - {}", current.system_name, current.category()),
            question: current.question.clone(),
            chosen: session.current_answer(),
            locked: active.is_locked(),
            elapsed: format_clock(session.elapsed_secs()),
            remaining: session.remaining_secs().map(format_clock),
            running_percentage: report.percentage,
            is_last: session.is_last(),
            palette: (0..session.len())
                .map(|i| PaletteCell {
                    index: i,
                    answered: session.answer_at(i).is_some(),
                    current: i == session.current_index(),
                })
                .collect(),
        })
    }

    pub fn results_screen(&self) -> Option<ResultsScreen> {
        let active = self.active.as_ref()?;
        let session = &active.session;
        let report = score(session);

        let (heading, caption) = match &active.kind {
            QuizKind::Category { .. } => ("Quiz Completed!".to_string(), self.quiz_title(&active.kind)),
            QuizKind::Practice(config) => {
                let caption = match config.mode {
                    PracticeMode::Mixed => "Mixed Questions Practice".to_string(),
                    PracticeMode::Systems => {
                        format!("System-Based Practice ({} systems)", config.systems.len())
                    }
                    PracticeMode::Timed => format!(
                        "Timed Practice ({} minutes)",
                        config.time_limit_secs.unwrap_or(0) / 60
                    ),
                };
                ("Practice Test Completed!".to_string(), caption)
            }
        };

        let rows = session
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let chosen = session.answer_at(i);
                let status = match chosen {
                    None => ReviewStatus::Unanswered,
                    Some(opt) if q.question.is_correct(opt) => ReviewStatus::Correct,
                    Some(_) => ReviewStatus::Incorrect,
                };
                ReviewRow {
                    number: i + 1,
                    system_name: q.system_name.clone(),
                    category: capitalize(q.category()),
                    chosen: chosen.map(option_letter),
                    correct: option_letter(q.question.correct),
                    status,
                }
            })
            .collect();

        Some(ResultsScreen {
            heading,
            caption,
            correct: report.correct,
            total: report.total,
            percentage: report.percentage,
            answered: report.answered,
            time_taken: format_clock(report.elapsed_secs),
            time_up: session.finish_reason() == Some(FinishReason::TimeUp),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use crate::view_models::ReviewStatus;

    #[test]
    fn quiz_screen_reflects_session() {
        let mut app = app();
        app.start_category_quiz("cardiovascular", "anatomy");
        app.choose_option(0);

        let screen = app.quiz_screen().unwrap();
        assert_eq!(screen.title, "cardiovascular system - Anatomy");
        assert_eq!(screen.total, 5);
        assert_eq!(screen.chosen, Some(0));
        assert!(screen.locked && screen.show_explanation());
        assert_eq!(screen.running_percentage, 20);
        assert_eq!(screen.remaining, None);
        assert!((screen.progress() - 0.2).abs() < f32::EPSILON);
        assert!(screen.palette[0].answered && screen.palette[0].current);
    }

    #[test]
    fn results_rows_mark_each_question() {
        let mut app = app();
        app.start_category_quiz("renal", "physiology");
        app.choose_option(0); // correcta (correct = 0)
        app.next_question();
        app.choose_option(3); // incorrecta (correct = 1)
        app.finish_now();

        let results = app.results_screen().unwrap();
        assert_eq!(results.heading, "Quiz Completed!");
        assert_eq!((results.correct, results.total, results.answered), (1, 3, 2));
        assert_eq!(results.percentage, 33);
        let statuses: Vec<ReviewStatus> = results.rows.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            [ReviewStatus::Correct, ReviewStatus::Incorrect, ReviewStatus::Unanswered]
        );
        assert_eq!(results.rows[1].chosen, Some('D'));
        assert_eq!(results.rows[1].correct, 'B');
    }
}
