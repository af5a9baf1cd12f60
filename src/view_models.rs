// src/view_models.rs

use crate::model::Question;

/// Letra de una opción: 0 → 'A', 1 → 'B'…
pub fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Clone, Debug)]
pub struct CategoryInfo {
    pub id: String,
    pub question_count: usize,
}

impl CategoryInfo {
    pub fn label(&self) -> String {
        format!("{} ({} questions)", capitalize(&self.id), self.question_count)
    }
}

#[derive(Clone, Debug)]
pub struct SystemInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub accent: String,
    pub categories: Vec<CategoryInfo>,
    pub question_count: usize,
}

impl SystemInfo {
    pub fn categories_label(&self) -> String {
        self.categories
            .iter()
            .map(|c| capitalize(&c.id))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewStatus {
    Correct,
    Incorrect,
    Unanswered,
}

impl ReviewStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Correct => "✅ Correct",
            ReviewStatus::Incorrect => "❌ Incorrect",
            ReviewStatus::Unanswered => "— Unanswered",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReviewRow {
    pub number: usize,
    pub system_name: String,
    pub category: String,
    pub chosen: Option<char>,
    pub correct: char,
    pub status: ReviewStatus,
}

/// Estado de cada casilla de la paleta de navegación del quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteCell {
    pub index: usize,
    pub answered: bool,
    pub current: bool,
}

/// Todo lo que pinta la pantalla del quiz, copiado para no retener el
/// préstamo de la sesión mientras se dibuja.
#[derive(Clone, Debug)]
pub struct QuizScreen {
    pub title: String,
    pub position: usize,
    pub total: usize,
    pub caption: String,
    pub question: Question,
    pub chosen: Option<usize>,
    pub locked: bool,
    pub elapsed: String,
    pub remaining: Option<String>,
    pub running_percentage: u32,
    pub is_last: bool,
    pub palette: Vec<PaletteCell>,
}

impl QuizScreen {
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.position + 1) as f32 / self.total as f32
        }
    }

    pub fn show_explanation(&self) -> bool {
        self.chosen.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct ResultsScreen {
    pub heading: String,
    pub caption: String,
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub answered: usize,
    pub time_taken: String,
    pub time_up: bool,
    pub rows: Vec<ReviewRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
    }

    #[test]
    fn category_label_is_capitalized() {
        let info = CategoryInfo {
            id: "physiology".into(),
            question_count: 5,
        };
        assert_eq!(info.label(), "Physiology (5 questions)");
        assert_eq!(capitalize(""), "");
    }
}
