use serde::{Deserialize, Serialize};

/// Una pregunta de opción múltiple tal y como viene del banco.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,       // Enunciado
    pub options: Vec<String>, // El orden decide las letras A, B, C…
    pub correct: usize,       // Índice 0-based dentro de `options`
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct == option
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    pub id: String,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct System {
    pub id: String,
    pub name: String,
    pub description: String,
    pub overview: String,
    pub accent: String,
    #[serde(default)]
    pub key_topics: Vec<String>,
    pub categories: Vec<Category>,
}

impl System {
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }
}

/// Banco completo: sistemas → categorías → preguntas. Sólo lectura.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Corpus {
    pub systems: Vec<System>,
}

impl Corpus {
    pub fn system(&self, system_id: &str) -> Option<&System> {
        self.systems.iter().find(|s| s.id == system_id)
    }

    /// Preguntas de un par (sistema, categoría); vacío si no existe.
    pub fn questions(&self, system_id: &str, category_id: &str) -> &[Question] {
        self.system(system_id)
            .and_then(|s| s.category(category_id))
            .map(|c| c.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_questions(&self) -> usize {
        self.systems.iter().map(System::question_count).sum()
    }
}

/// Identifica una pregunta dentro del banco ("cardiovascular-anatomy-0").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId {
    pub system: String,
    pub category: String,
    pub index: usize,
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.system, self.category, self.index)
    }
}

/// Pregunta ya extraída del banco para una sesión, con su procedencia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledQuestion {
    pub id: QuestionId,
    pub system_name: String,
    pub question: Question,
}

impl SampledQuestion {
    pub fn category(&self) -> &str {
        &self.id.category
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PracticeMode {
    Mixed,
    Systems,
    Timed,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 3] = [PracticeMode::Mixed, PracticeMode::Systems, PracticeMode::Timed];

    pub fn title(self) -> &'static str {
        match self {
            PracticeMode::Mixed => "Mixed Questions",
            PracticeMode::Systems => "System-Based",
            PracticeMode::Timed => "Timed Practice",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PracticeMode::Mixed => "Random questions from all medical systems",
            PracticeMode::Systems => "Choose specific medical systems to focus on",
            PracticeMode::Timed => "Exam-style timed questions with countdown",
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            PracticeMode::Mixed => &["Random selection", "All systems included", "Comprehensive review"],
            PracticeMode::Systems => &["Choose systems", "Focused learning", "Category selection"],
            PracticeMode::Timed => &["Time pressure", "Exam simulation", "Performance tracking"],
        }
    }
}

/// Configuración de un test de práctica. Se crea en la pantalla de ajustes
/// y se consume una sola vez al arrancar la sesión.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PracticeConfig {
    pub mode: PracticeMode,
    #[serde(default)]
    pub systems: Vec<String>,
    pub question_count: usize,
    #[serde(default)]
    pub time_limit_secs: Option<u64>,
}

impl PracticeConfig {
    pub fn mixed(question_count: usize) -> Self {
        Self {
            mode: PracticeMode::Mixed,
            systems: Vec::new(),
            question_count,
            time_limit_secs: None,
        }
    }

    pub fn systems<I, S>(systems: I, question_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: PracticeMode::Systems,
            systems: systems.into_iter().map(Into::into).collect(),
            question_count,
            time_limit_secs: None,
        }
    }

    pub fn timed(question_count: usize, time_limit_secs: u64) -> Self {
        Self {
            mode: PracticeMode::Timed,
            systems: Vec::new(),
            question_count,
            time_limit_secs: Some(time_limit_secs),
        }
    }

    /// Límite efectivo: sólo cuenta en modo cronometrado.
    pub fn effective_time_limit(&self) -> Option<u64> {
        match self.mode {
            PracticeMode::Timed => self.time_limit_secs,
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Home,
    Systems,
    SystemDetail,
    PracticeSetup,
    Quiz,
    Summary,
    Sources,
    Contact,
    NotFound,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Resource {
    pub title: String,
    pub author: String,
    pub description: String,
    pub kind: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SourceSection {
    pub title: String,
    pub resources: Vec<Resource>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SourceCatalog {
    pub sections: Vec<SourceSection>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn question(n: usize, correct: usize) -> Question {
        Question {
            prompt: format!("Question {n}?"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct,
            explanation: format!("Because {n}."),
        }
    }

    pub fn system(id: &str, categories: &[(&str, usize)]) -> System {
        System {
            id: id.to_string(),
            name: format!("{id} system"),
            description: String::new(),
            overview: String::new(),
            accent: "#3b82f6".into(),
            key_topics: vec![],
            categories: categories
                .iter()
                .map(|(cid, n)| Category {
                    id: cid.to_string(),
                    questions: (0..*n).map(|i| question(i, i % 4)).collect(),
                })
                .collect(),
        }
    }

    /// 5 preguntas en cardiovascular/anatomy + 3 en renal/physiology.
    pub fn small_corpus() -> Corpus {
        Corpus {
            systems: vec![
                system("cardiovascular", &[("anatomy", 5)]),
                system("renal", &[("physiology", 3)]),
            ],
        }
    }

    pub fn sampled(n: usize) -> Vec<SampledQuestion> {
        (0..n)
            .map(|i| SampledQuestion {
                id: QuestionId {
                    system: "cardiovascular".into(),
                    category: "anatomy".into(),
                    index: i,
                },
                system_name: "Cardiovascular System".into(),
                question: question(i, i % 4),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::small_corpus;

    #[test]
    fn corpus_lookup_returns_empty_for_unknown_pairs() {
        let corpus = small_corpus();
        assert_eq!(corpus.questions("cardiovascular", "anatomy").len(), 5);
        assert!(corpus.questions("cardiovascular", "pathology").is_empty());
        assert!(corpus.questions("nope", "anatomy").is_empty());
        assert!(corpus.system("nope").is_none());
        assert_eq!(corpus.total_questions(), 8);
    }
}
