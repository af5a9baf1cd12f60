use crate::assistant::AssistantChat;
use crate::carrier::{ConfigCarrier, default_carrier};
use crate::clock::SessionClock;
use crate::config::AppConfig;
use crate::contact::ContactForm;
use crate::data::{read_corpus_embedded, read_sources_embedded};
use crate::errors::CorpusError;
use crate::model::{AppState, Corpus, PracticeConfig, PracticeMode, SourceCatalog};
use crate::session::SessionState;
use rand::rngs::StdRng;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod practice;
pub mod updates;
pub mod view_models;

/// De dónde salen las preguntas de la sesión activa.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizKind {
    Category {
        system_id: String,
        category_id: String,
    },
    Practice(PracticeConfig),
}

/// Quiz en curso (o recién terminado) junto con su reloj.
/// Al soltarlo deja de contar el tiempo.
pub struct ActiveQuiz {
    pub kind: QuizKind,
    pub session: SessionState,
    pub clock: SessionClock,
    /// La pregunta actual ya respondida se ha desbloqueado para cambiarla
    pub editing: bool,
}

impl ActiveQuiz {
    pub fn new(kind: QuizKind, session: SessionState) -> Self {
        Self {
            kind,
            session,
            clock: SessionClock::new(),
            editing: false,
        }
    }

    /// Opciones bloqueadas: la pregunta tiene respuesta y no se ha pedido cambiarla.
    pub fn is_locked(&self) -> bool {
        self.session.current_answer().is_some() && !self.editing
    }
}

/// Borrador de la pantalla de ajustes de práctica.
#[derive(Clone, Debug)]
pub struct PracticeDraft {
    pub mode: Option<PracticeMode>,
    pub systems: Vec<String>,
    pub question_count: usize,
    pub time_limit_min: u64,
}

impl PracticeDraft {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            mode: None,
            systems: Vec::new(),
            question_count: config.default_question_count,
            time_limit_min: config.default_time_limit_min,
        }
    }

    pub fn toggle_system(&mut self, system_id: &str) {
        if let Some(pos) = self.systems.iter().position(|s| s == system_id) {
            self.systems.remove(pos);
        } else {
            self.systems.push(system_id.to_string());
        }
    }

    pub fn is_selected(&self, system_id: &str) -> bool {
        self.systems.iter().any(|s| s == system_id)
    }

    /// El botón de empezar sólo se habilita con modo elegido y, en modo
    /// por sistemas, al menos un sistema marcado.
    pub fn can_start(&self) -> bool {
        match self.mode {
            None => false,
            Some(PracticeMode::Systems) => !self.systems.is_empty(),
            Some(_) => true,
        }
    }

    pub fn to_config(&self) -> Option<PracticeConfig> {
        let config = match self.mode? {
            PracticeMode::Mixed => PracticeConfig::mixed(self.question_count),
            PracticeMode::Systems => {
                PracticeConfig::systems(self.systems.iter().cloned(), self.question_count)
            }
            PracticeMode::Timed => {
                PracticeConfig::timed(self.question_count, self.time_limit_min * 60)
            }
        };
        Some(config)
    }
}

pub struct MedQuizApp {
    pub corpus: Corpus,
    pub sources: SourceCatalog,
    pub config: AppConfig,
    pub state: AppState,
    pub selected_system: Option<String>,
    pub setup: PracticeDraft,
    pub active: Option<ActiveQuiz>,
    pub assistant: AssistantChat,
    pub contact: ContactForm,
    pub message: String,
    pub dark_mode: bool,
    pub(crate) carrier: Box<dyn ConfigCarrier>,
    pub(crate) rng: StdRng,
}

impl MedQuizApp {
    /// Carga el banco embebido y la configuración del entorno.
    pub fn new() -> Result<Self, CorpusError> {
        let config = AppConfig::load();
        let corpus = read_corpus_embedded()?;
        let sources = read_sources_embedded()?;
        log::info!(
            "banco listo: {} sistemas, {} preguntas",
            corpus.systems.len(),
            corpus.total_questions()
        );
        Ok(Self::with_parts(corpus, sources, config, default_carrier()))
    }

    pub fn with_parts(
        corpus: Corpus,
        sources: SourceCatalog,
        config: AppConfig,
        carrier: Box<dyn ConfigCarrier>,
    ) -> Self {
        let rng = config.rng();
        let setup = PracticeDraft::from_config(&config);
        Self {
            corpus,
            sources,
            config,
            state: AppState::Home,
            selected_system: None,
            setup,
            active: None,
            assistant: AssistantChat::default(),
            contact: ContactForm::default(),
            message: String::new(),
            dark_mode: true,
            carrier,
            rng,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::carrier::MemoryCarrier;
    use crate::model::fixtures::small_corpus;

    pub fn app() -> MedQuizApp {
        let config = AppConfig {
            seed: Some(17),
            ..AppConfig::default()
        };
        MedQuizApp::with_parts(
            small_corpus(),
            SourceCatalog::default(),
            config,
            Box::new(MemoryCarrier::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_systems_in_system_mode() {
        let mut draft = PracticeDraft::from_config(&AppConfig::default());
        assert!(!draft.can_start());

        draft.mode = Some(PracticeMode::Systems);
        assert!(!draft.can_start());
        draft.toggle_system("renal");
        assert!(draft.can_start());
        draft.toggle_system("renal");
        assert!(!draft.is_selected("renal"));

        draft.mode = Some(PracticeMode::Timed);
        draft.time_limit_min = 15;
        assert_eq!(draft.to_config(), Some(PracticeConfig::timed(20, 900)));
    }
}
