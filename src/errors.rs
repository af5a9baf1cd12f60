use thiserror::Error;

/// Fallos al cargar o validar el banco de preguntas embebido.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("could not parse question bank: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate system id: {0}")]
    DuplicateSystem(String),

    #[error("system {0} has no categories")]
    NoCategories(String),

    #[error("category {system}/{category} has no questions")]
    EmptyCategory { system: String, category: String },

    #[error("question {system}/{category}#{index} has fewer than two options")]
    TooFewOptions {
        system: String,
        category: String,
        index: usize,
    },

    #[error("question {system}/{category}#{index} marks option {correct} as correct but has {options} options")]
    CorrectOutOfRange {
        system: String,
        category: String,
        index: usize,
        correct: usize,
        options: usize,
    },
}

/// Configuración de práctica inválida: la sesión no debe arrancar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("select at least one medical system")]
    EmptySystemFilter,

    #[error("the question count must be positive")]
    ZeroQuestionCount,

    #[error("timed practice needs a positive time limit")]
    MissingTimeLimit,

    #[error("no questions available for the selected systems")]
    EmptyPool,

    #[error("stored practice configuration is unreadable: {0}")]
    Malformed(String),
}

/// Búsquedas de sistema/categoría que no existen (URL vieja o inventada).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("system not found: {0}")]
    UnknownSystem(String),

    #[error("category {category} not found in system {system}")]
    UnknownCategory { system: String, category: String },
}

/// Entradas rechazadas por la máquina de estados de la sesión.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the session is already completed")]
    Completed,

    #[error("option {option} out of range ({available} options)")]
    OptionOutOfRange { option: usize, available: usize },

    #[error("question {index} out of range ({len} questions)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("the {0} field is required")]
    MissingField(&'static str),

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("please select a subject")]
    MissingSubject,
}
