//! Selección de preguntas para una sesión.
//!
//! Ambas funciones son puras: el generador aleatorio entra como argumento,
//! así los tests pueden fijar la semilla.

use crate::errors::{ConfigError, LookupError};
use crate::model::{Corpus, PracticeConfig, PracticeMode, QuestionId, SampledQuestion, System};
use rand::Rng;
use rand::seq::SliceRandom;

/// Valida la configuración antes de tocar el banco.
pub fn validate_config(config: &PracticeConfig) -> Result<(), ConfigError> {
    if config.question_count == 0 {
        return Err(ConfigError::ZeroQuestionCount);
    }
    match config.mode {
        PracticeMode::Systems if config.systems.is_empty() => Err(ConfigError::EmptySystemFilter),
        PracticeMode::Timed if !config.time_limit_secs.is_some_and(|t| t > 0) => {
            Err(ConfigError::MissingTimeLimit)
        }
        _ => Ok(()),
    }
}

/// Pool de candidatas para una configuración, en orden del banco.
/// Los ids de sistema desconocidos del filtro se ignoran.
pub fn candidate_pool(config: &PracticeConfig, corpus: &Corpus) -> Vec<SampledQuestion> {
    let systems: Vec<&System> = match config.mode {
        PracticeMode::Mixed | PracticeMode::Timed => corpus.systems.iter().collect(),
        PracticeMode::Systems => corpus
            .systems
            .iter()
            .filter(|s| config.systems.iter().any(|id| *id == s.id))
            .collect(),
    };

    systems
        .into_iter()
        .flat_map(|system| {
            system.categories.iter().flat_map(move |category| {
                category
                    .questions
                    .iter()
                    .enumerate()
                    .map(move |(index, q)| SampledQuestion {
                        id: QuestionId {
                            system: system.id.clone(),
                            category: category.id.clone(),
                            index,
                        },
                        system_name: system.name.clone(),
                        question: q.clone(),
                    })
            })
        })
        .collect()
}

/// Permutación uniforme del pool truncada a `min(question_count, pool)`.
/// Sin reemplazo; pedir más de las que hay no es un error.
pub fn select<R: Rng + ?Sized>(
    config: &PracticeConfig,
    corpus: &Corpus,
    rng: &mut R,
) -> Result<Vec<SampledQuestion>, ConfigError> {
    validate_config(config)?;

    let mut pool = candidate_pool(config, corpus);
    if pool.is_empty() {
        return Err(ConfigError::EmptyPool);
    }

    pool.shuffle(rng);
    pool.truncate(config.question_count);
    log::debug!(
        "seleccionadas {} preguntas ({:?}, pedidas {})",
        pool.len(),
        config.mode,
        config.question_count
    );
    Ok(pool)
}

/// Todas las preguntas de una categoría, en el orden del banco.
pub fn select_category(
    corpus: &Corpus,
    system_id: &str,
    category_id: &str,
) -> Result<Vec<SampledQuestion>, LookupError> {
    let system = corpus
        .system(system_id)
        .ok_or_else(|| LookupError::UnknownSystem(system_id.to_string()))?;
    let category = system
        .category(category_id)
        .ok_or_else(|| LookupError::UnknownCategory {
            system: system_id.to_string(),
            category: category_id.to_string(),
        })?;

    Ok(category
        .questions
        .iter()
        .enumerate()
        .map(|(index, q)| SampledQuestion {
            id: QuestionId {
                system: system.id.clone(),
                category: category.id.clone(),
                index,
            },
            system_name: system.name.clone(),
            question: q.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{small_corpus, system};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn distinct(sample: &[SampledQuestion]) -> usize {
        sample.iter().map(|q| &q.id).collect::<HashSet<_>>().len()
    }

    #[test]
    fn system_filter_samples_distinct_questions_from_the_filter() {
        let corpus = small_corpus();
        let config = PracticeConfig::systems(["cardiovascular"], 3);
        let mut rng = StdRng::seed_from_u64(7);

        let sample = select(&config, &corpus, &mut rng).expect("sample");
        assert_eq!(sample.len(), 3);
        assert_eq!(distinct(&sample), 3);
        assert!(sample.iter().all(|q| q.id.system == "cardiovascular" && q.id.category == "anatomy"));
    }

    #[test]
    fn oversized_request_returns_the_whole_pool() {
        let corpus = crate::model::Corpus {
            systems: vec![
                system("cardiovascular", &[("anatomy", 30), ("physiology", 20)]),
                system("histology", &[("general", 30)]),
            ],
        };
        let mut rng = StdRng::seed_from_u64(42);

        let sample = select(&PracticeConfig::mixed(1000), &corpus, &mut rng).expect("sample");
        assert_eq!(sample.len(), 80);
        assert_eq!(distinct(&sample), 80);

        let in_bank_order = candidate_pool(&PracticeConfig::mixed(1000), &corpus);
        assert_ne!(sample, in_bank_order, "80 elements should not shuffle to identity");
    }

    #[test]
    fn timed_mode_draws_from_every_system() {
        let corpus = small_corpus();
        let mut rng = StdRng::seed_from_u64(3);
        let sample = select(&PracticeConfig::timed(8, 60), &corpus, &mut rng).expect("sample");
        let systems: HashSet<_> = sample.iter().map(|q| q.id.system.as_str()).collect();
        assert_eq!(systems.len(), 2);
    }

    #[test]
    fn same_seed_same_sample() {
        let corpus = small_corpus();
        let config = PracticeConfig::mixed(4);
        let a = select(&config, &corpus, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = select(&config, &corpus, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_configurations_are_rejected() {
        let corpus = small_corpus();
        let mut rng = StdRng::seed_from_u64(0);

        let empty_filter = PracticeConfig::systems(Vec::<String>::new(), 5);
        assert_eq!(
            select(&empty_filter, &corpus, &mut rng),
            Err(ConfigError::EmptySystemFilter)
        );
        assert_eq!(
            select(&PracticeConfig::mixed(0), &corpus, &mut rng),
            Err(ConfigError::ZeroQuestionCount)
        );
        assert_eq!(
            select(&PracticeConfig::timed(5, 0), &corpus, &mut rng),
            Err(ConfigError::MissingTimeLimit)
        );
        assert_eq!(
            select(&PracticeConfig::systems(["unknown"], 5), &corpus, &mut rng),
            Err(ConfigError::EmptyPool)
        );
    }

    #[test]
    fn system_filter_ignores_time_limit_and_unknown_ids() {
        let corpus = small_corpus();
        let mut config = PracticeConfig::systems(["renal", "unknown"], 10);
        config.time_limit_secs = Some(5);
        assert_eq!(config.effective_time_limit(), None);

        let sample = select(&config, &corpus, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().all(|q| q.id.system == "renal"));
    }

    #[test]
    fn category_selection_keeps_bank_order() {
        let corpus = small_corpus();
        let questions = select_category(&corpus, "cardiovascular", "anatomy").unwrap();
        let indices: Vec<usize> = questions.iter().map(|q| q.id.index).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);

        assert_eq!(
            select_category(&corpus, "ghost", "anatomy"),
            Err(LookupError::UnknownSystem("ghost".into()))
        );
        assert!(matches!(
            select_category(&corpus, "renal", "anatomy"),
            Err(LookupError::UnknownCategory { .. })
        ));
    }
}
