// src/data.rs

use crate::errors::CorpusError;
use crate::model::{Corpus, SourceCatalog};
use std::collections::HashSet;

const SYSTEMS_YAML: &str = include_str!("data/systems.yaml");
const SOURCES_YAML: &str = include_str!("data/sources.yaml");

/// Carga y valida el banco de preguntas desde el YAML embebido
pub fn read_corpus_embedded() -> Result<Corpus, CorpusError> {
    parse_corpus(SYSTEMS_YAML)
}

pub fn parse_corpus(text: &str) -> Result<Corpus, CorpusError> {
    let corpus: Corpus = serde_yaml::from_str(text)?;
    validate_corpus(&corpus)?;
    log::debug!(
        "banco cargado: {} sistemas, {} preguntas",
        corpus.systems.len(),
        corpus.total_questions()
    );
    Ok(corpus)
}

/// Comprueba los invariantes del banco: ids únicos, categorías no vacías,
/// al menos dos opciones y `correct` dentro de rango.
pub fn validate_corpus(corpus: &Corpus) -> Result<(), CorpusError> {
    let mut seen = HashSet::new();
    for system in &corpus.systems {
        if !seen.insert(system.id.as_str()) {
            return Err(CorpusError::DuplicateSystem(system.id.clone()));
        }
        if system.categories.is_empty() {
            return Err(CorpusError::NoCategories(system.id.clone()));
        }
        for category in &system.categories {
            if category.questions.is_empty() {
                return Err(CorpusError::EmptyCategory {
                    system: system.id.clone(),
                    category: category.id.clone(),
                });
            }
            for (index, q) in category.questions.iter().enumerate() {
                if q.options.len() < 2 {
                    return Err(CorpusError::TooFewOptions {
                        system: system.id.clone(),
                        category: category.id.clone(),
                        index,
                    });
                }
                if q.correct >= q.options.len() {
                    return Err(CorpusError::CorrectOutOfRange {
                        system: system.id.clone(),
                        category: category.id.clone(),
                        index,
                        correct: q.correct,
                        options: q.options.len(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Catálogo de recursos de la página de fuentes
pub fn read_sources_embedded() -> Result<SourceCatalog, CorpusError> {
    Ok(serde_yaml::from_str(SOURCES_YAML)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_corpus_loads_and_is_valid() {
        let corpus = read_corpus_embedded().expect("embedded corpus");
        assert_eq!(corpus.systems.len(), 14);
        let cardio = corpus.system("cardiovascular").expect("cardiovascular");
        let ids: Vec<&str> = cardio.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["anatomy", "physiology", "pathology"]);
        assert_eq!(corpus.system("histology").map(|s| s.categories.len()), Some(1));
        assert!(corpus.total_questions() > 100);
    }

    #[test]
    fn embedded_sources_load() {
        let catalog = read_sources_embedded().expect("sources");
        assert!(!catalog.sections.is_empty());
        assert!(catalog.sections.iter().all(|s| !s.resources.is_empty()));
    }

    #[test]
    fn rejects_correct_index_out_of_range() {
        let yaml = r#"
systems:
- id: renal
  name: Renal System
  description: d
  overview: o
  accent: '#eab308'
  categories:
  - id: anatomy
    questions:
    - prompt: p
      options: [a, b]
      correct: 2
      explanation: e
"#;
        let err = parse_corpus(yaml).unwrap_err();
        assert!(matches!(err, CorpusError::CorrectOutOfRange { correct: 2, options: 2, .. }));
    }

    #[test]
    fn rejects_empty_category_and_duplicates() {
        let empty = r#"
systems:
- id: renal
  name: Renal System
  description: d
  overview: o
  accent: '#eab308'
  categories:
  - id: anatomy
    questions: []
"#;
        assert!(matches!(
            parse_corpus(empty).unwrap_err(),
            CorpusError::EmptyCategory { .. }
        ));

        let mut corpus = crate::model::fixtures::small_corpus();
        corpus.systems.push(corpus.systems[0].clone());
        assert!(matches!(
            validate_corpus(&corpus).unwrap_err(),
            CorpusError::DuplicateSystem(id) if id == "cardiovascular"
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            parse_corpus("systems: [").unwrap_err(),
            CorpusError::Parse(_)
        ));
    }
}
