//! Ajustes de la app: opciones de la pantalla de práctica y semilla opcional
//! del generador aleatorio.

use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub question_counts: Vec<usize>,
    pub default_question_count: usize,
    pub time_limits_min: Vec<u64>,
    pub default_time_limit_min: u64,
    /// Rango (segundos) del retraso simulado del asistente.
    pub assistant_delay: (f64, f64),
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            question_counts: vec![10, 20, 30, 50],
            default_question_count: 20,
            time_limits_min: vec![15, 30, 45, 60],
            default_time_limit_min: 30,
            assistant_delay: (1.0, 3.0),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Defaults + semilla del entorno (nativo) o de la query string (web).
    pub fn load() -> Self {
        let seed = seed_from_env();
        if let Some(seed) = seed {
            log::info!("usando semilla fija {seed}");
        }
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub fn parse_seed(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn seed_from_env() -> Option<u64> {
    std::env::var("MED_QUIZ_SEED")
        .ok()
        .as_deref()
        .and_then(parse_seed)
}

#[cfg(target_arch = "wasm32")]
fn seed_from_env() -> Option<u64> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    query.split('&').find_map(|pair| match pair.split_once('=') {
        Some(("seed", value)) => parse_seed(value),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_match_setup_screen() {
        let cfg = AppConfig::default();
        assert!(cfg.question_counts.contains(&cfg.default_question_count));
        assert!(cfg.time_limits_min.contains(&cfg.default_time_limit_min));
        assert!(cfg.assistant_delay.0 < cfg.assistant_delay.1);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = AppConfig {
            seed: Some(99),
            ..AppConfig::default()
        };
        let (mut r1, mut r2) = (cfg.rng(), cfg.rng());
        let a: Vec<u32> = (0..4).map(|_| r1.gen_range(0..1000)).collect();
        let b: Vec<u32> = (0..4).map(|_| r2.gen_range(0..1000)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn seed_parsing() {
        assert_eq!(parse_seed(" 42 "), Some(42));
        assert_eq!(parse_seed("abc"), None);
        assert_eq!(parse_seed(""), None);
    }
}
