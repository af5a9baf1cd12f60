//! Traspaso de la configuración de práctica entre la pantalla de ajustes y
//! la del quiz. Vale para un único arranque: `take` la consume.

use crate::errors::ConfigError;
use crate::model::PracticeConfig;

pub const CONFIG_KEY: &str = "med_quiz.practice_config";

pub trait ConfigCarrier {
    fn put(&mut self, config: &PracticeConfig) -> Result<(), ConfigError>;

    /// Devuelve y borra la configuración guardada. `Ok(None)` si no hay nada.
    fn take(&mut self) -> Result<Option<PracticeConfig>, ConfigError>;
}

fn encode(config: &PracticeConfig) -> Result<String, ConfigError> {
    serde_yaml::to_string(config).map_err(|e| ConfigError::Malformed(e.to_string()))
}

fn decode(payload: &str) -> Result<PracticeConfig, ConfigError> {
    serde_yaml::from_str(payload).map_err(|e| ConfigError::Malformed(e.to_string()))
}

/// Portador en memoria (nativo y tests).
#[derive(Debug, Default)]
pub struct MemoryCarrier {
    payload: Option<String>,
}

impl MemoryCarrier {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_raw(payload: &str) -> Self {
        Self {
            payload: Some(payload.to_string()),
        }
    }
}

impl ConfigCarrier for MemoryCarrier {
    fn put(&mut self, config: &PracticeConfig) -> Result<(), ConfigError> {
        self.payload = Some(encode(config)?);
        Ok(())
    }

    fn take(&mut self) -> Result<Option<PracticeConfig>, ConfigError> {
        self.payload.take().map(|p| decode(&p)).transpose()
    }
}

/// Portador sobre `window.sessionStorage`: sobrevive a recargas de la
/// pestaña pero no al cierre del navegador.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct SessionStorageCarrier;

#[cfg(target_arch = "wasm32")]
impl SessionStorageCarrier {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl ConfigCarrier for SessionStorageCarrier {
    fn put(&mut self, config: &PracticeConfig) -> Result<(), ConfigError> {
        let payload = encode(config)?;
        match Self::storage() {
            Some(storage) => storage
                .set_item(CONFIG_KEY, &payload)
                .map_err(|_| ConfigError::Malformed("sessionStorage is not writable".into())),
            None => Err(ConfigError::Malformed("sessionStorage is unavailable".into())),
        }
    }

    fn take(&mut self) -> Result<Option<PracticeConfig>, ConfigError> {
        let Some(storage) = Self::storage() else {
            return Ok(None);
        };
        let payload = storage.get_item(CONFIG_KEY).ok().flatten();
        let _ = storage.remove_item(CONFIG_KEY);
        payload.map(|p| decode(&p)).transpose()
    }
}

/// Portador por defecto según el target.
pub fn default_carrier() -> Box<dyn ConfigCarrier> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(SessionStorageCarrier)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(MemoryCarrier::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_the_configuration() {
        let mut carrier = MemoryCarrier::new();
        let config = PracticeConfig::systems(["renal", "cns"], 10);
        carrier.put(&config).unwrap();

        assert_eq!(carrier.take().unwrap(), Some(config));
        assert_eq!(carrier.take().unwrap(), None);
    }

    #[test]
    fn put_replaces_previous_configuration() {
        let mut carrier = MemoryCarrier::new();
        carrier.put(&PracticeConfig::mixed(10)).unwrap();
        carrier.put(&PracticeConfig::timed(20, 900)).unwrap();
        assert_eq!(carrier.take().unwrap(), Some(PracticeConfig::timed(20, 900)));
    }

    #[test]
    fn garbage_payload_is_malformed_and_still_consumed() {
        let mut carrier = MemoryCarrier::with_raw("mode: [not a mode");
        assert!(matches!(carrier.take(), Err(ConfigError::Malformed(_))));
        assert_eq!(carrier.take().unwrap(), None);
    }
}
