//! Конфигурация движения игрока
//!
//! Значения по умолчанию совпадают с тем, как персонаж настроен в сцене:
//! speed 200, max_speed 1000, физика 50Hz (fixed delta = 0.02s).

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read movement config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse movement config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

/// Movement параметры (inspector-style config)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Номинальная скорость (units/s до умножения на fixed delta)
    pub speed: f32,
    /// Верхняя граница скорости
    pub max_speed: f32,
    /// Частота FixedUpdate (Hz)
    pub fixed_hz: f64,
    /// Стартовая позиция (x, y) если сцена не задала свою
    pub starting_position: [f32; 2],
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 200.0,
            max_speed: 1000.0,
            fixed_hz: 50.0,
            starting_position: [0.0, 0.0],
        }
    }
}

impl MovementConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MovementConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Валидный config как есть, иначе defaults (ошибку возвращаем для лога)
    pub fn validated_or_default(&self) -> (Self, Option<ConfigError>) {
        match self.validate() {
            Ok(()) => (self.clone(), None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "speed",
                value: self.speed,
            });
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "max_speed",
                value: self.max_speed,
            });
        }
        if !self.fixed_hz.is_finite() || self.fixed_hz <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "fixed_hz",
                value: self.fixed_hz as f32,
            });
        }
        Ok(())
    }

    pub fn starting_position(&self) -> Vec2 {
        Vec2::from_array(self.starting_position)
    }
}
