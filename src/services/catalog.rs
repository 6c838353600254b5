use crate::config::DataSettings;
use crate::models::{Interest, Message, Profile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Dataset compiled into the binary, used when no path is configured
const SEED_DATASET: &str = include_str!("../../data/seed.json");

/// Errors that can occur while loading the profile dataset
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read dataset: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON dataset: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid TOML dataset: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),

    #[error("Invalid profile {id}: {reason}")]
    InvalidProfile { id: String, reason: String },
}

/// Raw dataset as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Read-only collection of profiles with lookup by id
///
/// Profiles keep the order they were loaded in; discovery results follow it.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    dataset: Dataset,
    index: HashMap<String, usize>,
}

impl ProfileCatalog {
    /// Build a catalog, rejecting duplicate ids and zero ages
    pub fn new(dataset: Dataset) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(dataset.profiles.len());

        for (position, profile) in dataset.profiles.iter().enumerate() {
            if profile.id.is_empty() {
                return Err(CatalogError::InvalidProfile {
                    id: format!("#{}", position),
                    reason: "empty id".to_string(),
                });
            }
            if profile.age == 0 {
                return Err(CatalogError::InvalidProfile {
                    id: profile.id.clone(),
                    reason: "age must be positive".to_string(),
                });
            }
            if index.insert(profile.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(profile.id.clone()));
            }
        }

        Ok(Self { dataset, index })
    }

    /// Catalog built from the embedded seed dataset
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(SEED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        Self::new(toml::from_str(toml_str)?)
    }

    /// Load a dataset file, choosing the parser from its extension
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("toml") => Self::from_toml(&contents),
            other => Err(CatalogError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Load the configured dataset, falling back to the embedded seed
    pub fn from_settings(settings: &DataSettings) -> Result<Self, CatalogError> {
        match settings.profiles_path.as_deref() {
            Some(path) => {
                tracing::info!("Loading profile dataset from {}", path);
                Self::load_from(path)
            }
            None => {
                tracing::info!("Using embedded seed dataset");
                Self::seeded()
            }
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.dataset.profiles
    }

    pub fn interests(&self) -> &[Interest] {
        &self.dataset.interests
    }

    pub fn messages(&self) -> &[Message] {
        &self.dataset.messages
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.index.get(id).map(|&position| &self.dataset.profiles[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.dataset.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.profiles.is_empty()
    }
}
