//! Persistent ward records.
//!
//! The whole aggregate is stored as one TOML document, by default at
//! `data/patientist.toml`:
//!
//! ```toml
//! [[wards]]
//! name = "Block A Ward 1"
//!
//! [[wards.persons]]
//! name = "Amy Bee"
//! id = "P1"
//! # ...
//! [wards.persons.role]
//! kind = "patient"
//! status = ["Doing fine"]
//! ```
//!
//! Field values are validated on load, so a hand-edited file with a bad
//! email or a blank ward name is rejected rather than half-loaded.


use log::info;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::Patientist;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("{path} is not a valid data file: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to encode records: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("{path} lists person {id} more than once")]
    DuplicatePerson { path: PathBuf, id: String },

    #[error("{path} lists ward {name} more than once")]
    DuplicateWard { path: PathBuf, name: String },
}

/// Load the aggregate from `path`. A missing or blank file is an empty
/// aggregate.
pub fn load_patientist(path: &Path) -> Result<Patientist, StorageError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("no data file at {}, starting empty", path.display());
            return Ok(Patientist::default());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if contents.trim().is_empty() {
        return Ok(Patientist::default());
    }

    let patientist: Patientist =
        toml::from_str(&contents).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    check_unique(path, &patientist)?;

    info!(
        "loaded {} wards and {} persons from {}",
        patientist.wards().len(),
        patientist.person_count(),
        path.display()
    );
    Ok(patientist)
}

// Serde builds wards directly, bypassing the aggregate's own duplicate checks.
fn check_unique(path: &Path, patientist: &Patientist) -> Result<(), StorageError> {
    let mut ward_names = HashSet::new();
    for ward in patientist.wards() {
        if !ward_names.insert(ward.name()) {
            return Err(StorageError::DuplicateWard {
                path: path.to_path_buf(),
                name: ward.name().to_string(),
            });
        }
    }
    let mut ids = HashSet::new();
    for entry in patientist.persons() {
        if !ids.insert(entry.person.id.as_str()) {
            return Err(StorageError::DuplicatePerson {
                path: path.to_path_buf(),
                id: entry.person.id.to_string(),
            });
        }
    }
    Ok(())
}

/// Write the aggregate to `path`, creating parent directories as needed.
pub fn save_patientist(path: &Path, patientist: &Patientist) -> Result<(), StorageError> {
    let contents = toml::to_string(patientist)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "saved {} persons to {}",
        patientist.person_count(),
        path.display()
    );
    Ok(())
}
