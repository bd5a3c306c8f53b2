// mesa/src/loader.rs
// Feed ingestion: turns the already-fetched spreadsheet exports into the
// roster and episode catalog. The fetch itself lives outside the engine;
// this module only deals with the record shapes.

use crate::catalog::{EpisodeCatalog, EpisodeRecord};
use crate::defs::HostId;
use crate::logging::log_error;
use crate::roster::{Host, Roster};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Why a feed could not be turned into game data. All variants block
/// evaluation until the collaborator retries the load.
#[derive(Debug)]
pub enum DataLoadError {
    /// The payload was not the expected JSON shape.
    Malformed(String),
    /// A host id field could not be coerced to a number.
    InvalidHostId { record: String, value: String },
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLoadError::Malformed(detail) => write!(f, "malformed feed payload: {detail}"),
            DataLoadError::InvalidHostId { record, value } => {
                write!(f, "record {record}: host id {value:?} is not numeric")
            }
        }
    }
}

impl std::error::Error for DataLoadError {}

// The spreadsheet export wraps rows in a "data" array.
#[derive(Deserialize)]
struct FeedEnvelope<T> {
    data: Vec<T>,
}

/// A raw roster row as exported. Ids arrive as numbers or numeric strings.
#[derive(Debug, Clone, Deserialize)]
pub struct HostRecord {
    pub id: Value,
    pub codigo: String,
    pub nombre: String,
    pub avatar: String,
}

/// A raw episode row as exported, with up to six positional host columns.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeFeedRecord {
    pub id: Value,
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub titulo: String,
    pub portada: String,
    #[serde(default)]
    pub c1: Value,
    #[serde(default)]
    pub c2: Value,
    #[serde(default)]
    pub c3: Value,
    #[serde(default)]
    pub c4: Value,
    #[serde(default)]
    pub c5: Value,
    #[serde(default)]
    pub c6: Value,
}

/// Coerce a feed cell to a host id. Empty cells yield None, numbers and
/// numeric strings yield the id, anything else is an error.
fn coerce_host_id(value: &Value, record: &str) -> Result<Option<HostId>, DataLoadError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(|id| Some(id as HostId))
            .ok_or_else(|| DataLoadError::InvalidHostId {
                record: record.to_string(),
                value: n.to_string(),
            }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<HostId>()
                .map(Some)
                .map_err(|_| DataLoadError::InvalidHostId {
                    record: record.to_string(),
                    value: s.clone(),
                })
        }
        other => Err(DataLoadError::InvalidHostId {
            record: record.to_string(),
            value: other.to_string(),
        }),
    }
}

fn coerce_record_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build the roster from raw feed records.
pub fn roster_from_records(records: Vec<HostRecord>) -> Result<Roster, DataLoadError> {
    let mut hosts = Vec::with_capacity(records.len());
    for record in records {
        let record_tag = coerce_record_id(&record.id);
        let id = coerce_host_id(&record.id, &record_tag)?.ok_or_else(|| {
            DataLoadError::InvalidHostId {
                record: record_tag.clone(),
                value: String::new(),
            }
        })?;
        hosts.push(Host {
            id,
            code: record.codigo,
            name: record.nombre,
            avatar_ref: record.avatar,
        });
    }
    Ok(Roster::new(hosts))
}

/// Build the catalog from raw feed records. Empty positional columns are
/// dropped; the remaining ids keep their column order as the lineup.
pub fn catalog_from_records(records: Vec<EpisodeFeedRecord>) -> Result<EpisodeCatalog, DataLoadError> {
    let mut episodes = Vec::with_capacity(records.len());
    for record in records {
        let record_tag = coerce_record_id(&record.id);
        let columns = [
            &record.c1, &record.c2, &record.c3, &record.c4, &record.c5, &record.c6,
        ];
        let mut lineup = Vec::new();
        for column in columns {
            if let Some(id) = coerce_host_id(column, &record_tag)? {
                lineup.push(id);
            }
        }
        episodes.push(EpisodeRecord {
            id: record_tag,
            video_ref: record.video_id,
            title: record.titulo,
            cover_ref: record.portada,
            lineup,
        });
    }
    Ok(EpisodeCatalog::new(episodes))
}

/// Parse a roster feed payload (the `{ "data": [...] }` envelope).
/// Failures are logged here, where the collaborator hands the payload over.
pub fn roster_from_json(payload: &str) -> Result<Roster, DataLoadError> {
    let result = serde_json::from_str::<FeedEnvelope<HostRecord>>(payload)
        .map_err(|e| DataLoadError::Malformed(e.to_string()))
        .and_then(|envelope| roster_from_records(envelope.data));

    if let Err(err) = &result {
        log_error(&format!("Roster feed rejected: {err}"));
    }
    result
}

/// Parse an episode feed payload (the `{ "data": [...] }` envelope).
/// Failures are logged here, where the collaborator hands the payload over.
pub fn catalog_from_json(payload: &str) -> Result<EpisodeCatalog, DataLoadError> {
    let result = serde_json::from_str::<FeedEnvelope<EpisodeFeedRecord>>(payload)
        .map_err(|e| DataLoadError::Malformed(e.to_string()))
        .and_then(|envelope| catalog_from_records(envelope.data));

    if let Err(err) = &result {
        log_error(&format!("Episode feed rejected: {err}"));
    }
    result
}
