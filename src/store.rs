//! Dataset registry backing the upload and dashboard endpoints.
//!
//! Storage sits behind a capability trait rather than a process-wide
//! singleton, letting handlers take any implementation (the in-memory
//! store here, a database later) and letting tests inject their own.
//! Records are non-durable: the registry holds upload bookkeeping for a
//! running server, not archival data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Processing state of an uploaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetStatus {
    Pending,
    Processed,
}

/// A registered oceanographic dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: String,
    pub name: String,
    /// Dataset category, e.g. "CTD cast", "eDNA", "acoustic survey".
    #[serde(rename = "type")]
    pub kind: String,
    /// Sampling site label.
    pub location: String,
    /// Display size, e.g. "14.2 MB".
    pub size: String,
    pub status: DatasetStatus,
    /// Free-form uploader-supplied annotations.
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a dataset. Id, status, and timestamp are
/// assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDataset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Capability interface for dataset persistence.
pub trait DatasetStore: Send + Sync {
    /// Register a new dataset in `Pending` state and return the record.
    fn create(&self, new: NewDataset) -> Dataset;

    /// Look up a dataset by id.
    fn get(&self, id: &str) -> Option<Dataset>;

    /// All datasets in insertion order.
    fn list(&self) -> Vec<Dataset>;

    /// Update a dataset's processing status; returns the updated record.
    fn update_status(&self, id: &str, status: DatasetStatus) -> Option<Dataset>;
}

#[derive(Default)]
struct MemInner {
    datasets: HashMap<String, Dataset>,
    /// Insertion order, for the recent-uploads view.
    order: Vec<String>,
}

/// In-memory `DatasetStore` keyed by UUID v4 strings.
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<MemInner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatasetStore for MemStore {
    fn create(&self, new: NewDataset) -> Dataset {
        let dataset = Dataset {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            kind: new.kind,
            location: new.location,
            size: new.size.unwrap_or_else(|| "0 MB".to_string()),
            status: DatasetStatus::Pending,
            metadata: new.metadata,
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().expect("dataset store lock poisoned");
        inner.order.push(dataset.id.clone());
        inner.datasets.insert(dataset.id.clone(), dataset.clone());
        dataset
    }

    fn get(&self, id: &str) -> Option<Dataset> {
        let inner = self.inner.read().expect("dataset store lock poisoned");
        inner.datasets.get(id).cloned()
    }

    fn list(&self) -> Vec<Dataset> {
        let inner = self.inner.read().expect("dataset store lock poisoned");
        inner
            .order
            .iter()
            .filter_map(|id| inner.datasets.get(id).cloned())
            .collect()
    }

    fn update_status(&self, id: &str, status: DatasetStatus) -> Option<Dataset> {
        let mut inner = self.inner.write().expect("dataset store lock poisoned");
        let dataset = inner.datasets.get_mut(id)?;
        dataset.status = status;
        Some(dataset.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctd_cast(name: &str) -> NewDataset {
        NewDataset {
            name: name.to_string(),
            kind: "CTD cast".to_string(),
            location: "Coral Bay".to_string(),
            size: None,
            metadata: None,
        }
    }

    #[test]
    fn create_assigns_id_defaults_and_pending_status() {
        let store = MemStore::new();
        let dataset = store.create(ctd_cast("station-12"));
        assert_eq!(dataset.status, DatasetStatus::Pending);
        assert_eq!(dataset.size, "0 MB");
        assert!(Uuid::parse_str(&dataset.id).is_ok());
    }

    #[test]
    fn get_round_trips_the_record() {
        let store = MemStore::new();
        let created = store.create(ctd_cast("station-12"));
        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched.name, "station-12");
        assert_eq!(fetched.kind, "CTD cast");
    }

    #[test]
    fn unknown_id_is_none() {
        let store = MemStore::new();
        assert!(store.get("not-a-real-id").is_none());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = MemStore::new();
        for name in ["a", "b", "c"] {
            store.create(ctd_cast(name));
        }
        let names: Vec<String> = store.list().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn update_status_flips_pending_to_processed() {
        let store = MemStore::new();
        let created = store.create(ctd_cast("station-12"));
        let updated = store
            .update_status(&created.id, DatasetStatus::Processed)
            .unwrap();
        assert_eq!(updated.status, DatasetStatus::Processed);
        assert_eq!(
            store.get(&created.id).unwrap().status,
            DatasetStatus::Processed
        );
    }

    #[test]
    fn dataset_serializes_type_key_and_camel_case() {
        let store = MemStore::new();
        let dataset = store.create(ctd_cast("station-12"));
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["type"], "CTD cast");
        assert_eq!(value["status"], "pending");
        assert!(value["createdAt"].is_string());
    }
}
