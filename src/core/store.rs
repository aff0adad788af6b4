use std::sync::Arc;

use crate::models::UniversityRecord;

/// Immutable in-memory university dataset
///
/// Cloning is cheap and shares the same records, so one store can be handed
/// to every worker without locking.
#[derive(Debug, Clone, Default)]
pub struct UniversityStore {
    records: Arc<[UniversityRecord]>,
}

impl UniversityStore {
    pub fn new(records: Vec<UniversityRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// All records in dataset order
    pub fn records(&self) -> &[UniversityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<UniversityRecord>> for UniversityStore {
    fn from(records: Vec<UniversityRecord>) -> Self {
        Self::new(records)
    }
}
