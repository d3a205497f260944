use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, warn};

use super::domain::{Candidate, CandidateId, CandidateUpdate, NewCandidate};
use super::query::CandidateQuery;
use super::repository::{CandidateRepository, RepositoryError, TierCounts};
use super::tier::classify;

/// Process-local candidate store kept in insertion order.
///
/// When opened with a snapshot path, every mutation is written to that JSON file before it
/// becomes visible, and the file is reloaded on the next `open`.
///
/// Writes clone the record vector and rewrite the whole snapshot with blocking file I/O
/// while the mutex is held, so request handlers stall for the duration of the write.
/// That cost grows with the number of stored candidates.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCandidateStore {
    records: Arc<Mutex<Vec<Candidate>>>,
    snapshot: Option<PathBuf>,
}

impl InMemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store backed by a JSON snapshot, loading existing records if the file exists.
    ///
    /// Stored tiers are re-derived from each assessment on load.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let mut records = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice::<Vec<Candidate>>(&bytes).map_err(|err| {
                RepositoryError::Unavailable(format!(
                    "failed to parse snapshot {}: {err}",
                    path.display()
                ))
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(RepositoryError::Unavailable(format!(
                    "failed to read snapshot {}: {err}",
                    path.display()
                )))
            }
        };

        for candidate in &mut records {
            let derived = classify(&candidate.assessment);
            if candidate.tier != derived {
                warn!(
                    candidate_id = %candidate.id,
                    stored = candidate.tier.level(),
                    derived = derived.level(),
                    "snapshot tier disagrees with assessment; using derived tier"
                );
                candidate.tier = derived;
            }
        }

        debug!(path = %path.display(), records = records.len(), "candidate snapshot loaded");

        Ok(Self {
            records: Arc::new(Mutex::new(records)),
            snapshot: Some(path),
        })
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot.as_deref()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Candidate>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("candidate store lock poisoned".to_string()))
    }

    fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Vec<Candidate>) -> T,
    ) -> Result<T, RepositoryError> {
        let mut guard = self.lock()?;
        let mut working = guard.clone();
        let outcome = change(&mut working);
        self.persist(&working)?;
        *guard = working;
        Ok(outcome)
    }

    fn persist(&self, records: &[Candidate]) -> Result<(), RepositoryError> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                RepositoryError::Unavailable(format!(
                    "failed to create snapshot directory {}: {err}",
                    parent.display()
                ))
            })?;
        }

        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;
        fs::write(path, bytes).map_err(|err| {
            RepositoryError::Unavailable(format!(
                "failed to write snapshot {}: {err}",
                path.display()
            ))
        })
    }
}

impl CandidateRepository for InMemoryCandidateStore {
    fn insert(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        let stored = candidate.into_candidate(CandidateId::generate(), Utc::now());
        let record = stored.clone();
        self.mutate(move |records| records.push(record))?;
        Ok(stored)
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.iter().find(|candidate| &candidate.id == id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .iter()
            .find(|candidate| candidate.email == email)
            .cloned())
    }

    fn list(&self, query: &CandidateQuery) -> Result<Vec<Candidate>, RepositoryError> {
        let guard = self.lock()?;
        Ok(query.apply(guard.iter()))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }

    fn count_by_tier(&self) -> Result<TierCounts, RepositoryError> {
        let guard = self.lock()?;
        Ok(TierCounts::tally(guard.iter().map(|candidate| &candidate.tier)))
    }

    fn update(&self, id: &CandidateId, update: CandidateUpdate) -> Result<bool, RepositoryError> {
        if self.fetch(id)?.is_none() {
            return Ok(false);
        }

        let now = Utc::now();
        self.mutate(|records| {
            match records.iter_mut().find(|candidate| &candidate.id == id) {
                Some(candidate) => {
                    update.apply(candidate, now);
                    true
                }
                None => false,
            }
        })
    }

    fn delete(&self, id: &CandidateId) -> Result<bool, RepositoryError> {
        if self.fetch(id)?.is_none() {
            return Ok(false);
        }

        self.mutate(|records| {
            let before = records.len();
            records.retain(|candidate| &candidate.id != id);
            records.len() != before
        })
    }
}
