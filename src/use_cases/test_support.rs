use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{GuestCollection, GuestRecord};
use crate::domain::ports::{GuestStore, IdGenerator};

pub(crate) type GuestTable = Arc<Mutex<GuestCollection>>;

// Deterministic id source: "guest-1", "guest-2", ...
#[derive(Default)]
pub(crate) struct SequentialIds {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("guest-{n}")
    }
}

// Replays a fixed list of ids, then falls back to sequential ones.
pub(crate) struct ScriptedIds {
    script: Mutex<Vec<String>>,
    fallback: SequentialIds,
}

impl ScriptedIds {
    pub(crate) fn new(ids: &[&str]) -> Self {
        Self {
            script: Mutex::new(ids.iter().rev().map(|id| id.to_string()).collect()),
            fallback: SequentialIds::default(),
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn next_id(&self) -> String {
        let mut script = self.script.lock().expect("script mutex poisoned");
        script.pop().unwrap_or_else(|| self.fallback.next_id())
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub save: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    guests: GuestTable,
    saves: Arc<AtomicUsize>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            guests: Arc::new(Mutex::new(GuestCollection::new())),
            saves: Arc::new(AtomicUsize::new(0)),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_guest(&self, id: &str, name: &str, age: &str) {
        let mut guard = self.guests.lock().expect("guests mutex poisoned");
        guard.insert(id.to_string(), test_guest(id, name, age));
    }

    pub(crate) fn snapshot(&self) -> GuestCollection {
        self.guests.lock().expect("guests mutex poisoned").clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

pub(crate) fn test_guest(id: &str, name: &str, age: &str) -> GuestRecord {
    GuestRecord {
        id: id.to_string(),
        name: name.to_string(),
        age: age.to_string(),
        photo: String::new(),
    }
}

#[async_trait]
impl GuestStore for RecordingStore {
    async fn load(&self) -> GuestCollection {
        self.snapshot()
    }

    async fn save(&self, guests: &GuestCollection) -> Result<(), String> {
        if self.failures.save {
            return Err("save failed".to_string());
        }

        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.guests.lock().expect("guests mutex poisoned");
        *guard = guests.clone();
        Ok(())
    }
}
