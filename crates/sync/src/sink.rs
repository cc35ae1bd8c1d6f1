use std::sync::Mutex;

use crate::action::SyncAction;

/// Receiver of saved records.
///
/// Any `Fn(SyncAction)` closure is a sink, which is how hosts usually wire
/// their persistence callback in.
pub trait SyncSink {
    fn sync(&self, action: SyncAction);
}

impl<F> SyncSink for F
where
    F: Fn(SyncAction),
{
    fn sync(&self, action: SyncAction) {
        self(action)
    }
}

/// In-memory sink for tests/dev: keeps every action in call order.
#[derive(Debug, Default)]
pub struct RecordingSyncSink {
    inner: Mutex<Vec<SyncAction>>,
}

impl RecordingSyncSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<SyncAction> {
        match self.inner.lock() {
            Ok(actions) => actions.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.all().iter().map(SyncAction::name).collect()
    }
}

impl SyncSink for RecordingSyncSink {
    fn sync(&self, action: SyncAction) {
        tracing::debug!(action = action.name(), "recorded sync action");
        match self.inner.lock() {
            Ok(mut actions) => actions.push(action),
            Err(poisoned) => poisoned.into_inner().push(action),
        }
    }
}
