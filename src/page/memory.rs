use super::{FormSource, Notifier, ResultSink};
use crate::models::page::{ContainerId, FieldId};
use crate::models::response::Rendering;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Page kept entirely in memory. Used by embedders and tests.
#[derive(Debug, Default)]
pub struct MemoryPage {
    fields: Mutex<HashMap<FieldId, String>>,
    containers: Mutex<HashMap<ContainerId, Rendering>>,
    alerts: Mutex<Vec<String>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(self, field: FieldId, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn set_field(&self, field: FieldId, value: impl Into<String>) {
        lock(&self.fields).insert(field, value.into());
    }

    pub fn content(&self, container: ContainerId) -> Option<Rendering> {
        lock(&self.containers).get(&container).cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }
}

impl FormSource for MemoryPage {
    fn field_value(&self, field: FieldId) -> String {
        lock(&self.fields).get(&field).cloned().unwrap_or_default()
    }
}

impl ResultSink for MemoryPage {
    fn replace_content(&self, container: ContainerId, rendering: Rendering) {
        lock(&self.containers).insert(container, rendering);
    }
}

impl Notifier for MemoryPage {
    fn alert(&self, message: &str) {
        lock(&self.alerts).push(message.to_string());
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
