use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

use super::lock;

struct Entry<F> {
    form: Arc<Mutex<F>>,
    touched: Instant,
}

/// Live form instances of one kind, keyed by id. Each form is locked independently.
///
/// A form nobody has looked up for `idle_ttl` is dropped on the next `create` or `get`.
pub struct FormRegistry<F> {
    idle_ttl: Duration,
    forms: Mutex<HashMap<Uuid, Entry<F>>>,
}

impl<F> FormRegistry<F> {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            idle_ttl,
            forms: Mutex::new(HashMap::new()),
        }
    }

    pub fn create(&self, form: F) -> (Uuid, Arc<Mutex<F>>) {
        let now = Instant::now();
        let id = Uuid::new_v4();
        let form = Arc::new(Mutex::new(form));

        let mut forms = lock(&self.forms);
        self.evict_idle(&mut forms, now);
        forms.insert(
            id,
            Entry {
                form: Arc::clone(&form),
                touched: now,
            },
        );
        (id, form)
    }

    pub fn get(&self, id: &Uuid) -> Option<Arc<Mutex<F>>> {
        let now = Instant::now();
        let mut forms = lock(&self.forms);
        self.evict_idle(&mut forms, now);

        let entry = forms.get_mut(id)?;
        entry.touched = now;
        Some(Arc::clone(&entry.form))
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        lock(&self.forms).remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        lock(&self.forms).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evict_idle(&self, forms: &mut HashMap<Uuid, Entry<F>>, now: Instant) {
        let before = forms.len();
        forms.retain(|_, entry| now.duration_since(entry.touched) < self.idle_ttl);
        let evicted = before - forms.len();
        if evicted > 0 {
            tracing::debug!(evicted, "dropped idle forms");
        }
    }
}
