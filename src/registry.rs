//! Owned registry of toolkit widget instances (modals, toasts, collapses,
//! tooltips), keyed by the element they were created for.

use std::collections::BTreeMap;

pub trait Widget {
    fn show(&self);
    fn hide(&self);
    fn dispose(&self);
}

pub struct WidgetRegistry<W> {
    instances: BTreeMap<String, W>,
}

impl<W> Default for WidgetRegistry<W> {
    fn default() -> Self {
        Self {
            instances: BTreeMap::new(),
        }
    }
}

impl<W: Widget> WidgetRegistry<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&W> {
        self.instances.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.instances.contains_key(key)
    }

    /// Returns the instance for `key`, creating it with `create` on first use.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: &str,
        create: impl FnOnce() -> Result<W, E>,
    ) -> Result<&W, E> {
        if !self.instances.contains_key(key) {
            let widget = create()?;
            self.instances.insert(key.to_string(), widget);
        }
        Ok(&self.instances[key])
    }

    /// Disposes and forgets the instance for `key`.
    pub fn dispose(&mut self, key: &str) -> bool {
        match self.instances.remove(key) {
            Some(widget) => {
                widget.dispose();
                true
            }
            None => false,
        }
    }

    /// Hides every registered instance. Hiding a closed widget is a no-op in the toolkit.
    pub fn hide_all(&self) -> usize {
        for widget in self.instances.values() {
            widget.hide();
        }
        self.instances.len()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
