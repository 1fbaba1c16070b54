use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Contract a slide-in panel exposes to its triggers. `source` identifies
/// the opener so the panel can tailor its content.
pub trait SlideinPanel {
    fn open(&self, source: Option<&str>);
}

/// Panels keyed by element id. Shared through context so any button in the
/// subtree can trigger any registered panel; single-threaded by
/// construction (browser main thread), hence `Rc<RefCell<..>>`.
#[derive(Clone, Default)]
pub struct SlideinRegistry {
    panels: Rc<RefCell<HashMap<String, Rc<dyn SlideinPanel>>>>,
}

impl SlideinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &self,
        id: impl Into<String>,
        panel: Rc<dyn SlideinPanel>,
    ) {
        self.panels.borrow_mut().insert(id.into(), panel);
    }

    pub fn unregister(&self, id: &str) {
        self.panels.borrow_mut().remove(id);
    }

    pub fn lookup(&self, id: &str) -> Option<Rc<dyn SlideinPanel>> {
        self.panels.borrow().get(id).cloned()
    }
}
