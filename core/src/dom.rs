//! Minimal element registry standing in for a rendered document.
//!
//! # Design
//! Element lookup is a capability ([`ElementLocator`]) injected into
//! registration, so a test double can stand in for a real document. An
//! [`Element`] is just an id plus a list of listeners; [`Element::click`]
//! snapshots that list before running it, so overlapping clicks dispatched
//! from different threads never block each other and a listener can be
//! added while another click is in flight.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Finds the element an id refers to, if it exists.
pub trait ElementLocator {
    fn find(&self, id: &str) -> Option<Arc<Element>>;
}

/// A trigger element: an identifier plus its attached listeners.
pub struct Element {
    id: String,
    listeners: Mutex<Vec<Listener>>,
}

impl Element {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn add_listener(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners
            .lock()
            .expect("listener list poisoned")
            .push(Arc::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().expect("listener list poisoned").len()
    }

    /// Activate the element, running every listener in registration order.
    ///
    /// The listener list is snapshotted before any listener runs, so the
    /// lock is not held during dispatch.
    pub fn click(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .expect("listener list poisoned")
            .clone();
        for listener in snapshot {
            listener();
        }
    }
}

/// An id-to-element registry.
#[derive(Default)]
pub struct Document {
    elements: Mutex<HashMap<String, Arc<Element>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with the given id, or return the existing one.
    pub fn insert(&self, id: &str) -> Arc<Element> {
        let mut elements = self.elements.lock().expect("element map poisoned");
        Arc::clone(
            elements
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(Element::new(id))),
        )
    }

    /// Click the element with the given id. Returns false if no such
    /// element exists.
    pub fn click(&self, id: &str) -> bool {
        match self.find(id) {
            Some(element) => {
                element.click();
                true
            }
            None => false,
        }
    }
}

impl ElementLocator for Document {
    fn find(&self, id: &str) -> Option<Arc<Element>> {
        self.elements
            .lock()
            .expect("element map poisoned")
            .get(id)
            .cloned()
    }
}
