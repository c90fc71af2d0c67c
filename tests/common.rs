#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use wakawaka::common::ThemeError;
use wakawaka::models::*;
use wakawaka::services::*;

pub fn state_with_open(dropdown: Dropdown) -> AppBarState {
    let mut state = AppBarState::new();
    state.toggle_dropdown(dropdown);
    state
}

/// Distinct ordered pairs of dropdowns.
pub fn distinct_pairs() -> Vec<(Dropdown, Dropdown)> {
    Dropdown::ALL
        .iter()
        .flat_map(|a| Dropdown::ALL.iter().map(move |b| (*a, *b)))
        .filter(|(a, b)| a != b)
        .collect()
}

/// Presentation root kept in memory.
#[derive(Debug, Default)]
pub struct RecordingRoot {
    pub classes: RefCell<BTreeSet<String>>,
    pub writes: Cell<usize>,
}

impl RecordingRoot {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl PresentationRoot for RecordingRoot {
    fn set_class(&self, class: &str, enabled: bool) -> Result<(), ThemeError> {
        self.writes.set(self.writes.get() + 1);
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }
}

/// Presentation root that is never available.
#[derive(Debug, Default)]
pub struct MissingRoot;

impl PresentationRoot for MissingRoot {
    fn set_class(&self, _class: &str, _enabled: bool) -> Result<(), ThemeError> {
        Err(ThemeError::MissingRoot)
    }
}

type Handler = Rc<dyn Fn(ClickOrigin)>;

/// Pointer-down source that records subscriptions and replays events.
#[derive(Default, Clone)]
pub struct FakePointerSource {
    handlers: Rc<RefCell<Vec<Option<Handler>>>>,
    pub subscribed: Rc<Cell<usize>>,
    pub cancelled: Rc<Cell<usize>>,
}

impl FakePointerSource {
    pub fn active_listeners(&self) -> usize {
        self.handlers.borrow().iter().filter(|h| h.is_some()).count()
    }

    pub fn press(&self, origin: ClickOrigin) {
        let handlers: Vec<Handler> = self.handlers.borrow().iter().flatten().cloned().collect();
        for handler in handlers {
            handler(origin);
        }
    }
}

pub struct FakeSubscription {
    index: usize,
    source: FakePointerSource,
}

impl Subscription for FakeSubscription {
    fn cancel(self) {
        self.source.cancelled.set(self.source.cancelled.get() + 1);
        self.source.handlers.borrow_mut()[self.index] = None;
    }
}

impl PointerDownSource for FakePointerSource {
    type Subscription = FakeSubscription;

    fn subscribe(
        &self,
        on_pointer_down: impl Fn(ClickOrigin) + 'static,
    ) -> Self::Subscription {
        self.subscribed.set(self.subscribed.get() + 1);
        let mut handlers = self.handlers.borrow_mut();
        handlers.push(Some(Rc::new(on_pointer_down)));

        FakeSubscription {
            index: handlers.len() - 1,
            source: self.clone(),
        }
    }
}
