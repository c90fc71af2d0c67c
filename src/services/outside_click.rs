use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::ClickOrigin;

/// A live listener registration that can be cancelled once.
pub trait Subscription {
    fn cancel(self);
}

impl Subscription for WindowListenerHandle {
    fn cancel(self) {
        self.remove();
    }
}

/// A host source of document-wide pointer-down events.
pub trait PointerDownSource {
    type Subscription: Subscription;

    fn subscribe(
        &self,
        on_pointer_down: impl Fn(ClickOrigin) + 'static,
    ) -> Self::Subscription;
}

/// Pointer-downs on the browser window, classified against an element.
#[derive(Clone, Copy)]
pub struct WindowPointerSource {
    root: NodeRef<Div>,
}

impl WindowPointerSource {
    pub fn new(root: NodeRef<Div>) -> Self {
        Self { root }
    }
}

impl PointerDownSource for WindowPointerSource {
    type Subscription = WindowListenerHandle;

    fn subscribe(
        &self,
        on_pointer_down: impl Fn(ClickOrigin) + 'static,
    ) -> Self::Subscription {
        let root = self.root;

        window_event_listener(ev::mousedown, move |event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            let contains = root
                .get_untracked()
                .map(|element| element.contains(target.as_ref()));

            on_pointer_down(ClickOrigin::from_containment(contains));
        })
    }
}

/// Keeps a pointer-down subscription alive until stopped or dropped.
///
/// The subscription is cancelled exactly once, whichever happens first.
pub struct OutsideClickWatcher<S: Subscription> {
    subscription: Option<S>,
}

impl<S: Subscription> OutsideClickWatcher<S> {
    pub fn start<P>(source: &P, on_pointer_down: impl Fn(ClickOrigin) + 'static) -> Self
    where
        P: PointerDownSource<Subscription = S>,
    {
        log::debug!("outside click watcher started");

        Self {
            subscription: Some(source.subscribe(on_pointer_down)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            log::debug!("outside click watcher stopped");
        }
    }
}

impl<S: Subscription> Drop for OutsideClickWatcher<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S: Subscription> std::fmt::Debug for OutsideClickWatcher<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutsideClickWatcher")
            .field("active", &self.is_active())
            .finish()
    }
}
