//! DOM event wiring for the editor shell.
//!
//! Each handler extracts what it needs from the browser event and forwards a
//! plain call to the controller. All listeners live in [`Listeners`]; dropping
//! it unregisters every one of them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, PointerEvent};

use modot_core::{Controller, Downloader, EditorWidget, KeyChord, KeyValueStore, View, ViewMode};

use crate::dom::{DomView, EventTargets};
use crate::download::BrowserDownloader;
use crate::monaco::{ChangeSubscription, MonacoWidget};
use crate::storage::LocalStore;

pub type BrowserController = Controller<LocalStore, DomView, MonacoWidget, BrowserDownloader>;
pub type SharedController = Rc<RefCell<BrowserController>>;

/// Run `f` against the controller unless it is already borrowed further up
/// the stack, in which case the call is dropped and `None` returned.
pub fn with_controller<S, V, E, D, R>(
    controller: &Rc<RefCell<Controller<S, V, E, D>>>,
    f: impl FnOnce(&mut Controller<S, V, E, D>) -> R,
) -> Option<R> {
    match controller.try_borrow_mut() {
        Ok(mut controller) => Some(f(&mut controller)),
        Err(_) => {
            tracing::debug!("controller busy, dropping re-entrant call");
            None
        }
    }
}

/// Extract the shortcut-relevant parts of a keyboard event.
pub fn key_chord(event: &KeyboardEvent) -> KeyChord {
    KeyChord::new(event.key(), event.ctrl_key(), event.meta_key())
}

/// Every registered listener. Dropping this detaches them all.
pub struct Listeners {
    _dom: Vec<EventListener>,
    _editor: ChangeSubscription,
}

/// Attach divider, button, window and editor listeners.
///
/// Call after `Controller::start`, so the initial `set_value` does not feed
/// back through the change listener.
pub fn attach(controller: &SharedController, targets: &EventTargets) -> Listeners {
    Listeners {
        _dom: attach_dom(controller, targets),
        _editor: attach_editor(controller),
    }
}

/// Attach the divider, button, resize and keyboard listeners.
///
/// Dropping the returned listeners detaches them.
pub fn attach_dom<S, V, E, D>(
    controller: &Rc<RefCell<Controller<S, V, E, D>>>,
    targets: &EventTargets,
) -> Vec<EventListener>
where
    S: KeyValueStore + 'static,
    V: View + 'static,
    E: EditorWidget + 'static,
    D: Downloader + 'static,
{
    let mut dom = Vec::with_capacity(10);

    // === Divider drag ===

    let c = controller.clone();
    let divider = targets.divider.clone();
    dom.push(EventListener::new_with_options(
        &targets.divider,
        "pointerdown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            event.prevent_default();
            if let Some(pointer) = event.dyn_ref::<PointerEvent>() {
                // Keep move/up on the divider even when the cursor leaves it.
                if let Err(e) = divider.set_pointer_capture(pointer.pointer_id()) {
                    tracing::debug!("setPointerCapture failed: {:?}", e);
                }
            }
            with_controller(&c, |c| c.begin_drag());
        },
    ));

    let c = controller.clone();
    dom.push(EventListener::new(
        &targets.divider,
        "pointermove",
        move |event: &Event| {
            let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let x = f64::from(pointer.client_x());
            with_controller(&c, |c| c.drag_to(x));
        },
    ));

    for kind in ["pointerup", "pointercancel"] {
        let c = controller.clone();
        dom.push(EventListener::new(&targets.divider, kind, move |_| {
            with_controller(&c, |c| c.end_drag());
        }));
    }

    let c = controller.clone();
    dom.push(EventListener::new(&targets.divider, "dblclick", move |_| {
        with_controller(&c, |c| c.reset_ratio());
    }));

    // === Buttons ===

    let c = controller.clone();
    dom.push(EventListener::new(&targets.toggle_button, "click", move |_| {
        with_controller(&c, |c| c.toggle_view());
    }));

    let c = controller.clone();
    dom.push(EventListener::new(
        &targets.side_by_side_button,
        "click",
        move |_| {
            with_controller(&c, |c| c.set_view_mode(ViewMode::SideBySide));
        },
    ));

    let c = controller.clone();
    dom.push(EventListener::new(&targets.download_button, "click", move |_| {
        with_controller(&c, |c| c.download());
    }));

    let Some(window) = web_sys::window() else {
        tracing::warn!("no window; resize and keyboard listeners not attached");
        return dom;
    };

    let c = controller.clone();
    dom.push(EventListener::new(&window, "resize", move |_| {
        with_controller(&c, |c| c.window_resized());
    }));

    // === Keyboard ===

    // Capture phase on the window so the shortcut wins over the editor's own
    // key handling; not passive so the browser default can be suppressed.
    let c = controller.clone();
    let options = EventListenerOptions {
        phase: EventListenerPhase::Capture,
        passive: false,
    };
    dom.push(EventListener::new_with_options(
        &window,
        "keydown",
        options,
        move |event: &Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let chord = key_chord(key);
            if with_controller(&c, |c| c.key_pressed(&chord)).unwrap_or(false) {
                event.prevent_default();
            }
        },
    ));

    dom
}

fn attach_editor(controller: &SharedController) -> ChangeSubscription {
    let c = controller.clone();
    let borrowed = controller.borrow();
    borrowed.editor().on_change(move || {
        with_controller(&c, |c| c.content_changed());
    })
}
