use skyrun_core::{InputQueue, Intent, KeyBindings, KeyCode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn key_code(ev: &web::KeyboardEvent) -> KeyCode {
    ev.key_code()
}

pub fn handle_keydown(ev: &web::KeyboardEvent, queue: &RefCell<InputQueue>, bindings: &KeyBindings) {
    let code = key_code(ev);
    if bindings.captures(code) {
        ev.prevent_default();
    }
    queue.borrow_mut().push(Intent::KeyDown(code));
}

pub fn handle_keyup(ev: &web::KeyboardEvent, queue: &RefCell<InputQueue>, bindings: &KeyBindings) {
    let code = key_code(ev);
    if bindings.captures(code) {
        ev.prevent_default();
    }
    queue.borrow_mut().push(Intent::KeyUp(code));
}

/// Window-level keydown/keyup push intents; blur releases everything so a
/// key held while focus leaves the page doesn't stay stuck.
pub fn wire_keyboard(queue: Rc<RefCell<InputQueue>>, bindings: KeyBindings) {
    let Some(window) = web::window() else {
        log::warn!("[keys] no window; keyboard input disabled");
        return;
    };

    let q = queue.clone();
    let b = bindings.clone();
    let down = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &q, &b);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref());
    down.forget();

    let q = queue.clone();
    let up = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &q, &bindings);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref());
    up.forget();

    let blur = Closure::wrap(Box::new(move || {
        queue.borrow_mut().push(Intent::ReleaseAll);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
