use skyrun_core::{InputQueue, Intent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    pointer_id: i32,
    last_x: f32,
    last_y: f32,
}

#[derive(Clone)]
struct PointerWiring {
    canvas: web::HtmlCanvasElement,
    queue: Rc<RefCell<InputQueue>>,
    drag: Rc<RefCell<DragState>>,
}

/// Drag on the canvas orbits the camera, the wheel zooms.
pub fn wire_pointer(canvas: web::HtmlCanvasElement, queue: Rc<RefCell<InputQueue>>) {
    let w = PointerWiring {
        canvas,
        queue,
        drag: Rc::new(RefCell::new(DragState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        {
            let mut ds = w.drag.borrow_mut();
            ds.active = true;
            ds.pointer_id = ev.pointer_id();
            ds.last_x = ev.client_x() as f32;
            ds.last_y = ev.client_y() as f32;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        _ = w.canvas.focus();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut ds = w.drag.borrow_mut();
        if !ds.active || ds.pointer_id != ev.pointer_id() {
            return;
        }
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let (dx, dy) = (x - ds.last_x, y - ds.last_y);
        ds.last_x = x;
        ds.last_y = y;
        drop(ds);
        if dx != 0.0 || dy != 0.0 {
            w.queue.borrow_mut().push(Intent::Orbit { dx, dy });
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_dragging = {
            let mut ds = w.drag.borrow_mut();
            std::mem::replace(&mut ds.active, false)
        };
        if was_dragging {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    _ = target.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &PointerWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let dy = ev.delta_y() as f32;
        if dy != 0.0 {
            w.queue.borrow_mut().push(Intent::Zoom(dy));
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
