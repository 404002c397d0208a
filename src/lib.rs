#![cfg(target_arch = "wasm32")]
use instant::Instant;
use skyrun_core::{GameConfig, InputQueue, InputState, KeyBindings, World};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skyrun-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_error(&document, &format!("Failed to start: {e:#}"));
            }
        }
    });
    Ok(())
}

/// Start-up: mount the canvas, load the skybox, bring up WebGPU, build the
/// world and only then start the frame loop.
async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = GameConfig::default().with_query(&dom::location_search())?;
    let canvas = dom::mount_canvas(&document, constants::CONTAINER_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    overlay::show_loading(&document);
    let sky = assets::load_skybox(&window).await?;
    let gpu = frame::init_gpu(&canvas, &sky).await?;
    drop(sky);

    let world = World::new(&config)?;
    let bindings = KeyBindings::default();
    let queue = Rc::new(RefCell::new(InputQueue::default()));
    events::wire_keyboard(queue.clone(), bindings.clone());
    events::wire_pointer(canvas.clone(), queue.clone());
    overlay::hide_loading(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        world,
        input: InputState::new(bindings),
        queue,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
