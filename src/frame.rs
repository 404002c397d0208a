use crate::render;
use instant::Instant;
use skyrun_core::{InputQueue, InputState, World};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub world: World,
    pub input: InputState,
    pub queue: Rc<RefCell<InputQueue>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Take intents first so handlers firing during the update queue for next frame
        let intents = self.queue.borrow_mut().drain();
        let report = self.world.frame(&mut self.input, intents, dt_sec);
        if report.jumps_started > 0 {
            log::debug!(
                "[frame {}] jump ({} requests)",
                self.world.frame_index(),
                report.jump_requests
            );
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let camera = self.world.orbit.camera(self.gpu.aspect());
        let scene = self.world.snapshot();
        if let Err(e) = self.gpu.render(&camera, &scene) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    sky: &skyrun_core::CubeFaces,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, sky).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
