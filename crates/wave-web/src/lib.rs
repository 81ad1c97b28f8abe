#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wave_core::{WaveConfig, WaveEngine, DEFAULT_CANVAS_ID, TICK_INTERVAL_MS};
use web_sys as web;

mod dom;
mod render;

thread_local! {
    /// Animation started by `start` on the default canvas.
    static AUTO_MOUNT: RefCell<Option<WaveHandle>> = RefCell::new(None);
}

/// Engine plus the canvas it draws on; owned by the interval callback.
struct Scene {
    engine: WaveEngine,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    clock: Instant,
}

impl Scene {
    fn frame(&mut self) {
        self.engine.resize(dom::sync_canvas_backing_size(&self.canvas));
        let now_ms = self.clock.elapsed().as_secs_f64() * 1000.0;
        let report = self.engine.tick_at(now_ms);
        if report.wrapped > 0 {
            log::debug!("[scene] {} layer(s) wrapped", report.wrapped);
        }
        render::draw_scene(&self.ctx, &self.engine);
    }
}

/// Running animation. Dropping it or calling `stop` cancels the timer.
#[wasm_bindgen]
pub struct WaveHandle {
    interval_id: Option<i32>,
    _tick: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl WaveHandle {
    pub fn stop(&mut self) {
        if let Some(id) = self.interval_id.take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(id);
            }
            log::info!("wave animation stopped");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.interval_id.is_some()
    }
}

impl Drop for WaveHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wave-web loaded");

    match init(DEFAULT_CANVAS_ID) {
        Ok(handle) => {
            AUTO_MOUNT.with(|slot| *slot.borrow_mut() = Some(handle));
        }
        // Pages without the default canvas call `mount` themselves.
        Err(e) => log::warn!("no auto mount on #{DEFAULT_CANVAS_ID}: {e}"),
    }
    Ok(())
}

/// Stop the animation that `start` mounted on the default canvas.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(mut handle) = AUTO_MOUNT.with(|slot| slot.borrow_mut().take()) {
        handle.stop();
    }
}

/// Start animating the canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<WaveHandle, JsValue> {
    init(canvas_id).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn init(canvas_id: &str) -> anyhow::Result<WaveHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::sync_canvas_backing_size(&canvas);
    let engine = WaveEngine::new(WaveConfig::default(), viewport)?;
    let scene = Rc::new(RefCell::new(Scene {
        engine,
        canvas,
        ctx,
        clock: Instant::now(),
    }));
    scene.borrow_mut().frame();

    let tick = Closure::wrap(Box::new(move || scene.borrow_mut().frame()) as Box<dyn FnMut()>);
    let interval_id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS as i32,
        )
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    log::info!("wave animation mounted on #{canvas_id} every {TICK_INTERVAL_MS}ms");

    Ok(WaveHandle {
        interval_id: Some(interval_id),
        _tick: tick,
    })
}
