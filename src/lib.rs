#![cfg(target_arch = "wasm32")]
use instant::Instant;
use motion_core::{BootPlan, MotionConfig, MotionEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod form;
mod frame;
mod overlay;
mod paint;
mod session;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-motion starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut page = dom::Dom::new(document.clone());
    let stage = page.collect_stage();
    let cursor_targets = page.collect_cursor_targets();
    let anchors = page.collect_anchor_links();
    let layout = page.measure();
    log::info!(
        "[dom] viewport {:.0}x{:.0}, content {:.0}, {} reveals, {} parallax",
        layout.viewport.x,
        layout.viewport.y,
        layout.content_height,
        stage.reveals.len(),
        stage.parallax.len()
    );

    let config = MotionConfig {
        form: form::config_from_markup(&document),
        ..MotionConfig::default()
    };
    let session = Box::new(session::BrowserSession::new(&window));
    let engine = Rc::new(RefCell::new(MotionEngine::new(config, stage, layout, session)));

    overlay::freeze_native_scroll(&document);
    match engine.borrow_mut().boot() {
        BootPlan::RunLoader => log::info!("[loader] first visit this session"),
        BootPlan::SkipLoader => log::info!("[loader] skipped; visited this session"),
    }

    let page = Rc::new(RefCell::new(page));
    events::wire_all(
        &events::Wiring {
            engine: engine.clone(),
            dom: page.clone(),
        },
        cursor_targets,
        anchors,
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        painter: paint::Painter::new(&document),
        dom: page,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
