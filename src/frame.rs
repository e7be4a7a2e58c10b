use crate::dom::Dom;
use crate::form;
use crate::overlay;
use crate::paint::Painter;
use instant::Instant;
use motion_core::{InputEvent, MotionEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<MotionEngine>>,
    pub dom: Rc<RefCell<Dom>>,
    pub painter: Painter,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_instant;
        self.last_instant = now;

        let report = self.engine.borrow_mut().frame(elapsed);
        let dom = self.dom.borrow();

        if report.hide_loader && !overlay::is_loader_hidden(&dom.document) {
            log::info!("[loader] hidden");
            overlay::hide_loader(&dom.document);
        }
        let relayout = self.painter.apply(&dom, &report);

        if report.submit_requested {
            form::send(self.engine.clone(), dom.document.clone());
        }
        if let Some(label) = &report.form_label {
            let status = self.engine.borrow().form().status();
            form::paint_label(&dom.document, label, status);
        }
        for ev in &report.triggers {
            log::trace!("[trigger] {:?}", ev);
        }

        // Pin spacing moves everything below the pin; measure again next frame.
        if relayout {
            let layout = dom.measure();
            self.engine.borrow_mut().push(InputEvent::Resize(layout));
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
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
