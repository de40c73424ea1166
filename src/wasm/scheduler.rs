use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

use crate::frame::{Animate, FrameLoop};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Drives a [`FrameLoop`] from `requestAnimationFrame`, one frame per refresh.
///
/// Dropping the handle stops the loop and frees its callback, so it must not
/// be dropped from inside its own frame.
pub struct RafLoop<A: Animate + 'static> {
    frames: Rc<RefCell<FrameLoop<A>>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl<A: Animate + 'static> RafLoop<A> {
    pub fn start(animation: A) -> Result<Self, JsValue> {
        let frames = Rc::new(RefCell::new(FrameLoop::new(animation)));
        frames.borrow_mut().start();
        let pending = Rc::new(Cell::new(None));

        // The callback needs a handle to itself to reschedule, so it lives in
        // an `Option` that is filled after the closure is built.
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        let (lp, next) = (frames.clone(), pending.clone());
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            next.set(None);
            if lp.borrow_mut().pump(1) == 0 {
                return;
            }
            if let Some(callback) = f.borrow().as_ref() {
                match request_frame(callback) {
                    Ok(id) => next.set(Some(id)),
                    Err(err) => log::error!("requestAnimationFrame failed: {:?}", err),
                }
            }
        }) as Box<dyn FnMut()>));

        // built before the first request so a failure drops (and unlinks) it
        let raf = Self {
            frames,
            pending,
            callback: g,
        };
        let requested = match raf.callback.borrow().as_ref() {
            Some(callback) => request_frame(callback),
            None => Err(JsValue::from_str("frame callback missing")),
        };
        raf.pending.set(Some(requested?));
        Ok(raf)
    }

    /// Shared handle to the animation, for event handlers such as resize.
    pub fn frames(&self) -> Rc<RefCell<FrameLoop<A>>> {
        self.frames.clone()
    }

    /// Stop after the current frame and cancel any scheduled one.
    pub fn stop(&self) {
        self.frames.borrow_mut().stop();
        if let (Some(id), Some(w)) = (self.pending.take(), window()) {
            if let Err(err) = w.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }
}

impl<A: Animate + 'static> Drop for RafLoop<A> {
    fn drop(&mut self) {
        self.stop();
        // the callback holds a handle to itself; break that cycle
        self.callback.borrow_mut().take();
    }
}
