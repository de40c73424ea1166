//! Small wrappers over the browser APIs both engines need.

use std::cell::Cell;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, Event, HtmlCanvasElement, Window};

use crate::error::{StartError, SurfaceError};
use crate::viewport::ClientRect;

impl From<JsValue> for StartError {
    fn from(value: JsValue) -> Self {
        StartError::Browser(format!("{:?}", value))
    }
}

pub fn browser_window() -> Result<Window, SurfaceError> {
    window().ok_or(SurfaceError::NoDocument)
}

/// Look up canvas `id` and its 2D context.
pub fn acquire(id: &'static str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), SurfaceError> {
    let document = browser_window()?.document().ok_or(SurfaceError::NoDocument)?;
    let canvas = document
        .get_element_by_id(id)
        .ok_or(SurfaceError::CanvasMissing(id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SurfaceError::NotACanvas(id))?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|err| SurfaceError::NoContext {
            id,
            reason: format!("{:?}", err),
        })?
        .ok_or_else(|| SurfaceError::NoContext {
            id,
            reason: "getContext returned null".into(),
        })?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::NoContext {
            id,
            reason: "not a CanvasRenderingContext2D".into(),
        })?;

    Ok((canvas, ctx))
}

/// `innerWidth` / `innerHeight` in CSS pixels, zero when unavailable.
pub fn inner_size(window: &Window) -> (f32, f32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (read(window.inner_width()), read(window.inner_height()))
}

pub fn is_on_screen(canvas: &HtmlCanvasElement) -> bool {
    let Ok(window) = browser_window() else {
        return false;
    };
    let rect = canvas.get_bounding_client_rect();
    ClientRect {
        top: rect.top() as f32,
        bottom: rect.bottom() as f32,
    }
    .intersects_viewport(inner_size(&window).1)
}

pub fn browser_rng() -> SmallRng {
    SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

thread_local! {
    static ATTACHED: Cell<usize> = const { Cell::new(0) };
}

/// Window listeners the engines currently hold.
pub fn attached_listeners() -> usize {
    ATTACHED.with(Cell::get)
}

/// A window event listener that detaches itself when dropped.
pub struct Listener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach<F>(window: &Window, event: &'static str, handler: F) -> Result<Self, StartError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        ATTACHED.with(|n| n.set(n.get() + 1));
        Ok(Self { event, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        ATTACHED.with(|n| n.set(n.get().saturating_sub(1)));
        let Some(window) = window() else {
            return;
        };
        if let Err(err) =
            window.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("removing {} listener failed: {:?}", self.event, err);
        }
    }
}
