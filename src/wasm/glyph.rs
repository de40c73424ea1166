use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::dom::{acquire, browser_rng, browser_window, inner_size, Listener};
use super::scheduler::RafLoop;
use crate::config::{GlyphFieldConfig, GLYPH_CANVAS_ID};
use crate::error::StartError;
use crate::frame::{Animate, FrameLoop};
use crate::glyph::GlyphField;
use crate::pointer::PointerState;
use crate::viewport::Viewport;

thread_local! {
    static RUNNING: RefCell<Option<Running>> = const { RefCell::new(None) };
}

/// Live loop plus the listeners feeding it; dropping it tears both down.
struct Running {
    _frames: RafLoop<GlyphScene>,
    _listeners: [Listener; 3],
}

struct GlyphScene {
    field: GlyphField<SmallRng>,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pointer: Rc<Cell<PointerState>>,
}

impl GlyphScene {
    /// Match the window, scale the backing store by the pixel ratio and reseed.
    fn fit_window(&mut self) -> Result<(), StartError> {
        let window = browser_window()?;
        let (width, height) = inner_size(&window);
        let viewport =
            Viewport::new(width, height).with_device_pixel_ratio(window.device_pixel_ratio() as f32);

        let (backing_w, backing_h) = viewport.backing_size();
        self.canvas.set_width(backing_w);
        self.canvas.set_height(backing_h);
        let dpr = f64::from(viewport.device_pixel_ratio);
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;

        self.field.resize(viewport);
        Ok(())
    }
}

impl Animate for GlyphScene {
    fn frame(&mut self) {
        let pointer = self.pointer.get();
        self.field.frame(&pointer, &mut self.ctx);
    }
}

pub fn is_running() -> bool {
    RUNNING.with(|running| running.borrow().is_some())
}

/// Cancel the frame loop and detach its listeners. Returns false if nothing
/// was running.
pub fn stop() -> bool {
    let Some(running) = RUNNING.with(|running| running.borrow_mut().take()) else {
        return false;
    };
    drop(running);
    log::info!("glyph field stopped");
    true
}

fn attach_listeners(
    window: &Window,
    frames: Rc<RefCell<FrameLoop<GlyphScene>>>,
    pointer: Rc<Cell<PointerState>>,
) -> Result<[Listener; 3], StartError> {
    let resize = Listener::attach(window, "resize", move |_: Event| {
        if let Err(err) = frames.borrow_mut().animation_mut().fit_window() {
            log::warn!("glyph field resize failed: {}", err);
        }
    })?;

    let mouse = pointer.clone();
    let mousemove = Listener::attach(window, "mousemove", move |e: Event| {
        if let Some(e) = e.dyn_ref::<MouseEvent>() {
            mouse.set(PointerState::from_client(e.client_x(), e.client_y()));
        }
    })?;

    let touchmove = Listener::attach(window, "touchmove", move |e: Event| {
        let Some(e) = e.dyn_ref::<TouchEvent>() else {
            return;
        };
        let touches = e.touches();
        let points = (0..touches.length())
            .filter_map(|i| touches.get(i))
            .map(|t| (t.client_x(), t.client_y()));
        if let Some(p) = PointerState::from_touches(points) {
            pointer.set(p);
        }
    })?;

    Ok([resize, mousemove, touchmove])
}

pub fn start() -> Result<(), StartError> {
    if is_running() {
        log::debug!("glyph field already running");
        return Ok(());
    }
    let (canvas, ctx) = acquire(GLYPH_CANVAS_ID)?;
    let window = browser_window()?;
    let pointer = Rc::new(Cell::new(PointerState::default()));

    let mut scene = GlyphScene {
        field: GlyphField::new(GlyphFieldConfig::default(), browser_rng())?,
        canvas,
        ctx,
        pointer: pointer.clone(),
    };
    scene.fit_window()?;

    // on any error below `frames` is dropped, which stops the loop again
    let frames = RafLoop::start(scene)?;
    let listeners = attach_listeners(&window, frames.frames(), pointer)?;
    RUNNING.with(|running| {
        *running.borrow_mut() = Some(Running {
            _frames: frames,
            _listeners: listeners,
        })
    });

    log::info!("glyph field started on #{}", GLYPH_CANVAS_ID);
    Ok(())
}
