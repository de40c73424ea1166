use std::cell::RefCell;

use rand::rngs::SmallRng;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

use super::dom::{acquire, browser_rng, browser_window, is_on_screen, Listener};
use super::scheduler::RafLoop;
use crate::config::{StarfieldConfig, STARFIELD_CANVAS_ID};
use crate::error::StartError;
use crate::frame::Animate;
use crate::starfield::Starfield;
use crate::viewport::Viewport;

thread_local! {
    static RUNNING: RefCell<Option<Running>> = const { RefCell::new(None) };
}

struct Running {
    _frames: RafLoop<StarfieldScene>,
    _resize: Listener,
}

struct StarfieldScene {
    field: Starfield<SmallRng>,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl StarfieldScene {
    /// Size the backing store to the canvas' layout box (no pixel-ratio scaling).
    fn fit_layout(&mut self) {
        let width = self.canvas.offset_width().max(0);
        let height = self.canvas.offset_height().max(0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(Viewport::new(width as f32, height as f32));
    }
}

impl Animate for StarfieldScene {
    fn frame(&mut self) {
        let visible = is_on_screen(&self.canvas);
        self.field.frame(&mut self.ctx, visible);
    }
}

pub fn is_running() -> bool {
    RUNNING.with(|running| running.borrow().is_some())
}

/// Cancel the frame loop and detach the resize listener. Returns false if
/// nothing was running.
pub fn stop() -> bool {
    let Some(running) = RUNNING.with(|running| running.borrow_mut().take()) else {
        return false;
    };
    drop(running);
    log::info!("starfield stopped");
    true
}

pub fn start() -> Result<(), StartError> {
    if is_running() {
        log::debug!("starfield already running");
        return Ok(());
    }
    let (canvas, ctx) = acquire(STARFIELD_CANVAS_ID)?;
    let window = browser_window()?;

    let mut scene = StarfieldScene {
        field: Starfield::new(StarfieldConfig::default(), browser_rng())?,
        canvas,
        ctx,
    };
    scene.fit_layout();

    let frames = RafLoop::start(scene)?;
    let scene = frames.frames();
    let resize = Listener::attach(&window, "resize", move |_: Event| {
        scene.borrow_mut().animation_mut().fit_layout();
    })?;
    RUNNING.with(|running| {
        *running.borrow_mut() = Some(Running {
            _frames: frames,
            _resize: resize,
        })
    });

    log::info!("starfield started on #{}", STARFIELD_CANVAS_ID);
    Ok(())
}
