//! Owned frame loop handle.
//!
//! In the browser `wasm::scheduler::RafLoop` pumps one frame per display
//! refresh; tests pump frames by hand.

/// Something that does one full update + draw pass per call.
pub trait Animate {
    fn frame(&mut self);
}

impl<F: FnMut()> Animate for F {
    fn frame(&mut self) {
        self()
    }
}

pub struct FrameLoop<A> {
    animation: A,
    running: bool,
    frames: u64,
}

impl<A: Animate> FrameLoop<A> {
    /// A stopped loop around `animation`.
    pub fn new(animation: A) -> Self {
        Self {
            animation,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames rendered since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run up to `n` frames. A stopped loop runs none. Returns frames run.
    pub fn pump(&mut self, n: u64) -> u64 {
        if !self.running {
            return 0;
        }
        for _ in 0..n {
            self.animation.frame();
        }
        self.frames += n;
        n
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }
}
