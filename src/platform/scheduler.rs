//! requestAnimationFrame plumbing
//!
//! The simulation is frozen outside of a round, so the frame loop has a real
//! stop: cancelling deregisters the pending callback entirely, and a later
//! start registers a fresh one. Starting while a loop is live replaces it
//! rather than stacking a second one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type LoopClosure = Closure<dyn FnMut(f64)>;

/// Start/stop handle over `requestAnimationFrame`. Clones share the same
/// underlying loop.
#[derive(Clone)]
pub struct FrameScheduler {
    raf_id: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<LoopClosure>>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            raf_id: Rc::new(Cell::new(None)),
            closure: Rc::new(RefCell::new(None)),
        }
    }

    /// Whether a frame callback is currently registered
    pub fn running(&self) -> bool {
        self.raf_id.get().is_some()
    }

    /// Run `callback` every animation frame until `stop`, replacing any loop
    /// already running. Must not be called from inside the callback itself.
    pub fn start(&self, mut callback: impl FnMut(f64) + 'static) {
        self.stop();

        let raf_id = self.raf_id.clone();
        let closure_slot = self.closure.clone();
        let wrapper = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            callback(timestamp);
            // The callback may have stopped the loop; only chain the next
            // frame while it is still live
            if raf_id.get().is_some() {
                if let Some(closure) = closure_slot.borrow().as_ref() {
                    raf_id.set(request_frame(closure));
                }
            }
        });

        let first_id = request_frame(&wrapper);
        *self.closure.borrow_mut() = Some(wrapper);
        self.raf_id.set(first_id);
    }

    /// Cancel the pending frame callback. Safe to call from inside the frame
    /// callback (the current invocation finishes, no further one is
    /// scheduled) and when nothing is running.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn request_frame(closure: &LoopClosure) -> Option<i32> {
    let window = web_sys::window()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
