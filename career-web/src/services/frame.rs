//! # Animation Frame Loop
//!
//! Drives per-frame work through `requestAnimationFrame`. The callback gets
//! the time since the previous frame and returns whether it wants another
//! one, so a loop idles as soon as there is nothing to animate.
//!
//! Dropping a [`FrameLoop`] cancels any pending frame; components keep theirs
//! in a local `StoredValue` and cancel it in `on_cleanup`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::js_error_message;

/// Longest step handed to a callback. Larger gaps (background tabs) are
/// clamped so animations resume instead of jumping to the end.
pub const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("No window available")]
    NoWindow,

    #[error("requestAnimationFrame failed: {0}")]
    Request(String),
}

type FrameCallback = Closure<dyn FnMut(f64)>;

#[derive(Default)]
struct FrameState {
    callback: RefCell<Option<FrameCallback>>,
    request_id: Cell<Option<i32>>,
    last_timestamp: Cell<Option<f64>>,
}

impl FrameState {
    fn request(&self) -> Result<(), FrameError> {
        let window = web_sys::window().ok_or(FrameError::NoWindow)?;
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| FrameError::Request(js_error_message(&err)))?;
        self.request_id.set(Some(id));
        Ok(())
    }

    fn cancel(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.last_timestamp.set(None);
    }
}

pub struct FrameLoop {
    state: Rc<FrameState>,
}

impl FrameLoop {
    /// Create an idle loop around `on_frame`. Nothing runs until
    /// [`FrameLoop::start`].
    pub fn new<F>(mut on_frame: F) -> Self
    where
        F: FnMut(Duration) -> bool + 'static,
    {
        let state = Rc::new(FrameState::default());
        let weak: Weak<FrameState> = Rc::downgrade(&state);

        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.request_id.set(None);
            let dt = frame_step(state.last_timestamp.replace(Some(timestamp)), timestamp);

            if on_frame(dt) {
                if let Err(err) = state.request() {
                    log::warn!("Frame loop stopped: {}", err);
                    state.last_timestamp.set(None);
                }
            } else {
                state.last_timestamp.set(None);
            }
        });
        *state.callback.borrow_mut() = Some(callback);

        Self { state }
    }

    /// Schedule the next frame unless one is already pending.
    pub fn start(&self) -> Result<(), FrameError> {
        if self.is_running() {
            return Ok(());
        }
        self.state.request()
    }

    pub fn cancel(&self) {
        self.state.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.state.request_id.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.cancel();
    }
}

/// Time between two `requestAnimationFrame` timestamps (milliseconds),
/// clamped to `0..=MAX_FRAME_STEP`. The first frame of a run has no
/// predecessor and advances by zero.
fn frame_step(previous: Option<f64>, now: f64) -> Duration {
    let Some(previous) = previous else {
        return Duration::ZERO;
    };
    let millis = (now - previous).clamp(0.0, MAX_FRAME_STEP.as_secs_f64() * 1000.0);
    Duration::from_secs_f64(millis / 1000.0)
}
