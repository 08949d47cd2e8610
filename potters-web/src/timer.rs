//! Cancellable countdown interval.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::Callback;

use crate::dom;

/// RAII wrapper around a browser interval. At most one exists per armed
/// countdown, and dropping it clears the interval, so a superseded timer
/// can never fire against a later question.
pub struct CountdownInterval {
    handle: i32,
    // Kept alive for the interval's lifetime; dropping the closure early
    // would invalidate the scheduled callback.
    _closure: Closure<dyn FnMut()>,
}

impl CountdownInterval {
    /// Schedule `on_tick` once per `interval_ms` until dropped.
    ///
    /// # Panics
    /// Panics outside of a browser context where no scheduler exists.
    #[must_use]
    pub fn start(interval_ms: i32, on_tick: Callback<()>) -> Self {
        let closure = Closure::wrap(Box::new(move || on_tick.emit(())) as Box<dyn FnMut()>);
        let handle = dom::window()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms,
            )
            .expect("interval should be schedulable in web context");
        Self {
            handle,
            _closure: closure,
        }
    }
}

impl Drop for CountdownInterval {
    fn drop(&mut self) {
        dom::window().clear_interval_with_handle(self.handle);
    }
}
