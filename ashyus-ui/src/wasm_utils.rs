//! Browser interop
//!
//! Event listeners are tied to a guard struct that removes them on drop, so a
//! listener lives exactly as long as the component that owns the guard. Keep
//! the guard in a signal or hook and drop it to detach.
//!
//! Everything here is a no-op off wasm so views still build and test natively.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    /// A window event listener that removes itself when dropped.
    pub struct WindowEventListener {
        window: web_sys::Window,
        event_name: &'static str,
        callback: Closure<dyn FnMut(JsValue)>,
    }

    impl WindowEventListener {
        pub fn new(event_name: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let mut callback = callback;
            let callback: Closure<dyn FnMut(JsValue)> =
                Closure::wrap(Box::new(move |_: JsValue| callback()));

            window
                .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
                .ok()?;

            Some(Self {
                window,
                event_name,
                callback,
            })
        }
    }

    impl Drop for WindowEventListener {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                self.event_name,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }

    pub fn now_ms() -> i64 {
        js_sys::Date::now() as i64
    }

    pub fn navigator_online() -> bool {
        web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true)
    }

    pub fn scroll_to_top() {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn set_document_title(title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    /// Call a zero-argument method (`showModal`, `close`) on the element with `id`.
    pub fn call_element_method(id: &str, method: &str) {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        if let Ok(func) = js_sys::Reflect::get(&element, &method.into()) {
            if let Some(func) = func.dyn_ref::<js_sys::Function>() {
                let _ = func.call0(&element);
            }
        }
    }

    pub fn element_has_attribute(id: &str, attribute: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .is_some_and(|e| e.has_attribute(attribute))
    }

    pub async fn sleep_ms(ms: u64) {
        gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub struct WindowEventListener;

    impl WindowEventListener {
        pub fn new(_event_name: &'static str, _callback: impl FnMut() + 'static) -> Option<Self> {
            None
        }
    }

    pub fn now_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    pub fn navigator_online() -> bool {
        true
    }

    pub fn scroll_to_top() {}

    pub fn set_document_title(_title: &str) {}

    pub fn call_element_method(_id: &str, _method: &str) {}

    pub fn element_has_attribute(_id: &str, _attribute: &str) -> bool {
        false
    }

    pub async fn sleep_ms(ms: u64) {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

pub use imp::*;
