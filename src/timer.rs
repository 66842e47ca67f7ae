// Console helpers. Timers and log lines go to the browser console; on native
// targets (unit tests) they compile away so nothing calls into JS.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

#[macro_export]
macro_rules! console_log {
    ( $( $t:tt )* ) => {
        $crate::timer::log(&format!( $( $t )* ))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

pub struct Timer<'a> {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        console::time_end_with_label(self.name);
    }
}
