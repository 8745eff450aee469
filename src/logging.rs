/// Sends `log` records to stderr, filtered by `RUST_LOG` (default `info`).
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Sends `log` records to the browser console.
#[cfg(target_arch = "wasm32")]
pub(crate) fn init() {
    if log::set_logger(&console::LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Log, Metadata, Record};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log)]
        fn console_log(a: &str);
    }

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    pub(super) struct ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                console_log(&format!("[{} {}] {}", record.level(), record.target(), record.args()));
            }
        }

        fn flush(&self) {}
    }
}
