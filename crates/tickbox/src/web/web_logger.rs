use wasm_bindgen::JsValue;

/// Implements [`log::Log`] to log messages to `console.log`, `console.warn`, etc.
pub struct WebLogger {
    filter: log::LevelFilter,
}

impl WebLogger {
    /// Install a new `WebLogger`, piping all [`log`] events to the web console.
    ///
    /// # Errors
    /// Fails if a logger is already installed.
    pub fn init(filter: log::LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_max_level(filter);
        log::set_boxed_logger(Box::new(Self::new(filter)))
    }

    /// Create a new [`WebLogger`] with the given filter,
    /// but don't install it.
    pub fn new(filter: log::LevelFilter) -> Self {
        Self { filter }
    }
}

impl log::Log for WebLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));

        match record.level() {
            log::Level::Trace => web_sys::console::trace_1(&msg),
            log::Level::Debug => web_sys::console::debug_1(&msg),
            log::Level::Info => web_sys::console::info_1(&msg),
            log::Level::Warn => web_sys::console::warn_1(&msg),
            log::Level::Error => web_sys::console::error_1(&msg),
        }
    }

    fn flush(&self) {}
}
