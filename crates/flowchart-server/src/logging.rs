use std::io::Write;
use std::time::Instant;

/// Completion calls routinely take a few seconds; only warn past this.
pub const SLOW_CALL_MS: u128 = 15_000;

/// Initialize the global logger. `debug` lowers the default filter for the
/// workspace crates only, keeping actix and reqwest at info.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        "info,flowchart_server=debug,flowchart_core=debug,flowchart_llm=debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Measures a generation round-trip. Calls slower than [`SLOW_CALL_MS`] are
/// reported on drop, including failed ones.
pub struct Timer {
    name: &'static str,
    start: Instant,
}

impl Timer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }

    pub fn is_slow(&self) -> bool {
        self.elapsed_ms() > SLOW_CALL_MS
    }

    pub fn debug(&self, scope: &str) {
        log::debug!("[{}] {} finished in {}ms", scope, self.name, self.elapsed_ms());
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if self.is_slow() {
            log::warn!(
                "{} took {}ms, over the {}ms budget",
                self.name,
                self.elapsed_ms(),
                SLOW_CALL_MS
            );
        }
    }
}
