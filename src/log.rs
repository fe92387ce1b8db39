// src/log.rs
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the stderr logger. `RUST_LOG` overrides the default `info` filter.
///
/// Lines look like `[00:00:01.250][INFO] Scraping page 3`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    start();
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_045), "01:02:03.045");
    }
}
