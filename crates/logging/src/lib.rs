//! Helpers for logging from tessera binaries and tests.
//!
//! The libraries only ever talk to the `log` facade.  Something has to install a logger for that output to go
//! anywhere, and this is it.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Log to stderr.
///
/// Honors `RUST_LOG`, falling back to [DEFAULT_FILTER].  If called multiple times in the same process, only applies
/// once, so every test may call it.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let res = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(DEFAULT_FILTER),
        )
        .format(|buf, record| {
            use std::io::Write;

            let now = time::OffsetDateTime::now_utc();

            writeln!(
                buf,
                "{} {} time={} target={}",
                record.level(),
                record.args(),
                now,
                record.target()
            )
        })
        .try_init();

        // Someone else got there first, which is fine.
        if let Err(e) = res {
            log::debug!("Not installing the stderr logger: {}", e);
        }
    });
}
