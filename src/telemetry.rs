use std::io::Write;

/// Install the process-wide logger. `RUST_LOG` overrides the default `info` filter.
///
/// Calling this more than once is harmless; later calls leave the first logger in place.
pub fn init_logger() {
    let result =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format(move |buf, record| {
                let level = record.level();
                let target = record.target();
                let style = buf.default_level_style(level);
                let timestamp = buf.timestamp();
                let args = record.args();
                writeln!(buf, "[{timestamp} {style}{level}{style:#} {target}] {args}")
            })
            .try_init();
    if let Err(e) = result {
        log::debug!("logger already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice() {
        init_logger();
        init_logger();
        log::info!("logger initialized");
    }
}
