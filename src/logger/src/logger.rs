use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::Level;
use log::LevelFilter;
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;
use once_cell::sync::OnceCell;

static INSTANCE: OnceCell<Logger> = OnceCell::new();

/// Process-wide logger state: a leveled, colorized `env_logger` backend
/// bridged with an [`indicatif::MultiProgress`] so that progress-bar
/// redraws never interleave with log lines.
#[derive(Debug)]
pub struct Logger {
    multi_pg: MultiProgress,
}

impl Logger {
    /// Initialize the global logger at the verbosity implied by `verbosity`
    /// (see [`Logger::u8_to_loglevel`]). Must be called at most once.
    pub fn init(verbosity: u8) {
        let log_level = Self::u8_to_loglevel(verbosity);
        let env = Env::default().filter("PLEXCALL_LOG");

        let logger = Builder::new()
            .filter_level(log_level)
            .format(|buf, record| {
                let traceback = if record.level() == Level::Error {
                    format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0))
                } else {
                    String::new()
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(record.level() == Level::Error);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn => Color::Yellow,
                    Level::Info => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan,
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .build();

        let multi_pg = MultiProgress::new();
        LogWrapper::new(multi_pg.clone(), logger)
            .try_init()
            .expect("failed to wrap logger with multi-progress");
        INSTANCE.set(Self { multi_pg }).ok();
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            4..=u8::MAX => LevelFilter::Trace,
        }
    }

    /// Adjust the maximum log level without re-initializing the backend.
    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }

    /// The shared [`MultiProgress`] that progress bars should be registered
    /// against, so their redraws cooperate with the log backend.
    ///
    /// # Panics
    /// Panics if called before [`Logger::init`].
    pub fn multi() -> &'static MultiProgress {
        &INSTANCE.get().expect("logger not initialized").multi_pg
    }
}
