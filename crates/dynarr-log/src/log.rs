mod error;
pub mod fmt;

use std::{
    io::Write,
    sync::OnceLock,
};

use core::str::FromStr;

use parking_lot::Mutex;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use crate::Result;

use fmt::SegmentSpec;

pub use error::LogError;
pub use fmt::{LogFmt, LogFmtBuilder, LogSpec};

/// Handle to a format registered with [`custom_fmt`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CustomFmt(usize);

impl CustomFmt {

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Record severity, from least to most verbose.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

pub enum LevelFmt {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Other(CustomFmt, Level),
}

impl LevelFmt {

    #[inline(always)]
    fn level(&self) -> Level {
        match self {
            Self::Error => Level::Error,
            Self::Warn => Level::Warn,
            Self::Info => Level::Info,
            Self::Debug => Level::Debug,
            Self::Trace => Level::Trace,
            Self::Other(_, level) => *level,
        }
    }
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

/// Per-target maximum levels, in `RUST_LOG` syntax.
///
/// `"warn,dynarr::vec_types=trace"` logs warnings everywhere and everything
/// under `dynarr::vec_types`. Entries that fail to parse are skipped. When a
/// target is named twice the more restrictive level wins.
#[derive(Clone, Debug)]
pub struct Filters {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Filters {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Filters {

    pub fn parse(spec: &str) -> Self {
        let mut filters = Self::default();
        for arg in spec.split(',') {
            let (module, level) = match arg.find('=') {
                Some(j) => (Some(arg[..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            if let Some(module) = module {
                let entry = filters.target_levels
                    .entry(CompactString::new(module))
                    .or_insert(level);
                *entry = (*entry).min(level);
            } else {
                filters.base_level = level;
            }
        }
        filters
    }

    /// Reads `RUST_LOG`, falling back to errors only.
    pub fn from_env() -> Self {
        match std::env::var("RUST_LOG") {
            Ok(env) => Self::parse(&env),
            Err(_) => Self::default(),
        }
    }

    /// Level for `target`, walking up `::` separated parents.
    pub fn target_level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }
}

pub(crate) struct Logger {
    out: Box<dyn WriteColor + Send>,
    info_fmt: LogFmt,
    warn_fmt: LogFmt,
    error_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    custom_fmt: Vec<LogFmt>,
    filters: Filters,
}

impl Logger {

    pub(crate) fn new(filters: Filters, out: Box<dyn WriteColor + Send>) -> Self {
        Self {
            out,
            info_fmt: LogFmt::level_default(Level::Info),
            warn_fmt: LogFmt::level_default(Level::Warn),
            error_fmt: LogFmt::level_default(Level::Error),
            debug_fmt: LogFmt::level_default(Level::Debug),
            trace_fmt: LogFmt::level_default(Level::Trace),
            custom_fmt: Vec::new(),
            filters,
        }
    }

    fn fmt_mut(&mut self, level: Level) -> &mut LogFmt {
        match level {
            Level::Error => &mut self.error_fmt,
            Level::Warn => &mut self.warn_fmt,
            Level::Info => &mut self.info_fmt,
            Level::Debug => &mut self.debug_fmt,
            Level::Trace => &mut self.trace_fmt,
        }
    }

    #[inline(always)]
    fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.filters.target_level(target)
    }

    pub(crate) fn log(&mut self, target: &str, level: LevelFmt, msg: core::fmt::Arguments) -> Result<bool> {
        if !self.enabled(target, level.level()) {
            return Ok(false)
        }
        let fmt = match level {
            LevelFmt::Error => &self.error_fmt,
            LevelFmt::Warn => &self.warn_fmt,
            LevelFmt::Info => &self.info_fmt,
            LevelFmt::Debug => &self.debug_fmt,
            LevelFmt::Trace => &self.trace_fmt,
            LevelFmt::Other(fmt, _) => {
                self.custom_fmt
                    .get(fmt.index())
                    .ok_or(LogError::UnknownFormat(fmt))?
            },
        };
        for segment in fmt {
            match segment {
                SegmentSpec::Message(log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        write!(self.out, "{}", msg)?;
                        self.out.reset()?;
                    } else {
                        write!(self.out, "{}", msg)?;
                    }
                },
                SegmentSpec::Text(text, log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        self.out.write_all(text.as_bytes())?;
                        self.out.reset()?;
                    } else {
                        self.out.write_all(text.as_bytes())?;
                    }
                },
            }
        }
        self.out.write_all(b"\n")?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Installs the global logger with filters from `RUST_LOG`.
///
/// Calling this more than once keeps the first logger.
pub fn init() {
    install(Filters::from_env());
}

/// Installs the global logger with an explicit filter string.
pub fn init_with_filters(spec: &str) {
    install(Filters::parse(spec));
}

fn install(filters: Filters) {
    let _ = LOGGER.get_or_init(|| {
        Mutex::new(Logger::new(
            filters,
            Box::new(StandardStream::stderr(ColorChoice::Auto)),
        ))
    });
}

#[inline(always)]
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

#[inline(always)]
fn with_logger<R>(f: impl FnOnce(&mut Logger) -> R) -> Result<R> {
    let logger = LOGGER.get().ok_or(LogError::NotInitialized)?;
    Ok(f(&mut logger.lock()))
}

/// Redirects output, e.g. into a `termcolor::Buffer`.
pub fn set_writer(out: impl WriteColor + Send + 'static) -> Result<()> {
    with_logger(|logger| logger.out = Box::new(out))
}

pub fn set_filters(spec: &str) -> Result<()> {
    with_logger(|logger| logger.filters = Filters::parse(spec))
}

#[inline(always)]
pub fn enabled(target: &str, level: Level) -> bool {
    with_logger(|logger| logger.enabled(target, level)).unwrap_or(false)
}

#[inline(always)]
fn level_fmt(level: Level, mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_logger(|logger| {
        let mut builder = LogFmtBuilder::new(logger.fmt_mut(level));
        f(&mut builder);
    })
}

#[inline(always)]
pub fn error_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Error, f)
}

#[inline(always)]
pub fn warn_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Warn, f)
}

#[inline(always)]
pub fn info_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Info, f)
}

#[inline(always)]
pub fn debug_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Debug, f)
}

#[inline(always)]
pub fn trace_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Trace, f)
}

#[inline(always)]
pub fn custom_fmt(fmt: LogFmt) -> Result<CustomFmt> {
    with_logger(|logger| {
        logger.custom_fmt.push(fmt);
        CustomFmt(logger.custom_fmt.len() - 1)
    })
}

/// Writes one record. Returns `Ok(false)` when the record was filtered out
/// or no logger has been installed.
#[inline(always)]
pub fn log(target: &str, level: LevelFmt, args: core::fmt::Arguments) -> Result<bool> {
    match LOGGER.get() {
        Some(logger) => logger.lock().log(target, level, args),
        None => Ok(false),
    }
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::LevelFmt::Error, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::LevelFmt::Warn, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::LevelFmt::Info, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::LevelFmt::Debug, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::LevelFmt::Trace, format_args!($($arg)+))
            .unwrap_or(false)
    };
}
