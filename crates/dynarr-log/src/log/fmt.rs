use compact_str::CompactString;

use termcolor::{Color, ColorSpec};

use super::Level;

/// Ordered list of segments written for every record of one level.
#[derive(Default, Clone)]
pub struct LogFmt {
    segments: Vec<SegmentSpec>,
}

impl LogFmt {

    /// `[LEVEL] message`, with the tag colored by severity.
    pub fn level_default(level: Level) -> Self {
        let (tag, color) = match level {
            Level::Error => ("[ERROR] ", Color::Red),
            Level::Warn => ("[WARN] ", Color::Yellow),
            Level::Info => ("[INFO] ", Color::Green),
            Level::Debug => ("[DEBUG] ", Color::Blue),
            Level::Trace => ("[TRACE] ", Color::Magenta),
        };
        let mut fmt = Self::default();
        LogFmtBuilder::new(&mut fmt)
            .text(tag, |spec| spec.with_color_spec(|c| {
                c.set_fg(Some(color)).set_bold(true);
            }))
            .message(|spec| spec);
        fmt
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn clear(&mut self) {
        self.segments.clear();
    }
}

impl<'a> IntoIterator for &'a LogFmt {

    type Item = &'a SegmentSpec;
    type IntoIter = core::slice::Iter<'a, SegmentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[derive(Default, Clone)]
pub struct LogSpec {
    pub color_spec: Option<ColorSpec>,
}

impl LogSpec {

    #[inline(always)]
    pub fn with_color_spec(mut self, mut f: impl FnMut(&mut ColorSpec)) -> Self {
        let color_spec = self.color_spec.insert(ColorSpec::new());
        f(color_spec);
        self
    }
}

#[derive(Clone)]
pub enum SegmentSpec {
    Message(LogSpec),
    Text(CompactString, LogSpec),
}

/// Rebuilds a [`LogFmt`] from scratch; the previous segments are discarded.
pub struct LogFmtBuilder<'a> {
    fmt: &'a mut LogFmt,
}

impl<'a> LogFmtBuilder<'a> {

    #[inline(always)]
    pub fn new(fmt: &'a mut LogFmt) -> Self {
        fmt.clear();
        Self {
            fmt,
        }
    }

    #[inline(always)]
    pub fn message(&mut self, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Message(f(Default::default())));
        self
    }

    #[inline(always)]
    pub fn text(&mut self, text: &str, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Text(CompactString::new(text), f(Default::default())));
        self
    }
}
