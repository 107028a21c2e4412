//! The application logger

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{ConfigResult, LoggerConfig, DEFAULT_FILENAME};
use crate::diagnostics::{DiagnosticSinkExt, NoOpSink, SharedSink};
use crate::render::{render_entry, DateFormat, SharedClock, SystemClock};
use crate::sink::{append_entry, default_directory};
use crate::types::{join_pieces, CallSite, Content, Severity};

/// Appends severity-formatted entries to one text file
///
/// A logger only stores where to write and how to stamp entries. Each report
/// opens the file, appends, and closes it again; no handle is held between
/// calls. Reporting never fails visibly: I/O problems are described to the
/// diagnostics sink (silent by default) and otherwise dropped.
///
/// # Example
///
/// ```no_run
/// use applog::{report, report_critical, Logger, Severity};
///
/// let log = Logger::new("service.txt");
///
/// report!(log, "listening on port ", 8080);
/// report!(log, severity = Severity::Error, "retrying upload");
/// report_critical!(log, "database unreachable");
/// ```
#[derive(Clone)]
pub struct Logger {
    filename: String,
    directory: Option<PathBuf>,
    debug_build: bool,
    date_format: DateFormat,
    clock: SharedClock,
    diagnostics: SharedSink,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_FILENAME)
    }
}

impl Logger {
    /// Create a logger writing to `filename` in the documents directory
    ///
    /// No I/O happens until the first report.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            directory: None,
            debug_build: cfg!(debug_assertions),
            date_format: DateFormat::default(),
            clock: Arc::new(SystemClock),
            diagnostics: Arc::new(NoOpSink),
        }
    }

    /// Create a logger from validated settings
    pub fn from_config(config: LoggerConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            filename: config.filename,
            directory: config.directory,
            debug_build: config.debug_build,
            date_format: config.date_format,
            clock: Arc::new(SystemClock),
            diagnostics: Arc::new(NoOpSink),
        })
    }

    /// Write into `directory` instead of the documents directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Override whether `Debug` entries are written
    pub fn with_debug_build(mut self, debug_build: bool) -> Self {
        self.debug_build = debug_build;
        self
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: SharedSink) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Directory the log file lives in
    pub fn directory(&self) -> &Path {
        self.directory.as_deref().unwrap_or_else(|| default_directory())
    }

    /// Full path of the log file
    pub fn path(&self) -> PathBuf {
        self.directory().join(&self.filename)
    }

    pub fn debug_build(&self) -> bool {
        self.debug_build
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// Whether an entry of `severity` would be written
    ///
    /// A dropped severity is noted to the diagnostics sink. The `report!`
    /// macros check this before building any text.
    pub fn accepts(&self, severity: Severity) -> bool {
        if severity.is_suppressed(self.debug_build) {
            self.diagnostics.debug("debug entry suppressed outside a debug build");
            return false;
        }
        true
    }

    /// Report a single message
    pub fn report(&self, content: &str, severity: Severity, site: &CallSite) {
        self.report_pieces([Content::from(content)], severity, site);
    }

    /// Report several messages joined with no separator
    pub fn report_all<I, S>(&self, contents: I, severity: Severity, site: &CallSite)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.report_pieces(
            contents.into_iter().map(|content| Content::from(content.as_ref())),
            severity,
            site,
        );
    }

    /// Report an error by its description
    pub fn report_error<E>(&self, error: &E, severity: Severity, site: &CallSite)
    where
        E: Display + ?Sized,
    {
        self.report_pieces([Content::describe(error)], severity, site);
    }

    /// Report several errors, descriptions joined with no separator
    pub fn report_errors<'a, I, E>(&self, errors: I, severity: Severity, site: &CallSite)
    where
        I: IntoIterator<Item = &'a E>,
        E: Display + ?Sized + 'a,
    {
        self.report_pieces(errors.into_iter().map(Content::describe), severity, site);
    }

    /// Report raw bytes; invalid UTF-8 writes the encoding sentinel instead
    pub fn report_bytes(&self, content: &[u8], severity: Severity, site: &CallSite) {
        self.report_pieces([Content::from(content)], severity, site);
    }

    /// Report pieces joined with no separator
    ///
    /// Every other `report*` method and macro ends up here.
    pub fn report_pieces<I>(&self, pieces: I, severity: Severity, site: &CallSite)
    where
        I: IntoIterator<Item = Content>,
    {
        if !self.accepts(severity) {
            return;
        }

        let entry = match join_pieces(pieces) {
            Ok(content) => Some(self.render(&content, severity, site)),
            Err(err) => {
                self.diagnostics.warn_fmt(format_args!(
                    "{}:{}: {}, writing placeholder",
                    site.short_file(),
                    site.line,
                    err
                ));
                None
            }
        };

        let path = self.path();
        if let Err(err) = append_entry(&path, entry.as_deref()) {
            self.diagnostics
                .warn_fmt(format_args!("failed to write {}: {}", path.display(), err));
        }
    }

    /// Render an entry stamped with this logger's clock, without writing it
    pub fn render(&self, content: &str, severity: Severity, site: &CallSite) -> String {
        let date = self.date_format.format(&self.clock.now());
        render_entry(severity, content, site, &date)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("filename", &self.filename)
            .field("directory", &self.directory())
            .field("debug_build", &self.debug_build)
            .field("date_format", &self.date_format.pattern())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;

    use chrono::{Local, TimeZone};
    use tempfile::tempdir;

    use crate::diagnostics::{DiagnosticLevel, MemorySink};
    use crate::render::FixedClock;
    use crate::sink::ENCODING_SENTINEL;

    const DATE: &str = "10/18/26, 4:57 PM";

    fn frozen() -> SharedClock {
        Arc::new(FixedClock::new(Local.with_ymd_and_hms(2026, 10, 18, 16, 57, 0).unwrap()))
    }

    fn site() -> CallSite {
        CallSite::new("/src/App/X.swift", "run()", 10)
    }

    fn logger_in(dir: &Path) -> Logger {
        Logger::new("t.txt").with_directory(dir).with_clock(frozen())
    }

    #[test]
    fn test_defaults() {
        let logger = Logger::default();
        assert_eq!(logger.filename(), "applog.txt");
        assert_eq!(logger.directory(), default_directory());
        assert_eq!(logger.path(), default_directory().join("applog.txt"));
        assert_eq!(logger.debug_build(), cfg!(debug_assertions));
    }

    #[test]
    fn test_construction_does_no_io() {
        let dir = tempdir().unwrap();
        let logger = logger_in(dir.path());
        assert!(!logger.path().exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_first_report_creates_file() {
        let dir = tempdir().unwrap();
        let logger = logger_in(dir.path());

        logger.report("hello", Severity::Normal, &site());

        assert_eq!(
            fs::read_to_string(logger.path()).unwrap(),
            format!("{DATE}, X.swift, run(), 10 --- hello")
        );
    }

    #[test]
    fn test_second_report_appends_after_newline() {
        let dir = tempdir().unwrap();
        let logger = logger_in(dir.path());

        logger.report("hello", Severity::Normal, &site());
        logger.report("world", Severity::Error, &site());

        assert_eq!(
            fs::read_to_string(logger.path()).unwrap(),
            format!(
                "{DATE}, X.swift, run(), 10 --- hello\n\
                 ERROR:\n\tworld\n\tDATE: {DATE}\n\tSENDER: X.swift, run(), 10"
            )
        );
    }

    #[test]
    fn test_report_all_matches_joined_report() {
        let dir = tempdir().unwrap();
        let joined = Logger::new("joined.txt").with_directory(dir.path()).with_clock(frozen());
        let pieces = Logger::new("pieces.txt").with_directory(dir.path()).with_clock(frozen());

        joined.report("abc", Severity::Normal, &site());
        pieces.report_all(["a", "b", "c"], Severity::Normal, &site());

        assert_eq!(
            fs::read(joined.path()).unwrap(),
            fs::read(pieces.path()).unwrap()
        );
    }

    #[test]
    fn test_report_errors_uses_descriptions() {
        let dir = tempdir().unwrap();
        let logger = logger_in(dir.path());
        let first = io::Error::new(io::ErrorKind::NotFound, "config missing; ");
        let second = io::Error::new(io::ErrorKind::PermissionDenied, "cache locked");

        logger.report_error(&first, Severity::Error, &site());
        logger.report_errors([&first, &second], Severity::Normal, &site());

        let written = fs::read_to_string(logger.path()).unwrap();
        assert!(written.starts_with("ERROR:\n\tconfig missing; \n"));
        assert!(written.ends_with("--- config missing; cache locked"));
    }

    #[test]
    fn test_report_errors_accepts_trait_objects() {
        let dir = tempdir().unwrap();
        let logger = logger_in(dir.path());
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(io::Error::new(io::ErrorKind::Other, "a")),
            "b".into(),
        ];

        logger.report_errors(errors.iter().map(|e| &**e), Severity::Normal, &site());

        assert!(fs::read_to_string(logger.path()).unwrap().ends_with("--- ab"));
    }

    #[test]
    fn test_debug_suppressed_outside_debug_build() {
        let dir = tempdir().unwrap();
        let sink = Arc::new(MemorySink::new());
        let logger = logger_in(dir.path())
            .with_debug_build(false)
            .with_diagnostics(sink.clone());

        logger.report("noise", Severity::Debug, &site());
        assert!(!logger.path().exists());
        assert_eq!(sink.messages(DiagnosticLevel::Debug).len(), 1);

        logger.report("kept", Severity::Normal, &site());
        let before = fs::read(logger.path()).unwrap();
        logger.report("noise", Severity::Debug, &site());
        assert_eq!(fs::read(logger.path()).unwrap(), before);
    }

    #[test]
    fn test_debug_written_in_debug_build() {
        let dir = tempdir().unwrap();
        let logger = logger_in(dir.path()).with_debug_build(true);

        logger.report("trace", Severity::Debug, &site());

        assert_eq!(
            fs::read_to_string(logger.path()).unwrap(),
            format!("{DATE}, X.swift, run(), 10 --- trace")
        );
    }

    #[test]
    fn test_accepts_follows_build_flag() {
        let sink = Arc::new(MemorySink::new());
        let production = Logger::new("t.txt")
            .with_debug_build(false)
            .with_diagnostics(sink.clone());
        let development = Logger::new("t.txt").with_debug_build(true);

        assert!(!production.accepts(Severity::Debug));
        assert!(production.accepts(Severity::Critical));
        assert!(production.accepts(Severity::Normal));
        assert!(development.accepts(Severity::Debug));
        assert_eq!(sink.messages(DiagnosticLevel::Debug).len(), 1);
    }

    #[test]
    fn test_invalid_bytes_write_sentinel() {
        let dir = tempdir().unwrap();
        let sink = Arc::new(MemorySink::new());
        let logger = logger_in(dir.path()).with_diagnostics(sink.clone());

        logger.report_bytes(&[0xc3, 0x28], Severity::Normal, &site());

        assert_eq!(fs::read_to_string(logger.path()).unwrap(), ENCODING_SENTINEL);
        assert_eq!(sink.messages(DiagnosticLevel::Warn).len(), 1);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        let sink = Arc::new(MemorySink::new());
        let logger = logger_in(dir.path()).with_diagnostics(sink.clone());
        fs::create_dir(logger.path()).unwrap();

        logger.report("lost", Severity::Critical, &site());

        let warnings = sink.messages(DiagnosticLevel::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("failed to write"));
    }

    #[test]
    fn test_render_is_deterministic_with_frozen_clock() {
        let logger = Logger::new("t.txt").with_clock(frozen());
        assert_eq!(
            logger.render("same", Severity::Critical, &site()),
            logger.render("same", Severity::Critical, &site())
        );
    }

    #[test]
    fn test_from_config() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::new("cfg.txt")
            .with_directory(dir.path())
            .with_debug_build(false)
            .with_date_format(DateFormat::new("%Y-%m-%d").unwrap());

        let logger = Logger::from_config(config).unwrap().with_clock(frozen());
        logger.report("configured", Severity::Normal, &site());

        assert_eq!(logger.path(), dir.path().join("cfg.txt"));
        assert!(!logger.debug_build());
        assert_eq!(
            fs::read_to_string(logger.path()).unwrap(),
            "2026-10-18, X.swift, run(), 10 --- configured"
        );
    }

    #[test]
    fn test_from_config_rejects_empty_filename() {
        assert!(Logger::from_config(LoggerConfig::new("")).is_err());
    }
}
