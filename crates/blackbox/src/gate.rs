//! crates/blackbox/src/gate.rs
//! Public entry point: build-mode gate, feature gate, console write.

use std::io::{self, Write};

use blackbox_sink::ConsoleSink;

use crate::feature::LogFeature;
use crate::format::{self, CallSite};
use crate::priority::Priority;

/// Whether this build carries console diagnostics at all.
///
/// True in debug builds and whenever the `console-logging` cargo feature is
/// enabled. The constant is evaluated in this crate, so the feature name
/// resolves against blackbox's own feature set; the
/// [`blackbox!`](crate::blackbox) macro branches on it so release builds
/// constant-fold every gated statement away.
pub const DIAGNOSTICS_ENABLED: bool = cfg!(any(debug_assertions, feature = "console-logging"));

/// Conditionally prints one formatted block to standard output.
///
/// Two independent gates must pass before any work happens. The build-mode
/// gate is conditional compilation: outside diagnostic builds this function
/// has an empty body and no feature lookup, formatting, or allocation
/// occurs. Inside diagnostic builds, the feature gate consults
/// [`LogFeature::should_log`] and returns silently when the toggle is off.
///
/// When both gates pass, the rendered block is written to a locked stdout
/// handle as one contiguous write. Write errors are discarded: a diagnostic
/// helper must never fault its caller.
pub fn emit<F, S>(parts: &[S], feature: F, priority: Priority, site: CallSite<'_>)
where
    F: LogFeature,
    S: AsRef<str>,
{
    #[cfg(any(debug_assertions, feature = "console-logging"))]
    {
        let _ = emit_to(&mut blackbox_sink::stdout(), parts, feature, priority, site);
    }
    #[cfg(not(any(debug_assertions, feature = "console-logging")))]
    {
        let _ = (parts, feature, priority, site);
    }
}

/// Applies the feature gate and writes the rendered block to `sink`.
///
/// This sits below the build-mode gate so tests and custom-sink
/// integrations can drive the feature gate and formatter deterministically;
/// [`emit`] and the [`blackbox!`](crate::blackbox) macro are the gated
/// entry points. A disabled feature produces no write and returns `Ok(())`.
pub fn emit_to<W, F, S>(
    sink: &mut ConsoleSink<W>,
    parts: &[S],
    feature: F,
    priority: Priority,
    site: CallSite<'_>,
) -> io::Result<()>
where
    W: Write,
    F: LogFeature,
    S: AsRef<str>,
{
    if !feature.should_log() {
        return Ok(());
    }
    sink.write_block(&format::render(priority, site, parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone)]
    enum Toggle {
        On,
        Off,
    }

    impl LogFeature for Toggle {
        fn should_log(self) -> bool {
            matches!(self, Self::On)
        }
    }

    const SITE: CallSite<'static> = CallSite {
        file: "/a/b/Foo.swift",
        function: "bar()",
        line: 42,
    };

    #[test]
    fn disabled_feature_writes_nothing() {
        let mut sink = ConsoleSink::new(Vec::new());
        emit_to(&mut sink, &["hello"], Toggle::Off, Priority::Error, SITE)
            .expect("suppression is not an error");
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn enabled_feature_writes_exactly_the_rendered_block() {
        let mut sink = ConsoleSink::new(Vec::new());
        emit_to(&mut sink, &["hello"], Toggle::On, Priority::Error, SITE)
            .expect("write succeeds");

        let written = String::from_utf8(sink.into_inner()).expect("utf-8");
        let rendered = format::render(Priority::Error, SITE, &["hello"]);
        assert_eq!(written, rendered);
    }

    #[test]
    fn end_to_end_single_part_block() {
        let mut sink = ConsoleSink::new(Vec::new());
        emit_to(&mut sink, &["hello"], Toggle::On, Priority::Error, SITE)
            .expect("write succeeds");
        assert_eq!(
            String::from_utf8(sink.into_inner()).expect("utf-8"),
            "\n[ERROR]\nFoo.bar():42\nhello\n"
        );
    }

    #[test]
    fn end_to_end_empty_parts_block() {
        let mut sink = ConsoleSink::new(Vec::new());
        emit_to(&mut sink, &[] as &[&str], Toggle::On, Priority::Error, SITE)
            .expect("write succeeds");
        assert_eq!(
            String::from_utf8(sink.into_inner()).expect("utf-8"),
            "\n[ERROR]\nFoo.bar():42\n"
        );
    }

    #[test]
    fn repeated_calls_append_identical_blocks() {
        let mut sink = ConsoleSink::new(Vec::new());
        emit_to(&mut sink, &["x"], Toggle::On, Priority::Notice, SITE).expect("write succeeds");
        emit_to(&mut sink, &["x"], Toggle::On, Priority::Notice, SITE).expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let block = format::render(Priority::Notice, SITE, &["x"]);
        assert_eq!(output, format!("{block}{block}"));
    }

    #[test]
    fn sink_errors_surface_through_emit_to() {
        struct BrokenWriter;

        impl Write for BrokenWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = ConsoleSink::new(BrokenWriter);
        let err = emit_to(&mut sink, &["hello"], Toggle::On, Priority::Error, SITE)
            .expect_err("broken sink must fail");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        // The feature gate runs first, so a disabled toggle never touches
        // the writer at all.
        emit_to(&mut sink, &["hello"], Toggle::Off, Priority::Error, SITE)
            .expect("suppression is not an error");
    }

    #[test]
    fn shipped_catalog_is_silent_by_default() {
        use crate::feature::{Core, Feature};

        let mut sink = ConsoleSink::new(Vec::new());
        emit_to(
            &mut sink,
            &["startup trace"],
            Feature::Core(Core::Startup),
            Priority::Informational,
            SITE,
        )
        .expect("suppression is not an error");
        assert!(sink.into_inner().is_empty());
    }

    #[cfg(any(debug_assertions, feature = "console-logging"))]
    #[test]
    fn diagnostic_builds_report_diagnostics_enabled() {
        assert!(DIAGNOSTICS_ENABLED);
    }

    #[cfg(not(any(debug_assertions, feature = "console-logging")))]
    #[test]
    fn release_builds_report_diagnostics_disabled() {
        assert!(!DIAGNOSTICS_ENABLED);
    }
}
