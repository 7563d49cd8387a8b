//! crates/blackbox/tests/gating.rs
//! Public-surface tests for the gating-and-formatting pipeline.

use blackbox::{CallSite, Core, Feature, LogFeature, Priority};
use blackbox_sink::ConsoleSink;

#[derive(Copy, Clone)]
enum TestFeature {
    Enabled,
    Disabled,
}

impl LogFeature for TestFeature {
    fn should_log(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

const SITE: CallSite<'static> = CallSite {
    file: "/a/b/Foo.swift",
    function: "bar()",
    line: 42,
};

#[test]
fn enabled_feature_produces_the_specified_block() {
    let mut sink = ConsoleSink::new(Vec::new());
    blackbox::emit_to(&mut sink, &["hello"], TestFeature::Enabled, Priority::Error, SITE)
        .expect("write succeeds");
    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        "\n[ERROR]\nFoo.bar():42\nhello\n"
    );
}

#[test]
fn disabled_feature_is_silent() {
    let mut sink = ConsoleSink::new(Vec::new());
    blackbox::emit_to(&mut sink, &["hello"], TestFeature::Disabled, Priority::Error, SITE)
        .expect("suppression is not an error");
    assert!(sink.into_inner().is_empty());
}

#[test]
fn every_priority_prints_its_uppercase_header() {
    let levels = [
        (Priority::Emergency, "EMERGENCY"),
        (Priority::Alert, "ALERT"),
        (Priority::Critical, "CRITICAL"),
        (Priority::Error, "ERROR"),
        (Priority::Warning, "WARNING"),
        (Priority::Notice, "NOTICE"),
        (Priority::Informational, "INFORMATIONAL"),
        (Priority::Debug, "DEBUG"),
    ];

    for (level, header) in levels {
        let mut sink = ConsoleSink::new(Vec::new());
        blackbox::emit_to(&mut sink, &["m"], TestFeature::Enabled, level, SITE)
            .expect("write succeeds");
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(
            output.starts_with(&format!("\n[{header}]\n")),
            "wrong header for {level:?}: {output:?}"
        );
    }
}

#[test]
fn write_equals_render_for_the_same_inputs() {
    let parts = ["first", "second"];
    let mut sink = ConsoleSink::new(Vec::new());
    blackbox::emit_to(&mut sink, &parts, TestFeature::Enabled, Priority::Warning, SITE)
        .expect("write succeeds");
    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        blackbox::render(Priority::Warning, SITE, &parts)
    );
}

#[test]
fn macro_compiles_against_the_shipped_catalog() {
    // Shipped toggles are all off, so this exercises the full expansion
    // without writing to the console.
    let status = "ready";
    blackbox::blackbox!(Feature::Core(Core::Startup), Priority::Notice, "boot", status);
}

#[cfg(debug_assertions)]
#[test]
fn test_builds_are_diagnostic_builds() {
    assert!(blackbox::DIAGNOSTICS_ENABLED);
}
