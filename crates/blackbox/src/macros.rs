//! crates/blackbox/src/macros.rs
//! Call-site capture and the gated logging macro.

/// Captures the name of the enclosing function at compile time.
///
/// Rust has no `function!()` builtin, so this uses the nested-`fn`
/// `type_name` idiom and trims the result to the bare function name.
/// Inside a closure the enclosing scope reports as `{{closure}}`.
///
/// # Examples
///
/// ```
/// fn lookup() -> &'static str {
///     blackbox::function_name!()
/// }
///
/// assert_eq!(lookup(), "lookup");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn anchor() {}
        fn name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let full = name_of(anchor);
        let full = full.strip_suffix("::anchor").unwrap_or(full);
        full.rsplit("::").next().unwrap_or(full)
    }};
}

/// Conditionally logs one message block tagged with a feature and priority.
///
/// Captures the call-site file, function, and line automatically and
/// stringifies each message part with [`ToString`]. The whole expansion is
/// wrapped in `if $crate::DIAGNOSTICS_ENABLED { ... }`, so outside
/// diagnostic builds the statement constant-folds away: no feature lookup,
/// no stringification, no allocation.
///
/// # Examples
///
/// ```
/// use blackbox::{Core, Feature, Priority};
///
/// let loaded = 3;
/// blackbox::blackbox!(
///     Feature::Core(Core::Startup),
///     Priority::Informational,
///     "startup complete",
///     loaded,
/// );
/// ```
#[macro_export]
macro_rules! blackbox {
    ($feature:expr, $priority:expr $(, $part:expr)* $(,)?) => {{
        if $crate::DIAGNOSTICS_ENABLED {
            $crate::emit(
                &[$(::std::string::ToString::to_string(&$part)),*] as &[::std::string::String],
                $feature,
                $priority,
                $crate::CallSite {
                    file: ::core::file!(),
                    function: $crate::function_name!(),
                    line: ::core::line!(),
                },
            );
        }
    }};
}
