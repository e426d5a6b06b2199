//! Renders pages and components to plain HTML strings so tests can assert
//! on markup without a browser.

use leptos::*;

/// Runs `test` inside a fresh reactive runtime and disposes it afterwards,
/// so signals from one test never leak into another.
pub fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = test();
    runtime.dispose();
    result
}

/// Synchronous render of a view to its HTML string. Resource loading is
/// suppressed for the duration, so backend traffic in tests only ever goes
/// through explicit mock-server calls.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
