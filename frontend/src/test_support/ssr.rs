use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders `view` on the server after `setup` has provided any contexts it needs.
pub fn render_with<S, F, N>(setup: S, view: F) -> String
where
    S: FnOnce(),
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| {
        setup();
        view().into_view().render_to_string().to_string()
    })
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_with(|| {}, view)
}
