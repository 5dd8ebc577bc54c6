use leptos::*;

const BUTTON_CLASSES: &str = "inline-flex items-center justify-center rounded-md px-6 py-2 text-sm font-semibold transition-colors duration-200 bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus";

#[component]
pub fn Button(
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button class={BUTTON_CLASSES} {..attributes}>
            {children()}
        </button>
    }
}
