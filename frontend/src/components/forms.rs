use crate::pages::login::utils::Validity;
use leptos::*;

const INPUT_BASE: &str = "block w-full rounded-md border px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2";

pub fn input_classes(validity: Validity) -> String {
    let state = if validity.is_invalid() {
        "border-status-error-border bg-status-error-bg focus:ring-status-error-border"
    } else {
        "border-border bg-surface focus:ring-action-primary-focus"
    };
    format!("{INPUT_BASE} {state}")
}

/// Labelled input that renders invalid styling once its field is definitively invalid.
#[component]
pub fn ValidatedInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] validity: Signal<Validity>,
    node_ref: NodeRef<html::Input>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    // Server output has no element to bind the ref to.
    #[cfg(not(target_arch = "wasm32"))]
    let _ = node_ref;

    view! {
        <div class="my-2 flex flex-col gap-1 sm:flex-row sm:items-center">
            <label for=id.clone() class="w-24 text-sm font-bold text-fg">{label}</label>
            <input
                id=id.clone()
                name=id
                type=input_type
                node_ref=node_ref
                class=move || input_classes(validity.get())
                prop:value=value
                on:input=move |ev| on_input.call(event_target_value(&ev))
                on:blur=move |_| on_blur.call(())
            />
        </div>
    }
}
