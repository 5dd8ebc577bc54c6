use leptos::*;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("bg-surface-elevated overflow-hidden shadow rounded-lg {}", class)>
            <div class="px-4 py-5 sm:p-6">{children()}</div>
        </div>
    }
}
