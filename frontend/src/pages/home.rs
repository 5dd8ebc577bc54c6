use crate::{components::cards::Card, state::auth::use_auth};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let email = move || auth.get().email.unwrap_or_default();

    view! {
        <Card class="mx-auto mt-28 w-11/12 max-w-2xl text-center">
            <h1 class="text-3xl font-extrabold text-fg">"Welcome back!"</h1>
            <p class="mt-3 text-base text-fg-muted">{email}</p>
        </Card>
    }
}
