use crate::{
    components::{cards::Card, common::Button, forms::ValidatedInput},
    pages::login::view_model::FormSnapshot,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    snapshot: Signal<FormSnapshot>,
    email_ref: NodeRef<html::Input>,
    password_ref: NodeRef<html::Input>,
    on_email_input: Callback<String>,
    on_email_blur: Callback<()>,
    on_password_input: Callback<String>,
    on_password_blur: Callback<()>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let email_value = Signal::derive(move || snapshot.with(|s| s.email.value.clone()));
    let email_validity = Signal::derive(move || snapshot.with(|s| s.email.validity));
    let password_value = Signal::derive(move || snapshot.with(|s| s.password.value.clone()));
    let password_validity = Signal::derive(move || snapshot.with(|s| s.password.validity));
    let form_valid = move || {
        if snapshot.with(|s| s.aggregate.is_valid()) {
            "true"
        } else {
            "false"
        }
    };

    view! {
        <Card class="mx-auto mt-28 w-11/12 max-w-2xl">
            <form data-form-valid=form_valid on:submit=move |ev| on_submit.call(ev)>
                <ValidatedInput
                    id="email"
                    label="E-Mail"
                    input_type="email"
                    value=email_value
                    validity=email_validity
                    node_ref=email_ref
                    on_input=on_email_input
                    on_blur=on_email_blur
                />
                <ValidatedInput
                    id="password"
                    label="Password"
                    input_type="password"
                    value=password_value
                    validity=password_validity
                    node_ref=password_ref
                    on_input=on_password_input
                    on_blur=on_password_blur
                />
                <div class="mt-4 text-center">
                    <Button attr:type="submit">"Login"</Button>
                </div>
            </form>
        </Card>
    }
}
