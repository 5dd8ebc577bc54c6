use crate::pages::login::{
    components::form::LoginForm,
    utils::FieldId,
    view_model::{use_login_view_model, LoginFormModel},
};
use leptos::{ev::SubmitEvent, Callback, *};
use std::rc::Rc;

fn field_handlers(model: &Rc<LoginFormModel>, field: FieldId) -> (Callback<String>, Callback<()>) {
    let on_input = {
        let model = Rc::clone(model);
        Callback::new(move |value: String| model.edit(field, value))
    };
    let on_blur = {
        let model = Rc::clone(model);
        Callback::new(move |_: ()| model.blur(field))
    };
    (on_input, on_blur)
}

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let snapshot = vm.snapshot;

    let (email_input, email_blur) = field_handlers(&vm.model, FieldId::Email);
    let (password_input, password_blur) = field_handlers(&vm.model, FieldId::Password);

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    view! {
        <LoginForm
            snapshot=snapshot.into()
            email_ref=vm.email_ref
            password_ref=vm.password_ref
            on_email_input=email_input
            on_email_blur=email_blur
            on_password_input=password_input
            on_password_blur=password_blur
            on_submit=handle_submit
        />
    }
}
