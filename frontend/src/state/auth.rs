use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub email: Option<String>,
}

/// The login capability the form delegates to. Success and failure handling
/// belong to the implementor; the form never hears back.
pub trait Authenticator {
    fn login(&self, email: &str, password: &str);
}

/// Marks the in-memory session as logged in. Nothing is stored.
#[derive(Clone, Copy)]
pub struct SessionAuthenticator {
    set_auth_state: WriteSignal<AuthState>,
}

impl SessionAuthenticator {
    pub fn new(set_auth_state: WriteSignal<AuthState>) -> Self {
        Self { set_auth_state }
    }
}

impl Authenticator for SessionAuthenticator {
    fn login(&self, email: &str, _password: &str) {
        log::info!("login accepted, session marked logged in");
        let email = email.to_string();
        self.set_auth_state.update(|state| {
            state.is_logged_in = true;
            state.email = Some(email);
        });
    }
}

fn create_auth_context() -> AuthContext {
    create_signal(AuthState::default())
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_authenticator() -> Rc<dyn Authenticator> {
    let (_auth, set_auth) = use_auth();
    Rc::new(SessionAuthenticator::new(set_auth))
}
