#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod timer;

#[cfg(test)]
pub mod helpers {
    use crate::state::auth::{AuthState, Authenticator};
    use leptos::*;
    use std::{cell::RefCell, rc::Rc};

    /// Records every login call instead of starting a session.
    #[derive(Clone, Default)]
    pub struct RecordingAuthenticator {
        calls: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl RecordingAuthenticator {
        pub fn calls(&self) -> Vec<(String, String)> {
            self.calls.borrow().clone()
        }
    }

    impl Authenticator for RecordingAuthenticator {
        fn login(&self, email: &str, password: &str) {
            self.calls
                .borrow_mut()
                .push((email.to_string(), password.to_string()));
        }
    }

    pub fn provide_auth(
        logged_in_as: Option<&str>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_logged_in: logged_in_as.is_some(),
            email: logged_in_as.map(str::to_string),
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
