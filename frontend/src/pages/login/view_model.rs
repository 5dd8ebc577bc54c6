use super::{
    error::FormError,
    utils::{AggregateValidity, FieldAction, FieldId, FieldState},
};
use crate::{
    config::{self, FormConfig, SubmitPolicy},
    state::auth::{self, Authenticator},
    utils::timer::{default_scheduler, Debouncer, Scheduler},
};
use leptos::*;
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub email: FieldState,
    pub password: FieldState,
    pub aggregate: AggregateValidity,
}

impl FormSnapshot {
    pub fn field(&self, field: FieldId) -> &FieldState {
        match field {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: FieldId) -> &mut FieldState {
        match field {
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        }
    }

    fn live_aggregate(&self) -> AggregateValidity {
        AggregateValidity::combine(self.email.validity, self.password.validity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Credentials were handed to the authenticator.
    Delegated,
    /// Nothing was submitted; this field should receive focus.
    Focus(FieldId),
}

type Listener = Rc<dyn Fn(&FormSnapshot)>;

#[derive(Default)]
struct Shared {
    snapshot: RefCell<FormSnapshot>,
    listener: RefCell<Option<Listener>>,
}

impl Shared {
    fn recompute_aggregate(&self) {
        log::debug!("checking form validity");
        {
            let mut snapshot = self.snapshot.borrow_mut();
            let aggregate = snapshot.live_aggregate();
            snapshot.aggregate = aggregate;
        }
        self.notify();
    }

    // Listener runs on a cloned snapshot with no borrow held.
    fn notify(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            let snapshot = self.snapshot.borrow().clone();
            listener(&snapshot);
        }
    }
}

/// Framework-free login form: two field state machines, a debounced aggregate
/// and the submit coordinator.
///
/// The pending aggregate check only holds a weak reference to the form state,
/// and its timer handle lives in the debouncer, so dropping the model (or
/// calling [`LoginFormModel::teardown`]) guarantees the check never fires.
pub struct LoginFormModel {
    shared: Rc<Shared>,
    debouncer: Debouncer,
    authenticator: Rc<dyn Authenticator>,
    submit_policy: SubmitPolicy,
}

impl LoginFormModel {
    pub fn new(
        config: FormConfig,
        scheduler: Rc<dyn Scheduler>,
        authenticator: Rc<dyn Authenticator>,
    ) -> Self {
        Self {
            shared: Rc::new(Shared::default()),
            debouncer: Debouncer::new(scheduler, config.debounce),
            authenticator,
            submit_policy: config.submit_policy,
        }
    }

    /// Starts the first quiet period; until it elapses the aggregate stays `Unknown`.
    pub fn mount(&self) {
        self.schedule_check();
    }

    pub fn teardown(&self) {
        self.debouncer.cancel();
    }

    pub fn subscribe(&self, listener: impl Fn(&FormSnapshot) + 'static) {
        *self.shared.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.shared.snapshot.borrow().clone()
    }

    pub fn aggregate(&self) -> AggregateValidity {
        self.shared.snapshot.borrow().aggregate
    }

    pub fn edit(&self, field: FieldId, value: impl Into<String>) {
        self.dispatch(field, FieldAction::UserInput(value.into()));
    }

    pub fn blur(&self, field: FieldId) {
        self.dispatch(field, FieldAction::InputBlur);
    }

    pub fn dispatch(&self, field: FieldId, action: FieldAction) {
        let validity_changed = {
            let mut snapshot = self.shared.snapshot.borrow_mut();
            let state = snapshot.field_mut(field);
            let before = state.validity;
            state.apply(field, action);
            state.validity != before
        };
        // Only validity changes restart the quiet period.
        if validity_changed {
            self.schedule_check();
        }
        self.shared.notify();
    }

    fn schedule_check(&self) {
        let shared = Rc::downgrade(&self.shared);
        self.debouncer.schedule(move || {
            if let Some(shared) = shared.upgrade() {
                shared.recompute_aggregate();
            }
        });
    }

    pub fn submit(&self) -> SubmitOutcome {
        if self.submit_policy == SubmitPolicy::Revalidate {
            self.shared.recompute_aggregate();
        }
        let snapshot = self.snapshot();

        if snapshot.aggregate.is_valid() {
            log::debug!("submit: form valid, delegating login");
            self.authenticator
                .login(&snapshot.email.value, &snapshot.password.value);
            SubmitOutcome::Delegated
        } else if !snapshot.email.validity.is_valid() {
            log::debug!("submit: form not valid, focusing email");
            SubmitOutcome::Focus(FieldId::Email)
        } else {
            log::debug!("submit: form not valid, focusing password");
            SubmitOutcome::Focus(FieldId::Password)
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub model: Rc<LoginFormModel>,
    pub snapshot: RwSignal<FormSnapshot>,
    pub email_ref: NodeRef<html::Input>,
    pub password_ref: NodeRef<html::Input>,
}

impl LoginViewModel {
    pub fn node_ref(&self, field: FieldId) -> NodeRef<html::Input> {
        match field {
            FieldId::Email => self.email_ref,
            FieldId::Password => self.password_ref,
        }
    }

    pub fn focus(&self, field: FieldId) -> Result<(), FormError> {
        let input = self
            .node_ref(field)
            .get_untracked()
            .ok_or(FormError::FocusUnavailable(field))?;
        input.focus().map_err(|_| FormError::FocusRejected(field))
    }

    pub fn submit(&self) -> SubmitOutcome {
        let outcome = self.model.submit();
        if let SubmitOutcome::Focus(field) = outcome {
            if let Err(err) = self.focus(field) {
                log::warn!("{}", err);
            }
        }
        outcome
    }
}

/// Builds the form for the current component. A `Rc<dyn Scheduler>` in context
/// replaces the browser timer; the pending check is cancelled on cleanup.
pub fn use_login_view_model() -> LoginViewModel {
    let scheduler = use_context::<Rc<dyn Scheduler>>().unwrap_or_else(default_scheduler);
    let model = Rc::new(LoginFormModel::new(
        config::form_config(),
        scheduler,
        auth::use_authenticator(),
    ));

    let snapshot = create_rw_signal(model.snapshot());
    model.subscribe(move |next| snapshot.set(next.clone()));
    model.mount();

    let for_cleanup = Rc::clone(&model);
    on_cleanup(move || for_cleanup.teardown());

    LoginViewModel {
        model,
        snapshot,
        email_ref: create_node_ref(),
        password_ref: create_node_ref(),
    }
}
