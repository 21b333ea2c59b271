//! Tab selection state and the tab components built on it.
//!
//! A tab group owns exactly one active panel key out of a fixed, declared set.
//! The owner creates a [`TabsHandle`] and passes it explicitly to every
//! [`TabsTrigger`] and [`TabsContent`]; nothing is looked up from context.
//!
//! Switching to a key outside the declared set is rejected with
//! [`TabsError::InvalidStateKey`] and leaves the active panel unchanged.

use leptos::prelude::*;
use thiserror::Error;

use crate::style::{TabsVariant, classes};

/// Errors raised by tab selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabsError {
    /// The key is not one of the group's declared panels.
    #[error("'{key}' is not a declared panel key")]
    InvalidStateKey { key: String },

    /// A tab group needs at least one panel.
    #[error("a tab group needs at least one panel")]
    NoPanels,

    /// The same panel key was declared twice.
    #[error("panel key '{0}' is declared more than once")]
    DuplicatePanel(String),

    /// The tab group's reactive state was disposed with its owner.
    #[error("the tab group has been disposed")]
    Disposed,
}

/// Active panel key among a declared set of panel keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    panels: Vec<String>,
    active: String,
}

impl SelectionState {
    /// Declare the panels and select `initial`.
    pub fn new<I, S>(panels: I, initial: impl Into<String>) -> Result<Self, TabsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut declared: Vec<String> = Vec::new();
        for key in panels {
            let key = key.into();
            if declared.contains(&key) {
                return Err(TabsError::DuplicatePanel(key));
            }
            declared.push(key);
        }

        if declared.is_empty() {
            return Err(TabsError::NoPanels);
        }

        let initial = initial.into();
        if !declared.contains(&initial) {
            return Err(TabsError::InvalidStateKey { key: initial });
        }

        Ok(Self {
            panels: declared,
            active: initial,
        })
    }

    /// Make `key` the active panel.
    pub fn switch_to(&mut self, key: &str) -> Result<(), TabsError> {
        if !self.contains(key) {
            return Err(TabsError::InvalidStateKey {
                key: key.to_string(),
            });
        }
        if self.active != key {
            self.active = key.to_string();
        }
        Ok(())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active == key
    }

    pub fn active_key(&self) -> &str {
        &self.active
    }

    /// Declared panel keys in declaration order.
    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    pub fn contains(&self, key: &str) -> bool {
        self.panels.iter().any(|p| p == key)
    }
}

/// Selection state plus an optional observer notified after each accepted
/// switch, including a switch to the panel that is already active.
pub struct SelectionController {
    state: SelectionState,
    observer: Option<Box<dyn FnMut(&str)>>,
}

impl SelectionController {
    pub fn new(state: SelectionState) -> Self {
        Self {
            state,
            observer: None,
        }
    }

    /// Register the observer, replacing any previous one.
    pub fn with_observer(mut self, observer: impl FnMut(&str) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn switch_to(&mut self, key: &str) -> Result<(), TabsError> {
        self.state.switch_to(key)?;
        tracing::debug!(key, "switched tab");
        if let Some(observer) = self.observer.as_mut() {
            observer(key);
        }
        Ok(())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.state.is_active(key)
    }

    pub fn active_key(&self) -> &str {
        self.state.active_key()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }
}

impl std::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("state", &self.state)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Reactive handle to one tab group, owned by the component that declares it.
///
/// The observer runs after the state write has been released, so it may
/// itself call [`TabsHandle::switch_to`].
#[derive(Clone, Copy)]
pub struct TabsHandle {
    state: RwSignal<SelectionState>,
    on_change: Option<Callback<String>>,
}

impl TabsHandle {
    pub fn new(state: SelectionState, on_change: Option<Callback<String>>) -> Self {
        Self {
            state: RwSignal::new(state),
            on_change,
        }
    }

    pub fn switch_to(&self, key: &str) -> Result<(), TabsError> {
        self.state
            .try_update(|s| s.switch_to(key))
            .ok_or(TabsError::Disposed)??;
        tracing::debug!(key, "switched tab");

        if let Some(on_change) = self.on_change {
            on_change.run(key.to_string());
        }
        Ok(())
    }

    /// Tracked: re-runs the caller when the active panel changes.
    pub fn is_active(&self, key: &str) -> bool {
        self.state.with(|s| s.is_active(key))
    }

    pub fn active_key(&self) -> String {
        self.state.with(|s| s.active_key().to_string())
    }
}

/// Container for tab triggers.
#[component]
pub fn TabsList(
    #[prop(optional)] variant: TabsVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
      <div class=classes(&["flex", variant.list_class(), &class]) role="tablist">
        {children()}
      </div>
    }
}

/// Button selecting one panel of a tab group.
#[component]
pub fn TabsTrigger(
    /// The tab group this trigger belongs to.
    tabs: TabsHandle,
    /// Panel key selected by this trigger.
    #[prop(into)]
    value: String,
    #[prop(optional)] variant: TabsVariant,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let key = value.clone();
    let is_active = Memo::new(move |_| tabs.is_active(&key));

    let key = value.clone();
    let on_click = move |_| {
        if let Err(err) = tabs.switch_to(&key) {
            tracing::warn!(%err, "ignoring tab switch");
        }
    };

    let class = move || {
        classes(&[
            variant.trigger_class(is_active.get()),
            "disabled:opacity-50 disabled:cursor-not-allowed",
            &class,
        ])
    };

    view! {
      <button
        type="button"
        role="tab"
        id=format!("tab-{value}")
        aria-controls=format!("panel-{value}")
        aria-selected=move || is_active.get().to_string()
        disabled=disabled
        class=class
        on:click=on_click
      >
        {children()}
      </button>
    }
}

/// Panel content, mounted only while its key is active.
#[component]
pub fn TabsContent(
    /// The tab group this panel belongs to.
    tabs: TabsHandle,
    /// Panel key.
    #[prop(into)]
    value: String,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let key = value.clone();
    let panel_id = format!("panel-{value}");
    let tab_id = format!("tab-{value}");
    let class = classes(&["mt-4 animate-in fade-in duration-200", &class]);

    view! {
      <Show when=move || tabs.is_active(&key)>
        <div
          role="tabpanel"
          id=panel_id.clone()
          aria-labelledby=tab_id.clone()
          class=class.clone()
        >
          {children()}
        </div>
      </Show>
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::{Arc, Mutex, OnceLock},
    };

    use leptos::reactive::owner::Owner;

    use super::*;

    fn account_password() -> SelectionState {
        SelectionState::new(["account", "password"], "account").unwrap()
    }

    #[test]
    fn test_initialize_selects_initial_key() {
        let state = account_password();
        assert!(state.is_active("account"));
        assert!(!state.is_active("password"));
        assert_eq!(state.active_key(), "account");
        assert_eq!(state.panels(), ["account", "password"]);
    }

    #[test]
    fn test_initialize_rejects_undeclared_initial_key() {
        let err = SelectionState::new(["account"], "billing").unwrap_err();
        assert_eq!(
            err,
            TabsError::InvalidStateKey {
                key: "billing".to_string()
            }
        );
    }

    #[test]
    fn test_initialize_rejects_empty_and_duplicate_panels() {
        let none: [&str; 0] = [];
        assert_eq!(SelectionState::new(none, "a").unwrap_err(), TabsError::NoPanels);
        assert_eq!(
            SelectionState::new(["a", "a"], "a").unwrap_err(),
            TabsError::DuplicatePanel("a".to_string())
        );
    }

    #[test]
    fn test_switch_to_moves_active_key() {
        let mut state = account_password();
        state.switch_to("password").unwrap();
        assert!(state.is_active("password"));
        assert!(!state.is_active("account"));
    }

    #[test]
    fn test_switch_to_unknown_key_is_rejected() {
        let mut state = account_password();
        let err = state.switch_to("billing").unwrap_err();
        assert!(err.to_string().contains("billing"));
        assert!(state.is_active("account"));
    }

    #[test]
    fn test_observer_runs_on_every_accepted_switch() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let mut controller = SelectionController::new(account_password())
            .with_observer(move |key| log.borrow_mut().push(key.to_string()));

        controller.switch_to("password").unwrap();
        controller.switch_to("password").unwrap();
        assert!(controller.is_active("password"));
        assert!(!controller.is_active("account"));

        assert!(controller.switch_to("billing").is_err());
        assert_eq!(controller.active_key(), "password");

        assert_eq!(*seen.borrow(), vec!["password", "password"]);
    }

    #[test]
    fn test_controller_without_observer() {
        let mut controller = SelectionController::new(account_password());
        controller.switch_to("password").unwrap();
        assert_eq!(controller.state().active_key(), "password");
        assert!(format!("{controller:?}").contains("observer: false"));
    }

    // ---- TabsHandle ----

    fn recording_handle() -> (TabsHandle, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let on_change = Callback::new(move |key: String| log.lock().unwrap().push(key));
        (TabsHandle::new(account_password(), Some(on_change)), seen)
    }

    #[test]
    fn test_handle_notifies_on_repeat_switch() {
        let owner = Owner::new();
        owner.set();

        let (tabs, seen) = recording_handle();
        tabs.switch_to("password").unwrap();
        tabs.switch_to("password").unwrap();

        assert!(tabs.is_active("password"));
        assert!(!tabs.is_active("account"));
        assert_eq!(*seen.lock().unwrap(), vec!["password", "password"]);
    }

    #[test]
    fn test_handle_rejects_unknown_key_without_notifying() {
        let owner = Owner::new();
        owner.set();

        let (tabs, seen) = recording_handle();
        let err = tabs.switch_to("billing").unwrap_err();

        assert_eq!(
            err,
            TabsError::InvalidStateKey {
                key: "billing".to_string()
            }
        );
        assert_eq!(tabs.active_key(), "account");
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_observer_may_switch_again_from_its_notification() {
        let owner = Owner::new();
        owner.set();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let handle: Arc<OnceLock<TabsHandle>> = Arc::new(OnceLock::new());

        let log = Arc::clone(&seen);
        let inner = Arc::clone(&handle);
        let on_change = Callback::new(move |key: String| {
            log.lock().unwrap().push(key.clone());
            if key == "password" {
                if let Some(tabs) = inner.get() {
                    tabs.switch_to("account").unwrap();
                }
            }
        });

        let tabs = TabsHandle::new(account_password(), Some(on_change));
        assert!(handle.set(tabs).is_ok());

        tabs.switch_to("password").unwrap();

        assert!(tabs.is_active("account"));
        assert_eq!(*seen.lock().unwrap(), vec!["password", "account"]);
    }

    #[test]
    fn test_handle_after_dispose_reports_disposed() {
        let owner = Owner::new();
        owner.set();
        let (tabs, seen) = recording_handle();

        owner.cleanup();

        assert_eq!(tabs.switch_to("password"), Err(TabsError::Disposed));
        assert!(seen.lock().unwrap().is_empty());
    }
}
