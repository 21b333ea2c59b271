//! Application shell: header, side navigation and the search overlay.
//!
//! All shell-wide flags live in one [`ShellState`], created by the app root
//! and handed to each component that needs it.

use leptos::{ev, leptos_dom::helpers::window_event_listener, prelude::*};
use nimbus_search::RecordStore;

use crate::{
    navigation::{LeftNav, NavSection},
    search::SearchModal,
    style::classes,
};

/// A key press, reduced to what the shell's shortcuts look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    /// `KeyboardEvent.key`, e.g. "k" or "Escape".
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            meta: false,
            ctrl: false,
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            meta: ev.meta_key(),
            ctrl: ev.ctrl_key(),
        }
    }
}

/// Shell-wide UI state: search overlay, its query, and the mobile menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    shortcut: char,
    search_open: bool,
    query: String,
    mobile_menu_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new('k')
    }
}

impl ShellState {
    /// Create a closed shell whose search opens with Cmd/Ctrl + `shortcut`.
    pub fn new(shortcut: char) -> Self {
        Self {
            shortcut: shortcut.to_ascii_lowercase(),
            search_open: false,
            query: String::new(),
            mobile_menu_open: false,
        }
    }

    pub fn open_search(&mut self) {
        self.search_open = true;
    }

    /// Close the overlay, discarding the query.
    pub fn close_search(&mut self) {
        self.search_open = false;
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Accept a palette result: closes the overlay and hands back the target
    /// for navigation.
    pub fn select(&mut self, target: &str) -> String {
        self.close_search();
        target.to_string()
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Apply a global key press. Returns whether the shell consumed it.
    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        let mut chars = chord.key.chars();
        let is_shortcut = matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if c.to_ascii_lowercase() == self.shortcut
        );

        if is_shortcut && (chord.meta || chord.ctrl) {
            self.open_search();
            return true;
        }

        if chord.key == "Escape" && self.search_open {
            self.close_search();
            return true;
        }

        false
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn shortcut(&self) -> char {
        self.shortcut
    }
}

/// Registers the global search shortcut and `Escape` for the lifetime of the
/// owning scope.
#[component]
pub fn KeyboardShortcuts(
    /// Shell state the shortcuts act on.
    shell: RwSignal<ShellState>,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        let chord = KeyChord::from_event(&ev);
        let mut next = shell.get_untracked();
        if next.handle_key(&chord) {
            ev.prevent_default();
            shell.set(next);
        }
    });

    on_cleanup(move || handle.remove())
}

/// Top bar with the search trigger and the mobile menu toggle.
#[component]
pub fn Header(
    shell: RwSignal<ShellState>,
    /// Hint shown inside the search trigger.
    #[prop(default = "Search components, guidelines...".to_string())]
    hint: String,
    #[prop(default = true)] show_search: bool,
) -> impl IntoView {
    let menu_open = Memo::new(move |_| shell.with(|s| s.is_mobile_menu_open()));
    let shortcut = shell.with_untracked(|s| s.shortcut().to_ascii_uppercase());

    view! {
      <header class="fixed top-0 left-0 right-0 md:left-[280px] h-16 bg-nimbus-black/80 backdrop-blur-xl border-b border-nimbus-border z-40">
        <div class="flex items-center justify-between h-full px-6">
          <button
            type="button"
            class="md:hidden p-2 -ml-2 text-nimbus-text-secondary hover:text-nimbus-text-primary"
            aria-label="Toggle menu"
            aria-expanded=move || menu_open.get().to_string()
            on:click=move |_| shell.update(|s| s.toggle_mobile_menu())
          >
            {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
          </button>

          <div class="flex-1 max-w-md mx-4" class:invisible={!show_search}>
            <button
              type="button"
              class="w-full h-10 pl-4 pr-4 rounded-full bg-nimbus-surface border border-nimbus-border text-nimbus-text-tertiary text-left hover:border-nimbus-text-tertiary relative"
              on:click=move |_| shell.update(|s| s.open_search())
            >
              <span>{hint}</span>
              <kbd class="hidden sm:inline-flex absolute right-3 top-1/2 -translate-y-1/2 px-2 py-0.5 text-xs rounded-full border border-nimbus-border">
                {format!("\u{2318}{shortcut}")}
              </kbd>
            </button>
          </div>
        </div>
      </header>
    }
}

/// The full page frame: side navigation, header, search overlay and content.
#[component]
pub fn AppShell(
    /// Shell state shared by the header, navigation and search overlay.
    shell: RwSignal<ShellState>,
    /// Records searched by the command palette.
    store: StoredValue<RecordStore>,
    /// Side navigation sections.
    sections: Vec<NavSection>,
    /// Current route, for active highlighting and closing the mobile menu.
    #[prop(into)]
    current_path: Signal<String>,
    /// Navigation collaborator invoked with a selected result's target.
    on_navigate: Callback<String>,
    #[prop(default = "Nimbus".to_string())] title: String,
    /// Site root, including any base path.
    #[prop(default = "/".to_string(), into)]
    home_href: String,
    #[prop(default = "Search components, guidelines, patterns...".to_string())]
    placeholder: String,
    /// Disables the palette, its shortcut and the header trigger.
    #[prop(default = true)]
    search_enabled: bool,
    children: Children,
) -> impl IntoView {
    let menu_open = Memo::new(move |_| shell.with(|s| s.is_mobile_menu_open()));

    // Close the mobile menu on route change
    Effect::new(move |_| {
        current_path.track();
        if shell.with_untracked(|s| s.is_mobile_menu_open()) {
            shell.update(|s| s.close_mobile_menu());
        }
    });

    view! {
      {search_enabled.then(|| view! { <KeyboardShortcuts shell=shell /> })}

      <Show when=move || menu_open.get()>
        <div
          class="fixed inset-0 bg-nimbus-black/80 z-30 md:hidden"
          on:click=move |_| shell.update(|s| s.close_mobile_menu())
        ></div>
      </Show>

      <div class=move || {
        classes(
          &[
            "fixed top-0 left-0 h-screen z-40 transform transition-transform duration-300 ease-in-out md:translate-x-0",
            if menu_open.get() { "translate-x-0" } else { "-translate-x-full" },
          ],
        )
      }>
        <LeftNav sections=sections current_path=current_path title=title home_href=home_href />
      </div>

      <Header shell=shell show_search=search_enabled />

      <main class="ml-0 md:ml-[280px] pt-16 min-h-screen">
        <div class="p-4 sm:p-6 md:p-10">{children()}</div>
      </main>

      {search_enabled
        .then(|| {
          view! { <SearchModal shell=shell store=store placeholder=placeholder on_select=on_navigate /> }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shell_is_closed() {
        let shell = ShellState::default();
        assert!(!shell.is_search_open());
        assert!(!shell.is_mobile_menu_open());
        assert_eq!(shell.query(), "");
        assert_eq!(shell.shortcut(), 'k');
    }

    #[test]
    fn test_closing_search_discards_query() {
        let mut shell = ShellState::default();
        shell.open_search();
        shell.set_query("but");
        assert_eq!(shell.query(), "but");

        shell.close_search();
        assert!(!shell.is_search_open());
        assert_eq!(shell.query(), "");
    }

    #[test]
    fn test_select_resets_and_returns_target() {
        let mut shell = ShellState::default();
        shell.open_search();
        shell.set_query("palette");

        let target = shell.select("/design/colors");
        assert_eq!(target, "/design/colors");
        assert!(!shell.is_search_open());
        assert_eq!(shell.query(), "");
    }

    #[test]
    fn test_mobile_menu_toggle() {
        let mut shell = ShellState::default();
        shell.toggle_mobile_menu();
        assert!(shell.is_mobile_menu_open());
        shell.toggle_mobile_menu();
        assert!(!shell.is_mobile_menu_open());
        shell.toggle_mobile_menu();
        shell.close_mobile_menu();
        assert!(!shell.is_mobile_menu_open());
    }

    #[test]
    fn test_shortcut_opens_search() {
        let mut shell = ShellState::default();
        assert!(shell.handle_key(&KeyChord::new("k").with_meta()));
        assert!(shell.is_search_open());

        let mut shell = ShellState::default();
        assert!(shell.handle_key(&KeyChord::new("K").with_ctrl()));
        assert!(shell.is_search_open());
    }

    #[test]
    fn test_plain_key_is_ignored() {
        let mut shell = ShellState::default();
        assert!(!shell.handle_key(&KeyChord::new("k")));
        assert!(!shell.handle_key(&KeyChord::new("j").with_meta()));
        assert!(!shell.is_search_open());
    }

    #[test]
    fn test_escape_only_consumed_while_open() {
        let mut shell = ShellState::default();
        assert!(!shell.handle_key(&KeyChord::new("Escape")));

        shell.open_search();
        shell.set_query("tabs");
        assert!(shell.handle_key(&KeyChord::new("Escape")));
        assert!(!shell.is_search_open());
        assert_eq!(shell.query(), "");
    }

    #[test]
    fn test_custom_shortcut() {
        let mut shell = ShellState::new('P');
        assert_eq!(shell.shortcut(), 'p');
        assert!(!shell.handle_key(&KeyChord::new("k").with_meta()));
        assert!(shell.handle_key(&KeyChord::new("p").with_meta()));
    }
}
