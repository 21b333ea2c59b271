//! Nimbus UI Components
//!
//! Leptos components for the Nimbus design system documentation site.
//!
//! # Components
//!
//! ## Shell
//! - [`AppShell`] - Page frame with navigation, header and search overlay
//! - [`Header`] - Top bar with the search trigger
//! - [`KeyboardShortcuts`] - Global Cmd/Ctrl+K and Escape handling
//!
//! ## Search
//! - [`SearchModal`] - Command palette overlay
//! - [`SearchBox`] - Query input
//! - [`SearchResults`] - Matches grouped by category
//!
//! ## Navigation
//! - [`LeftNav`] - Collapsible side navigation
//!
//! ## Tabs
//! - [`TabsList`], [`TabsTrigger`], [`TabsContent`] - Driven by a [`TabsHandle`]
//!
//! ## Controls
//! - [`Button`], [`Badge`], [`StatusBadge`], [`NotificationBadge`]
//! - [`Card`], [`Input`], [`Modal`]
//! - [`CodeBlock`], [`CopyButton`]
//!
//! ## Documentation pages
//! - [`ComponentPreview`] - Live demo with a source panel
//! - [`PropsTable`], [`TokenTable`] - Reference tables
//! - [`ColorSwatch`] - Copies a colour's CSS variable
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use nimbus_ui::{SelectionState, TabsContent, TabsHandle, TabsList, TabsTrigger};
//!
//! #[component]
//! fn Settings() -> impl IntoView {
//!     let state = SelectionState::new(["account", "password"], "account").unwrap();
//!     let tabs = TabsHandle::new(state, None);
//!
//!     view! {
//!         <TabsList>
//!             <TabsTrigger tabs=tabs value="account">"Account"</TabsTrigger>
//!             <TabsTrigger tabs=tabs value="password">"Password"</TabsTrigger>
//!         </TabsList>
//!         <TabsContent tabs=tabs value="account">"Account settings"</TabsContent>
//!         <TabsContent tabs=tabs value="password">"Change password"</TabsContent>
//!     }
//! }
//! ```

pub mod clipboard;
pub mod controls;
pub mod docs;
pub mod navigation;
pub mod search;
pub mod shell;
pub mod style;
pub mod tabs;

pub use clipboard::{
    CodeBlock, CopyButton, CopyFeedback, CopyIndicator, copy_to_clipboard, numbered_lines,
};
pub use controls::{
    Badge, Button, Card, CardDescription, CardTitle, Input, Modal, NotificationBadge, StatusBadge,
};
pub use docs::{ColorSwatch, ColorToken, ComponentPreview, PropDefinition, PropsTable, TokenTable};
pub use navigation::{LeftNav, NavLink, NavSection, overview_link, site_navigation};
pub use search::{ResultSection, SearchBox, SearchModal, SearchResults, result_sections};
pub use shell::{AppShell, Header, KeyChord, KeyboardShortcuts, ShellState};
pub use tabs::{
    SelectionController, SelectionState, TabsContent, TabsError, TabsHandle, TabsList, TabsTrigger,
};
