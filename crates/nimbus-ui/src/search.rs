//! Command palette components.
//!
//! The overlay reads its open flag and query from [`ShellState`] and renders
//! the grouped matches computed by [`RecordStore::search`].

use leptos::prelude::*;
use nimbus_search::{RecordStore, SearchRecord};
use serde::Serialize;

use crate::{shell::ShellState, style::category_glyph};

/// One category's matches, owned so it can be handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSection {
    pub category: String,
    pub items: Vec<SearchRecord>,
}

/// Run `query` against `store` and return owned sections in display order.
pub fn result_sections(store: &RecordStore, query: &str) -> Vec<ResultSection> {
    store
        .search(query)
        .into_iter()
        .map(|group| ResultSection {
            category: group.category.to_string(),
            items: group.records.into_iter().cloned().collect(),
        })
        .collect()
}

/// Query input bound to the shell's query.
#[component]
pub fn SearchBox(
    shell: RwSignal<ShellState>,
    #[prop(default = "Search...".to_string())] placeholder: String,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
      <div class="flex items-center gap-3 px-4 py-3 border-b border-nimbus-border">
        <span class="text-nimbus-text-tertiary">"\u{2315}"</span>
        <input
          node_ref=input_ref
          type="text"
          class="flex-1 bg-transparent text-nimbus-text-primary placeholder:text-nimbus-text-tertiary outline-none"
          placeholder=placeholder
          aria-label="Search"
          prop:value=move || shell.with(|s| s.query().to_string())
          on:input=move |ev| {
            let value = event_target_value(&ev);
            shell.update(|s| s.set_query(value));
          }
        />
        <kbd class="px-2 py-0.5 text-xs text-nimbus-text-tertiary rounded-full border border-nimbus-border">
          "ESC"
        </kbd>
      </div>
    }
}

/// Grouped result list.
#[component]
pub fn SearchResults(
    sections: Memo<Vec<ResultSection>>,
    /// Invoked with the target of the chosen record.
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
      <div class="max-h-[400px] overflow-y-auto">
        <Show
          when=move || sections.with(|s| !s.is_empty())
          fallback=|| {
            view! {
              <div class="px-4 py-8 text-center text-nimbus-text-secondary">"No results found"</div>
            }
          }
        >
          <For
            each=move || sections.get()
            key=|section| {
              (
                section.category.clone(),
                section.items.iter().map(|r| r.target.clone()).collect::<Vec<_>>(),
              )
            }
            children=move |section| {
              view! { <ResultSectionView section=section on_select=on_select /> }
            }
          />
        </Show>
      </div>
    }
}

#[component]
fn ResultSectionView(section: ResultSection, on_select: Callback<String>) -> impl IntoView {
    let glyph = category_glyph(&section.category);

    view! {
      <div class="py-2">
        <div class="px-4 py-2 text-xs font-medium uppercase tracking-wider text-nimbus-text-tertiary">
          {section.category.clone()}
        </div>
        {section
          .items
          .into_iter()
          .map(|record| {
            let target = record.target.clone();
            view! {
              <button
                type="button"
                class="w-full flex items-start gap-3 px-4 py-3 text-left hover:bg-nimbus-surface-hover"
                on:click=move |_| on_select.run(target.clone())
              >
                <span class="text-nimbus-teal">{glyph}</span>
                <span class="flex-1 min-w-0">
                  <span class="block text-nimbus-text-primary font-medium">{record.title}</span>
                  <span class="block text-sm text-nimbus-text-secondary truncate">
                    {record.description}
                  </span>
                </span>
              </button>
            }
          })
          .collect_view()}
      </div>
    }
}

/// Search overlay. Mounted only while the shell's search is open.
#[component]
pub fn SearchModal(
    shell: RwSignal<ShellState>,
    store: StoredValue<RecordStore>,
    #[prop(default = "Search...".to_string())] placeholder: String,
    /// Navigation collaborator, called after the overlay has closed.
    on_select: Callback<String>,
) -> impl IntoView {
    let is_open = Memo::new(move |_| shell.with(|s| s.is_search_open()));
    let query = Memo::new(move |_| shell.with(|s| s.query().to_string()));
    let sections = Memo::new(move |_| {
        let query = query.get();
        store.with_value(|store| result_sections(store, &query))
    });

    let select = Callback::new(move |target: String| {
        if let Some(target) = shell.try_update(|s| s.select(&target)) {
            tracing::debug!(%target, "search result selected");
            on_select.run(target);
        }
    });

    let placeholder = StoredValue::new(placeholder);

    view! {
      <Show when=move || is_open.get()>
        <div class="fixed inset-0 z-50 flex items-start justify-center pt-[15vh] px-4">
          <div
            class="absolute inset-0 bg-nimbus-black/80 backdrop-blur-sm"
            on:click=move |_| shell.update(|s| s.close_search())
          ></div>

          <div
            role="dialog"
            aria-modal="true"
            aria-label="Search"
            class="relative w-full max-w-xl bg-nimbus-surface border border-nimbus-border rounded-2xl shadow-2xl overflow-hidden"
          >
            <SearchBox shell=shell placeholder=placeholder.get_value() />
            <SearchResults sections=sections on_select=select />
            <div class="flex items-center gap-4 px-4 py-3 border-t border-nimbus-border text-xs text-nimbus-text-tertiary">
              <span>"\u{21B5} to select"</span>
              <span>"ESC to close"</span>
            </div>
          </div>
        </div>
      </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_sections_for_title_match() {
        let store = RecordStore::builtin();
        let sections = result_sections(&store, "but");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].category, "Components");
        assert_eq!(sections[0].items[0].title, "Button");
        assert_eq!(sections[0].items[0].target, "/components/buttons");
    }

    #[test]
    fn test_result_sections_browse_all() {
        let store = RecordStore::builtin();
        let sections = result_sections(&store, "");
        let categories: Vec<_> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Brand", "Design", "Components", "Patterns"]);
        let total: usize = sections.iter().map(|s| s.items.len()).sum();
        assert_eq!(total, store.len());
    }

    #[test]
    fn test_result_sections_no_match() {
        let store = RecordStore::builtin();
        assert!(result_sections(&store, "zzz").is_empty());
    }

    #[test]
    fn test_result_sections_serialize_by_category() {
        let store = RecordStore::builtin();
        let json = serde_json::to_value(result_sections(&store, "palette")).unwrap();
        assert_eq!(json[0]["category"], "Design");
        assert_eq!(json[0]["items"][0]["title"], "Colors");
    }
}
