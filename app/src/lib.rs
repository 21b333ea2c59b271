use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate, use_params_map},
};
use nimbus_core::Config;
use nimbus_search::{RecordStore, SearchRecord};
use nimbus_ui::{AppShell, Card, CardDescription, CardTitle, NavSection, ShellState, site_navigation};

mod showcase;
mod tokens;

/// Site configuration compiled into the bundle.
pub fn site_config() -> Config {
    Config::from_toml_str(include_str!("../nimbus.toml")).unwrap_or_else(|err| {
        tracing::error!(%err, "invalid embedded nimbus.toml, using defaults");
        Config::default()
    })
}

/// Side navigation with hrefs resolved against the configured base path.
fn navigation(config: &Config) -> Vec<NavSection> {
    let mut sections = site_navigation();
    for link in sections.iter_mut().flat_map(|s| s.links.iter_mut()) {
        link.href = config.href_for(&link.href);
    }
    sections
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = StoredValue::new(site_config());
    let store = StoredValue::new(RecordStore::builtin());
    let base = config.with_value(|c| c.site.base_path.clone());
    let title = config.with_value(|c| c.site.title.clone());

    view! {
      <Title text=title />

      <Router base=base>
        <Site config=config store=store />
      </Router>
    }
}

/// Everything inside the router: the shell and the routed pages.
#[component]
fn Site(config: StoredValue<Config>, store: StoredValue<RecordStore>) -> impl IntoView {
    let shortcut = config.with_value(|c| c.search.shortcut_key.chars().next().unwrap_or('k'));
    let shell = RwSignal::new(ShellState::new(shortcut));

    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());

    // The router prefixes `base_path`, so navigate by route rather than href.
    let navigate = StoredValue::new_local(use_navigate());
    let on_navigate = Callback::new(move |target: String| {
        let route = config.with_value(|c| c.route_for(&target));
        tracing::debug!(%route, "navigating");
        navigate.with_value(|navigate| navigate(&route, Default::default()));
    });

    let (sections, home_href, placeholder, search_enabled) = config.with_value(|c| {
        (
            navigation(c),
            c.href_for("/"),
            c.search.placeholder.clone(),
            c.search.enabled,
        )
    });

    view! {
      <AppShell
        shell=shell
        store=store
        sections=sections
        current_path=current_path
        on_navigate=on_navigate
        home_href=home_href
        placeholder=placeholder
        search_enabled=search_enabled
      >
        <Routes fallback=|| view! { <NotFound /> }>
          <Route path=StaticSegment("") view=move || view! { <HomePage config=config store=store /> } />
          <Route
            path=(ParamSegment("section"), ParamSegment("page"))
            view=move || view! { <DocPage config=config store=store /> }
          />
        </Routes>
      </AppShell>
    }
}

/// Overview page: one card per catalog category.
#[component]
fn HomePage(config: StoredValue<Config>, store: StoredValue<RecordStore>) -> impl IntoView {
    let title = config.with_value(|c| c.site.title.clone());
    let categories = store.with_value(|store| {
        store
            .search("")
            .into_iter()
            .map(|group| {
                (
                    group.category.to_string(),
                    group.records.into_iter().cloned().collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>()
    });

    view! {
      <div class="max-w-5xl">
        <h1 class="text-4xl font-semibold text-nimbus-text-primary">{title}</h1>
        <p class="mt-3 text-lg text-nimbus-text-secondary">
          "Brand, design foundations, components and patterns in one place. Press \u{2318}K to search."
        </p>
        <div class="mt-10 grid gap-6 md:grid-cols-2">
          {categories
            .into_iter()
            .map(|(category, records)| {
              view! {
                <Card>
                  <CardTitle>{category}</CardTitle>
                  <ul class="mt-4 space-y-2">
                    {records
                      .into_iter()
                      .map(|record| {
                        let href = config.with_value(|c| c.href_for(&record.target));
                        view! {
                          <li>
                            <a href=href class="text-nimbus-teal hover:underline">
                              {record.title}
                            </a>
                          </li>
                        }
                      })
                      .collect_view()}
                  </ul>
                </Card>
              }
            })
            .collect_view()}
        </div>
      </div>
    }
}

/// A documentation page resolved from `/{section}/{page}`.
#[component]
fn DocPage(config: StoredValue<Config>, store: StoredValue<RecordStore>) -> impl IntoView {
    let params = use_params_map();
    let target = Memo::new(move |_| {
        params.with(|p| {
            format!(
                "/{}/{}",
                p.get("section").unwrap_or_default(),
                p.get("page").unwrap_or_default()
            )
        })
    });
    let feedback_ms = config.with_value(|c| c.clipboard.feedback_ms);

    move || {
        let target = target.get();
        match store.with_value(|s| s.find_by_target(&target).cloned()) {
            Some(record) => view! {
              <article class="max-w-5xl">
                <PageHeader record=record />
                {showcase::for_target(&target, feedback_ms)}
              </article>
            }
            .into_any(),
            None => view! { <NotFound /> }.into_any(),
        }
    }
}

#[component]
fn PageHeader(record: SearchRecord) -> impl IntoView {
    view! {
      <header class="mb-10">
        <p class="text-sm font-medium uppercase tracking-wider text-nimbus-teal">
          {record.category}
        </p>
        <h1 class="mt-2 text-4xl font-semibold text-nimbus-text-primary">{record.title}</h1>
        <p class="mt-3 text-lg text-nimbus-text-secondary">{record.description}</p>
      </header>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
      <Card>
        <CardTitle>"Page not found"</CardTitle>
        <CardDescription>"Use the navigation or press \u{2318}K to search."</CardDescription>
      </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = Config::from_toml_str(include_str!("../nimbus.toml")).unwrap();
        assert_eq!(config.site.title, "Nimbus Design System");
        assert_eq!(config.search.shortcut_key, "k");
    }

    #[test]
    fn test_every_nav_link_has_a_record() {
        let store = RecordStore::builtin();
        for link in site_navigation().iter().flat_map(|s| &s.links) {
            assert!(
                store.find_by_target(&link.href).is_some(),
                "no record for {}",
                link.href
            );
        }
    }

    #[test]
    fn test_navigation_hrefs_use_base_path() {
        let mut config = Config::default();
        config.site.base_path = "/docs".to_string();
        let sections = navigation(&config);
        assert_eq!(sections[0].links[0].href, "/docs/brand/foundations/");
    }

    #[test]
    fn test_palette_routes_leave_base_path_to_router() {
        let mut config = Config::default();
        config.site.base_path = "/docs".to_string();

        for record in &RecordStore::builtin() {
            let route = config.route_for(&record.target);
            assert!(!route.starts_with("/docs/"), "{route}");
            assert_eq!(format!("/docs{route}"), config.href_for(&record.target));
        }
        assert_eq!(config.href_for("/"), "/docs/");
    }
}
