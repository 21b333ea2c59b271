//! Side navigation with collapsible sections.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::style::{category_glyph, classes};

/// A single page link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    /// Display label.
    pub title: String,

    /// Link URL.
    pub href: String,
}

impl NavLink {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }

    /// Whether `path` is this link's page. A trailing slash is ignored since
    /// the static export serves every page as a directory.
    pub fn matches(&self, path: &str) -> bool {
        let normalize = |p: &str| {
            let trimmed = p.trim_end_matches('/');
            if trimmed.is_empty() { "/" } else { trimmed }.to_string()
        };
        normalize(&self.href) == normalize(path)
    }
}

/// A titled group of links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavSection {
    /// Section heading.
    pub title: String,

    /// Links in display order.
    #[serde(default)]
    pub links: Vec<NavLink>,
}

impl NavSection {
    pub fn new(title: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            title: title.into(),
            links,
        }
    }

    /// Whether one of this section's links is the current page.
    pub fn is_active(&self, path: &str) -> bool {
        self.links.iter().any(|link| link.matches(path))
    }
}

/// The "Overview" link to the site root at `home_href`.
pub fn overview_link(home_href: impl Into<String>) -> NavLink {
    NavLink::new("Overview", home_href)
}

/// The site's side navigation.
pub fn site_navigation() -> Vec<NavSection> {
    let section = |title: &str, links: &[(&str, &str)]| {
        NavSection::new(
            title,
            links
                .iter()
                .map(|&(title, href)| NavLink::new(title, href))
                .collect(),
        )
    };

    vec![
        section(
            "Brand",
            &[
                ("Foundations", "/brand/foundations"),
                ("Voice & Tone", "/brand/voice-tone"),
                ("Naming", "/brand/naming"),
                ("Messaging", "/brand/messaging"),
            ],
        ),
        section(
            "Design",
            &[
                ("Colors", "/design/colors"),
                ("Typography", "/design/typography"),
                ("Spacing", "/design/spacing"),
                ("Elevation", "/design/elevation"),
            ],
        ),
        section(
            "Components",
            &[
                ("Buttons", "/components/buttons"),
                ("Cards", "/components/cards"),
                ("Forms", "/components/forms"),
                ("Navigation", "/components/navigation"),
                ("Modals", "/components/modals"),
                ("Badges", "/components/badges"),
            ],
        ),
        section(
            "Patterns",
            &[
                ("Layouts", "/patterns/layouts"),
                ("Messaging", "/patterns/messaging"),
            ],
        ),
    ]
}

const LINK_ACTIVE: &str = "text-nimbus-teal bg-nimbus-teal/10 font-medium";
const LINK_IDLE: &str =
    "text-nimbus-text-secondary hover:text-nimbus-text-primary hover:bg-nimbus-surface-hover";

/// Side navigation component.
#[component]
pub fn LeftNav(
    /// Navigation sections.
    sections: Vec<NavSection>,
    /// Current path for active highlighting.
    #[prop(into)]
    current_path: Signal<String>,
    /// Site name shown above the links.
    #[prop(default = "Nimbus".to_string())]
    title: String,
    /// Site root, including any base path.
    #[prop(default = "/".to_string(), into)]
    home_href: String,
) -> impl IntoView {
    let overview = overview_link(home_href);
    let home_href = overview.href.clone();
    let home_active = Memo::new(move |_| current_path.with(|p| overview.matches(p)));

    view! {
      <nav
        class="fixed top-0 left-0 w-[280px] h-screen bg-nimbus-surface border-r border-nimbus-border overflow-y-auto"
        aria-label="Main navigation"
      >
        <div class="sticky top-0 bg-nimbus-surface z-10 px-6 py-5 border-b border-nimbus-border-subtle">
          <a href=home_href.clone() class="flex items-center gap-3">
            <span class="text-nimbus-text-primary font-semibold text-lg">{title}</span>
            <span class="text-nimbus-text-secondary text-sm block">"Design System"</span>
          </a>
        </div>

        <div class="p-4">
          <a
            href=home_href
            class=move || {
              classes(
                &[
                  "flex items-center gap-3 px-4 py-2.5 rounded-full mb-4 text-sm font-medium",
                  if home_active.get() { LINK_ACTIVE } else { LINK_IDLE },
                ],
              )
            }
          >
            "Overview"
          </a>
          <div class="h-px bg-nimbus-border-subtle mb-4"></div>
          {sections
            .into_iter()
            .map(|section| view! { <NavSectionView section=section current_path=current_path /> })
            .collect_view()}
        </div>
      </nav>
    }
}

/// One collapsible section. Sections start expanded.
#[component]
fn NavSectionView(section: NavSection, current_path: Signal<String>) -> impl IntoView {
    let open = RwSignal::new(true);
    let title = section.title.clone();
    let glyph = category_glyph(&title);
    let links = StoredValue::new(section.links.clone());
    let is_active = Memo::new(move |_| current_path.with(|p| section.is_active(p)));

    view! {
      <div class="mb-2">
        <button
          type="button"
          class=move || {
            classes(
              &[
                "w-full flex items-center justify-between px-4 py-2.5 rounded-full text-left text-sm font-medium",
                if is_active.get() {
                  "text-nimbus-text-primary bg-nimbus-surface-elevated"
                } else {
                  LINK_IDLE
                },
              ],
            )
          }
          aria-expanded=move || open.get().to_string()
          on:click=move |_| open.update(|o| *o = !*o)
        >
          <span class="flex items-center gap-3">
            <span class:text-nimbus-teal=move || is_active.get()>{glyph}</span>
            {title}
          </span>
          <span class="text-nimbus-text-tertiary">
            {move || if open.get() { "\u{25BE}" } else { "\u{25B8}" }}
          </span>
        </button>

        <Show when=move || open.get()>
          <div class="ml-4 mt-1 border-l border-nimbus-border-subtle pl-4 space-y-1">
            <For
              each=move || links.get_value()
              key=|link| link.href.clone()
              children=move |link| {
                let active_link = link.clone();
                let is_current = Memo::new(move |_| {
                  current_path.with(|p| active_link.matches(p))
                });
                view! {
                  <a
                    href=link.href.clone()
                    class=move || {
                      classes(
                        &[
                          "block px-3 py-2 rounded-full text-sm",
                          if is_current.get() { LINK_ACTIVE } else { LINK_IDLE },
                        ],
                      )
                    }
                    aria-current=move || if is_current.get() { Some("page") } else { None }
                  >
                    {link.title.clone()}
                  </a>
                }
              }
            />
          </div>
        </Show>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_matches_ignoring_trailing_slash() {
        let link = NavLink::new("Colors", "/design/colors");
        assert!(link.matches("/design/colors"));
        assert!(link.matches("/design/colors/"));
        assert!(!link.matches("/design/colors-extended"));
        assert!(!link.matches("/design"));
    }

    #[test]
    fn test_root_link() {
        let home = NavLink::new("Overview", "/");
        assert!(home.matches("/"));
        assert!(home.matches(""));
        assert!(!home.matches("/brand/naming"));
    }

    #[test]
    fn test_overview_link_under_base_path() {
        let home = overview_link("/docs/");
        assert_eq!(home.title, "Overview");
        assert!(home.matches("/docs"));
        assert!(home.matches("/docs/"));
        assert!(!home.matches("/"));
        assert!(!home.matches("/docs/brand/naming/"));
    }

    #[test]
    fn test_section_activity() {
        let nav = site_navigation();
        let design = nav.iter().find(|s| s.title == "Design").unwrap();
        assert!(design.is_active("/design/spacing/"));
        assert!(!design.is_active("/components/buttons"));
    }

    #[test]
    fn test_site_navigation_shape() {
        let nav = site_navigation();
        let titles: Vec<_> = nav.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Brand", "Design", "Components", "Patterns"]);
        let links: usize = nav.iter().map(|s| s.links.len()).sum();
        assert_eq!(links, 16);
    }

    #[test]
    fn test_nav_section_serialization() {
        let section = NavSection::new("Brand", vec![NavLink::new("Naming", "/brand/naming")]);
        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"title\":\"Brand\""));
        assert!(json.contains("\"href\":\"/brand/naming\""));
    }
}
