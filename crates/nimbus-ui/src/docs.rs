//! Building blocks for documentation pages: props tables, live previews,
//! token tables and copyable colour swatches.

use leptos::prelude::*;

use crate::{
    clipboard::{CodeBlock, CopyFeedback},
    style::{PreviewBackground, classes},
};

/// One documented component prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropDefinition {
    pub name: &'static str,
    pub type_name: &'static str,
    pub default: Option<&'static str>,
    pub required: bool,
    pub description: &'static str,
}

impl PropDefinition {
    pub const fn new(name: &'static str, type_name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            type_name,
            default: None,
            required: false,
            description,
        }
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Divider class for row `index` of `len`; the last row has none.
pub fn row_divider(index: usize, len: usize) -> &'static str {
    if index + 1 < len {
        "border-b border-nimbus-border-subtle"
    } else {
        ""
    }
}

/// Table of a component's props. Required props are starred.
#[component]
pub fn PropsTable(
    #[prop(into)] props: Vec<PropDefinition>,
    #[prop(default = "Props".to_string(), into)] title: String,
) -> impl IntoView {
    let len = props.len();
    let rows = props
        .into_iter()
        .enumerate()
        .map(|(index, prop)| {
            view! {
              <tr class=row_divider(index, len)>
                <td class="px-4 py-3">
                  <code class="text-sm text-nimbus-teal font-mono">{prop.name}</code>
                  {prop.required.then(|| view! { <span class="ml-1 text-nimbus-error text-xs">"*"</span> })}
                </td>
                <td class="px-4 py-3">
                  <code class="text-sm text-nimbus-orange font-mono">{prop.type_name}</code>
                </td>
                <td class="px-4 py-3 hidden md:table-cell">
                  {match prop.default {
                    Some(value) => {
                      view! { <code class="text-sm text-nimbus-text-secondary font-mono">{value}</code> }
                        .into_any()
                    }
                    None => view! { <span class="text-nimbus-text-tertiary">"\u{2014}"</span> }.into_any(),
                  }}
                </td>
                <td class="px-4 py-3 text-sm text-nimbus-text-secondary">{prop.description}</td>
              </tr>
            }
        })
        .collect_view();

    view! {
      <div class="mb-8">
        <h3 class="text-xl font-semibold text-nimbus-text-primary mb-4">{title}</h3>
        <div class="rounded-xl border border-nimbus-border overflow-hidden">
          <table class="w-full">
            <thead class="bg-nimbus-surface-elevated">
              <tr class="border-b border-nimbus-border">
                <th class="text-left px-4 py-3 text-sm font-semibold text-nimbus-text-primary">"Name"</th>
                <th class="text-left px-4 py-3 text-sm font-semibold text-nimbus-text-primary">"Type"</th>
                <th class="text-left px-4 py-3 text-sm font-semibold text-nimbus-text-primary hidden md:table-cell">
                  "Default"
                </th>
                <th class="text-left px-4 py-3 text-sm font-semibold text-nimbus-text-primary">"Description"</th>
              </tr>
            </thead>
            <tbody class="bg-nimbus-surface">{rows}</tbody>
          </table>
        </div>
        <p class="text-xs text-nimbus-text-tertiary mt-2">
          <span class="text-nimbus-error">"*"</span>
          " Required prop"
        </p>
      </div>
    }
}

/// Live rendering of `children` with a toggleable source panel.
#[component]
pub fn ComponentPreview(
    /// Source shown in the code panel.
    #[prop(into)]
    code: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = "rust".to_string(), into)] language: String,
    #[prop(optional)] background: PreviewBackground,
    #[prop(default = 2000)] feedback_ms: u64,
    children: Children,
) -> impl IntoView {
    let show_code = RwSignal::new(false);
    let expanded = RwSignal::new(false);
    let code = StoredValue::new(code);
    let language = StoredValue::new(language);

    let header = (title.is_some() || description.is_some()).then(|| {
        view! {
          <div class="px-6 py-4 bg-nimbus-surface-elevated border-b border-nimbus-border">
            {title.map(|t| view! { <h3 class="text-lg font-semibold text-nimbus-text-primary">{t}</h3> })}
            {description.map(|d| view! { <p class="text-sm text-nimbus-text-secondary mt-1">{d}</p> })}
          </div>
        }
    });

    view! {
      <div class="rounded-3xl border border-nimbus-border overflow-hidden mb-6">
        {header}

        <div class=move || {
          classes(
            &[
              background.class(),
              if expanded.get() { "min-h-[400px]" } else { "min-h-[200px]" },
              "p-8 flex items-center justify-center transition-all duration-300",
            ],
          )
        }>
          <div class="flex flex-wrap gap-4 items-center justify-center">{children()}</div>
        </div>

        <div class="flex items-center justify-between px-4 py-2 bg-nimbus-surface border-t border-nimbus-border">
          <button
            type="button"
            class=move || {
              classes(
                &[
                  "flex items-center gap-1.5 px-3 py-1.5 text-sm font-medium rounded-full transition-colors",
                  if show_code.get() {
                    "bg-nimbus-teal/10 text-nimbus-teal"
                  } else {
                    "text-nimbus-text-secondary hover:text-nimbus-text-primary hover:bg-nimbus-surface-hover"
                  },
                ],
              )
            }
            aria-pressed=move || show_code.get().to_string()
            on:click=move |_| show_code.update(|s| *s = !*s)
          >
            {move || if show_code.get() { "Preview" } else { "Code" }}
          </button>
          <button
            type="button"
            class="p-1.5 text-nimbus-text-tertiary hover:text-nimbus-text-primary transition-colors"
            title=move || if expanded.get() { "Collapse" } else { "Expand" }
            on:click=move |_| expanded.update(|e| *e = !*e)
          >
            {move || if expanded.get() { "\u{2199}" } else { "\u{2197}" }}
          </button>
        </div>

        <Show when=move || show_code.get()>
          <div class="border-t border-nimbus-border">
            <CodeBlock
              code=code.get_value()
              language=language.get_value()
              show_line_numbers=true
              feedback_ms=feedback_ms
            />
          </div>
        </Show>
      </div>
    }
}

/// Generic token table: the first column is rendered as code.
#[component]
pub fn TokenTable(headers: Vec<&'static str>, rows: Vec<Vec<String>>) -> impl IntoView {
    let len = rows.len();

    view! {
      <div class="rounded-xl border border-nimbus-border overflow-hidden">
        <table class="w-full">
          <thead class="bg-nimbus-surface-elevated">
            <tr class="border-b border-nimbus-border">
              {headers
                .into_iter()
                .map(|header| {
                  view! {
                    <th class="text-left px-4 py-3 text-sm font-semibold text-nimbus-text-primary">{header}</th>
                  }
                })
                .collect_view()}
            </tr>
          </thead>
          <tbody class="bg-nimbus-surface">
            {rows
              .into_iter()
              .enumerate()
              .map(|(index, cells)| {
                view! {
                  <tr class=row_divider(index, len)>
                    {cells
                      .into_iter()
                      .enumerate()
                      .map(|(column, cell)| {
                        if column == 0 {
                          view! {
                            <td class="px-4 py-3">
                              <code class="text-sm text-nimbus-teal font-mono">{cell}</code>
                            </td>
                          }
                            .into_any()
                        } else {
                          view! { <td class="px-4 py-3 text-sm text-nimbus-text-secondary">{cell}</td> }
                            .into_any()
                        }
                      })
                      .collect_view()}
                  </tr>
                }
              })
              .collect_view()}
          </tbody>
        </table>
      </div>
    }
}

/// A named colour and the CSS custom property that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    pub name: &'static str,
    /// CSS custom property, e.g. `--nimbus-teal`.
    pub variable: &'static str,
    /// Hex value, e.g. `#00A69C`.
    pub value: &'static str,
    /// Light swatches need dark label text.
    pub dark_text: bool,
}

impl ColorToken {
    pub const fn new(name: &'static str, variable: &'static str, value: &'static str) -> Self {
        Self {
            name,
            variable,
            value,
            dark_text: false,
        }
    }

    pub const fn with_dark_text(mut self) -> Self {
        self.dark_text = true;
        self
    }

    pub const fn text_class(&self) -> &'static str {
        if self.dark_text { "text-black" } else { "text-white" }
    }
}

/// Colour swatch that copies its CSS variable name when clicked.
#[component]
pub fn ColorSwatch(token: ColorToken, #[prop(default = 2000)] feedback_ms: u64) -> impl IntoView {
    let feedback = CopyFeedback::new(feedback_ms);
    let copied = Memo::new(move |_| feedback.copied());

    view! {
      <button
        type="button"
        class="group text-left rounded-xl overflow-hidden border border-nimbus-border hover:border-nimbus-teal/50 transition-colors"
        aria-label=format!("Copy {}", token.variable)
        on:click=move |_| feedback.copy(token.variable.to_string())
      >
        <div
          class=classes(&["h-24 flex items-end p-4", token.text_class()])
          style:background-color=token.value
        >
          <span class="text-sm font-medium opacity-90">{token.name}</span>
        </div>
        <div class="p-3 bg-nimbus-surface">
          <div class="flex items-center justify-between">
            <code class="text-xs text-nimbus-text-secondary font-mono">{token.value}</code>
            {move || {
              if copied.get() {
                view! { <span class="text-xs text-nimbus-success">"\u{2713} Copied"</span> }.into_any()
              } else {
                view! {
                  <span class="text-xs text-nimbus-text-tertiary opacity-0 group-hover:opacity-100 transition-opacity">
                    "Copy"
                  </span>
                }
                  .into_any()
              }
            }}
          </div>
          <code class="text-xs text-nimbus-text-tertiary font-mono block mt-1">{token.variable}</code>
        </div>
      </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_definition_builder() {
        let plain = PropDefinition::new("class", "String", "Extra classes");
        assert_eq!(plain.default, None);
        assert!(!plain.required);

        let size = PropDefinition::new("size", "ButtonSize", "Button size").default_value("Md");
        assert_eq!(size.default, Some("Md"));

        let children = PropDefinition::new("children", "Children", "Content").required();
        assert!(children.required);
    }

    #[test]
    fn test_last_row_has_no_divider() {
        assert_eq!(row_divider(0, 3), "border-b border-nimbus-border-subtle");
        assert_eq!(row_divider(1, 3), "border-b border-nimbus-border-subtle");
        assert_eq!(row_divider(2, 3), "");
        assert_eq!(row_divider(0, 1), "");
    }

    #[test]
    fn test_color_token_label_contrast() {
        let teal = ColorToken::new("Teal", "--nimbus-teal", "#00A69C");
        assert_eq!(teal.text_class(), "text-white");

        let orange = ColorToken::new("Orange", "--nimbus-orange", "#F5A623").with_dark_text();
        assert_eq!(orange.text_class(), "text-black");
        assert_eq!(orange.variable, "--nimbus-orange");
    }
}
