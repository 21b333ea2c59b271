//! Presentational primitives: buttons, badges, cards, inputs and modals.

use leptos::{ev, leptos_dom::helpers::window_event_listener, prelude::*};

use crate::style::{
    BadgeSize, BadgeVariant, ButtonSize, ButtonStyle, ButtonVariant, CardPadding, CardVariant,
    InputSize, ModalSize, Status, classes, input_id, input_state_class, notification_label,
};

/// Action button with an optional loading spinner.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Shows a spinner and disables the button.
    #[prop(default = false.into(), into)]
    loading: Signal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = ButtonStyle {
        variant,
        size,
        full_width,
    };
    let class = classes(&[
        &style.class(),
        "disabled:opacity-50 disabled:cursor-not-allowed",
        &class,
    ]);
    let spinner = format!("{0}px", size.spinner_px());

    view! {
      <button
        type="button"
        class=class
        disabled=move || disabled.get() || loading.get()
        aria-busy=move || loading.get().to_string()
        on:click=move |_| {
          if let Some(on_click) = on_click {
            on_click.run(());
          }
        }
      >
        <Show when=move || loading.get()>
          <span
            class="animate-spin rounded-full border-2 border-current border-t-transparent"
            style:width=spinner.clone()
            style:height=spinner.clone()
          ></span>
        </Show>
        {children()}
      </button>
    }
}

/// Small label with an optional leading dot.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: BadgeSize,
    #[prop(optional)] dot: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = classes(&[
        "inline-flex items-center gap-1.5 font-medium rounded-full",
        variant.class(),
        size.class(),
        &class,
    ]);

    view! {
      <span class=class>
        {dot.then(|| view! { <span class=classes(&["w-1.5 h-1.5 rounded-full", variant.dot_class()]) /> })}
        {children()}
      </span>
    }
}

/// Badge for a predefined workflow [`Status`].
#[component]
pub fn StatusBadge(status: Status, #[prop(optional)] size: BadgeSize) -> impl IntoView {
    let (variant, label, dot) = status.badge();
    view! {
      <Badge variant=variant size=size dot=dot>
        {label}
      </Badge>
    }
}

/// Unread counter; hidden at zero, capped at `max`.
#[component]
pub fn NotificationBadge(
    #[prop(into)] count: Signal<u32>,
    #[prop(default = 99)] max: u32,
) -> impl IntoView {
    move || {
        notification_label(count.get(), max)
            .map(|label| {
                view! {
                  <span class="inline-flex items-center justify-center min-w-5 h-5 px-1.5 text-xs font-semibold rounded-full bg-nimbus-orange text-nimbus-black">
                    {label}
                  </span>
                }
            })
    }
}

#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
      <div class=classes(
        &["rounded-2xl", variant.class(), padding.class(), &class],
      )>{children()}</div>
    }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h3 class="text-lg font-semibold text-nimbus-text-primary">{children()}</h3> }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class="mt-1 text-sm text-nimbus-text-secondary">{children()}</p> }
}

/// Labelled text field. An error message replaces the hint.
#[component]
pub fn Input(
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = Signal::stored(None), into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] size: InputSize,
    #[prop(optional, into)] placeholder: String,
    /// Bound value.
    value: RwSignal<String>,
) -> impl IntoView {
    let id = label.as_deref().map(input_id);
    let class = move || {
        classes(&[
            "w-full rounded-full bg-nimbus-surface border text-nimbus-text-primary \
             placeholder:text-nimbus-text-tertiary focus:outline-none focus:ring-1",
            size.class(),
            input_state_class(error.with(Option::is_some)),
        ])
    };
    let hint = StoredValue::new(hint);

    view! {
      <div class="w-full">
        {label
          .map(|label| {
            view! {
              <label
                for=id.clone()
                class="block mb-2 text-sm font-medium text-nimbus-text-primary"
              >
                {label}
              </label>
            }
          })}
        <input
          id=id
          type="text"
          class=class
          placeholder=placeholder
          aria-invalid=move || error.with(Option::is_some).to_string()
          prop:value=move || value.get()
          on:input=move |ev| value.set(event_target_value(&ev))
        />
        {move || match error.get() {
          Some(message) => {
            view! { <p class="mt-2 text-sm text-nimbus-error">{message}</p> }.into_any()
          }
          None => {
            hint
              .get_value()
              .map(|hint| {
                view! { <p class="mt-2 text-sm text-nimbus-text-tertiary">{hint}</p> }
              })
              .into_any()
          }
        }}
      </div>
    }
}

/// Dialog overlay controlled by `open`.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] size: ModalSize,
    #[prop(default = true)] close_on_overlay: bool,
    #[prop(default = true)] close_on_escape: bool,
    children: ChildrenFn,
    #[prop(optional, into)] footer: Option<ViewFn>,
) -> impl IntoView {
    if close_on_escape {
        let handle = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" && open.get_untracked() {
                open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let title = StoredValue::new(title);
    let description = StoredValue::new(description);
    let children = StoredValue::new(children);
    let footer = StoredValue::new(footer);

    view! {
      <Show when=move || open.get()>
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
          <div
            class="absolute inset-0 bg-nimbus-black/80 backdrop-blur-sm"
            on:click=move |_| {
              if close_on_overlay {
                open.set(false);
              }
            }
          ></div>
          <div
            role="dialog"
            aria-modal="true"
            class=classes(
              &[
                "relative w-full bg-nimbus-surface border border-nimbus-border rounded-2xl shadow-2xl",
                size.class(),
              ],
            )
          >
            <div class="flex items-start justify-between p-6 pb-0">
              <div>
                {title
                  .get_value()
                  .map(|t| view! { <h2 class="text-xl font-semibold text-nimbus-text-primary">{t}</h2> })}
                {description
                  .get_value()
                  .map(|d| view! { <p class="mt-1 text-sm text-nimbus-text-secondary">{d}</p> })}
              </div>
              <button
                type="button"
                class="p-1 rounded-full text-nimbus-text-tertiary hover:text-nimbus-text-primary"
                aria-label="Close"
                on:click=move |_| open.set(false)
              >
                "\u{2715}"
              </button>
            </div>
            <div class="p-6">{children.with_value(|children| children())}</div>
            {footer
              .with_value(|footer| {
                footer
                  .as_ref()
                  .map(|footer| {
                    view! {
                      <div class="flex justify-end gap-3 px-6 py-4 border-t border-nimbus-border">
                        {footer.run()}
                      </div>
                    }
                  })
              })}
          </div>
        </div>
      </Show>
    }
}
