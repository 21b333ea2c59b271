//! Copy-to-clipboard button and the code block that hosts it.

use std::time::Duration;

use leptos::{
    leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle},
    prelude::*,
    task::spawn_local,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// "Copied" feedback state.
///
/// Each successful copy issues a ticket. Only the timer holding the latest
/// ticket may clear the flag, so an older timer never cuts a newer copy's
/// feedback short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    copied: bool,
    generation: u64,
}

impl CopyIndicator {
    /// Record a copy attempt. Returns the ticket to expire later when the
    /// copy succeeded.
    pub fn record(&mut self, success: bool) -> Option<u64> {
        if !success {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        Some(self.generation)
    }

    /// Clear the flag if `ticket` is still the latest one.
    pub fn expire(&mut self, ticket: u64) {
        if ticket == self.generation {
            self.copied = false;
        }
    }

    pub fn copied(&self) -> bool {
        self.copied
    }
}

/// Copy `text` to the system clipboard.
///
/// Uses the async Clipboard API in secure contexts and falls back to a
/// hidden textarea with `execCommand("copy")` elsewhere. Returns whether the
/// text was copied.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    if window.is_secure_context() {
        let promise = window.navigator().clipboard().write_text(text);
        match JsFuture::from(promise).await {
            Ok(_) => return true,
            Err(err) => tracing::warn!(?err, "clipboard write rejected, trying fallback"),
        }
    }

    copy_with_textarea(&window, text)
}

fn copy_with_textarea(window: &web_sys::Window, text: &str) -> bool {
    let Some(document) = window.document() else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };

    let Ok(textarea) = document
        .create_element("textarea")
        .map(|el| el.unchecked_into::<web_sys::HtmlTextAreaElement>())
    else {
        return false;
    };
    textarea.set_value(text);
    let style = web_sys::HtmlElement::style(&textarea);
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-9999px");
    let _ = style.set_property("opacity", "0");

    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();

    let copied = document
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);

    textarea.remove();

    if !copied {
        tracing::warn!("execCommand copy failed");
    }
    copied
}

/// Copy action with a timed "copied" flag, shared by every copy control.
///
/// The pending timer is cancelled on re-copy and when the owning scope is
/// cleaned up.
#[derive(Clone, Copy)]
pub struct CopyFeedback {
    indicator: RwSignal<CopyIndicator>,
    timer: StoredValue<Option<TimeoutHandle>>,
    feedback_ms: u64,
}

impl CopyFeedback {
    pub fn new(feedback_ms: u64) -> Self {
        let timer = StoredValue::new(None::<TimeoutHandle>);
        on_cleanup(move || {
            if let Some(handle) = timer.try_get_value().flatten() {
                handle.clear();
            }
        });

        Self {
            indicator: RwSignal::new(CopyIndicator::default()),
            timer,
            feedback_ms,
        }
    }

    /// Copy `text` in the background and raise the flag on success.
    pub fn copy(&self, text: String) {
        let Self {
            indicator,
            timer,
            feedback_ms,
        } = *self;

        spawn_local(async move {
            let success = copy_to_clipboard(&text).await;
            let Some(ticket) = indicator.try_update(|i| i.record(success)).flatten() else {
                return;
            };

            if let Some(previous) = timer.get_value() {
                previous.clear();
            }
            let handle = set_timeout_with_handle(
                move || indicator.update(|i| i.expire(ticket)),
                Duration::from_millis(feedback_ms),
            );
            timer.set_value(handle.ok());
        });
    }

    /// Tracked.
    pub fn copied(&self) -> bool {
        self.indicator.with(|i| i.copied())
    }
}

/// Button copying `text`, showing "Copied" for `feedback_ms`.
#[component]
pub fn CopyButton(
    #[prop(into)] text: String,
    #[prop(default = 2000)] feedback_ms: u64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let feedback = CopyFeedback::new(feedback_ms);
    let text = StoredValue::new(text);
    let copied = Memo::new(move |_| feedback.copied());

    view! {
      <button
        type="button"
        class=format!(
          "px-3 py-1 text-xs rounded-full border border-nimbus-border text-nimbus-text-secondary hover:text-nimbus-text-primary {class}",
        )
        aria-label=move || if copied.get() { "Copied" } else { "Copy code" }
        on:click=move |_| feedback.copy(text.get_value())
      >
        {move || if copied.get() { "Copied" } else { "Copy" }}
      </button>
    }
}

/// Lines of `code` with their 1-based numbers.
pub fn numbered_lines(code: &str) -> Vec<(usize, &str)> {
    code.lines().enumerate().map(|(i, line)| (i + 1, line)).collect()
}

/// Code sample with a header bar and copy button.
#[component]
pub fn CodeBlock(
    #[prop(into)] code: String,
    #[prop(default = "tsx".to_string(), into)] language: String,
    #[prop(optional, into)] filename: Option<String>,
    #[prop(optional)] show_line_numbers: bool,
    /// 1-based line numbers to highlight.
    #[prop(optional)]
    highlight_lines: Vec<usize>,
    #[prop(default = 2000)] feedback_ms: u64,
) -> impl IntoView {
    let label = filename.unwrap_or_else(|| language.clone());
    let lines = numbered_lines(&code)
        .into_iter()
        .map(|(number, line)| {
            let highlighted = highlight_lines.contains(&number);
            let line = line.to_string();
            view! {
              <div class=if highlighted { "flex bg-nimbus-teal/10" } else { "flex" }>
                {show_line_numbers
                  .then(|| {
                    view! {
                      <span class="select-none w-8 pr-4 text-right text-nimbus-text-tertiary">
                        {number}
                      </span>
                    }
                  })}
                <span class="whitespace-pre">{line}</span>
              </div>
            }
        })
        .collect_view();

    view! {
      <div class="rounded-2xl border border-nimbus-border bg-nimbus-surface overflow-hidden">
        <div class="flex items-center justify-between px-4 py-2 border-b border-nimbus-border">
          <span class="text-xs text-nimbus-text-tertiary">{label}</span>
          <CopyButton text=code feedback_ms=feedback_ms />
        </div>
        <pre class="p-4 overflow-x-auto text-sm font-mono text-nimbus-text-primary">
          <code class=format!("language-{language}")>{lines}</code>
        </pre>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_copy_sets_flag() {
        let mut indicator = CopyIndicator::default();
        assert!(!indicator.copied());

        let ticket = indicator.record(true).unwrap();
        assert!(indicator.copied());

        indicator.expire(ticket);
        assert!(!indicator.copied());
    }

    #[test]
    fn test_failed_copy_leaves_state_untouched() {
        let mut indicator = CopyIndicator::default();
        assert_eq!(indicator.record(false), None);
        assert!(!indicator.copied());
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_copy() {
        let mut indicator = CopyIndicator::default();
        let first = indicator.record(true).unwrap();
        let second = indicator.record(true).unwrap();
        assert_ne!(first, second);

        indicator.expire(first);
        assert!(indicator.copied());

        indicator.expire(second);
        assert!(!indicator.copied());
    }

    #[test]
    fn test_numbered_lines() {
        let code = "fn main() {\n    run();\n}";
        let lines = numbered_lines(code);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], (1, "fn main() {"));
        assert_eq!(lines[2], (3, "}"));
        assert!(numbered_lines("").is_empty());
    }
}
