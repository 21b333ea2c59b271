//! Live component demos and reference tables shown on the documentation pages.

use leptos::prelude::*;
use nimbus_ui::{
    Badge, Button, Card, CardDescription, CardTitle, CodeBlock, ColorSwatch, ComponentPreview,
    Input, Modal, NotificationBadge, PropsTable, SelectionState, StatusBadge, TabsContent,
    TabsHandle, TabsList, TabsTrigger, TokenTable,
    style::{
        BadgeVariant, ButtonSize, ButtonVariant, CardVariant, ModalSize, PreviewBackground, Status,
        TabsVariant,
    },
};

use crate::tokens::{
    BADGE_PROPS, BUTTON_PROPS, CARD_PROPS, COLOR_GROUPS, COLOR_USAGE, ELEVATION_USAGE,
    EMAIL_TEMPLATES, FONT_WEIGHTS, GLOWS, INPUT_PROPS, LAYOUT_PATTERNS, LAYOUT_SAMPLES,
    LINE_HEIGHTS, MODAL_PROPS, NOTIFICATION_BADGE_PROPS, RADIUS_SCALE, SHADOWS, SPACING_SCALE,
    SPACING_USAGE, TABS_TRIGGER_PROPS, TYPE_SCALE, TYPOGRAPHY_USAGE, Z_INDEX_SCALE,
};

/// Page body for `target`. Pages without a demo render only their header.
pub fn for_target(target: &str, feedback_ms: u64) -> AnyView {
    match target {
        "/components/buttons" => view! { <ButtonShowcase feedback_ms=feedback_ms /> }.into_any(),
        "/components/badges" => view! { <BadgeShowcase feedback_ms=feedback_ms /> }.into_any(),
        "/components/cards" => view! { <CardShowcase /> }.into_any(),
        "/components/forms" => view! { <FormShowcase /> }.into_any(),
        "/components/modals" => view! { <ModalShowcase /> }.into_any(),
        "/components/navigation" => view! { <TabsShowcase feedback_ms=feedback_ms /> }.into_any(),
        "/design/colors" => view! { <ColorsPage feedback_ms=feedback_ms /> }.into_any(),
        "/design/typography" => view! { <TypographyPage feedback_ms=feedback_ms /> }.into_any(),
        "/design/spacing" => view! { <SpacingPage feedback_ms=feedback_ms /> }.into_any(),
        "/design/elevation" => view! { <ElevationPage feedback_ms=feedback_ms /> }.into_any(),
        "/patterns/layouts" => view! { <LayoutsPage feedback_ms=feedback_ms /> }.into_any(),
        "/patterns/messaging" => view! { <MessagingPage /> }.into_any(),
        _ => ().into_any(),
    }
}

#[component]
fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
      <section class="mb-12">
        <h2 class="mb-4 text-2xl font-semibold text-nimbus-text-primary">{title}</h2>
        {children()}
      </section>
    }
}

const BUTTON_SNIPPET: &str = r#"use nimbus_ui::{Button, style::ButtonVariant};

view! {
  <Button>"Click me"</Button>
  <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
  <Button variant=ButtonVariant::Outline>"Outline"</Button>
}"#;

#[component]
fn ButtonShowcase(feedback_ms: u64) -> impl IntoView {
    let loading = RwSignal::new(false);

    view! {
      <Section title="Basic usage">
        <ComponentPreview title="Basic button" code=BUTTON_SNIPPET feedback_ms=feedback_ms>
          <Button>"Click me"</Button>
          <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
          <Button variant=ButtonVariant::Outline>"Outline"</Button>
        </ComponentPreview>
      </Section>
      <Section title="Variants">
        <div class="flex flex-wrap gap-4">
          {ButtonVariant::ALL
            .into_iter()
            .map(|variant| view! { <Button variant=variant>{variant.label()}</Button> })
            .collect_view()}
        </div>
      </Section>
      <Section title="Sizes">
        <div class="flex flex-wrap items-center gap-4">
          <Button size=ButtonSize::Sm>"Small"</Button>
          <Button size=ButtonSize::Md>"Medium"</Button>
          <Button size=ButtonSize::Lg>"Large"</Button>
        </div>
      </Section>
      <Section title="Loading">
        <Button
          loading=loading
          on_click=Callback::new(move |_| loading.set(true))
        >
          "Save changes"
        </Button>
        <button
          type="button"
          class="ml-4 text-sm text-nimbus-text-secondary underline"
          on:click=move |_| loading.set(false)
        >
          "Reset"
        </button>
      </Section>
      <PropsTable props=BUTTON_PROPS />
    }
}

const BADGE_SNIPPET: &str = r#"use nimbus_ui::{Badge, style::BadgeVariant};

view! {
  <Badge>"Default"</Badge>
  <Badge variant=BadgeVariant::Success>"Success"</Badge>
  <Badge variant=BadgeVariant::Warning dot=true>"Warning"</Badge>
}"#;

#[component]
fn BadgeShowcase(feedback_ms: u64) -> impl IntoView {
    view! {
      <Section title="Variants">
        <ComponentPreview
          title="Badge variants"
          code=BADGE_SNIPPET
          background=PreviewBackground::Grid
          feedback_ms=feedback_ms
        >
          {BadgeVariant::ALL
            .into_iter()
            .map(|variant| view! { <Badge variant=variant dot=true>{variant.label()}</Badge> })
            .collect_view()}
        </ComponentPreview>
      </Section>
      <Section title="Status">
        <div class="flex flex-wrap gap-3">
          {Status::ALL
            .into_iter()
            .map(|status| view! { <StatusBadge status=status /> })
            .collect_view()}
        </div>
      </Section>
      <Section title="Notifications">
        <div class="flex gap-6">
          <NotificationBadge count=3u32 />
          <NotificationBadge count=42u32 />
          <NotificationBadge count=150u32 />
          <NotificationBadge count=0u32 />
        </div>
      </Section>
      <PropsTable props=BADGE_PROPS title="Badge props" />
      <PropsTable props=NOTIFICATION_BADGE_PROPS title="NotificationBadge props" />
    }
}

#[component]
fn CardShowcase() -> impl IntoView {
    let cards = [
        (CardVariant::Default, "Default", "Surface background with a subtle border."),
        (CardVariant::Elevated, "Elevated", "Raised surface for emphasis."),
        (CardVariant::Outlined, "Outlined", "Transparent with a border only."),
        (CardVariant::Interactive, "Interactive", "Highlights on hover; use for links."),
    ];

    view! {
      <Section title="Variants">
        <div class="grid gap-6 md:grid-cols-2">
          {cards
            .into_iter()
            .map(|(variant, title, description)| {
              view! {
                <Card variant=variant>
                  <CardTitle>{title}</CardTitle>
                  <CardDescription>{description}</CardDescription>
                </Card>
              }
            })
            .collect_view()}
        </div>
      </Section>
      <PropsTable props=CARD_PROPS />
    }
}

#[component]
fn FormShowcase() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let email_error = Signal::derive(move || {
        email.with(|e| {
            (!e.is_empty() && !e.contains('@')).then(|| "Enter a valid email address".to_string())
        })
    });

    view! {
      <Section title="Text input">
        <div class="grid gap-6 max-w-md">
          <Input label="Full name" placeholder="Jane Doe" value=name hint="As it appears on your ID" />
          <Input label="Email address" placeholder="you@example.com" value=email error=email_error />
        </div>
      </Section>
      <PropsTable props=INPUT_PROPS />
    }
}

#[component]
fn ModalShowcase() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
      <Section title="Dialog">
        <Button on_click=Callback::new(move |_| open.set(true))>"Open modal"</Button>
        <Modal
          open=open
          title="Confirm appointment"
          description="You can reschedule up to 24 hours in advance."
          size=ModalSize::Md
          footer=move || {
            view! {
              <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| open.set(false))>
                "Cancel"
              </Button>
              <Button on_click=Callback::new(move |_| open.set(false))>"Confirm"</Button>
            }
          }
        >
          <p class="text-nimbus-text-secondary">"Tuesday, 10:30 with Dr. Rivera."</p>
        </Modal>
      </Section>
      <PropsTable props=MODAL_PROPS />
    }
}

const TABS_SNIPPET: &str = r#"let state = SelectionState::new(["account", "password"], "account")?;
let tabs = TabsHandle::new(state, None);

view! {
    <TabsList>
        <TabsTrigger tabs=tabs value="account">"Account"</TabsTrigger>
        <TabsTrigger tabs=tabs value="password">"Password"</TabsTrigger>
    </TabsList>
    <TabsContent tabs=tabs value="account">"Account settings"</TabsContent>
    <TabsContent tabs=tabs value="password">"Change password"</TabsContent>
}"#;

#[component]
fn TabsShowcase(feedback_ms: u64) -> impl IntoView {
    let settings = SelectionState::new(["account", "password"], "account");
    let docs = SelectionState::new(["overview", "usage", "api"], "overview");

    let (Ok(settings), Ok(docs)) = (settings, docs) else {
        tracing::error!("tab demo declared invalid panels");
        return ().into_any();
    };

    let on_change = Callback::new(|key: String| tracing::info!(%key, "settings tab changed"));
    let settings = TabsHandle::new(settings, Some(on_change));
    let docs = TabsHandle::new(docs, None);

    view! {
      <Section title="Tabs">
        <Card>
          <TabsList>
            <TabsTrigger tabs=settings value="account">"Account"</TabsTrigger>
            <TabsTrigger tabs=settings value="password">"Password"</TabsTrigger>
          </TabsList>
          <TabsContent tabs=settings value="account">
            <p class="text-nimbus-text-secondary">"Update your name and contact details."</p>
          </TabsContent>
          <TabsContent tabs=settings value="password">
            <p class="text-nimbus-text-secondary">"Change your password. You will be signed out elsewhere."</p>
          </TabsContent>
        </Card>
      </Section>
      <Section title="Pill tabs">
        <TabsList variant=TabsVariant::Pills>
          <TabsTrigger tabs=docs value="overview" variant=TabsVariant::Pills>"Overview"</TabsTrigger>
          <TabsTrigger tabs=docs value="usage" variant=TabsVariant::Pills>"Usage"</TabsTrigger>
          <TabsTrigger tabs=docs value="api" variant=TabsVariant::Pills>"API"</TabsTrigger>
        </TabsList>
        <TabsContent tabs=docs value="overview">
          <p class="text-nimbus-text-secondary">"Tabs switch between related views without leaving the page."</p>
        </TabsContent>
        <TabsContent tabs=docs value="usage">
          <CodeBlock code=TABS_SNIPPET language="rust" show_line_numbers=true feedback_ms=feedback_ms />
        </TabsContent>
        <TabsContent tabs=docs value="api">
          <p class="text-nimbus-text-secondary">
            "Switching to an undeclared panel is rejected and the active panel stays put."
          </p>
        </TabsContent>
      </Section>
      <PropsTable props=TABS_TRIGGER_PROPS title="TabsTrigger props" />
    }
    .into_any()
}

#[component]
fn ColorsPage(feedback_ms: u64) -> impl IntoView {
    view! {
      <p class="mb-10 text-sm text-nimbus-text-tertiary">"Click a swatch to copy its CSS variable."</p>
      {COLOR_GROUPS
        .iter()
        .map(|group| {
          view! {
            <section class="mb-12">
              <h2 class="mb-2 text-xl font-semibold text-nimbus-text-primary">{group.title}</h2>
              <p class="mb-6 text-nimbus-text-secondary">{group.description}</p>
              <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {group
                  .colors
                  .iter()
                  .map(|&token| view! { <ColorSwatch token=token feedback_ms=feedback_ms /> })
                  .collect_view()}
              </div>
            </section>
          }
        })
        .collect_view()}
      <Section title="Usage">
        <CodeBlock code=COLOR_USAGE language="css" filename="styles.css" feedback_ms=feedback_ms />
      </Section>
    }
}

#[component]
fn TypographyPage(feedback_ms: u64) -> impl IntoView {
    view! {
      <Section title="Type scale">
        <div class="space-y-6">
          {TYPE_SCALE
            .iter()
            .map(|step| {
              view! {
                <div class="flex items-baseline justify-between gap-6 border-b border-nimbus-border-subtle pb-4">
                  <span
                    class="text-nimbus-text-primary"
                    style:font-size=step.size
                    style:line-height=step.line_height
                    style:font-weight=step.weight
                  >
                    {step.sample}
                  </span>
                  <code class="text-sm text-nimbus-text-secondary font-mono whitespace-nowrap">
                    {format!("{} \u{b7} {} / {}", step.name, step.size, step.line_height)}
                  </code>
                </div>
              }
            })
            .collect_view()}
        </div>
      </Section>
      <Section title="Font weights">
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
          {FONT_WEIGHTS
            .iter()
            .map(|&(name, weight, variable)| {
              view! {
                <Card class="text-center">
                  <p class="text-3xl text-nimbus-text-primary mb-2" style:font-weight=weight>"Aa"</p>
                  <p class="text-sm font-medium text-nimbus-text-primary">{name}</p>
                  <code class="text-xs text-nimbus-text-tertiary font-mono">{format!("{weight} {variable}")}</code>
                </Card>
              }
            })
            .collect_view()}
        </div>
      </Section>
      <Section title="Line height">
        <TokenTable
          headers=vec!["Name", "Value", "Usage"]
          rows=LINE_HEIGHTS
            .iter()
            .map(|&(name, value, usage)| vec![name.to_string(), value.to_string(), usage.to_string()])
            .collect()
        />
      </Section>
      <Section title="Usage">
        <CodeBlock code=TYPOGRAPHY_USAGE language="css" filename="typography.css" feedback_ms=feedback_ms />
      </Section>
    }
}

#[component]
fn SpacingPage(feedback_ms: u64) -> impl IntoView {
    view! {
      <Section title="Spacing scale">
        <div class="space-y-3">
          {SPACING_SCALE
            .iter()
            .map(|&(name, value, pixels)| {
              view! {
                <div class="flex items-center gap-6">
                  <code class="w-12 text-sm text-nimbus-teal font-mono">{name}</code>
                  <code class="w-20 text-sm text-nimbus-text-secondary font-mono">{value}</code>
                  <span class="w-14 text-sm text-nimbus-text-tertiary">{format!("{pixels}px")}</span>
                  <div class="h-3 rounded-sm bg-nimbus-teal" style:width=format!("{pixels}px")></div>
                </div>
              }
            })
            .collect_view()}
        </div>
      </Section>
      <Section title="Border radius">
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
          {RADIUS_SCALE
            .iter()
            .map(|&(name, value, class)| {
              view! {
                <div class="text-center">
                  <div class=format!("h-20 mb-3 bg-nimbus-teal/20 border border-nimbus-teal {class}")></div>
                  <p class="text-sm font-medium text-nimbus-text-primary">{name}</p>
                  <code class="text-xs text-nimbus-text-tertiary font-mono">{value}</code>
                </div>
              }
            })
            .collect_view()}
        </div>
      </Section>
      <Section title="Usage">
        <CodeBlock code=SPACING_USAGE language="css" filename="spacing.css" feedback_ms=feedback_ms />
      </Section>
    }
}

#[component]
fn ElevationPage(feedback_ms: u64) -> impl IntoView {
    view! {
      <Section title="Shadows">
        <div class="grid md:grid-cols-3 gap-6">
          {SHADOWS
            .iter()
            .map(|&(name, variable, shadow, usage)| {
              view! {
                <div class="p-6 rounded-2xl bg-nimbus-surface-elevated" style:box-shadow=shadow>
                  <p class="font-semibold text-nimbus-text-primary">{name}</p>
                  <code class="text-xs text-nimbus-text-tertiary font-mono">{variable}</code>
                  <p class="mt-2 text-sm text-nimbus-text-secondary">{usage}</p>
                </div>
              }
            })
            .collect_view()}
        </div>
      </Section>
      <Section title="Glow effects">
        <div class="grid md:grid-cols-2 gap-6">
          {GLOWS
            .iter()
            .map(|&(name, variable, shadow)| {
              view! {
                <div class="p-6 rounded-2xl bg-nimbus-surface" style:box-shadow=shadow>
                  <p class="font-semibold text-nimbus-text-primary">{name}</p>
                  <code class="text-xs text-nimbus-text-tertiary font-mono">{variable}</code>
                </div>
              }
            })
            .collect_view()}
        </div>
      </Section>
      <Section title="Z-index">
        <TokenTable
          headers=vec!["Layer", "Value", "Usage"]
          rows=Z_INDEX_SCALE
            .iter()
            .map(|&(layer, value, usage)| vec![layer.to_string(), value.to_string(), usage.to_string()])
            .collect()
        />
      </Section>
      <Section title="Usage">
        <CodeBlock code=ELEVATION_USAGE language="css" filename="elevation.css" feedback_ms=feedback_ms />
      </Section>
    }
}

#[component]
fn LayoutsPage(feedback_ms: u64) -> impl IntoView {
    view! {
      <Section title="Layout patterns">
        <div class="grid md:grid-cols-2 gap-6">
          {LAYOUT_PATTERNS
            .iter()
            .map(|pattern| {
              view! {
                <Card>
                  <CardTitle>{pattern.name}</CardTitle>
                  <CardDescription>{pattern.description}</CardDescription>
                  <p class="mt-4 text-xs text-nimbus-text-tertiary">
                    {format!("Use for: {}", pattern.usage)}
                  </p>
                  <p class="text-xs text-nimbus-text-tertiary">
                    {format!("Max width: {}", pattern.max_width)}
                  </p>
                </Card>
              }
            })
            .collect_view()}
        </div>
      </Section>
      {LAYOUT_SAMPLES
        .iter()
        .map(|&(title, filename, code)| {
          view! {
            <Section title=title>
              <CodeBlock code=code language="rust" filename=filename feedback_ms=feedback_ms />
            </Section>
          }
        })
        .collect_view()}
    }
}

#[component]
fn MessagingPage() -> impl IntoView {
    view! {
      <Section title="Email templates">
        <TokenTable
          headers=vec!["Type", "Subject", "Preview", "Sent"]
          rows=EMAIL_TEMPLATES
            .iter()
            .map(|&(kind, subject, preview, timing)| {
              vec![kind.to_string(), subject.to_string(), preview.to_string(), timing.to_string()]
            })
            .collect()
        />
      </Section>
    }
}
