//! Design token and reference data shown on the documentation pages.

use nimbus_ui::{ColorToken, PropDefinition};

pub struct ColorGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub colors: &'static [ColorToken],
}

pub const COLOR_GROUPS: &[ColorGroup] = &[
    ColorGroup {
        title: "Primary",
        description: "The primary teal is our signature color, used for CTAs, active states, and brand emphasis.",
        colors: &[
            ColorToken::new("Teal", "--nimbus-teal", "#00A69C"),
            ColorToken::new("Teal Dark", "--nimbus-teal-dark", "#008F87"),
            ColorToken::new("Teal Light", "--nimbus-teal-light", "#33B8B0"),
        ],
    },
    ColorGroup {
        title: "Backgrounds",
        description: "Dark backgrounds create the foundation of our interface. Use these for layering and hierarchy.",
        colors: &[
            ColorToken::new("Black", "--nimbus-black", "#0A0A0A"),
            ColorToken::new("Surface", "--nimbus-surface", "#1A1A1A"),
            ColorToken::new("Surface Elevated", "--nimbus-surface-elevated", "#242424"),
            ColorToken::new("Surface Hover", "--nimbus-surface-hover", "#2A2A2A"),
        ],
    },
    ColorGroup {
        title: "Accent",
        description: "Orange is used sparingly for secondary emphasis, badges, alerts, and warm accents.",
        colors: &[
            ColorToken::new("Orange", "--nimbus-orange", "#F5A623").with_dark_text(),
            ColorToken::new("Orange Dark", "--nimbus-orange-dark", "#D4901E").with_dark_text(),
            ColorToken::new("Orange Light", "--nimbus-orange-light", "#FFBE4D").with_dark_text(),
        ],
    },
    ColorGroup {
        title: "Text",
        description: "Text colors provide hierarchy and readability against dark backgrounds.",
        colors: &[
            ColorToken::new("Primary", "--nimbus-text-primary", "#FFFFFF"),
            ColorToken::new("Secondary", "--nimbus-text-secondary", "#A0A0A0"),
            ColorToken::new("Tertiary", "--nimbus-text-tertiary", "#6B6B6B"),
            ColorToken::new("Disabled", "--nimbus-text-disabled", "#4A4A4A"),
        ],
    },
    ColorGroup {
        title: "Borders",
        description: "Border colors define boundaries and separation between elements.",
        colors: &[
            ColorToken::new("Border", "--nimbus-border", "#2E2E2E"),
            ColorToken::new("Border Subtle", "--nimbus-border-subtle", "#1F1F1F"),
        ],
    },
    ColorGroup {
        title: "Status",
        description: "Semantic colors communicate meaning and state.",
        colors: &[
            ColorToken::new("Success", "--nimbus-success", "#00A69C"),
            ColorToken::new("Warning", "--nimbus-warning", "#F5A623").with_dark_text(),
            ColorToken::new("Error", "--nimbus-error", "#E53935"),
            ColorToken::new("Info", "--nimbus-info", "#2196F3"),
        ],
    },
];

pub const COLOR_USAGE: &str = r#"/* Using CSS variables */
.button-primary {
  background-color: var(--nimbus-teal);
  color: var(--nimbus-black);
}

.button-primary:hover {
  background-color: var(--nimbus-teal-light);
}

/* Using Tailwind classes */
<button class="bg-nimbus-teal text-nimbus-black hover:bg-nimbus-teal-light">
  Click me
</button>"#;

pub struct TypeStep {
    pub name: &'static str,
    pub size: &'static str,
    pub line_height: &'static str,
    pub weight: &'static str,
    pub sample: &'static str,
}

pub const TYPE_SCALE: &[TypeStep] = &[
    TypeStep { name: "text-6xl", size: "3.75rem", line_height: "1", weight: "700", sample: "Display Large" },
    TypeStep { name: "text-5xl", size: "3rem", line_height: "1", weight: "700", sample: "Display Medium" },
    TypeStep { name: "text-4xl", size: "2.25rem", line_height: "1.1", weight: "700", sample: "Heading 1" },
    TypeStep { name: "text-3xl", size: "1.875rem", line_height: "1.2", weight: "600", sample: "Heading 2" },
    TypeStep { name: "text-2xl", size: "1.5rem", line_height: "1.25", weight: "600", sample: "Heading 3" },
    TypeStep { name: "text-xl", size: "1.25rem", line_height: "1.4", weight: "600", sample: "Heading 4" },
    TypeStep { name: "text-lg", size: "1.125rem", line_height: "1.5", weight: "400", sample: "Large Body" },
    TypeStep { name: "text-base", size: "1rem", line_height: "1.5", weight: "400", sample: "Body Text" },
    TypeStep { name: "text-sm", size: "0.875rem", line_height: "1.5", weight: "400", sample: "Small Text" },
    TypeStep { name: "text-xs", size: "0.75rem", line_height: "1.5", weight: "500", sample: "Caption" },
];

/// (name, weight, variable)
pub const FONT_WEIGHTS: &[(&str, &str, &str)] = &[
    ("Normal", "400", "--font-normal"),
    ("Medium", "500", "--font-medium"),
    ("Semibold", "600", "--font-semibold"),
    ("Bold", "700", "--font-bold"),
];

/// (name, value, usage)
pub const LINE_HEIGHTS: &[(&str, &str, &str)] = &[
    ("Tight", "1.25", "Headings, display text"),
    ("Snug", "1.375", "Subheadings"),
    ("Normal", "1.5", "Body text (default)"),
    ("Relaxed", "1.625", "Long-form content"),
    ("Loose", "2", "Extra spacing"),
];

pub const TYPOGRAPHY_USAGE: &str = r#"/* Typography CSS Variables */
body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: var(--leading-normal);
}

h1 {
  font-size: var(--text-4xl);
  font-weight: var(--font-bold);
  letter-spacing: var(--tracking-tight);
}

code {
  font-family: var(--font-mono);
}"#;

/// (token, rem value, pixels)
pub const SPACING_SCALE: &[(&str, &str, u32)] = &[
    ("0", "0", 0),
    ("px", "1px", 1),
    ("0.5", "0.125rem", 2),
    ("1", "0.25rem", 4),
    ("1.5", "0.375rem", 6),
    ("2", "0.5rem", 8),
    ("2.5", "0.625rem", 10),
    ("3", "0.75rem", 12),
    ("4", "1rem", 16),
    ("5", "1.25rem", 20),
    ("6", "1.5rem", 24),
    ("8", "2rem", 32),
    ("10", "2.5rem", 40),
    ("12", "3rem", 48),
    ("16", "4rem", 64),
    ("20", "5rem", 80),
    ("24", "6rem", 96),
];

/// (name, value, utility class)
pub const RADIUS_SCALE: &[(&str, &str, &str)] = &[
    ("none", "0", "rounded-none"),
    ("sm", "4px", "rounded-sm"),
    ("md", "8px", "rounded-md"),
    ("lg", "12px", "rounded-lg"),
    ("xl", "16px", "rounded-xl"),
    ("2xl", "24px", "rounded-2xl"),
    ("3xl", "32px", "rounded-3xl"),
    ("full", "9999px", "rounded-full"),
];

pub const SPACING_USAGE: &str = r#"/* Spacing with CSS variables */
.card {
  padding: var(--space-6);       /* 24px */
  margin-bottom: var(--space-4); /* 16px */
  gap: var(--space-3);           /* 12px */
}

/* Border radius */
.button {
  border-radius: var(--radius-xl); /* 16px */
}

/* Tailwind usage */
<div class="p-6 mb-4 gap-3 rounded-xl">
  Content with consistent spacing
</div>"#;

/// (name, variable, box-shadow, usage)
pub const SHADOWS: &[(&str, &str, &str, &str)] = &[
    ("none", "--shadow-none", "none", "Base state, flat elements"),
    ("sm", "--shadow-sm", "0 1px 2px 0 rgba(0, 0, 0, 0.3)", "Subtle depth, small elements"),
    ("md", "--shadow-md", "0 4px 6px -1px rgba(0, 0, 0, 0.4)", "Cards, dropdowns"),
    ("lg", "--shadow-lg", "0 10px 15px -3px rgba(0, 0, 0, 0.4)", "Modals, popovers"),
    ("xl", "--shadow-xl", "0 20px 25px -5px rgba(0, 0, 0, 0.4)", "High-elevation elements"),
    ("2xl", "--shadow-2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.5)", "Maximum elevation"),
];

/// (name, variable, box-shadow)
pub const GLOWS: &[(&str, &str, &str)] = &[
    ("Teal Glow", "--glow-teal", "0 0 20px rgba(0, 166, 156, 0.3)"),
    ("Orange Glow", "--glow-orange", "0 0 20px rgba(245, 166, 35, 0.3)"),
];

/// (layer, z-index, usage)
pub const Z_INDEX_SCALE: &[(&str, u32, &str)] = &[
    ("dropdown", 100, "Dropdowns, selects"),
    ("sticky", 200, "Sticky headers"),
    ("fixed", 300, "Fixed navigation"),
    ("modal-backdrop", 400, "Modal overlay"),
    ("modal", 500, "Modal content"),
    ("popover", 600, "Popovers, tooltips"),
    ("tooltip", 700, "Tooltips (highest)"),
];

pub const ELEVATION_USAGE: &str = r#"/* Shadow usage */
.card {
  box-shadow: var(--shadow-md);
}

.card:hover {
  box-shadow: var(--shadow-lg);
}

/* Glow effects for interactive elements */
.button-primary:focus {
  box-shadow: var(--glow-teal);
}

/* Z-index layering */
.dropdown {
  z-index: var(--z-dropdown);
}"#;

pub struct LayoutPattern {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub max_width: &'static str,
}

pub const LAYOUT_PATTERNS: &[LayoutPattern] = &[
    LayoutPattern {
        name: "Single Column",
        description: "Best for focused content like forms, articles, or step-by-step flows.",
        usage: "Onboarding, checkout, long-form content",
        max_width: "640px",
    },
    LayoutPattern {
        name: "Two Column",
        description: "Primary content with supporting sidebar. Great for dashboards.",
        usage: "Dashboard, settings, documentation",
        max_width: "1200px",
    },
    LayoutPattern {
        name: "Card Grid",
        description: "Equal-weight items displayed in a responsive grid.",
        usage: "Product listings, feature cards, team members",
        max_width: "1400px",
    },
    LayoutPattern {
        name: "Split Screen",
        description: "50/50 layout for landing pages or authentication.",
        usage: "Login, signup, landing hero sections",
        max_width: "Full width",
    },
];

/// (title, filename, source)
pub const LAYOUT_SAMPLES: &[(&str, &str, &str)] = &[
    (
        "Single column",
        "single_column.rs",
        r#"view! {
  <main class="max-w-2xl mx-auto px-6 py-12">
    <header class="mb-8">
      <h1 class="text-3xl font-bold">"Page Title"</h1>
      <p class="text-nimbus-text-secondary mt-2">"Page description"</p>
    </header>
    <section class="space-y-6">{children()}</section>
  </main>
}"#,
    ),
    (
        "Two column with sidebar",
        "two_column.rs",
        r#"view! {
  <div class="flex min-h-screen">
    <aside class="w-64 border-r border-nimbus-border p-6">
      <nav class="space-y-2">{nav_items}</nav>
    </aside>
    <main class="flex-1 p-8">
      <div class="max-w-4xl">{children()}</div>
    </main>
  </div>
}"#,
    ),
    (
        "Responsive card grid",
        "card_grid.rs",
        r#"view! {
  <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
    {items
      .into_iter()
      .map(|item| view! {
        <Card>
          <CardTitle>{item.title}</CardTitle>
          <CardDescription>{item.summary}</CardDescription>
        </Card>
      })
      .collect_view()}
  </div>
}"#,
    ),
];

/// (type, subject, preview, timing)
pub const EMAIL_TEMPLATES: &[(&str, &str, &str, &str)] = &[
    (
        "Welcome",
        "Welcome to Nimbus Healthcare",
        "Your healthcare journey starts here. We're excited to have you...",
        "Immediately after signup",
    ),
    (
        "Order Confirmation",
        "Your Nimbus order has been received",
        "Order #12345 confirmed. We'll process your medication...",
        "After payment processed",
    ),
    (
        "Shipment Update",
        "Your medication is on the way",
        "Great news! Your order has shipped and will arrive...",
        "When shipped",
    ),
    (
        "Refill Reminder",
        "Time to complete your refill request",
        "Your next dose is coming up. Complete your refill intake...",
        "7 days before refill due",
    ),
    (
        "Check-in",
        "Month 1 check-in \u{2013} How are you feeling?",
        "It's been 30 days since starting your program. Let us know...",
        "30 days after start",
    ),
];

pub const BUTTON_PROPS: &[PropDefinition] = &[
    PropDefinition::new("variant", "ButtonVariant", "Visual style of the button").default_value("Primary"),
    PropDefinition::new("size", "ButtonSize", "Size of the button").default_value("Md"),
    PropDefinition::new("loading", "Signal<bool>", "Shows a spinner and disables the button")
        .default_value("false"),
    PropDefinition::new("full_width", "bool", "Makes the button fill its container").default_value("false"),
    PropDefinition::new("disabled", "Signal<bool>", "Disables the button").default_value("false"),
    PropDefinition::new("on_click", "Callback<()>", "Called when the button is pressed"),
    PropDefinition::new("children", "Children", "Button label").required(),
];

pub const BADGE_PROPS: &[PropDefinition] = &[
    PropDefinition::new("variant", "BadgeVariant", "Color variant").default_value("Default"),
    PropDefinition::new("size", "BadgeSize", "Badge size").default_value("Md"),
    PropDefinition::new("dot", "bool", "Show a status dot before the text").default_value("false"),
    PropDefinition::new("children", "Children", "Badge content").required(),
];

pub const NOTIFICATION_BADGE_PROPS: &[PropDefinition] = &[
    PropDefinition::new("count", "Signal<u32>", "Number to display; hidden at zero").required(),
    PropDefinition::new("max", "u32", "Largest number shown before \"+\"").default_value("99"),
];

pub const CARD_PROPS: &[PropDefinition] = &[
    PropDefinition::new("variant", "CardVariant", "Visual style").default_value("Default"),
    PropDefinition::new("padding", "CardPadding", "Internal padding size").default_value("Md"),
    PropDefinition::new("class", "String", "Additional CSS classes"),
    PropDefinition::new("children", "Children", "Card content").required(),
];

pub const INPUT_PROPS: &[PropDefinition] = &[
    PropDefinition::new("value", "RwSignal<String>", "Bound text value").required(),
    PropDefinition::new("label", "String", "Label text above the input"),
    PropDefinition::new("error", "Signal<Option<String>>", "Error message; replaces the hint"),
    PropDefinition::new("hint", "String", "Helper text below the input"),
    PropDefinition::new("size", "InputSize", "Size of the input").default_value("Md"),
    PropDefinition::new("placeholder", "String", "Placeholder text"),
];

pub const MODAL_PROPS: &[PropDefinition] = &[
    PropDefinition::new("open", "RwSignal<bool>", "Controls visibility").required(),
    PropDefinition::new("title", "String", "Title in the header"),
    PropDefinition::new("description", "String", "Text below the title"),
    PropDefinition::new("size", "ModalSize", "Width of the dialog").default_value("Md"),
    PropDefinition::new("close_on_overlay", "bool", "Close when the backdrop is clicked").default_value("true"),
    PropDefinition::new("close_on_escape", "bool", "Close on Escape").default_value("true"),
    PropDefinition::new("footer", "ViewFn", "Content for the footer"),
    PropDefinition::new("children", "ChildrenFn", "Dialog body").required(),
];

pub const TABS_TRIGGER_PROPS: &[PropDefinition] = &[
    PropDefinition::new("tabs", "TabsHandle", "The tab group this trigger selects in").required(),
    PropDefinition::new("value", "String", "Panel key selected by this trigger").required(),
    PropDefinition::new("disabled", "bool", "Disables the trigger").default_value("false"),
    PropDefinition::new("variant", "TabsVariant", "Visual style").default_value("Default"),
    PropDefinition::new("children", "Children", "Trigger label").required(),
];
