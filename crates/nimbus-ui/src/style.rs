//! Style lookup tables for the component library.
//!
//! Every visual option is a closed enum mapped to its utility classes by an
//! exhaustive `match`, so an unknown variant is a compile error rather than a
//! silently unstyled element.

/// Join non-empty class fragments with single spaces.
pub fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Button colour treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
    ];

    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-nimbus-teal text-nimbus-black font-semibold hover:bg-nimbus-teal-light \
                 focus:ring-2 focus:ring-nimbus-teal disabled:bg-nimbus-teal/50 disabled:cursor-not-allowed"
            }
            Self::Secondary => {
                "bg-nimbus-orange text-nimbus-black font-semibold hover:bg-nimbus-orange-light \
                 focus:ring-2 focus:ring-nimbus-orange disabled:bg-nimbus-orange/50 disabled:cursor-not-allowed"
            }
            Self::Outline => {
                "bg-transparent text-nimbus-text-primary font-medium border border-nimbus-border \
                 hover:bg-nimbus-surface-hover focus:ring-2 focus:ring-nimbus-teal \
                 disabled:text-nimbus-text-disabled disabled:cursor-not-allowed"
            }
            Self::Ghost => {
                "bg-transparent text-nimbus-text-secondary font-medium hover:bg-nimbus-surface-hover \
                 hover:text-nimbus-text-primary focus:ring-2 focus:ring-nimbus-teal \
                 disabled:text-nimbus-text-disabled disabled:cursor-not-allowed"
            }
            Self::Danger => {
                "bg-nimbus-error text-white font-semibold hover:bg-red-600 \
                 focus:ring-2 focus:ring-nimbus-error disabled:bg-nimbus-error/50 disabled:cursor-not-allowed"
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Outline => "Outline",
            Self::Ghost => "Ghost",
            Self::Danger => "Danger",
        }
    }
}

/// Button height and padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-4 text-sm gap-1.5 rounded-full",
            Self::Md => "h-11 px-6 text-base gap-2 rounded-full",
            Self::Lg => "h-13 px-8 text-lg gap-2.5 rounded-full",
        }
    }

    /// Spinner diameter in pixels while loading.
    pub const fn spinner_px(self) -> u8 {
        match self {
            Self::Sm => 14,
            Self::Md => 16,
            Self::Lg => 20,
        }
    }
}

/// Complete style descriptor for a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
}

impl ButtonStyle {
    pub fn class(&self) -> String {
        classes(&[
            "inline-flex items-center justify-center transition-all duration-200 ease-out",
            self.variant.class(),
            self.size.class(),
            if self.full_width { "w-full" } else { "" },
        ])
    }
}

/// Badge colour treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Error,
    Info,
    Teal,
    Orange,
}

impl BadgeVariant {
    pub const ALL: [Self; 7] = [
        Self::Default,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
        Self::Teal,
        Self::Orange,
    ];

    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-nimbus-surface-elevated text-nimbus-text-secondary border-nimbus-border",
            Self::Success => "bg-nimbus-success/10 text-nimbus-success border-nimbus-success/20",
            Self::Warning => "bg-nimbus-warning/10 text-nimbus-warning border-nimbus-warning/20",
            Self::Error => "bg-nimbus-error/10 text-nimbus-error border-nimbus-error/20",
            Self::Info => "bg-nimbus-info/10 text-nimbus-info border-nimbus-info/20",
            Self::Teal => "bg-nimbus-teal/10 text-nimbus-teal border-nimbus-teal/20",
            Self::Orange => "bg-nimbus-orange/10 text-nimbus-orange border-nimbus-orange/20",
        }
    }

    /// Colour of the leading status dot.
    pub const fn dot_class(self) -> &'static str {
        match self {
            Self::Default => "bg-nimbus-text-tertiary",
            Self::Success => "bg-nimbus-success",
            Self::Warning => "bg-nimbus-warning",
            Self::Error => "bg-nimbus-error",
            Self::Info => "bg-nimbus-info",
            Self::Teal => "bg-nimbus-teal",
            Self::Orange => "bg-nimbus-orange",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
            Self::Teal => "Teal",
            Self::Orange => "Orange",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "text-xs px-2 py-0.5",
            Self::Md => "text-xs px-2.5 py-1",
            Self::Lg => "text-sm px-3 py-1.5",
        }
    }
}

/// Predefined workflow states rendered as badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Pending,
    Completed,
    Cancelled,
    New,
}

impl Status {
    pub const ALL: [Self; 5] = [
        Self::Active,
        Self::Pending,
        Self::Completed,
        Self::Cancelled,
        Self::New,
    ];

    /// Badge variant, label and whether a dot is shown.
    pub const fn badge(self) -> (BadgeVariant, &'static str, bool) {
        match self {
            Self::Active => (BadgeVariant::Success, "Active", true),
            Self::Pending => (BadgeVariant::Warning, "Pending", true),
            Self::Completed => (BadgeVariant::Teal, "Completed", true),
            Self::Cancelled => (BadgeVariant::Error, "Cancelled", true),
            Self::New => (BadgeVariant::Orange, "New", false),
        }
    }
}

/// Text for a notification count badge; `None` hides the badge.
pub fn notification_label(count: u32, max: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > max => Some(format!("{max}+")),
        n => Some(n.to_string()),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Outlined,
    Interactive,
}

impl CardVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-nimbus-surface border border-nimbus-border",
            Self::Elevated => "bg-nimbus-surface-elevated border border-nimbus-border shadow-lg",
            Self::Outlined => "bg-transparent border border-nimbus-border",
            Self::Interactive => {
                "bg-nimbus-surface border border-nimbus-border hover:border-nimbus-teal/50 \
                 hover:bg-nimbus-surface-hover cursor-pointer transition-all duration-200"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardPadding {
    pub const fn class(self) -> &'static str {
        match self {
            Self::None => "p-0",
            Self::Sm => "p-4",
            Self::Md => "p-6",
            Self::Lg => "p-8",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "h-9 text-sm px-3",
            Self::Md => "h-11 text-base px-4",
            Self::Lg => "h-13 text-lg px-5",
        }
    }
}

/// Input border treatment depending on whether an error is shown.
pub const fn input_state_class(has_error: bool) -> &'static str {
    if has_error {
        "border-nimbus-error focus:ring-nimbus-error"
    } else {
        "border-nimbus-border focus:border-nimbus-teal focus:ring-nimbus-teal"
    }
}

/// Derive an element id from a field label: lower-case, whitespace runs
/// collapsed to `-`.
pub fn input_id(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl ModalSize {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "max-w-sm",
            Self::Md => "max-w-md",
            Self::Lg => "max-w-lg",
            Self::Xl => "max-w-xl",
            Self::Full => "max-w-4xl",
        }
    }
}

/// Tab list and trigger treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TabsVariant {
    #[default]
    Default,
    Pills,
    Underline,
}

impl TabsVariant {
    pub const fn list_class(self) -> &'static str {
        match self {
            Self::Default => "bg-nimbus-surface rounded-full p-1 border border-nimbus-border",
            Self::Pills => "gap-2",
            Self::Underline => "border-b border-nimbus-border",
        }
    }

    pub const fn trigger_class(self, active: bool) -> &'static str {
        match (self, active) {
            (Self::Default, true) => {
                "flex-1 px-4 py-2 text-sm font-medium rounded-full transition-all duration-200 \
                 bg-nimbus-teal text-nimbus-black"
            }
            (Self::Default, false) => {
                "flex-1 px-4 py-2 text-sm font-medium rounded-full transition-all duration-200 \
                 text-nimbus-text-secondary hover:text-nimbus-text-primary hover:bg-nimbus-surface-hover"
            }
            (Self::Pills, true) => {
                "px-4 py-2 text-sm font-medium rounded-full transition-all duration-200 border \
                 bg-nimbus-teal/10 text-nimbus-teal border-nimbus-teal/20"
            }
            (Self::Pills, false) => {
                "px-4 py-2 text-sm font-medium rounded-full transition-all duration-200 border \
                 text-nimbus-text-secondary border-transparent hover:text-nimbus-text-primary"
            }
            (Self::Underline, true) => {
                "px-4 py-3 text-sm font-medium transition-all duration-200 border-b-2 -mb-px \
                 text-nimbus-teal border-nimbus-teal"
            }
            (Self::Underline, false) => {
                "px-4 py-3 text-sm font-medium transition-all duration-200 border-b-2 -mb-px \
                 text-nimbus-text-secondary border-transparent hover:border-nimbus-text-tertiary"
            }
        }
    }
}

/// Backdrop behind a component preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PreviewBackground {
    #[default]
    Dark,
    Light,
    Grid,
}

impl PreviewBackground {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Dark => "bg-nimbus-black",
            Self::Light => "bg-white",
            Self::Grid => {
                "bg-nimbus-black bg-[linear-gradient(to_right,#1a1a1a_1px,transparent_1px),\
                 linear-gradient(to_bottom,#1a1a1a_1px,transparent_1px)] bg-[size:24px_24px]"
            }
        }
    }
}

/// Icon glyph shown next to a palette result or navigation section.
pub fn category_glyph(category: &str) -> &'static str {
    match category {
        "Brand" => "\u{2665}",
        "Design" => "\u{25D0}",
        "Components" => "\u{25A3}",
        "Patterns" => "\u{25A6}",
        _ => "\u{2022}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_skips_empty_fragments() {
        assert_eq!(classes(&["a b", "", "  ", " c "]), "a b c");
        assert_eq!(classes(&[]), "");
    }

    #[test]
    fn test_button_style_composition() {
        let style = ButtonStyle {
            variant: ButtonVariant::Danger,
            size: ButtonSize::Sm,
            full_width: true,
        };
        let class = style.class();
        assert!(class.contains("bg-nimbus-error"));
        assert!(class.contains("h-8"));
        assert!(class.ends_with("w-full"));

        let default = ButtonStyle::default().class();
        assert!(default.contains("bg-nimbus-teal"));
        assert!(default.contains("h-11"));
        assert!(!default.contains("w-full"));
    }

    #[test]
    fn test_every_variant_has_distinct_classes() {
        let buttons: std::collections::HashSet<_> =
            ButtonVariant::ALL.iter().map(|v| v.class()).collect();
        assert_eq!(buttons.len(), ButtonVariant::ALL.len());

        let badges: std::collections::HashSet<_> =
            BadgeVariant::ALL.iter().map(|v| v.class()).collect();
        assert_eq!(badges.len(), BadgeVariant::ALL.len());
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(Status::Active.badge(), (BadgeVariant::Success, "Active", true));
        assert_eq!(Status::New.badge(), (BadgeVariant::Orange, "New", false));
    }

    #[test]
    fn test_notification_label() {
        assert_eq!(notification_label(0, 99), None);
        assert_eq!(notification_label(7, 99), Some("7".to_string()));
        assert_eq!(notification_label(99, 99), Some("99".to_string()));
        assert_eq!(notification_label(120, 99), Some("99+".to_string()));
        assert_eq!(notification_label(10, 9), Some("9+".to_string()));
    }

    #[test]
    fn test_input_id() {
        assert_eq!(input_id("Email Address"), "email-address");
        assert_eq!(input_id("  Full \t Name "), "full-name");
        assert_eq!(input_id(""), "");
    }

    #[test]
    fn test_tab_trigger_class_depends_on_activity() {
        for variant in [TabsVariant::Default, TabsVariant::Pills, TabsVariant::Underline] {
            assert_ne!(variant.trigger_class(true), variant.trigger_class(false));
        }
        assert!(TabsVariant::Underline.list_class().contains("border-b"));
    }

    #[test]
    fn test_category_glyph_fallback() {
        assert_eq!(category_glyph("Unknown"), "\u{2022}");
        assert_ne!(category_glyph("Brand"), category_glyph("Design"));
    }

    #[test]
    fn test_preview_backgrounds() {
        assert_eq!(PreviewBackground::default().class(), "bg-nimbus-black");
        assert_eq!(PreviewBackground::Light.class(), "bg-white");
        let grid = PreviewBackground::Grid.class();
        assert!(grid.starts_with("bg-nimbus-black"));
        assert!(grid.contains("bg-[size:24px_24px]"));
        assert!(!grid.contains('\n'));
    }
}
