//! The catalog of pages shipped with the Nimbus site.

use crate::record::SearchRecord;

/// Category labels, in the order the site navigation presents them.
pub const CATEGORIES: [&str; 4] = ["Brand", "Design", "Components", "Patterns"];

// (title, description, category, target, keywords)
type Entry = (&'static str, &'static str, &'static str, &'static str, &'static [&'static str]);

const ENTRIES: [Entry; 16] = [
    (
        "Foundations",
        "Core role, mission, vision, and brand pillars",
        "Brand",
        "/brand/foundations",
        &["mission", "vision", "pillars", "values", "brand"],
    ),
    (
        "Voice & Tone",
        "Verbal identity and communication principles",
        "Brand",
        "/brand/voice-tone",
        &["voice", "tone", "writing", "communication", "verbal"],
    ),
    (
        "Naming",
        "Naming conventions and guidelines",
        "Brand",
        "/brand/naming",
        &["naming", "conventions", "products", "features"],
    ),
    (
        "Messaging",
        "Messaging guardrails and do/don't examples",
        "Brand",
        "/brand/messaging",
        &["messaging", "copy", "content", "guardrails"],
    ),
    (
        "Colors",
        "Color palette and usage guidelines",
        "Design",
        "/design/colors",
        &["colors", "palette", "teal", "orange", "theme"],
    ),
    (
        "Typography",
        "Font families, sizes, and type scale",
        "Design",
        "/design/typography",
        &["typography", "fonts", "text", "headings", "inter"],
    ),
    (
        "Spacing",
        "Spacing scale and layout principles",
        "Design",
        "/design/spacing",
        &["spacing", "margins", "padding", "layout", "grid"],
    ),
    (
        "Elevation",
        "Shadow system and depth hierarchy",
        "Design",
        "/design/elevation",
        &["elevation", "shadows", "depth", "layers"],
    ),
    (
        "Button",
        "Interactive button components with variants",
        "Components",
        "/components/buttons",
        &["button", "click", "action", "submit", "cta"],
    ),
    (
        "Card",
        "Container component for grouping content",
        "Components",
        "/components/cards",
        &["card", "container", "panel", "box"],
    ),
    (
        "Forms",
        "Input fields and form elements",
        "Components",
        "/components/forms",
        &["input", "form", "text", "field", "textarea"],
    ),
    (
        "Navigation",
        "Tabs and navigation components",
        "Components",
        "/components/navigation",
        &["tabs", "navigation", "menu", "nav"],
    ),
    (
        "Modal",
        "Dialog and overlay components",
        "Components",
        "/components/modals",
        &["modal", "dialog", "popup", "overlay"],
    ),
    (
        "Badge",
        "Status indicators and labels",
        "Components",
        "/components/badges",
        &["badge", "tag", "label", "status", "indicator"],
    ),
    (
        "Layouts",
        "Common layout patterns and structures",
        "Patterns",
        "/patterns/layouts",
        &["layout", "grid", "structure", "page"],
    ),
    (
        "Messaging Patterns",
        "Communication patterns in the UI",
        "Patterns",
        "/patterns/messaging",
        &["messaging", "feedback", "notifications", "alerts"],
    ),
];

/// Build the site's records in navigation order.
pub fn builtin_records() -> Vec<SearchRecord> {
    ENTRIES
        .iter()
        .map(|&(title, description, category, target, keywords)| {
            SearchRecord::new(title, description, category, target)
                .with_keywords(keywords.iter().copied())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories_follow_navigation_order() {
        let records = builtin_records();
        let mut seen: Vec<&str> = Vec::new();
        for record in &records {
            if !seen.contains(&record.category.as_str()) {
                seen.push(&record.category);
            }
        }
        assert_eq!(seen, CATEGORIES);
    }

    #[test]
    fn test_builtin_targets_are_absolute() {
        assert!(builtin_records().iter().all(|r| r.target.starts_with('/')));
    }
}
