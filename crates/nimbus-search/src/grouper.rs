//! Partition matched records into category buckets for display.

use serde::Serialize;

use crate::record::SearchRecord;

/// Records sharing one category, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup<'a> {
    /// Category label.
    pub category: &'a str,

    /// Records in this category.
    pub records: Vec<&'a SearchRecord>,
}

/// Ordered mapping from category to records.
///
/// Categories appear in the order they are first encountered in the input,
/// never alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedResults<'a> {
    groups: Vec<ResultGroup<'a>>,
}

/// Group `records` by category, preserving first-seen category order and
/// within-category order.
pub fn group_by_category<'a, I>(records: I) -> GroupedResults<'a>
where
    I: IntoIterator<Item = &'a SearchRecord>,
{
    let mut groups: Vec<ResultGroup<'a>> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|g| g.category == record.category) {
            Some(group) => group.records.push(record),
            None => groups.push(ResultGroup {
                category: &record.category,
                records: vec![record],
            }),
        }
    }

    GroupedResults { groups }
}

impl<'a> GroupedResults<'a> {
    /// Groups in display order.
    pub fn groups(&self) -> &[ResultGroup<'a>] {
        &self.groups
    }

    /// Category labels in display order.
    pub fn categories(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|g| g.category)
    }

    /// Records for `category`, if any matched.
    pub fn get(&self, category: &str) -> Option<&[&'a SearchRecord]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.records.as_slice())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total records across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    /// Records in display order: group by group.
    pub fn flatten(&self) -> Vec<&'a SearchRecord> {
        self.groups
            .iter()
            .flat_map(|g| g.records.iter().copied())
            .collect()
    }
}

impl<'a> IntoIterator for GroupedResults<'a> {
    type Item = ResultGroup<'a>;
    type IntoIter = std::vec::IntoIter<ResultGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, category: &str) -> SearchRecord {
        SearchRecord::new(title, "", category, format!("/{title}"))
    }

    #[test]
    fn test_first_seen_category_order() {
        let records = vec![
            record("Spacing", "Design"),
            record("Button", "Components"),
            record("Colors", "Design"),
            record("Naming", "Brand"),
        ];

        let grouped = group_by_category(&records);

        assert_eq!(
            grouped.categories().collect::<Vec<_>>(),
            vec!["Design", "Components", "Brand"]
        );
        let design: Vec<_> = grouped
            .get("Design")
            .unwrap()
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(design, vec!["Spacing", "Colors"]);
        assert_eq!(grouped.total(), 4);
    }

    #[test]
    fn test_empty_input() {
        let grouped = group_by_category(std::iter::empty());
        assert!(grouped.is_empty());
        assert_eq!(grouped.len(), 0);
        assert_eq!(grouped.total(), 0);
        assert!(grouped.get("Design").is_none());
    }

    #[test]
    fn test_flatten_regroups_identically() {
        let records = vec![
            record("A", "X"),
            record("B", "Y"),
            record("C", "X"),
        ];
        let grouped = group_by_category(&records);
        let flat = grouped.flatten();

        let titles: Vec<_> = flat.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "B"]);
        assert_eq!(group_by_category(flat), grouped);
    }

    #[test]
    fn test_serializes_as_list_of_groups() {
        let records = vec![record("Button", "Components")];
        let json = serde_json::to_string(&group_by_category(&records)).unwrap();
        assert!(json.starts_with("[{\"category\":\"Components\""));
        assert!(json.contains("\"title\":\"Button\""));
    }
}
