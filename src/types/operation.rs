//! Operation names and their per-query grouping

use std::collections::{BTreeMap, BTreeSet};

use super::Category;

/// Registry entry: one operation listed under a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationEntry {
    pub category: Category,
    pub name: &'static str,
    /// Lives in a peripheral namespace, shown only for extended listings
    pub extended: bool,
}

impl OperationEntry {
    pub const fn core(category: Category, name: &'static str) -> Self {
        Self {
            category,
            name,
            extended: false,
        }
    }

    pub const fn extended(category: Category, name: &'static str) -> Self {
        Self {
            category,
            name,
            extended: true,
        }
    }
}

/// Operation names grouped by category.
///
/// Categories iterate in priority order; names within a category are
/// unique and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroup {
    groups: BTreeMap<Category, BTreeSet<String>>,
}

impl CategoryGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; returns false if it was already present in the category
    pub fn insert(&mut self, category: Category, name: impl Into<String>) -> bool {
        self.groups.entry(category).or_default().insert(name.into())
    }

    /// Iterate non-empty categories in priority order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &BTreeSet<String>)> {
        self.groups
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(category, names)| (*category, names))
    }

    pub fn names(&self, category: Category) -> Option<&BTreeSet<String>> {
        self.groups.get(&category).filter(|names| !names.is_empty())
    }

    /// Total number of names across all categories
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Into<String>> FromIterator<(Category, S)> for CategoryGroup {
    fn from_iter<I: IntoIterator<Item = (Category, S)>>(iter: I) -> Self {
        let mut group = CategoryGroup::new();
        group.extend(iter);
        group
    }
}

impl<S: Into<String>> Extend<(Category, S)> for CategoryGroup {
    fn extend<I: IntoIterator<Item = (Category, S)>>(&mut self, iter: I) {
        for (category, name) in iter {
            self.insert(category, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_and_sorted() {
        let group: CategoryGroup = [
            (Category::Macros, "@show"),
            (Category::Macros, "@evalpoly"),
            (Category::Macros, "@show"),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = group
            .names(Category::Macros)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(names, vec!["@evalpoly", "@show"]);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_iterates_in_priority_order() {
        let group: CategoryGroup = [
            (Category::FileIo, "open"),
            (Category::GeneralFunctions, "abs"),
            (Category::Macros, "@show"),
        ]
        .into_iter()
        .collect();

        let order: Vec<Category> = group.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![Category::Macros, Category::GeneralFunctions, Category::FileIo]
        );
    }

    #[test]
    fn test_empty_group() {
        let group = CategoryGroup::new();
        assert!(group.is_empty());
        assert_eq!(group.iter().count(), 0);
    }
}
