//! Navigation groups keyed by top-level source folder.

use std::collections::HashMap;

use serde::Serialize;

use super::page::Page;

/// The slice of a [`Page`] that navigation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub heading: String,
    pub group: String,
    pub output_path: String,
    pub slug: String,
}

impl From<&Page> for PageSummary {
    fn from(page: &Page) -> Self {
        Self {
            heading: page.heading.clone(),
            group: page.group.clone(),
            output_path: page.output_path.clone(),
            slug: page.slug.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: String,
    pub pages: Vec<PageSummary>,
}

/// Append-only index of pages by group, in order of first sighting.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    groups: Vec<Group>,
    positions: HashMap<String, usize>,
}

impl GroupIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// File `page` under its group, creating the group on first sight.
    pub fn add(&mut self, page: &Page) {
        let position = match self.positions.get(&page.group) {
            Some(position) => *position,
            None => {
                self.groups.push(Group {
                    name: page.group.clone(),
                    pages: Vec::new(),
                });
                let position = self.groups.len() - 1;
                self.positions.insert(page.group.clone(), position);
                position
            }
        };
        self.groups[position].pages.push(PageSummary::from(page));
    }

    /// All groups in insertion order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.positions.get(name).map(|position| &self.groups[*position])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of pages across all groups.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.groups.iter().map(|group| group.pages.len()).sum()
    }
}
