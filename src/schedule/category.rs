use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_CATEGORY_DEPTH: usize = 16;

/// Categorises entries and transactions for budgeting and reporting.
/// References from entries are weak; a category may be renamed or deleted
/// without touching the entries pointing at it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Resolves a category id to a display name. Presentation layers depend on
/// this capability instead of embedding names in entries.
pub trait CategoryLookup {
    fn resolve_name(&self, id: Uuid) -> Option<String>;
}

/// In-memory category set with hierarchical full-name resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryBook {
    categories: Vec<Category>,
}

impl CategoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        id
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn rename(&mut self, id: Uuid, name: impl Into<String>) -> bool {
        match self.categories.iter_mut().find(|category| category.id == id) {
            Some(category) => {
                category.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Removes a category. Children keep their dangling parent reference and
    /// resolve from themselves upward, matching the weak-reference model.
    pub fn remove(&mut self, id: Uuid) -> Option<Category> {
        let index = self.categories.iter().position(|category| category.id == id)?;
        Some(self.categories.remove(index))
    }
}

impl CategoryLookup for CategoryBook {
    /// Walks the parent chain to build the full name, e.g. "Home: Rent".
    /// Depth is capped so a cyclic parent link cannot loop forever.
    fn resolve_name(&self, id: Uuid) -> Option<String> {
        let mut current = self.category(id)?;
        let mut segments = vec![current.name.clone()];
        while let Some(parent_id) = current.parent_id {
            if segments.len() >= MAX_CATEGORY_DEPTH {
                break;
            }
            match self.category(parent_id) {
                Some(parent) => {
                    segments.push(parent.name.clone());
                    current = parent;
                }
                None => break,
            }
        }
        segments.reverse();
        Some(segments.join(": "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_full_name() {
        let mut book = CategoryBook::new();
        let home = book.add(Category::new("Home"));
        let rent = book.add(Category::new("Rent").with_parent(home));

        assert_eq!(book.resolve_name(rent).as_deref(), Some("Home: Rent"));
        assert_eq!(book.resolve_name(home).as_deref(), Some("Home"));
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let book = CategoryBook::new();
        assert_eq!(book.resolve_name(Uuid::new_v4()), None);
    }

    #[test]
    fn deleted_parent_truncates_the_chain() {
        let mut book = CategoryBook::new();
        let home = book.add(Category::new("Home"));
        let rent = book.add(Category::new("Rent").with_parent(home));
        book.remove(home);

        assert_eq!(book.resolve_name(rent).as_deref(), Some("Rent"));
    }

    #[test]
    fn cyclic_parents_terminate() {
        let mut book = CategoryBook::new();
        let a = Category::new("A");
        let a_id = a.id;
        let b = Category::new("B").with_parent(a_id);
        let b_id = b.id;
        let mut a = a;
        a.parent_id = Some(b_id);
        book.add(a);
        book.add(b);

        let name = book.resolve_name(b_id).unwrap();
        assert!(name.contains('B'));
    }
}
