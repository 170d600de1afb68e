//! In-memory category repository
//!
//! Categories keep insertion order; new categories are appended.

use crate::models::{Category, CategoryId};

/// Repository for the session's categories
#[derive(Debug, Clone, Default)]
pub struct CategoryRepository {
    items: Vec<Category>,
}

impl CategoryRepository {
    pub fn new(items: Vec<Category>) -> Self {
        Self { items }
    }

    /// All categories in insertion order
    pub fn all(&self) -> &[Category] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.items.iter().find(|c| c.id == id)
    }

    /// Get the first category with this name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Option<&Category> {
        self.items.iter().find(|c| c.has_name(name))
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> Option<&Category> {
        self.get_by_name(identifier)
            .or_else(|| self.items.iter().find(|c| c.id.matches(identifier)))
    }

    /// Display name for a category ID, if it still exists
    pub fn name_of(&self, id: CategoryId) -> Option<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    pub fn push(&mut self, category: Category) {
        self.items.push(category);
    }

    /// Replace the category with the same ID, returning the previous version
    ///
    /// Unknown IDs are ignored.
    pub fn replace(&mut self, category: Category) -> Option<Category> {
        let slot = self.items.iter_mut().find(|c| c.id == category.id)?;
        Some(std::mem::replace(slot, category))
    }

    /// Remove a category without any integrity check
    ///
    /// Callers go through [`super::Storage::remove_category`], which refuses
    /// to orphan transactions.
    pub(super) fn remove(&mut self, id: CategoryId) -> Option<Category> {
        let index = self.items.iter().position(|c| c.id == id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryIcon;

    fn repo() -> CategoryRepository {
        CategoryRepository::new(vec![
            Category::new("Groceries", CategoryIcon::ShoppingCart),
            Category::new("Dining Out", CategoryIcon::Utensils),
        ])
    }

    #[test]
    fn test_push_appends() {
        let mut repo = repo();
        repo.push(Category::new("Travel", CategoryIcon::Plane));
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.all()[2].name, "Travel");
    }

    #[test]
    fn test_find_by_name_or_id() {
        let repo = repo();
        let dining = repo.all()[1].clone();

        assert_eq!(repo.find("dining out").map(|c| c.id), Some(dining.id));
        assert_eq!(repo.find(&dining.id.to_string()).map(|c| c.id), Some(dining.id));
        assert!(repo.find("Utilities").is_none());
    }

    #[test]
    fn test_replace_unknown_is_ignored() {
        let mut repo = repo();
        let stranger = Category::new("Ghost", CategoryIcon::HelpCircle);
        assert!(repo.replace(stranger).is_none());
        assert_eq!(repo.len(), 2);
        assert!(repo.get_by_name("Ghost").is_none());
    }

    #[test]
    fn test_replace_known() {
        let mut repo = repo();
        let mut groceries = repo.all()[0].clone();
        groceries.name = "Food".into();

        let before = repo.replace(groceries.clone()).unwrap();
        assert_eq!(before.name, "Groceries");
        assert_eq!(repo.get(groceries.id).unwrap().name, "Food");
    }
}
