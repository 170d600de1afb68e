//! Category service
//!
//! Provides business logic for category management. Deletion goes through
//! [`Storage::remove_category`], which refuses while transactions still
//! reference the category.

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryIcon, CategoryId};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn add(&mut self, name: &str, icon: CategoryIcon) -> TrackerResult<Category> {
        let category = Category::new(name.trim(), icon);

        category
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        self.ensure_unique_name(&category)?;

        self.storage.categories.push(category.clone());

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        );

        Ok(category)
    }

    /// Replace a category by ID
    ///
    /// An unknown ID is ignored and yields `Ok(None)`.
    pub fn update(&mut self, mut category: Category) -> TrackerResult<Option<Category>> {
        category.name = category.name.trim().to_string();
        category
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        self.ensure_unique_name(&category)?;

        let Some(before) = self.storage.categories.replace(category.clone()) else {
            return Ok(None);
        };

        let mut changes = Vec::new();
        if before.name != category.name {
            changes.push(format!("name: {} -> {}", before.name, category.name));
        }
        if before.icon_name != category.icon_name {
            changes.push(format!(
                "icon: {} -> {}",
                before.icon_name.name(),
                category.icon_name.name()
            ));
        }

        if !changes.is_empty() {
            self.storage.log_update(
                EntityType::Category,
                category.id.to_string(),
                Some(category.name.clone()),
                &before,
                &category,
                Some(changes.join(", ")),
            );
        }

        Ok(Some(category))
    }

    /// Delete a category that no transaction references
    pub fn delete(&mut self, id: CategoryId) -> TrackerResult<Option<Category>> {
        let Some(removed) = self.storage.remove_category(id)? else {
            return Ok(None);
        };

        self.storage.log_delete(
            EntityType::Category,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        );

        Ok(Some(removed))
    }

    /// Look up a category by name (case-insensitive) or ID
    pub fn find(&self, identifier: &str) -> TrackerResult<&Category> {
        self.storage
            .categories
            .find(identifier)
            .ok_or_else(|| TrackerError::category_not_found(identifier))
    }

    /// All categories in insertion order
    pub fn list(&self) -> &[Category] {
        self.storage.categories.all()
    }

    /// Number of transactions filed under a category
    pub fn usage(&self, id: CategoryId) -> usize {
        self.storage.transactions.count_for_category(id)
    }

    fn ensure_unique_name(&self, category: &Category) -> TrackerResult<()> {
        match self.storage.categories.get_by_name(&category.name) {
            Some(existing) if existing.id != category.id => Err(TrackerError::Validation(
                format!("A category named '{}' already exists", existing.name),
            )),
            _ => Ok(()),
        }
    }
}
