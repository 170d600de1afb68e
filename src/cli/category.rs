//! Category CLI commands

use clap::Subcommand;

use super::Session;
use crate::display::{format_category_details, format_category_list, format_icon_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryIcon, CategoryValidationError};
use crate::services::CategoryService;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Icon name (see `category icons`)
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New icon
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// Delete a category (refused while transactions use it)
    Delete {
        /// Category name or ID
        category: String,
    },

    /// List available icons
    Icons,
}

fn parse_icon(input: &str) -> TrackerResult<CategoryIcon> {
    input
        .parse()
        .map_err(|e: CategoryValidationError| TrackerError::Validation(e.to_string()))
}

/// Handle a category command
pub fn handle_category_command(session: &mut Session, cmd: CategoryCommands) -> TrackerResult<()> {
    match cmd {
        CategoryCommands::List => {
            let service = CategoryService::new(&mut session.storage);
            println!(
                "{}",
                format_category_list(service.list(), |c| service.usage(c.id))
            );
        }

        CategoryCommands::Add { name, icon } => {
            let icon = icon.as_deref().map(parse_icon).transpose()?.unwrap_or_default();
            let category = CategoryService::new(&mut session.storage).add(&name, icon)?;

            println!("Created category: {} {}", category.icon_name.glyph(), category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Edit {
            category,
            name,
            icon,
        } => {
            let mut updated = session.category(&category)?;
            if let Some(name) = name {
                updated.name = name;
            }
            if let Some(icon) = icon {
                updated.icon_name = parse_icon(&icon)?;
            }

            let mut service = CategoryService::new(&mut session.storage);
            match service.update(updated)? {
                Some(category) => {
                    let usage = service.usage(category.id);
                    println!("Updated category.");
                    print!("{}", format_category_details(&category, usage));
                }
                None => println!("Category '{}' no longer exists.", category),
            }
        }

        CategoryCommands::Delete { category } => {
            let target = session.category(&category)?;
            if let Some(removed) = CategoryService::new(&mut session.storage).delete(target.id)? {
                println!("Deleted category: {}", removed.name);
            }
        }

        CategoryCommands::Icons => {
            print!("{}", format_icon_list());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TrackerPaths};
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn session(temp_dir: &TempDir) -> Session {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        Session::new(
            Storage::sample(today),
            Settings::default(),
            TrackerPaths::with_base_dir(temp_dir.path().to_path_buf()),
            today,
        )
    }

    #[test]
    fn test_add_with_icon() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        handle_category_command(
            &mut session,
            CategoryCommands::Add {
                name: "Books".into(),
                icon: Some("book-open".into()),
            },
        )
        .unwrap();

        assert_eq!(session.category("Books").unwrap().icon_name, CategoryIcon::BookOpen);
    }

    #[test]
    fn test_unknown_icon_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        let err = handle_category_command(
            &mut session,
            CategoryCommands::Add {
                name: "Books".into(),
                icon: Some("Rocket".into()),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_in_use_category_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        let err = handle_category_command(
            &mut session,
            CategoryCommands::Delete {
                category: "Groceries".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_integrity_violation());
        assert_eq!(session.storage.categories.len(), 10);
    }

    #[test]
    fn test_delete_unused_category() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        handle_category_command(
            &mut session,
            CategoryCommands::Delete {
                category: "travel".into(),
            },
        )
        .unwrap();
        assert_eq!(session.storage.categories.len(), 9);
    }

    #[test]
    fn test_edit_renames() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        handle_category_command(
            &mut session,
            CategoryCommands::Edit {
                category: "Other".into(),
                name: Some("Misc".into()),
                icon: None,
            },
        )
        .unwrap();
        assert!(session.category("Misc").is_ok());
        assert!(session.category("Other").is_err());
    }
}
