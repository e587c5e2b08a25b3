//! Local recipe catalog.
//!
//! A recipe is a folder under the recipes directory. Its name is the folder
//! name and its description is the first non-empty line of its `README.md`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub(crate) const ENV_RECIPES_DIR: &str = "SC_RECIPES_DIR";
pub(crate) const DEFAULT_RECIPES_DIR: &str = "recipes";
const DESCRIPTION_FILE: &str = "README.md";

/// A startable recipe found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecipeRef {
    pub name: String,
    pub description: String,
    pub path: PathBuf,
}

/// List recipes under `dir`, sorted by name.
///
/// A missing directory yields an empty list.
pub(crate) fn list_recipes(dir: &Path) -> io::Result<Vec<RecipeRef>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(dir = %dir.display(), "Recipes directory not found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let mut recipes = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let description = read_description(&path)?;
        recipes.push(RecipeRef {
            name,
            description,
            path,
        });
    }

    recipes.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), count = recipes.len(), "Loaded recipe catalog");
    Ok(recipes)
}

fn read_description(recipe_dir: &Path) -> io::Result<String> {
    let contents = match fs::read_to_string(recipe_dir.join(DESCRIPTION_FILE)) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(String::new()),
        Err(e) => return Err(e),
    };

    Ok(contents
        .lines()
        .map(|line| line.trim_start_matches('#').trim())
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string())
}
