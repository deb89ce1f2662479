//! Theme registry for discovering and accessing themes

use super::Theme;
use folio_core::constants::ui::DEFAULT_THEME;
use std::collections::HashMap;

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
    fallback: Theme,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        use super::definitions::*;

        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
            fallback: folio(),
        };

        registry.register(folio());
        registry.register(paper());
        registry.register(noir());
        registry.register(terminal());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or(&self.fallback)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// Name of the theme after `name` in registration order, wrapping around
    pub fn next_name(&self, name: &str) -> &str {
        let idx = self.ordered_names.iter().position(|n| n == name);
        let next = idx.map_or(0, |i| (i + 1) % self.ordered_names.len());
        self.ordered_names
            .get(next)
            .map(String::as_str)
            .unwrap_or(DEFAULT_THEME)
    }

    /// Get the number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
