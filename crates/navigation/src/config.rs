use serde::Deserialize;

/// Navigation settings, read from the `[navigation]` table of an editor
/// configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Element created when the caret leaves a preformatted block at the
    /// edge of the document. Empty or absent disables the exit.
    pub forced_root_block: Option<String>,
    /// Scroll the caret or revealed node into view after a move.
    pub scroll_into_view: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            forced_root_block: Some("p".to_string()),
            scroll_into_view: true,
        }
    }
}

impl NavigationConfig {
    pub fn root_block_name(&self) -> Option<&str> {
        self.forced_root_block
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationConfig;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: NavigationConfig = toml::from_str("scroll_into_view = false").unwrap();
        assert_eq!(config.root_block_name(), Some("p"));
        assert!(!config.scroll_into_view);
    }

    #[test]
    fn empty_root_block_disables_exit() {
        let config: NavigationConfig = toml::from_str(r#"forced_root_block = """#).unwrap();
        assert_eq!(config.root_block_name(), None);
        let config: NavigationConfig = toml::from_str(r#"forced_root_block = "div""#).unwrap();
        assert_eq!(config.root_block_name(), Some("div"));
    }
}
