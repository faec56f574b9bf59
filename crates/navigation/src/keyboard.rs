//! Key dispatch.

use crate::{EditorHost, media, non_editable};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown navigation key `{0}`")]
pub struct UnknownKey(pub String);

impl FromStr for NavigationKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "arrowleft" => Ok(NavigationKey::Left),
            "right" | "arrowright" => Ok(NavigationKey::Right),
            "up" | "arrowup" => Ok(NavigationKey::Up),
            "down" | "arrowdown" => Ok(NavigationKey::Down),
            "home" => Ok(NavigationKey::Home),
            "end" => Ok(NavigationKey::End),
            _ => Err(UnknownKey(s.to_string())),
        }
    }
}

/// Run the island handlers, then the media handlers, stopping at the first
/// that handles the key. `false` means the host should apply its default.
pub fn handle_key(host: &mut dyn EditorHost, key: NavigationKey) -> bool {
    let handled = match key {
        NavigationKey::Left => non_editable::move_h(host, false) || media::move_h(host, false),
        NavigationKey::Right => non_editable::move_h(host, true) || media::move_h(host, true),
        NavigationKey::Up => non_editable::move_v(host, false) || media::move_v(host, false),
        NavigationKey::Down => non_editable::move_v(host, true) || media::move_v(host, true),
        NavigationKey::Home => {
            non_editable::move_to_line_end_point(host, false)
                || media::move_to_line_end_point(host, false)
        }
        NavigationKey::End => {
            non_editable::move_to_line_end_point(host, true)
                || media::move_to_line_end_point(host, true)
        }
    };
    log::debug!(target: "navigation", "{key:?} handled: {handled}");
    handled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_names() {
        assert_eq!("Left".parse(), Ok(NavigationKey::Left));
        assert_eq!("ArrowDown".parse(), Ok(NavigationKey::Down));
        assert_eq!("end".parse(), Ok(NavigationKey::End));
        assert_eq!(
            "tab".parse::<NavigationKey>(),
            Err(UnknownKey("tab".to_string()))
        );
    }
}
