use core_types::HDirection;
use dom::Id;

/// Notifications fired before navigation changes what is shown or
/// selected. Listeners veto by marking the outcome as prevented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A fake caret is about to be drawn beside `target`.
    ShowCaret {
        target: Id,
        direction: HDirection,
        before: bool,
    },
    /// `target` is about to be selected as a whole.
    BeforeObjectSelected { target: Id },
}

impl NavigationEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NavigationEvent::ShowCaret { .. } => "ShowCaret",
            NavigationEvent::BeforeObjectSelected { .. } => "BeforeObjectSelected",
        }
    }

    pub fn target(&self) -> Id {
        match *self {
            NavigationEvent::ShowCaret { target, .. } => target,
            NavigationEvent::BeforeObjectSelected { target } => target,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub default_prevented: bool,
}

impl EventOutcome {
    pub fn prevented() -> Self {
        Self {
            default_prevented: true,
        }
    }

    #[inline]
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
