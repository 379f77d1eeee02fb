// app/actions.rs

//! Actions the user can trigger on the main `App`.

use enum_iterator::{all, Sequence};
use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::inputs::key::Key;

/// All possible user actions.
/// Not all actions are available in all contexts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Sequence)]
pub enum Action {
    Quit,
    SendMessage,
    ToggleHelp,
    ToggleLogs,
    TogglePeers,
}

impl Action {
    /// Return a slice with the key(s) associated to the action.
    pub fn keys(&self) -> &[Key] {
        match self {
            Action::Quit => &[Key::Ctrl('c')],
            Action::SendMessage => &[Key::Enter],
            Action::ToggleHelp => &[Key::F1],
            Action::ToggleLogs => &[Key::F2],
            Action::TogglePeers => &[Key::F3],
        }
    }
}

/// User friendly short description of the action
impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Action::Quit => "Quit",
            Action::SendMessage => "Send message",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleLogs => "Toggle logs",
            Action::TogglePeers => "Toggle test peers",
        };
        write!(f, "{}", str)
    }
}

/// Vec of actions.
/// Can be used to enumerate the actions available in a
/// given context.
/// In a context, a key must map to at most one action.
#[derive(Default, Debug, Clone)]
pub struct Actions(Vec<Action>);

impl Actions {
    /// Given a key, find the corresponding action
    pub fn find(&self, key: Key) -> Option<Action> {
        all::<Action>()
            .filter(|action| self.0.contains(action))
            .find(|action| action.keys().contains(&key))
    }

    pub fn actions(&self) -> &[Action] {
        self.0.as_slice()
    }
}

impl From<Vec<Action>> for Actions {
    /// Builds contextual actions
    ///
    /// # Panics
    ///
    /// If two actions have same key
    fn from(actions: Vec<Action>) -> Self {
        let mut map: HashMap<Key, Vec<Action>> = HashMap::new();
        for action in actions.iter() {
            for key in action.keys().iter() {
                map.entry(*key).or_default().push(*action);
            }
        }
        let errors = map
            .iter()
            .filter(|(_, actions)| actions.len() > 1) // at least two actions share same shortcut
            .map(|(key, actions)| {
                let actions = actions
                    .iter()
                    .map(Action::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Conflict key {} with actions {}", key, actions)
            })
            .collect::<Vec<_>>();
        if !errors.is_empty() {
            panic!("{}", errors.join("; "))
        }

        Self(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_find_action_by_key() {
        let actions: Actions = vec![Action::Quit, Action::ToggleLogs].into();
        assert_eq!(actions.find(Key::Ctrl('c')), Some(Action::Quit));
        assert_eq!(actions.find(Key::F2), Some(Action::ToggleLogs));
    }

    #[test]
    fn should_not_find_action_outside_context() {
        let actions: Actions = vec![Action::Quit].into();
        assert_eq!(actions.find(Key::F2), None);
        assert_eq!(actions.find(Key::Char('q')), None);
    }

    #[test]
    #[should_panic]
    fn should_panic_when_create_actions_conflict_key() {
        let _actions: Actions = vec![Action::Quit, Action::Quit].into();
    }
}
