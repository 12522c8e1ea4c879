use super::registry::FriendId;

/* Panel state.
 * The add friend panel and the split panel are never open together, so the selection
 * lives inside the state instead of beside it.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Idle,
    AddingFriend,
    FriendSelected {
        friend_id: FriendId,
    },
}

impl State {
    pub fn selected(&self) -> Option<FriendId> {
        match self {
            State::FriendSelected { friend_id } => Some(*friend_id),
            _ => None,
        }
    }

    pub fn is_adding_friend(&self) -> bool {
        matches!(self, State::AddingFriend)
    }

    // Selecting the current friend again deselects them. Also closes the add panel.
    pub fn select(&mut self, friend_id: FriendId) {
        *self = match *self {
            State::FriendSelected { friend_id: current } if current == friend_id => State::Idle,
            _ => State::FriendSelected { friend_id },
        };
    }

    // Opening the add panel drops any selection.
    pub fn toggle_add(&mut self) {
        *self = match *self {
            State::AddingFriend => State::Idle,
            _ => State::AddingFriend,
        };
    }

    pub fn clear(&mut self) {
        *self = State::Idle;
    }
}
