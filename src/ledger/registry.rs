use serde::Serialize;
use uuid::Uuid;

use super::utils::Amount;

pub type FriendId = Uuid;

/// A tracked person. A negative balance means the user owes them, a positive one means
/// they owe the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub balance: Amount,
}

impl Friend {
    // Every new friend gets its own avatar variant, keyed by id.
    fn new(name: &str, image: &str) -> Self {
        let id = Uuid::new_v4();
        Friend {
            id,
            name: name.to_string(),
            image: format!("{image}?={id}"),
            balance: 0,
        }
    }
}

/// Known friends in insertion order. Friends are never removed.
#[derive(Debug, Clone, Default)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    pub fn new() -> Self {
        FriendRegistry::default()
    }

    // Adds a friend with a zero balance. Empty name or image is ignored.
    pub fn add(&mut self, name: &str, image: &str) -> Option<&Friend> {
        if name.is_empty() || image.is_empty() {
            log::debug!("Skipping friend with name {:?} and image {:?}", name, image);
            return None;
        }

        let friend = Friend::new(name, image);
        log::info!("Added friend {} ({})", friend.name, friend.id);
        self.friends.push(friend);
        self.friends.last()
    }

    // Restores a friend with a known avatar and balance, used for the starting roster.
    pub fn insert_existing(&mut self, name: &str, image: &str, balance: Amount) -> FriendId {
        let id = Uuid::new_v4();
        self.friends.push(Friend {
            id,
            name: name.to_string(),
            image: image.to_string(),
            balance,
        });
        id
    }

    // Adds delta to one friend's balance. Returns false if the id is unknown or the new
    // balance would not fit an Amount; the balance is left as it was.
    pub fn apply_delta(&mut self, friend_id: FriendId, delta: Amount) -> bool {
        match self.friends.iter_mut().find(|f| f.id == friend_id) {
            Some(friend) => {
                let Some(balance) = friend.balance.checked_add(delta) else {
                    log::warn!(
                        "Cannot apply {} to {}, balance {} would overflow",
                        delta,
                        friend.name,
                        friend.balance
                    );
                    return false;
                };
                friend.balance = balance;
                log::info!(
                    "Balance of {} moved by {} to {}",
                    friend.name,
                    delta,
                    friend.balance
                );
                true
            }
            None => {
                log::warn!("Cannot apply {} to unknown friend {}", delta, friend_id);
                false
            }
        }
    }

    pub fn get(&self, friend_id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == friend_id)
    }

    pub fn list(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
