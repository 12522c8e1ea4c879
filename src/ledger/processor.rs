use super::{
    config::Config,
    constants::settings::SEED_FRIENDS,
    registry::{Friend, FriendId, FriendRegistry},
    selection::State,
    split::{compute_delta, PaidBy, SplitForm},
    utils::{
        amounts::{is_filled, scale_factor},
        Amount,
    },
};

/// The whole ledger: friends, the panel state, and the settings they are shown with.
/// Every operation either applies completely or leaves the session untouched.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    registry: FriendRegistry,
    state: State,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let mut registry = FriendRegistry::new();
        if config.seed_friends {
            seed_roster(&mut registry, config.decimal_places);
        }
        if registry.is_empty() {
            log::debug!("Starting without friends");
        } else {
            log::debug!("Seeded {} friends", registry.len());
        }

        Session {
            config,
            registry,
            state: State::Idle,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn list_friends(&self) -> &[Friend] {
        self.registry.list()
    }

    pub fn friend(&self, friend_id: FriendId) -> Option<&Friend> {
        self.registry.get(friend_id)
    }

    pub fn selection(&self) -> Option<&Friend> {
        self.state
            .selected()
            .and_then(|friend_id| self.registry.get(friend_id))
    }

    pub fn toggle_add_friend(&mut self) {
        self.state.toggle_add();
        log::debug!("Panel state is now {:?}", self.state);
    }

    // Adds a friend and closes the add panel. Empty name or image changes nothing.
    pub fn add_friend(&mut self, name: &str, image: &str) -> Option<&Friend> {
        let friend_id = self.registry.add(name, image)?.id;
        if self.state.is_adding_friend() {
            self.state.clear();
        }
        self.registry.get(friend_id)
    }

    // Toggles the selection of a friend and returns the new selection. Unknown ids are
    // ignored.
    pub fn select_friend(&mut self, friend_id: FriendId) -> Option<&Friend> {
        if self.registry.get(friend_id).is_none() {
            log::warn!("Cannot select unknown friend {}", friend_id);
            return self.selection();
        }

        self.state.select(friend_id);
        log::debug!("Panel state is now {:?}", self.state);
        self.selection()
    }

    /* Split submission.
     * Applies the delta to the selected friend and clears the selection. Returns the
     * applied delta, or None when nobody is selected or an amount is missing or zero.
     */
    pub fn submit_split(
        &mut self,
        bill: Option<Amount>,
        user_expense: Option<Amount>,
        paid_by: PaidBy,
    ) -> Option<Amount> {
        let friend_id = match self.state.selected() {
            Some(friend_id) => friend_id,
            None => {
                log::debug!("Split submitted without a selected friend");
                return None;
            }
        };

        if !is_filled(bill) || !is_filled(user_expense) {
            log::debug!(
                "Split skipped, bill {:?} and user expense {:?}",
                bill,
                user_expense
            );
            return None;
        }

        let delta = match compute_delta(
            bill.unwrap_or_default(),
            user_expense.unwrap_or_default(),
            paid_by,
        ) {
            Some(delta) => delta,
            None => {
                log::warn!(
                    "Split skipped, bill {:?} and user expense {:?} overflow",
                    bill,
                    user_expense
                );
                return None;
            }
        };
        if !self.registry.apply_delta(friend_id, delta) {
            return None;
        }

        self.state.clear();
        Some(delta)
    }

    pub fn submit_form(&mut self, form: &SplitForm) -> Option<Amount> {
        self.submit_split(form.bill, form.user_expense, form.paid_by)
    }
}

// Loads the starting roster, scaled to minor units. Nothing is loaded when a balance
// does not fit at this scale.
fn seed_roster(registry: &mut FriendRegistry, decimal_places: u32) {
    let balances: Option<Vec<Amount>> = SEED_FRIENDS
        .iter()
        .map(|(_, _, balance)| scale_factor(decimal_places).and_then(|f| balance.checked_mul(f)))
        .collect();

    match balances {
        Some(balances) => {
            for ((name, image, _), balance) in SEED_FRIENDS.iter().zip(balances) {
                registry.insert_existing(name, image, balance);
            }
        }
        None => log::warn!(
            "Starting roster does not fit {} decimal places, skipping it",
            decimal_places
        ),
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Config::default())
    }
}
