use crate::ledger::{config::Config, registry::Friend, selection::State};

use super::{amounts::scale_factor, Amount};

// Converts an amount from base value to actual representation in currency.
pub fn display_amount(amount: Amount, decimal_places: u32) -> String {
    if decimal_places == 0 {
        return amount.to_string();
    } else if amount == 0 {
        return "0".to_string();
    }

    // Amount is not 0, and decimal places are not 0
    let factor = match scale_factor(decimal_places) {
        Some(factor) => factor,
        None => return amount.to_string(),
    };
    let sign = if amount < 0 { "-" } else { "" };
    let amount = amount.unsigned_abs();
    format!(
        "{sign}{}.{:0width$}",
        amount / factor as u64,
        amount % factor as u64,
        width = decimal_places as usize
    )
}

// Displays an amount together with the currency symbol.
pub fn display_currency_amount(amount: Amount, config: &Config) -> String {
    format!(
        "{}{}",
        display_amount(amount, config.decimal_places),
        config.currency_symbol
    )
}

// Turns a signed balance into a sentence from the user's point of view.
pub fn display_balance(friend: &Friend, config: &Config) -> String {
    let amount = display_currency_amount(friend.balance, config);
    let amount = amount.trim_start_matches('-');
    if friend.balance < 0 {
        format!("You owe {} {}", friend.name, amount)
    } else if friend.balance > 0 {
        format!("{} owes you {}", friend.name, amount)
    } else {
        format!("You and {} are even", friend.name)
    }
}

// Displays the numbered friend list, marking the selected friend.
pub fn display_friends(friends: &[Friend], state: State, config: &Config) -> String {
    let selected = state.selected();
    let mut message = String::new();
    for (i, friend) in friends.iter().enumerate() {
        let marker = if Some(friend.id) == selected { "▶" } else { " " };
        message.push_str(&format!(
            "{marker} {}. {} — {}\n",
            i + 1,
            friend.name,
            display_balance(friend, config)
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn friend(name: &str, balance: Amount) -> Friend {
        Friend {
            id: Uuid::new_v4(),
            name: name.to_string(),
            image: "img".to_string(),
            balance,
        }
    }

    #[test]
    fn test_display_amount() {
        assert_eq!(display_amount(700, 2), "7.00");
        assert_eq!(display_amount(1205, 2), "12.05");
        assert_eq!(display_amount(-5, 2), "-0.05");
        assert_eq!(display_amount(0, 2), "0");
        assert_eq!(display_amount(42, 0), "42");
        assert_eq!(display_amount(i64::MIN, 2), "-92233720368547758.08");
        assert_eq!(display_amount(42, 19), "42");
    }

    #[test]
    fn test_display_balance_phrases() {
        let config = Config::default();
        assert_eq!(
            display_balance(&friend("Clark", -700), &config),
            "You owe Clark 7.00€"
        );
        assert_eq!(
            display_balance(&friend("Sarah", 2000), &config),
            "Sarah owes you 20.00€"
        );
        assert_eq!(
            display_balance(&friend("Anthony", 0), &config),
            "You and Anthony are even"
        );
    }

    #[test]
    fn test_display_balance_at_the_limits() {
        let config = Config::default();
        assert_eq!(
            display_balance(&friend("Clark", i64::MIN), &config),
            "You owe Clark 92233720368547758.08€"
        );
        assert_eq!(
            display_balance(&friend("Sarah", i64::MAX), &config),
            "Sarah owes you 92233720368547758.07€"
        );
    }

    #[test]
    fn test_display_friends_marks_selection() {
        let config = Config {
            decimal_places: 0,
            ..Config::default()
        };
        let friends = vec![friend("Clark", -7), friend("Sarah", 20)];
        let state = State::FriendSelected {
            friend_id: friends[1].id,
        };

        let listing = display_friends(&friends, state, &config);
        assert_eq!(
            listing,
            "  1. Clark — You owe Clark 7€\n▶ 2. Sarah — Sarah owes you 20€\n"
        );
    }
}
