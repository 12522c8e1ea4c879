use serde::Serialize;

use super::utils::{
    amounts::{is_filled, parse_input},
    Amount,
};

/// Who fronted the bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaidBy {
    #[default]
    You,
    Friend,
}

impl PaidBy {
    pub fn from_code(code: &str) -> Option<PaidBy> {
        match code.to_lowercase().as_str() {
            "you" | "me" => Some(PaidBy::You),
            "friend" | "them" => Some(PaidBy::Friend),
            _ => None,
        }
    }
}

// The friend's part of the bill. Not clamped, so it goes negative when the user's
// expense exceeds the bill. None if the difference does not fit an Amount.
pub fn friend_expense(bill: Amount, user_expense: Amount) -> Option<Amount> {
    bill.checked_sub(user_expense)
}

// Signed change to the friend's balance for one bill, None on overflow.
pub fn compute_delta(bill: Amount, user_expense: Amount, paid_by: PaidBy) -> Option<Amount> {
    match paid_by {
        PaidBy::You => friend_expense(bill, user_expense),
        PaidBy::Friend => user_expense.checked_neg(),
    }
}

/// One split as typed in: each amount is either parsed or not yet valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitForm {
    pub bill: Option<Amount>,
    pub user_expense: Option<Amount>,
    pub paid_by: PaidBy,
}

impl SplitForm {
    pub fn parse(bill: &str, user_expense: &str, paid_by: PaidBy, decimal_places: u32) -> Self {
        SplitForm {
            bill: parse_input(bill, decimal_places),
            user_expense: parse_input(user_expense, decimal_places),
            paid_by,
        }
    }

    // Preview of the friend's share. Unset while there is no bill; a missing user
    // expense counts as nothing.
    pub fn friend_expense(&self) -> Option<Amount> {
        self.bill
            .filter(|bill| *bill != 0)
            .and_then(|bill| friend_expense(bill, self.user_expense.unwrap_or(0)))
    }

    // The delta to apply, or None while the bill or the user's expense is missing.
    pub fn delta(&self) -> Option<Amount> {
        if !is_filled(self.bill) || !is_filled(self.user_expense) {
            return None;
        }
        compute_delta(
            self.bill.unwrap_or_default(),
            self.user_expense.unwrap_or_default(),
            self.paid_by,
        )
    }
}
