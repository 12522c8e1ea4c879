use std::io::Write;

use crate::ledger::{
    constants::messages::{NO_SELECTION_MESSAGE, SPLIT_SKIPPED_MESSAGE},
    processor::Session,
    split::{PaidBy, SplitForm},
    utils::{
        format::{display_balance, display_currency_amount},
        HandlerResult, LedgerError,
    },
};

/* Split command.
 * Splits a bill with the selected friend. Missing or zero amounts leave everything as is.
 */
pub fn action_split<W: Write>(
    session: &mut Session,
    output: &mut W,
    bill: &str,
    user_expense: &str,
    paid_by: PaidBy,
) -> HandlerResult {
    let friend_id = match session.selection() {
        Some(friend) => friend.id,
        None => return Err(LedgerError::UserError(NO_SELECTION_MESSAGE.to_string())),
    };

    let config = session.config().clone();
    let form = SplitForm::parse(bill, user_expense, paid_by, config.decimal_places);

    if session.submit_form(&form).is_none() {
        writeln!(output, "{SPLIT_SKIPPED_MESSAGE}")?;
        return Ok(());
    }

    if let Some(friend) = session.friend(friend_id) {
        let share = form
            .friend_expense()
            .map(|amount| display_currency_amount(amount, &config))
            .unwrap_or_default();
        writeln!(
            output,
            "{}'s expense: {}. {}.",
            friend.name,
            share,
            display_balance(friend, &config)
        )?;
    }
    Ok(())
}
