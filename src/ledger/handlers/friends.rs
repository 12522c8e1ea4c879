use std::io::Write;

use crate::ledger::{
    constants::messages::{
        ADD_PANEL_CLOSED_MESSAGE, ADD_PANEL_OPEN_MESSAGE, ADD_SKIPPED_MESSAGE,
        UNKNOWN_FRIEND_MESSAGE,
    },
    processor::Session,
    utils::{format::display_balance, HandlerResult, LedgerError},
};

/* Add command.
 * Opens the add friend panel, or closes it if already open. Opening drops the selection.
 */
pub fn action_toggle_add<W: Write>(session: &mut Session, output: &mut W) -> HandlerResult {
    session.toggle_add_friend();
    if session.state().is_adding_friend() {
        writeln!(output, "{ADD_PANEL_OPEN_MESSAGE}")?;
    } else {
        writeln!(output, "{ADD_PANEL_CLOSED_MESSAGE}")?;
    }
    Ok(())
}

/* Friend command.
 * Adds a friend with a settled balance.
 */
pub fn action_add_friend<W: Write>(
    session: &mut Session,
    output: &mut W,
    name: &str,
    image: &str,
) -> HandlerResult {
    match session.add_friend(name, image) {
        Some(friend) => writeln!(output, "Added {} ({})!", friend.name, friend.image)?,
        None => writeln!(output, "{ADD_SKIPPED_MESSAGE}")?,
    }
    Ok(())
}

/* Select command.
 * Selects the n-th listed friend (1-based), or deselects them if they already are.
 */
pub fn action_select<W: Write>(session: &mut Session, output: &mut W, n: usize) -> HandlerResult {
    let friend_id = match n.checked_sub(1).and_then(|i| session.list_friends().get(i)) {
        Some(friend) => friend.id,
        None => return Err(LedgerError::UserError(UNKNOWN_FRIEND_MESSAGE.to_string())),
    };

    let config = session.config().clone();
    match session.select_friend(friend_id) {
        Some(friend) => writeln!(
            output,
            "Split a bill with {}. {}.",
            friend.name,
            display_balance(friend, &config)
        )?,
        None => writeln!(output, "Okay! Nobody is selected.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::config::Config;

    fn output_of(output: Vec<u8>) -> String {
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_select_out_of_range() {
        let mut session = Session::default();
        let mut output = Vec::new();

        assert!(action_select(&mut session, &mut output, 0).is_err());
        assert!(action_select(&mut session, &mut output, 4).is_err());
        assert!(session.selection().is_none());
    }

    #[test]
    fn test_select_and_deselect() {
        let mut session = Session::new(Config {
            decimal_places: 0,
            ..Config::default()
        });
        let mut output = Vec::new();

        action_select(&mut session, &mut output, 2).unwrap();
        action_select(&mut session, &mut output, 2).unwrap();
        assert_eq!(
            output_of(output),
            "Split a bill with Sarah. Sarah owes you 20€.\nOkay! Nobody is selected.\n"
        );
    }

    #[test]
    fn test_add_friend_flow() {
        let mut session = Session::default();
        let mut output = Vec::new();

        action_toggle_add(&mut session, &mut output).unwrap();
        action_add_friend(&mut session, &mut output, "", "img").unwrap();
        action_add_friend(&mut session, &mut output, "Dana", "img").unwrap();

        let text = output_of(output);
        assert!(text.starts_with(ADD_PANEL_OPEN_MESSAGE));
        assert!(text.contains(ADD_SKIPPED_MESSAGE));
        assert!(text.contains("Added Dana (img?="));
        assert_eq!(session.list_friends().len(), 4);
        assert!(!session.state().is_adding_friend());
    }
}
