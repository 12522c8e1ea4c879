use std::io::Write;

use crate::ledger::{
    constants::messages::{HELP_MESSAGE, NO_FRIENDS_MESSAGE},
    processor::Session,
    utils::{format::display_friends, HandlerResult, LedgerError},
};

/* Invalid command.
 * Answers with what went wrong. Nothing in the session changes.
 */
pub fn invalid_command<W: Write>(output: &mut W, err: LedgerError) -> HandlerResult {
    writeln!(output, "{err}")?;
    Ok(())
}

/* Help command.
 * Displays a list of commands available to the user.
 */
pub fn action_help<W: Write>(output: &mut W) -> HandlerResult {
    writeln!(output, "{HELP_MESSAGE}")?;
    Ok(())
}

/* List command.
 * Displays every friend with their balance, in the order they were added.
 */
pub fn action_list<W: Write>(session: &Session, output: &mut W) -> HandlerResult {
    let friends = session.list_friends();
    if friends.is_empty() {
        writeln!(output, "{NO_FRIENDS_MESSAGE}")?;
    } else {
        write!(
            output,
            "{}",
            display_friends(friends, session.state(), session.config())
        )?;
    }
    Ok(())
}

pub fn action_json<W: Write>(session: &Session, output: &mut W) -> HandlerResult {
    let json = serde_json::to_string_pretty(session.list_friends())?;
    writeln!(output, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::config::Config;

    #[test]
    fn test_list_empty_session() {
        let session = Session::new(Config {
            seed_friends: false,
            ..Config::default()
        });
        let mut output = Vec::new();
        action_list(&session, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), format!("{NO_FRIENDS_MESSAGE}\n"));
    }

    #[test]
    fn test_json_dump() {
        let session = Session::default();
        let mut output = Vec::new();
        action_json(&session, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value[0]["name"], "Clark");
        assert_eq!(value[0]["balance"], -700);
        assert_eq!(value.as_array().map(|a| a.len()), Some(3));
    }
}
