use std::io::{BufRead, Write};

use super::{
    constants::messages::{
        FRIEND_INSTRUCTIONS_MESSAGE, SELECT_INSTRUCTIONS_MESSAGE, SPLIT_INSTRUCTIONS_MESSAGE,
        UNKNOWN_COMMAND_MESSAGE, UNKNOWN_PAYER_MESSAGE,
    },
    constants::settings::DEFAULT_AVATAR_URL,
    handlers::{
        friends::{action_add_friend, action_select, action_toggle_add},
        general::{action_help, action_json, action_list, invalid_command},
        split::action_split,
    },
    processor::Session,
    split::PaidBy,
    utils::{HandlerResult, LedgerError},
};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    ToggleAdd,
    AddFriend { name: String, image: String },
    Select(usize),
    Split {
        bill: String,
        user_expense: String,
        paid_by: PaidBy,
    },
    Json,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, LedgerError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        match keyword.as_str() {
            "list" | "ls" => Ok(Command::List),
            "add" => Ok(Command::ToggleAdd),
            "friend" => parse_friend(&args),
            "select" => match args.as_slice() {
                [n] => n
                    .parse::<usize>()
                    .map(Command::Select)
                    .map_err(|_| LedgerError::UserError(SELECT_INSTRUCTIONS_MESSAGE.to_string())),
                _ => Err(LedgerError::UserError(
                    SELECT_INSTRUCTIONS_MESSAGE.to_string(),
                )),
            },
            "split" => parse_split(&args),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(LedgerError::UserError(UNKNOWN_COMMAND_MESSAGE.to_string())),
        }
    }
}

// The last word is the image when it looks like a URL, the rest is the name.
fn parse_friend(args: &[&str]) -> Result<Command, LedgerError> {
    let (name, image) = match args.split_last() {
        None => {
            return Err(LedgerError::UserError(
                FRIEND_INSTRUCTIONS_MESSAGE.to_string(),
            ))
        }
        Some((last, rest)) if last.contains("://") => (rest.join(" "), last.to_string()),
        Some(_) => (args.join(" "), DEFAULT_AVATAR_URL.to_string()),
    };

    Ok(Command::AddFriend { name, image })
}

// Missing amounts are passed on empty, the session decides what to do with them.
fn parse_split(args: &[&str]) -> Result<Command, LedgerError> {
    if args.len() > 3 {
        return Err(LedgerError::UserError(
            SPLIT_INSTRUCTIONS_MESSAGE.to_string(),
        ));
    }

    let paid_by = match args.get(2) {
        Some(code) => PaidBy::from_code(code)
            .ok_or_else(|| LedgerError::UserError(UNKNOWN_PAYER_MESSAGE.to_string()))?,
        None => PaidBy::default(),
    };

    Ok(Command::Split {
        bill: args.first().copied().unwrap_or_default().to_string(),
        user_expense: args.get(1).copied().unwrap_or_default().to_string(),
        paid_by,
    })
}

/* Main loop.
 * Reads one command per line until quit or end of input. User mistakes are answered and
 * the loop goes on; only IO errors end it early.
 */
pub fn run_dispatcher<R, W>(session: &mut Session, input: R, output: &mut W) -> HandlerResult
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(session, output, command),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {}
            Err(LedgerError::Io(err)) => return Err(LedgerError::Io(err)),
            Err(err) => {
                log::debug!("Command {:?} rejected: {}", line, err);
                invalid_command(output, err)?;
            }
        }
        output.flush()?;
    }

    log::info!("Session ended with {} friends", session.list_friends().len());
    Ok(())
}

pub fn dispatch<W: Write>(session: &mut Session, output: &mut W, command: Command) -> HandlerResult {
    match command {
        Command::List => action_list(session, output),
        Command::ToggleAdd => action_toggle_add(session, output),
        Command::AddFriend { name, image } => action_add_friend(session, output, &name, &image),
        Command::Select(n) => action_select(session, output, n),
        Command::Split {
            bill,
            user_expense,
            paid_by,
        } => action_split(session, output, &bill, &user_expense, paid_by),
        Command::Json => action_json(session, output),
        Command::Help => action_help(output),
        Command::Quit => Ok(()),
    }
}
