// Error messages
pub const NO_SELECTION_MESSAGE: &str =
    "❓ Nobody is selected! Pick a friend with select <n> before splitting a bill.";
pub const UNKNOWN_COMMAND_MESSAGE: &str =
    "❓ I'm having a bit of trouble understanding that! Type help to see what I can do.";
pub const UNKNOWN_FRIEND_MESSAGE: &str = "Uh-oh! ❌ There is no friend with that number!";
pub const UNKNOWN_PAYER_MESSAGE: &str = "Uh-oh! ❌ Who paid? Please answer with you or friend!";

// Instruction messages
pub const FRIEND_INSTRUCTIONS_MESSAGE: &str =
    "Usage: friend <name> [image url]. The image defaults to a random avatar.";
pub const SELECT_INSTRUCTIONS_MESSAGE: &str =
    "Usage: select <n>, where n is the number shown by list.";
pub const SPLIT_INSTRUCTIONS_MESSAGE: &str =
    "Usage: split <bill> <your expense> [you|friend]. You pay by default.";
pub const HELP_MESSAGE: &str = "Commands\n\n\
    list — Show friends and balances\n\
    add — Open or close the add friend panel\n\
    friend <name> [image] — Add a friend\n\
    select <n> — Select or deselect a friend\n\
    split <bill> <your expense> [you|friend] — Split a bill with the selected friend\n\
    json — Dump friends as JSON\n\
    quit — Leave";

// Action messages
pub const ADD_PANEL_OPEN_MESSAGE: &str =
    "Adding a friend! Use friend <name> [image] to add them, or add again to close.";
pub const ADD_PANEL_CLOSED_MESSAGE: &str = "Okay! Closed the add friend panel.";
pub const ADD_SKIPPED_MESSAGE: &str = "No changes have been made! 🌟";
pub const SPLIT_SKIPPED_MESSAGE: &str =
    "No changes have been made! Both the bill and your expense need a value. 🌟";
pub const NO_FRIENDS_MESSAGE: &str = "No friends yet! Add one with add.";
