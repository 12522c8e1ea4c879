//! Eat-N-Split: a running balance per friend, adjusted by splitting bills.
//!
//! A [`ledger::Session`] owns the friends, the panel state (idle, adding a friend, or a
//! friend selected) and the settings used to show amounts. The text driver in
//! [`ledger::run_dispatcher`] feeds it one command per line.

pub mod ledger;
