pub mod friends;
pub mod general;
pub mod split;
