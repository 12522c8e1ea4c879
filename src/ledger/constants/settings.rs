// Environment keys
pub const CURRENCY_SYMBOL_KEY: &str = "SPLIT_CURRENCY_SYMBOL";
pub const DECIMAL_PLACES_KEY: &str = "SPLIT_DECIMAL_PLACES";
pub const SEED_FRIENDS_KEY: &str = "SPLIT_SEED_FRIENDS";

// Defaults
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;
pub const MAX_DECIMAL_PLACES: u32 = 6;
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

// Starting roster: name, avatar, balance in whole currency units
pub const SEED_FRIENDS: [(&str, &str, i64); 3] = [
    ("Clark", "https://i.pravatar.cc/48?u=118836", -7),
    ("Sarah", "https://i.pravatar.cc/48?u=933372", 20),
    ("Anthony", "https://i.pravatar.cc/48?u=499476", 0),
];
