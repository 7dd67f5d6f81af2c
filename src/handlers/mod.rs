pub mod comments;
pub mod feed;
pub mod posts;
pub mod users;

/// Acting user until authentication lands.
// TODO: derive from the session once auth is added
pub const CURRENT_USER_ID: i64 = 1;
