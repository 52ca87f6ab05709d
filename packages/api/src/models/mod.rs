mod user;

pub use user::{Gender, User, UserDraft};
