//! Local cache of the remote user collection.
//!
//! The roster mirrors what the server holds; it is not a source of truth.
//! Every mutation here happens only after the corresponding request
//! succeeded, so every entry corresponds to a prior server response.

use api::User;

/// The cached user list, held in one signal by the registration page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserRoster {
    users: Vec<User>,
}

impl UserRoster {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn into_users(self) -> Vec<User> {
        self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Replace the whole cache with a fresh server snapshot.
    pub fn replace_all(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Append a newly created record (as returned by the server).
    pub fn push(&mut self, user: User) {
        self.users.push(user);
    }

    /// Replace the entry with the matching identifier; all others are left
    /// untouched. A no-op when the identifier is no longer present.
    pub fn apply_update(&mut self, updated: User) {
        if let Some(slot) = self.users.iter_mut().find(|u| u.id == updated.id) {
            *slot = updated;
        }
    }

    /// Drop exactly the entry with the matching identifier, preserving the
    /// order of the rest.
    pub fn remove(&mut self, id: &str) {
        self.users.retain(|u| u.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Gender;

    fn user(id: &str, first: &str) -> User {
        User {
            id: id.into(),
            first_name: first.into(),
            last_name: "Test".into(),
            email: format!("{first}@example.com"),
            password: String::new(),
            confirm_password: String::new(),
            gender: Gender::Unspecified,
        }
    }

    fn roster_of(ids: &[&str]) -> UserRoster {
        let mut roster = UserRoster::default();
        roster.replace_all(ids.iter().map(|id| user(id, "u")).collect());
        roster
    }

    #[test]
    fn create_appends_exactly_once() {
        let mut roster = roster_of(&["1", "2"]);
        roster.push(user("3", "new"));

        assert_eq!(roster.len(), 3);
        let matches = roster.users().iter().filter(|u| u.id == "3").count();
        assert_eq!(matches, 1);
        assert_eq!(roster.users().last().unwrap().id, "3");
    }

    #[test]
    fn update_replaces_only_the_matching_entry() {
        let mut roster = roster_of(&["1", "42", "7"]);
        roster.apply_update(user("42", "updated"));

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.users()[1].first_name, "updated");
        assert_eq!(roster.users()[0].first_name, "u");
        assert_eq!(roster.users()[2].first_name, "u");
    }

    #[test]
    fn update_for_a_vanished_entry_is_a_noop() {
        let mut roster = roster_of(&["1", "2"]);
        let before = roster.clone();
        roster.apply_update(user("99", "ghost"));
        assert_eq!(roster, before);
    }

    #[test]
    fn remove_drops_one_entry_and_keeps_order() {
        let mut roster = roster_of(&["1", "7", "3"]);
        roster.remove("7");

        let ids: Vec<&str> = roster.users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn remove_of_an_unknown_id_is_a_noop() {
        let mut roster = roster_of(&["1", "2"]);
        roster.remove("99");
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn replace_all_overwrites_the_cache() {
        let mut roster = roster_of(&["1", "2", "3"]);
        roster.replace_all(vec![user("9", "only")]);

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.users()[0].id, "9");
        assert!(!roster.is_empty());
    }
}
