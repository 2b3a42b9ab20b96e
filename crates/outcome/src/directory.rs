//! Seeded in-memory user directory whose lookups return tagged outcomes.

use std::{collections::BTreeMap, fmt};

use outcome_core::{ErrorBase, Outcome};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("user {id} not found")]
pub struct NotFoundError {
    pub id: u64,
}

impl ErrorBase for NotFoundError {
    fn tag(&self) -> &'static str {
        "NotFoundError"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid user id `{input}`: {reason}")]
pub struct ValidationError {
    pub input: String,
    pub reason: &'static str,
}

impl ErrorBase for ValidationError {
    fn tag(&self) -> &'static str {
        "ValidationError"
    }
}

/// Every way a lookup can fail. Serialized with its tag inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "tag")]
pub enum LookupError {
    #[serde(rename = "NotFoundError")]
    #[error(transparent)]
    NotFound(NotFoundError),

    #[serde(rename = "ValidationError")]
    #[error(transparent)]
    Validation(ValidationError),
}

impl ErrorBase for LookupError {
    fn tag(&self) -> &'static str {
        match self {
            LookupError::NotFound(e) => e.tag(),
            LookupError::Validation(e) => e.tag(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Directory {
    users: BTreeMap<u64, User>,
}

impl Directory {
    pub fn seeded() -> Self {
        let mut dir = Self::default();
        for (id, name) in [(1, "ada"), (2, "grace"), (3, "barbara"), (42, "ken")] {
            dir.insert(User {
                id,
                name: name.to_string(),
            });
        }
        dir
    }

    pub fn insert(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn lookup(&self, raw: &str) -> Outcome<User, LookupError> {
        parse_id(raw).fold(
            |id| self.find(id),
            |e| Outcome::err(LookupError::Validation(e)).with_ok(),
        )
    }

    fn find(&self, id: u64) -> Outcome<User, LookupError> {
        match self.users.get(&id) {
            Some(user) => Outcome::ok(user.clone()).with_err(),
            None => Outcome::err(LookupError::NotFound(NotFoundError { id })).with_ok(),
        }
    }
}

fn parse_id(raw: &str) -> Outcome<u64, ValidationError> {
    let input = raw.trim();
    let invalid = |reason| {
        Outcome::err(ValidationError {
            input: input.to_string(),
            reason,
        })
        .with_ok()
    };

    if input.is_empty() {
        return invalid("empty");
    }
    match input.parse::<u64>() {
        Ok(0) => invalid("ids start at 1"),
        Ok(id) => Outcome::ok(id).with_err(),
        Err(_) => invalid("not a number"),
    }
}

/// Per-kind counts of a batch of lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub found: usize,
    pub not_found: usize,
    pub invalid: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: &Outcome<User, LookupError>) {
        match outcome.err_or_none() {
            None => self.found += 1,
            Some(LookupError::NotFound(_)) => self.not_found += 1,
            Some(LookupError::Validation(_)) => self.invalid += 1,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found={} not_found={} invalid={}",
            self.found, self.not_found, self.invalid
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn finds_seeded_users() {
        let r = Directory::seeded().lookup("42");
        assert!(r.is_ok());
        assert_eq!(r.to_string(), "Ok(#42 ken)");
        assert_eq!(r.map(|u| u.name).get_or_default(String::new()), "ken");
    }

    #[test]
    fn missing_user_is_not_found() {
        let r = Directory::seeded().lookup("7");
        assert_eq!(r.err_or_none().map(|e| e.tag()), Some("NotFoundError"));
        assert_eq!(r.to_string(), "Err(user 7 not found)");
    }

    #[test]
    fn bad_input_is_a_validation_error() {
        let dir = Directory::seeded();
        for (raw, reason) in [("", "empty"), ("abc", "not a number"), ("0", "ids start at 1")] {
            let e = dir.lookup(raw).into_result().unwrap_err();
            assert_eq!(e.tag(), "ValidationError");
            match e {
                LookupError::Validation(v) => assert_eq!(v.reason, reason),
                LookupError::NotFound(_) => panic!("expected a validation error for {raw:?}"),
            }
        }
    }

    #[test]
    fn json_carries_the_tag_inline() {
        let v = Directory::seeded().lookup("9").to_json_value().unwrap();
        assert_eq!(
            v,
            json!({
                "value": { "tag": "NotFoundError", "id": 9 },
                "isOk": false,
                "isErr": true
            })
        );
    }

    #[test]
    fn fold_branches_on_every_kind() {
        let dir = Directory::seeded();
        let status = |raw: &str| {
            dir.lookup(raw).fold(
                |_| 200,
                |e| match e {
                    LookupError::NotFound(_) => 404,
                    LookupError::Validation(_) => 400,
                },
            )
        };
        assert_eq!(status("1"), 200);
        assert_eq!(status("1000"), 404);
        assert_eq!(status("x"), 400);
    }

    #[test]
    fn tally_counts_each_kind() {
        let dir = Directory::seeded();
        let mut tally = Tally::default();
        for raw in ["1", "2", "99", "nope"] {
            tally.record(&dir.lookup(raw));
        }
        assert_eq!(
            tally,
            Tally {
                found: 2,
                not_found: 1,
                invalid: 1
            }
        );
        assert_eq!(tally.to_string(), "found=2 not_found=1 invalid=1");
    }
}
