use crate::domain::model::{Member, MemberId, User, UserId};
use crate::domain::ports::{MemberStore, UserStore};
use std::collections::HashMap;

/// Member table held in a map, keyed by primary key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberStore {
    rows: HashMap<MemberId, Member>,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.insert(member);
        self
    }

    /// Inserts or replaces the row with the same id, returning the old row.
    pub fn insert(&mut self, member: Member) -> Option<Member> {
        self.rows.insert(member.id, member)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Member> for InMemoryMemberStore {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(|m| (m.id, m)).collect(),
        }
    }
}

impl MemberStore for InMemoryMemberStore {
    fn find_member(&self, id: MemberId) -> Option<Member> {
        let found = self.rows.get(&id).cloned();
        tracing::debug!("member lookup {} -> {}", id, found.is_some());
        found
    }
}

/// User table held in a map, keyed by primary key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    rows: HashMap<UserId, User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.insert(user);
        self
    }

    pub fn insert(&mut self, user: User) -> Option<User> {
        self.rows.insert(user.id, user)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<User> for InMemoryUserStore {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(|u| (u.id, u)).collect(),
        }
    }
}

impl UserStore for InMemoryUserStore {
    fn find_user(&self, id: UserId) -> Option<User> {
        let found = self.rows.get(&id).cloned();
        tracing::debug!("user lookup {} -> {}", id, found.is_some());
        found
    }
}
