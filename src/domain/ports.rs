use crate::domain::model::{Member, MemberId, User, UserId};
use std::rc::Rc;
use std::sync::Arc;

/// Lookup of front-end members by primary key.
pub trait MemberStore {
    fn find_member(&self, id: MemberId) -> Option<Member>;
}

/// Lookup of back-end users by primary key.
pub trait UserStore {
    fn find_user(&self, id: UserId) -> Option<User>;
}

impl<T: MemberStore + ?Sized> MemberStore for &T {
    fn find_member(&self, id: MemberId) -> Option<Member> {
        (**self).find_member(id)
    }
}

impl<T: MemberStore + ?Sized> MemberStore for Rc<T> {
    fn find_member(&self, id: MemberId) -> Option<Member> {
        (**self).find_member(id)
    }
}

impl<T: MemberStore + ?Sized> MemberStore for Arc<T> {
    fn find_member(&self, id: MemberId) -> Option<Member> {
        (**self).find_member(id)
    }
}

impl<T: UserStore + ?Sized> UserStore for &T {
    fn find_user(&self, id: UserId) -> Option<User> {
        (**self).find_user(id)
    }
}

impl<T: UserStore + ?Sized> UserStore for Rc<T> {
    fn find_user(&self, id: UserId) -> Option<User> {
        (**self).find_user(id)
    }
}

impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    fn find_user(&self, id: UserId) -> Option<User> {
        (**self).find_user(id)
    }
}
