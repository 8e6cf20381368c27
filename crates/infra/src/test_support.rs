//! Fixtures for tests of crates built on top of the infra crate

use user_admin_domain::{Job, User, ID};

/// Builds a valid user for seeding the in-memory gateway
pub fn sample_user(id: i64) -> User {
    User {
        id: ID::new(id),
        firstname: format!("First{}", id),
        lastname: format!("Last{}", id),
        address: String::new(),
        telephone: String::new(),
        job: Job::default(),
        active: true,
    }
}
