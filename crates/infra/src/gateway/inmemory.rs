use super::{GatewayError, IUserGateway};
use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
};
use user_admin_api_structs::{create_user, dtos::ValidationErrorResponse, update_user};
use user_admin_domain::{
    error_message,
    validation::{CONTACT_RULES, NAME_RULES},
    Entity, User, ID,
};

/// A call that reached the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayCall {
    ListAll,
    Get(ID),
    Create,
    Update(ID),
    Delete(ID),
}

/// In-memory stand-in for the users API.
///
/// Keeps users in insertion order, assigns sequential ids, validates payloads
/// the way the server does and records every call. Failures can be queued
/// with `fail_next` and are returned by the next calls in order.
pub struct InMemoryUserGateway {
    users: Mutex<Vec<User>>,
    /// None once every id has been handed out
    next_id: Mutex<Option<i64>>,
    calls: Mutex<Vec<GatewayCall>>,
    failures: Mutex<VecDeque<GatewayError>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryUserGateway {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .map(|u| u.id().inner())
            .max()
            .unwrap_or(0)
            .checked_add(1);
        Self {
            users: Mutex::new(users),
            next_id: Mutex::new(next_id),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
        }
    }

    /// Makes the next call fail with `error`
    pub fn fail_next(&self, error: GatewayError) {
        lock(&self.failures).push_back(error);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        lock(&self.calls).clone()
    }

    pub fn count_calls(&self, call: GatewayCall) -> usize {
        lock(&self.calls).iter().filter(|c| **c == call).count()
    }

    pub fn users(&self) -> Vec<User> {
        lock(&self.users).clone()
    }

    fn begin(&self, call: GatewayCall) -> Result<(), GatewayError> {
        lock(&self.calls).push(call);
        match lock(&self.failures).pop_front() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn find(&self, user_id: ID) -> Option<User> {
        lock(&self.users).iter().find(|u| u.id() == user_id).cloned()
    }
}

impl Default for InMemoryUserGateway {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks a payload with the same rules the users API applies
fn validate(
    firstname: &str,
    lastname: &str,
    address: &str,
    telephone: &str,
    path: &str,
) -> Result<(), GatewayError> {
    let mut res = ValidationErrorResponse::new(400, "Bad Request", "Validation failed", path);
    let fields = [
        ("firstname", firstname, NAME_RULES),
        ("lastname", lastname, NAME_RULES),
        ("address", address, CONTACT_RULES),
        ("telephone", telephone, CONTACT_RULES),
    ];
    for (field, value, rules) in fields.iter() {
        let errors = rules.check(value);
        if !errors.is_empty() {
            res.add_field_error(field, &error_message(&errors, true));
        }
    }

    if res.errors.is_empty() {
        Ok(())
    } else {
        Err(GatewayError::Validation(res))
    }
}

#[async_trait::async_trait]
impl IUserGateway for InMemoryUserGateway {
    async fn list_all(&self) -> Result<Vec<User>, GatewayError> {
        self.begin(GatewayCall::ListAll)?;
        Ok(self.users())
    }

    async fn get(&self, user_id: ID) -> Result<User, GatewayError> {
        self.begin(GatewayCall::Get(user_id))?;
        self.find(user_id).ok_or(GatewayError::NotFound(user_id))
    }

    async fn create(&self, body: create_user::RequestBody) -> Result<User, GatewayError> {
        self.begin(GatewayCall::Create)?;
        validate(
            &body.firstname,
            &body.lastname,
            &body.address,
            &body.telephone,
            "/api/users",
        )?;

        let id = {
            let mut next_id = lock(&self.next_id);
            let id = next_id
                .ok_or_else(|| GatewayError::Transport("No user ids left".into()))?;
            *next_id = id.checked_add(1);
            ID::new(id)
        };
        let user = User {
            id,
            firstname: body.firstname,
            lastname: body.lastname,
            address: body.address,
            telephone: body.telephone,
            job: body.job,
            active: true,
        };
        lock(&self.users).push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        user_id: ID,
        body: update_user::RequestBody,
    ) -> Result<User, GatewayError> {
        self.begin(GatewayCall::Update(user_id))?;
        validate(
            &body.firstname,
            &body.lastname,
            &body.address,
            &body.telephone,
            &format!("/api/users/{}", user_id),
        )?;

        let mut users = lock(&self.users);
        let user = users
            .iter_mut()
            .find(|u| u.id() == user_id)
            .ok_or(GatewayError::NotFound(user_id))?;
        user.firstname = body.firstname;
        user.lastname = body.lastname;
        user.address = body.address;
        user.telephone = body.telephone;
        user.job = body.job;
        user.active = body.active;
        Ok(user.clone())
    }

    async fn delete(&self, user_id: ID) -> Result<(), GatewayError> {
        self.begin(GatewayCall::Delete(user_id))?;
        let mut users = lock(&self.users);
        match users.iter().position(|u| u.id() == user_id) {
            Some(index) => {
                users.remove(index);
                Ok(())
            }
            None => Err(GatewayError::NotFound(user_id)),
        }
    }
}
