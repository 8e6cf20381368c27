use std::sync::{Mutex, MutexGuard, PoisonError};
use user_admin_domain::ID;

/// Confirmation and alert dialogs, so that flows asking the user something
/// can run without a person in front of them.
pub trait IDialogs: Send + Sync {
    /// Asks a yes/no question. True means the user agreed.
    fn confirm(&self, question: &str) -> bool;
    /// Shows a message the user has to acknowledge
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    UserList,
    CreateUser,
    EditUser(ID),
}

pub trait INavigator: Send + Sync {
    fn navigate(&self, route: Route);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Dialogs answering every question the same way and remembering what was
/// shown
pub struct StubDialogs {
    answer: bool,
    questions: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl StubDialogs {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            questions: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(true)
    }

    pub fn declining() -> Self {
        Self::new(false)
    }

    pub fn questions(&self) -> Vec<String> {
        lock(&self.questions).clone()
    }

    pub fn notices(&self) -> Vec<String> {
        lock(&self.notices).clone()
    }
}

impl IDialogs for StubDialogs {
    fn confirm(&self, question: &str) -> bool {
        lock(&self.questions).push(question.to_string());
        self.answer
    }

    fn notify(&self, message: &str) {
        lock(&self.notices).push(message.to_string());
    }
}

/// Navigator that only remembers where it was sent
#[derive(Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Route> {
        lock(&self.history).clone()
    }

    pub fn last(&self) -> Option<Route> {
        lock(&self.history).last().copied()
    }
}

impl INavigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        lock(&self.history).push(route);
    }
}
