use user_admin_domain::User;
use user_admin_infra::GatewayError;

/// State of a create or edit page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Waiting for the record being edited
    Loading,
    Editing,
    Submitting,
}

/// Why a page refused to start an operation. Nothing was sent to the
/// users API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Another request of the same page is still in flight
    Busy,
    /// At least one form field is invalid
    Invalid,
    /// The record to work on has not been loaded
    NotLoaded,
    /// The user did not confirm
    Declined,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    Saved(User),
    Failed(GatewayError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Rejected(Rejection),
    Deleted,
    Failed(GatewayError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Rejected(Rejection),
    /// Number of users now held by the page, or 1 for a single record
    Loaded(usize),
    Failed(GatewayError),
}
