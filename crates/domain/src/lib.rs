pub mod pagination;
mod shared;
mod user;
pub mod validation;

pub use pagination::Paginator;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{InvalidJobError, Job, User};
pub use validation::{error_message, FieldErrors, FieldFailure, FieldRules};
