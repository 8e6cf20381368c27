mod error;
mod user;

pub mod dtos {
    pub use crate::error::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::user::api::*;
