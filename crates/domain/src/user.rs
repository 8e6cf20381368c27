use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Job category of a `User`.
///
/// The wire names are the ones the users API speaks. The english names are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    #[serde(rename = "KERTESZ", alias = "GARDENER")]
    Gardener,
    #[serde(rename = "HENTES", alias = "BUTCHER")]
    Butcher,
    #[serde(rename = "PEK", alias = "BAKER")]
    Baker,
}

impl Job {
    pub const ALL: [Job; 3] = [Job::Gardener, Job::Butcher, Job::Baker];

    /// Human readable label for the job
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gardener => "Gardener",
            Self::Butcher => "Butcher",
            Self::Baker => "Baker",
        }
    }

    /// Name used on the wire by the users API
    pub fn as_wire_name(&self) -> &'static str {
        match self {
            Self::Gardener => "KERTESZ",
            Self::Butcher => "HENTES",
            Self::Baker => "PEK",
        }
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::Gardener
    }
}

impl Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidJobError {
    #[error("Job: {0} is not one of the known jobs")]
    Unknown(String),
}

impl FromStr for Job {
    type Err = InvalidJobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "KERTESZ" | "GARDENER" => Ok(Self::Gardener),
            "HENTES" | "BUTCHER" => Ok(Self::Butcher),
            "PEK" | "BAKER" => Ok(Self::Baker),
            _ => Err(InvalidJobError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: ID,
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub telephone: String,
    pub job: Job,
    pub active: bool,
}

impl User {
    /// Name in "lastname firstname" order, as shown in the user list
    pub fn full_name(&self) -> String {
        format!("{} {}", self.lastname, self.firstname)
    }
}

impl Entity for User {
    fn id(&self) -> ID {
        self.id
    }
}
