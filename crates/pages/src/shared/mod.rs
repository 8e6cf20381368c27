pub(crate) mod feedback;
pub mod outcome;
#[cfg(test)]
pub(crate) mod test_helpers;
