pub mod date;
pub mod logs;
pub mod validation;

#[cfg(test)]
pub(crate) mod fakes;
