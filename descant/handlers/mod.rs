pub mod autocomplete;
pub mod check;
