pub mod autocomplete;
