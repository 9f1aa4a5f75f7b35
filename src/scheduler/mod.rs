pub mod action_retention;
