//! Shared components used by the screens.
pub mod action_link;
pub mod empty_state;
pub mod pagination_controls;
pub mod pico;
