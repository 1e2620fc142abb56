pub mod floating_button;
pub mod item;
pub mod layout;
