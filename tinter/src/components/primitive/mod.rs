pub(crate) mod action_button;
