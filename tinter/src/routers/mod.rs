pub(crate) mod palette;
pub(crate) mod picker;
pub(crate) mod toast;
