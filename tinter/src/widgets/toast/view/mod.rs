pub(crate) mod toast_banner;
