pub(crate) mod swatch_grid;
