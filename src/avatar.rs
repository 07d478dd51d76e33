pub(crate) mod presenter;
