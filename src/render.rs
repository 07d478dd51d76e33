pub(crate) mod compositor;
pub(crate) mod opts;
pub(crate) mod raster;
