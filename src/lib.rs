//! Deterministic pixel-avatar renderer driven by a six-part DNA string.
//!
//! A genotype ([`AvatarDna`]) picks one of ten authored variants for each of hair, face, neck,
//! clothing, hands and item. Its canonical text form is six digits joined by `-`, e.g.
//! `"3-1-4-1-5-9"`. The [`Compositor`] paints the selected variants back-to-front into a
//! [`Raster`], and [`PixelAvatar`] wraps that into a never-failing display component with PNG
//! export.
//!
//! ```
//! use pixel_avatar::{Compositor, RenderOpts, parse_dna};
//!
//! let dna = parse_dna("3-1-4-1-5-9")?;
//! let raster = Compositor::builtin().render(&dna, &RenderOpts::avatar())?;
//! assert_eq!((raster.width, raster.height), (144, 144));
//! # Ok::<(), pixel_avatar::AvatarError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod assets;
pub(crate) mod avatar;
pub(crate) mod dna;
pub(crate) mod encode;
pub(crate) mod render;

pub use crate::foundation::core::{CATEGORY_COUNT, Category, Rgba8, VARIANT_COUNT};
pub use crate::foundation::error::{AvatarError, AvatarResult, DnaFormatError};

pub use crate::assets::table::{AUTHORED_GRID_SIZE, AssetTable, CharacterPart, PartVariant, Pixel};
pub use crate::avatar::presenter::{AvatarOpts, DEFAULT_DISPLAY_SIZE, PixelAvatar};
pub use crate::dna::codec::{
    DNA_DELIMITER, format_dna, generate_random_dna, generate_random_dna_string,
    generate_random_dna_with, is_valid_dna, parse_dna,
};
pub use crate::dna::genotype::AvatarDna;
pub use crate::encode::png::{encode_png, save_png, scale_nearest, to_rgba_image};
pub use crate::render::compositor::Compositor;
pub use crate::render::opts::{
    DEFAULT_GRID_SIZE, DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y, DEFAULT_PIXEL_SIZE, MAX_CANVAS_SIDE,
    RenderOpts,
};
pub use crate::render::raster::{Raster, RasterFingerprint};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;
