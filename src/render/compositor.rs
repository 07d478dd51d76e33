use rayon::prelude::*;

use crate::assets::table::{AssetTable, PartVariant};
use crate::dna::genotype::AvatarDna;
use crate::foundation::core::Category;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::opts::RenderOpts;
use crate::render::raster::Raster;

/// Paints genotypes into rasters using a borrowed [`AssetTable`].
///
/// Rendering is pure: the same genotype and options always produce the same bytes, and a
/// compositor can be shared freely across threads.
#[derive(Clone, Copy, Debug)]
pub struct Compositor<'a> {
    table: &'a AssetTable,
}

impl Compositor<'static> {
    /// Compositor over the built-in asset table.
    pub fn builtin() -> Self {
        Self::new(AssetTable::builtin())
    }
}

impl<'a> Compositor<'a> {
    /// Compositor over `table`.
    pub fn new(table: &'a AssetTable) -> Self {
        Self { table }
    }

    /// Asset table this compositor draws from.
    pub fn table(&self) -> &'a AssetTable {
        self.table
    }

    /// Render `dna` into a square raster of side `opts.grid_size * opts.pixel_size`.
    ///
    /// Categories are painted back-to-front in [`Category::DRAW_ORDER`]; later parts overwrite
    /// earlier ones. Pixels whose offset position falls outside the grid are clipped. A category
    /// whose index does not address a variant is skipped with a warning.
    ///
    /// Only invalid options produce an error.
    #[tracing::instrument(skip_all, fields(dna = %dna))]
    pub fn render(&self, dna: &AvatarDna, opts: &RenderOpts) -> AvatarResult<Raster> {
        opts.validate()?;

        let mut raster = blank(opts);
        for category in Category::DRAW_ORDER {
            let index = dna.get(category);
            match self.table.variant(category, index) {
                Some(variant) => paint_variant(&mut raster, variant, opts),
                None => tracing::warn!(
                    %category,
                    index,
                    "variant index does not address a variant, skipping part"
                ),
            }
        }
        Ok(raster)
    }

    /// Render a single variant on its own, e.g. for a part-selector preview.
    pub fn render_part(
        &self,
        category: Category,
        index: u8,
        opts: &RenderOpts,
    ) -> AvatarResult<Raster> {
        opts.validate()?;
        let variant = self.table.variant(category, index).ok_or_else(|| {
            AvatarError::validation(format!("{category} variant {index} is outside 0-9"))
        })?;

        let mut raster = blank(opts);
        paint_variant(&mut raster, variant, opts);
        Ok(raster)
    }

    /// Render a batch of genotypes in parallel. Output order matches input order.
    #[tracing::instrument(skip_all, fields(count = dnas.len()))]
    pub fn render_many(&self, dnas: &[AvatarDna], opts: &RenderOpts) -> AvatarResult<Vec<Raster>> {
        opts.validate()?;
        dnas.par_iter().map(|dna| self.render(dna, opts)).collect()
    }
}

fn blank(opts: &RenderOpts) -> Raster {
    let side = opts.canvas_size();
    match opts.background {
        Some(color) => Raster::filled(side, side, color),
        None => Raster::new(side, side),
    }
}

fn paint_variant(raster: &mut Raster, variant: &PartVariant, opts: &RenderOpts) {
    let grid = f64::from(opts.grid_size);
    let scale = f64::from(opts.pixel_size);
    for p in variant.pixels() {
        let gx = f64::from(p.x) + opts.offset_x;
        let gy = f64::from(p.y) + opts.offset_y;
        if !(0.0..grid).contains(&gx) || !(0.0..grid).contains(&gy) {
            continue;
        }
        // Fractional offsets snap block origins to the nearest device pixel.
        let x0 = (gx * scale).round() as i64;
        let y0 = (gy * scale).round() as i64;
        raster.fill_rect(x0, y0, opts.pixel_size, opts.pixel_size, p.color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
