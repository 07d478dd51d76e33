use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::table::AssetTable;
use crate::dna::codec::{format_dna, parse_dna};
use crate::dna::genotype::AvatarDna;
use crate::encode::png::{encode_png, save_png, scale_nearest};
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::compositor::Compositor;
use crate::render::opts::{MAX_CANVAS_SIDE, RenderOpts};
use crate::render::raster::Raster;

/// Default on-screen side length in pixels.
pub const DEFAULT_DISPLAY_SIZE: u32 = 256;

/// Display and render settings for a [`PixelAvatar`].
///
/// Render fields sit at the top level next to `size`:
///
/// ```json
/// { "size": 128, "pixel_size": 6, "background": "#f0f0f0", "offset_x": -4 }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarOpts {
    /// On-screen side length in pixels.
    pub size: u32,
    /// Compositor parameters.
    #[serde(flatten)]
    pub render: RenderOpts,
}

impl Default for AvatarOpts {
    fn default() -> Self {
        Self {
            size: DEFAULT_DISPLAY_SIZE,
            render: RenderOpts::avatar(),
        }
    }
}

impl AvatarOpts {
    /// Return options with `size` replaced.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Return options with the render parameters replaced.
    pub fn with_render(mut self, render: RenderOpts) -> Self {
        self.render = render;
        self
    }

    /// Clamp `size` and the render parameters into renderable ranges.
    pub fn sanitized(self) -> Self {
        Self {
            size: self.size.clamp(1, MAX_CANVAS_SIDE),
            render: self.render.sanitized(),
        }
    }

    /// Parse options from JSON.
    pub fn from_json(s: &str) -> AvatarResult<Self> {
        serde_json::from_str(s).map_err(|e| AvatarError::serde(format!("avatar options json: {e}")))
    }
}

/// A rendered avatar bound to a DNA string.
///
/// Construction never fails: a malformed DNA string shows the neutral avatar and logs a warning,
/// and out-of-range options are clamped. The surface is kept at native resolution
/// (`grid_size * pixel_size`); [`PixelAvatar::display_raster`] scales it to `size`.
#[derive(Clone, Debug)]
pub struct PixelAvatar<'a> {
    compositor: Compositor<'a>,
    dna: String,
    genotype: AvatarDna,
    opts: AvatarOpts,
    surface: Raster,
}

impl PixelAvatar<'static> {
    /// Avatar drawn from the built-in asset table.
    pub fn new(dna: &str, opts: AvatarOpts) -> Self {
        Self::with_table(AssetTable::builtin(), dna, opts)
    }
}

impl<'a> PixelAvatar<'a> {
    /// Avatar drawn from a custom asset table.
    pub fn with_table(table: &'a AssetTable, dna: &str, opts: AvatarOpts) -> Self {
        let compositor = Compositor::new(table);
        let genotype = resolve_genotype(dna);
        let surface = paint(&compositor, &genotype, &opts.render);
        Self {
            compositor,
            dna: dna.to_owned(),
            genotype,
            opts,
            surface,
        }
    }

    /// Replace the DNA string. Returns `true` when the surface was re-rendered.
    ///
    /// Strings that resolve to the current genotype (e.g. `"01-0-0-0-0-0"` after
    /// `"1-0-0-0-0-0"`) are stored without repainting.
    pub fn set_dna(&mut self, dna: &str) -> bool {
        if self.dna == dna {
            return false;
        }
        self.dna = dna.to_owned();
        let genotype = resolve_genotype(dna);
        if genotype == self.genotype {
            return false;
        }
        self.genotype = genotype;
        self.repaint();
        true
    }

    /// Replace the options. Returns `true` when the surface was re-rendered.
    ///
    /// A change to `size` alone only affects [`PixelAvatar::display_raster`].
    pub fn set_opts(&mut self, opts: AvatarOpts) -> bool {
        let rerender = opts.render != self.opts.render;
        self.opts = opts;
        if rerender {
            self.repaint();
        }
        rerender
    }

    /// DNA string as last given.
    pub fn dna(&self) -> &str {
        &self.dna
    }

    /// Genotype being shown; neutral when the DNA string did not parse.
    pub fn genotype(&self) -> AvatarDna {
        self.genotype
    }

    /// Options as last given, before clamping.
    pub fn opts(&self) -> &AvatarOpts {
        &self.opts
    }

    /// Native-resolution render.
    pub fn surface(&self) -> &Raster {
        &self.surface
    }

    /// Surface scaled to `size x size` with hard pixel edges.
    pub fn display_raster(&self) -> AvatarResult<Raster> {
        scale_nearest(&self.surface, self.opts.sanitized().size)
    }

    /// Native-resolution surface as PNG bytes.
    pub fn to_png(&self) -> AvatarResult<Vec<u8>> {
        encode_png(&self.surface)
    }

    /// Write the native-resolution surface to `path` as PNG.
    pub fn export_png(&self, path: impl AsRef<Path>) -> AvatarResult<()> {
        save_png(&self.surface, path.as_ref())
    }

    /// Suggested download name, `pixel-avatar-<dna>.png`, using the shown genotype.
    pub fn file_name(&self) -> String {
        format!("pixel-avatar-{}.png", format_dna(&self.genotype))
    }

    fn repaint(&mut self) {
        tracing::debug!(dna = %self.genotype, "re-rendering avatar");
        self.surface = paint(&self.compositor, &self.genotype, &self.opts.render);
    }
}

fn resolve_genotype(dna: &str) -> AvatarDna {
    match parse_dna(dna) {
        Ok(genotype) => genotype,
        Err(err) => {
            tracing::warn!(dna, %err, "invalid DNA string, using the neutral avatar");
            AvatarDna::NEUTRAL
        }
    }
}

fn paint(compositor: &Compositor<'_>, genotype: &AvatarDna, opts: &RenderOpts) -> Raster {
    let opts = opts.sanitized();
    match compositor.render(genotype, &opts) {
        Ok(raster) => raster,
        Err(err) => {
            tracing::warn!(%err, "render failed, showing a blank surface");
            let side = opts.canvas_size();
            Raster::new(side, side)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/presenter.rs"]
mod tests;
