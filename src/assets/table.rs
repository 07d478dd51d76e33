use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{CATEGORY_COUNT, Category, Rgba8, VARIANT_COUNT};
use crate::foundation::error::{AvatarError, AvatarResult};

/// Grid size the built-in parts are authored on.
pub const AUTHORED_GRID_SIZE: u32 = 32;

const BUILTIN_JSON: &str = include_str!("parts.json");

static BUILTIN: LazyLock<AssetTable> = LazyLock::new(|| {
    AssetTable::from_json(BUILTIN_JSON).expect("embedded parts.json follows the asset schema")
});

/// One authored cell: grid column, grid row and color.
///
/// Serialized as `[x, y, "#rrggbb"]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32, Rgba8)", into = "(i32, i32, Rgba8)")]
pub struct Pixel {
    /// Grid column.
    pub x: i32,
    /// Grid row.
    pub y: i32,
    /// Cell color.
    pub color: Rgba8,
}

impl Pixel {
    /// Build a pixel.
    pub fn new(x: i32, y: i32, color: Rgba8) -> Self {
        Self { x, y, color }
    }
}

impl From<(i32, i32, Rgba8)> for Pixel {
    fn from((x, y, color): (i32, i32, Rgba8)) -> Self {
        Self { x, y, color }
    }
}

impl From<Pixel> for (i32, i32, Rgba8) {
    fn from(p: Pixel) -> Self {
        (p.x, p.y, p.color)
    }
}

/// One drawable style of a part: pixels in authored order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartVariant {
    pixels: Vec<Pixel>,
}

impl PartVariant {
    /// Build a variant from pixels in draw order.
    pub fn new(pixels: Vec<Pixel>) -> Self {
        Self { pixels }
    }

    /// Pixels in draw order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Number of authored pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// `true` for a variant that paints nothing (e.g. "no item").
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// All ten variants of one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterPart {
    category: Category,
    variants: Vec<PartVariant>,
}

impl CharacterPart {
    /// Category this part belongs to.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Variant at `index`, if it exists.
    pub fn variant(&self, index: u8) -> Option<&PartVariant> {
        self.variants.get(usize::from(index))
    }

    /// All variants, indexed `0..=9`.
    pub fn variants(&self) -> &[PartVariant] {
        &self.variants
    }
}

/// Read-only mapping from category and index to pixel lists.
///
/// Every table holds exactly six categories of exactly ten variants. Tables are immutable once
/// built and safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetTable {
    grid_size: u32,
    parts: [CharacterPart; CATEGORY_COUNT],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableDoc {
    #[serde(default = "default_grid")]
    grid: u32,
    parts: BTreeMap<Category, Vec<PartVariant>>,
}

fn default_grid() -> u32 {
    AUTHORED_GRID_SIZE
}

impl AssetTable {
    /// The built-in table, parsed on first use.
    pub fn builtin() -> &'static AssetTable {
        &BUILTIN
    }

    /// Build a table, checking the six-category, ten-variant schema.
    pub fn new(
        grid_size: u32,
        mut parts: BTreeMap<Category, Vec<PartVariant>>,
    ) -> AvatarResult<Self> {
        if grid_size == 0 {
            return Err(AvatarError::asset("authored grid size must be > 0"));
        }

        let mut out = Vec::with_capacity(CATEGORY_COUNT);
        for category in Category::ALL {
            let variants = parts.remove(&category).ok_or_else(|| {
                AvatarError::asset(format!("missing part category \"{category}\""))
            })?;
            if variants.len() != VARIANT_COUNT {
                return Err(AvatarError::asset(format!(
                    "part category \"{category}\" must have exactly {VARIANT_COUNT} variants, found {}",
                    variants.len()
                )));
            }
            out.push(CharacterPart { category, variants });
        }

        let parts: [CharacterPart; CATEGORY_COUNT] = out
            .try_into()
            .map_err(|_| AvatarError::asset("asset table must have six part categories"))?;
        Ok(Self { grid_size, parts })
    }

    /// Parse a table from its JSON document form.
    ///
    /// The document is `{"grid": 32, "parts": {"hair": [[[x, y, "#rrggbb"], ...], ...], ...}}`;
    /// `grid` is optional and defaults to 32.
    pub fn from_json(s: &str) -> AvatarResult<Self> {
        let doc: TableDoc = serde_json::from_str(s)
            .map_err(|e| AvatarError::serde(format!("asset table json: {e}")))?;
        let table = Self::new(doc.grid, doc.parts)?;
        tracing::debug!(
            grid = table.grid_size,
            pixels = table.pixel_count(),
            "asset table loaded"
        );
        Ok(table)
    }

    /// Read and parse a JSON asset table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read asset table '{}'", path.display()))?;
        Self::from_json(&s)
    }

    /// Grid size (units per side) the parts were authored on.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// All variants of `category`.
    pub fn part(&self, category: Category) -> &CharacterPart {
        &self.parts[category.index()]
    }

    /// Variant `index` of `category`, or `None` when `index` is outside `0..=9`.
    pub fn variant(&self, category: Category, index: u8) -> Option<&PartVariant> {
        self.part(category).variant(index)
    }

    /// Total number of authored pixels across all variants.
    pub fn pixel_count(&self) -> usize {
        self.parts
            .iter()
            .flat_map(|p| p.variants.iter())
            .map(PartVariant::len)
            .sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/table.rs"]
mod tests;
