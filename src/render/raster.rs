use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::Rgba8;

const XXH3_SEED: u64 = 0x5eed_a7a7_d1a5_0001;

/// A rendered image as straight RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

/// Stable 128-bit content hash of a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RasterFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl Raster {
    /// Transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::TRANSPARENT)
    }

    /// Raster with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: color.to_array().repeat(len),
        }
    }

    /// Color at `(x, y)`, or `None` outside the raster or past the end of `data`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        match self.data.get(i..i + 4)? {
            &[r, g, b, a] => Some(Rgba8::rgba(r, g, b, a)),
            _ => None,
        }
    }

    /// `true` when width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Content fingerprint over dimensions and pixel bytes.
    pub fn fingerprint(&self) -> RasterFingerprint {
        let mut h = Xxh3::with_seed(XXH3_SEED);
        h.update(&self.width.to_le_bytes());
        h.update(&self.height.to_le_bytes());
        h.update(&self.data);
        let v = h.digest128();
        RasterFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }

    /// Overwrite the `w x h` block at `(x0, y0)` with `color`, clipped to the raster.
    pub(crate) fn fill_rect(&mut self, x0: i64, y0: i64, w: u32, h: u32, color: Rgba8) {
        let x_start = x0.max(0);
        let y_start = y0.max(0);
        let x_end = (x0 + i64::from(w)).min(i64::from(self.width));
        let y_end = (y0 + i64::from(h)).min(i64::from(self.height));
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        let rgba = color.to_array();
        for y in y_start..y_end {
            let row = self.offset(x_start as u32, y as u32);
            let span = (x_end - x_start) as usize * 4;
            for px in self.data[row..row + span].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
