use rand::Rng;

use crate::dna::genotype::AvatarDna;
use crate::foundation::core::{CATEGORY_COUNT, Category, VARIANT_COUNT};
use crate::foundation::error::{AvatarResult, DnaFormatError};

/// Separator between DNA segments.
pub const DNA_DELIMITER: char = '-';

/// Draw a genotype with every field uniform in `0..=9`, using the thread-local RNG.
pub fn generate_random_dna() -> AvatarDna {
    generate_random_dna_with(&mut rand::thread_rng())
}

/// Draw a genotype with every field uniform in `0..=9` from `rng`.
pub fn generate_random_dna_with<R: Rng + ?Sized>(rng: &mut R) -> AvatarDna {
    let mut parts = [0u8; CATEGORY_COUNT];
    for part in &mut parts {
        *part = rng.gen_range(0..VARIANT_COUNT as u8);
    }
    AvatarDna::from_parts_unchecked(parts)
}

/// Canonical text form: the six indices in DNA order joined by `-`.
///
/// Indices are not re-validated; an out-of-range field is written as its decimal value.
pub fn format_dna(dna: &AvatarDna) -> String {
    let [hair, face, neck, clothing, hands, item] = dna.parts();
    format!("{hair}-{face}-{neck}-{clothing}-{hands}-{item}")
}

/// Parse a DNA string such as `"0-1-2-3-4-5"`.
///
/// Fails when the string is empty, does not split into exactly six `-`-separated segments, or a
/// segment is not a base-10 number in `0..=9`. Segment errors carry the 1-based position, the
/// category and the segment text.
pub fn parse_dna(s: &str) -> AvatarResult<AvatarDna> {
    if s.is_empty() {
        return Err(DnaFormatError::Empty.into());
    }

    let segments: Vec<&str> = s.split(DNA_DELIMITER).collect();
    if segments.len() != CATEGORY_COUNT {
        return Err(DnaFormatError::SegmentCount {
            found: segments.len(),
        }
        .into());
    }

    let mut parts = [0u8; CATEGORY_COUNT];
    for ((slot, segment), category) in parts.iter_mut().zip(segments).zip(Category::ALL) {
        *slot = parse_segment(segment, category)?;
    }
    Ok(AvatarDna::from_parts_unchecked(parts))
}

/// `true` exactly when [`parse_dna`] would succeed.
pub fn is_valid_dna(s: &str) -> bool {
    parse_dna(s).is_ok()
}

/// Random genotype in canonical text form.
pub fn generate_random_dna_string() -> String {
    format_dna(&generate_random_dna())
}

fn parse_segment(segment: &str, category: Category) -> Result<u8, DnaFormatError> {
    let position = category.index() + 1;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DnaFormatError::NotANumber {
            position,
            category,
            segment: segment.to_owned(),
        });
    }

    // All-digit input only fails to parse on overflow, which is out of range as well.
    match segment.parse::<u32>() {
        Ok(v) if (v as usize) < VARIANT_COUNT => Ok(v as u8),
        _ => Err(DnaFormatError::OutOfRange {
            position,
            category,
            segment: segment.to_owned(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dna/codec.rs"]
mod tests;
