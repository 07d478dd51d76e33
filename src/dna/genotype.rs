use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dna::codec::{format_dna, parse_dna};
use crate::foundation::core::{CATEGORY_COUNT, Category, VARIANT_COUNT};
use crate::foundation::error::{AvatarError, AvatarResult};

/// The six-integer genotype that fully describes one avatar.
///
/// Each field selects a variant of its category and is expected to lie in `0..=9`. Fields are
/// public, so an out-of-range value can be constructed; the compositor skips such parts instead
/// of failing. Changes always produce a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AvatarDna {
    /// Hair variant.
    pub hair: u8,
    /// Face variant.
    pub face: u8,
    /// Neck variant.
    pub neck: u8,
    /// Clothing variant.
    pub clothing: u8,
    /// Hands variant.
    pub hands: u8,
    /// Item variant.
    pub item: u8,
}

impl AvatarDna {
    /// The neutral avatar, `0-0-0-0-0-0`.
    pub const NEUTRAL: AvatarDna = AvatarDna {
        hair: 0,
        face: 0,
        neck: 0,
        clothing: 0,
        hands: 0,
        item: 0,
    };

    /// Build a genotype from indices in DNA order, rejecting values outside `0..=9`.
    pub fn from_parts(parts: [u8; CATEGORY_COUNT]) -> AvatarResult<Self> {
        let dna = Self::from_parts_unchecked(parts);
        if let Some(category) = dna.first_out_of_range() {
            return Err(AvatarError::validation(format!(
                "{category} variant {} is outside 0-9",
                dna.get(category)
            )));
        }
        Ok(dna)
    }

    pub(crate) fn from_parts_unchecked(parts: [u8; CATEGORY_COUNT]) -> Self {
        let [hair, face, neck, clothing, hands, item] = parts;
        Self {
            hair,
            face,
            neck,
            clothing,
            hands,
            item,
        }
    }

    /// Indices in DNA order: hair, face, neck, clothing, hands, item.
    pub fn parts(&self) -> [u8; CATEGORY_COUNT] {
        [
            self.hair,
            self.face,
            self.neck,
            self.clothing,
            self.hands,
            self.item,
        ]
    }

    /// Selected variant index for `category`.
    pub fn get(&self, category: Category) -> u8 {
        self.parts()[category.index()]
    }

    /// Copy with `category` set to `index`.
    pub fn with_part(self, category: Category, index: u8) -> AvatarResult<Self> {
        if usize::from(index) >= VARIANT_COUNT {
            return Err(AvatarError::validation(format!(
                "{category} variant {index} is outside 0-9"
            )));
        }
        let mut parts = self.parts();
        parts[category.index()] = index;
        Ok(Self::from_parts_unchecked(parts))
    }

    /// Copy with `category` advanced to its next variant, wrapping `9 -> 0`.
    pub fn cycled(self, category: Category) -> Self {
        let mut parts = self.parts();
        let next = (usize::from(parts[category.index()]) + 1) % VARIANT_COUNT;
        parts[category.index()] = next as u8;
        Self::from_parts_unchecked(parts)
    }

    /// First category (in DNA order) whose index is outside `0..=9`.
    pub fn first_out_of_range(&self) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|&c| usize::from(self.get(c)) >= VARIANT_COUNT)
    }

    /// `true` when every index lies in `0..=9`.
    pub fn is_in_range(&self) -> bool {
        self.first_out_of_range().is_none()
    }
}

impl fmt::Display for AvatarDna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_dna(self))
    }
}

impl FromStr for AvatarDna {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dna(s)
    }
}

impl Serialize for AvatarDna {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format_dna(self))
    }
}

impl<'de> Deserialize<'de> for AvatarDna {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_dna(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dna/genotype.rs"]
mod tests;
