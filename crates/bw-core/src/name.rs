//! Block names: category code, orientation digit, subcode, progressive number.
//!
//! `GEN0AA00` is category `GEN`, orientation `0`, subcode `AA`, number `00`.

use std::fmt;

use crate::error::{BlockError, BlockResult};
use crate::geometry::RotationStep;

/// Character position of the orientation digit.
pub const ORIENTATION_POS: usize = 3;
/// Shortest name from which every field can be read.
pub const MIN_NAME_LEN: usize = 8;
/// Orientation synthesized when a name has none.
pub const DEFAULT_ORIENTATION: char = '0';

/// A block name split into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockName {
    /// Three-letter category code.
    pub category: String,
    /// Orientation digit (0 for unrotated, 1-3 after a step).
    pub orientation: u8,
    /// Region or category subcode.
    pub subcode: String,
    /// Progressive number within the category.
    pub number: String,
}

impl BlockName {
    /// Split a name into fields, synthesizing a missing orientation digit.
    ///
    /// Only ASCII letters and digits are accepted. Rotated names become
    /// output file names, so separators and dots never get through.
    pub fn parse(name: &str) -> BlockResult<Self> {
        let chars: Vec<char> = ensure_orientation_digit(name).chars().collect();
        if chars.len() < MIN_NAME_LEN || !chars.iter().all(char::is_ascii_alphanumeric) {
            return Err(BlockError::MalformedName(name.to_string()));
        }
        let orientation = chars[ORIENTATION_POS]
            .to_digit(10)
            .ok_or_else(|| BlockError::MalformedName(name.to_string()))?;
        Ok(Self {
            category: chars[..ORIENTATION_POS].iter().collect(),
            orientation: orientation as u8,
            subcode: chars[ORIENTATION_POS + 1..ORIENTATION_POS + 3].iter().collect(),
            number: chars[ORIENTATION_POS + 3..].iter().collect(),
        })
    }

    /// The same name carrying the orientation digit for `step`.
    pub fn rotated(&self, step: RotationStep) -> Self {
        Self {
            orientation: step.index() + 1,
            ..self.clone()
        }
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.category, self.orientation, self.subcode, self.number
        )
    }
}

/// Whether the name carries a digit at the orientation position.
pub fn has_orientation_digit(name: &str) -> bool {
    name.chars()
        .nth(ORIENTATION_POS)
        .is_some_and(|c| c.is_ascii_digit())
}

/// Insert the default orientation digit when the name lacks one.
///
/// Names too short to reach the orientation position are returned unchanged.
pub fn ensure_orientation_digit(name: &str) -> String {
    if name.chars().count() < ORIENTATION_POS || has_orientation_digit(name) {
        return name.to_string();
    }
    let mut chars: Vec<char> = name.chars().collect();
    chars.insert(ORIENTATION_POS, DEFAULT_ORIENTATION);
    chars.into_iter().collect()
}

/// Rename a block for `step`: the orientation digit becomes `step + 1`.
pub fn normalize_name(name: &str, step: RotationStep) -> String {
    let ensured = ensure_orientation_digit(name);
    if !has_orientation_digit(&ensured) {
        return ensured;
    }
    ensured
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i == ORIENTATION_POS {
                step.orientation_digit()
            } else {
                c
            }
        })
        .collect()
}
