//! Bounds attribute parsing.
//!
//! uiautomator dumps attach a `bounds` attribute to each node describing the
//! top-left and bottom-right corners of the element on screen, with the value
//! having the form `[x1,y1][x2,y2]`.

use thiserror::Error;

/// A pixel position on the screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// Screen rectangle of a UI element, as top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub top_left: Coordinate,
    pub bottom_right: Coordinate,
}

/// Error type for a malformed `bounds` attribute value.
#[derive(Debug, Error)]
pub enum ParseBoundsError {
    #[error("expected at least 4 integers in {value:?}, found {found}")]
    TooFewIntegers { value: String, found: usize },

    #[error("integer out of range in {value:?}")]
    OutOfRange { value: String },
}

impl Bounds {
    /// Parse a `bounds` attribute value.
    ///
    /// Scans left to right, taking each maximal run of consecutive ASCII
    /// digits as one integer. The first four integers are `x1, y1, x2, y2`;
    /// anything after that is ignored, and the characters between integers
    /// are arbitrary.
    pub fn parse(value: &str) -> Result<Bounds, ParseBoundsError> {
        let mut nums = Vec::with_capacity(4);
        let bytes = value.as_bytes();
        let mut start = 0;

        while start < bytes.len() && nums.len() < 4 {
            if bytes[start].is_ascii_digit() {
                let mut end = start + 1;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                let num: i32 = value[start..end].parse().map_err(|_| {
                    ParseBoundsError::OutOfRange { value: value.to_string() }
                })?;
                nums.push(num);
                start = end;
            } else {
                start += 1;
            }
        }

        if nums.len() < 4 {
            return Err(ParseBoundsError::TooFewIntegers {
                value: value.to_string(),
                found: nums.len(),
            });
        }

        Ok(Bounds {
            top_left: Coordinate { x: nums[0], y: nums[1] },
            bottom_right: Coordinate { x: nums[2], y: nums[3] },
        })
    }
}
