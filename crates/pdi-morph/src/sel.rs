//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element is a square, odd-sized boolean matrix whose origin
//! is the exact center cell. Member cells are [`SelElement::Hit`].

use crate::{MorphError, MorphResult};

/// Size used by the factories when the requested size is invalid
pub const DEFAULT_SEL_SIZE: u32 = 3;

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelElement {
    /// Not a member - this position is ignored
    #[default]
    DontCare = 0,
    /// Member of the neighborhood
    Hit = 1,
}

/// Structuring Element (SEL)
///
/// Defines the neighborhood pattern for morphological operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    size: u32,
    data: Vec<SelElement>,
}

/// Replace an even or too-small size with the default, logging it.
fn checked_size(size: u32, factory: &str) -> u32 {
    if size < 3 || size % 2 == 0 {
        log::warn!(
            "{}: structuring element size {} must be odd and >= 3, using {}",
            factory,
            size,
            DEFAULT_SEL_SIZE
        );
        DEFAULT_SEL_SIZE
    } else {
        size
    }
}

impl Sel {
    /// Create a square structuring element with all hits
    ///
    /// A size that is even or below 3 falls back to 3.
    pub fn create_square(size: u32) -> Self {
        let size = checked_size(size, "create_square");
        Sel {
            size,
            data: vec![SelElement::Hit; (size * size) as usize],
        }
    }

    /// Create a cross (+) structuring element
    ///
    /// Only the center row and center column are hits. A size that is even
    /// or below 3 falls back to 3.
    pub fn create_cross(size: u32) -> Self {
        let size = checked_size(size, "create_cross");
        let c = size / 2;
        let mut data = vec![SelElement::DontCare; (size * size) as usize];
        for i in 0..size {
            data[(c * size + i) as usize] = SelElement::Hit;
            data[(i * size + c) as usize] = SelElement::Hit;
        }
        Sel { size, data }
    }

    /// Create a structuring element from a string pattern
    ///
    /// Rows are separated by newlines; `x` marks a hit and `.` a
    /// non-member. Surrounding whitespace on each row is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] if the pattern is empty, not
    /// square, even-sized, or contains other characters.
    ///
    /// # Example
    ///
    /// ```
    /// use pdi_morph::Sel;
    ///
    /// let sel = Sel::from_string(".x.\nxxx\n.x.").unwrap();
    /// assert_eq!(sel, Sel::create_cross(3));
    /// ```
    pub fn from_string(pattern: &str) -> MorphResult<Self> {
        let rows: Vec<&str> = pattern
            .lines()
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        let size = rows.len();
        if size == 0 || size % 2 == 0 {
            return Err(MorphError::InvalidSel(format!(
                "pattern must have an odd number of rows, got {}",
                size
            )));
        }

        let mut data = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return Err(MorphError::InvalidSel(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    size
                )));
            }
            for ch in row.chars() {
                data.push(match ch {
                    'x' | 'X' => SelElement::Hit,
                    '.' => SelElement::DontCare,
                    other => {
                        return Err(MorphError::InvalidSel(format!(
                            "unexpected character '{}' in row {}",
                            other, y
                        )));
                    }
                });
            }
        }

        Ok(Sel {
            size: size as u32,
            data,
        })
    }

    /// Get the side length
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the distance from the center to an edge (`size / 2`)
    #[inline]
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Get an element at (x, y)
    #[inline]
    pub fn get_element(&self, x: u32, y: u32) -> Option<SelElement> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.data[(y * self.size + x) as usize])
    }

    /// Get raw element data
    pub fn data(&self) -> &[SelElement] {
        &self.data
    }

    /// Count the number of hit elements
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&e| e == SelElement::Hit).count()
    }

    /// Create the reflected (180-degree rotated) SEL
    pub fn reflect(&self) -> Self {
        let mut data = self.data.clone();
        data.reverse();
        Sel {
            size: self.size,
            data,
        }
    }

    /// Check whether the SEL equals its reflection
    pub fn is_symmetric(&self) -> bool {
        self.data.iter().eq(self.data.iter().rev())
    }

    /// Iterate over hit positions relative to the center
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let c = self.radius() as i32;
        let size = self.size;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &elem)| {
                if elem == SelElement::Hit {
                    let x = (idx as u32 % size) as i32;
                    let y = (idx as u32 / size) as i32;
                    Some((x - c, y - c))
                } else {
                    None
                }
            })
    }
}
