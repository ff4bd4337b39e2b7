use crate::error::OutOfBoundsError;
use crate::{Float, Hsl, Rgb};

/// The ten perceptual color categories.
///
/// A category buckets the continuum of colors by how people commonly name
/// them. Classification runs on HSL coordinates and checks lightness first:
/// very dark colors are [`Black`](Category::Black) and very light ones are
/// [`White`](Category::White) no matter their hue, weakly saturated colors in
/// between are [`Gray`](Category::Gray), and only the rest is bucketed by
/// hue. The hue circle wraps around, so magenta-adjacent hues at 320° and
/// beyond rejoin [`Red`](Category::Red).
///
/// Each category has a stable numeric code between 0 and 9, available
/// through [`Category::code`] and the `TryFrom<u8>` implementation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Category {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    Green = 3,
    Cyan = 4,
    Blue = 5,
    Purple = 6,
    White = 7,
    Gray = 8,
    Black = 9,
}

impl Category {
    /// Classify the given HSL coordinates.
    ///
    /// The hue is in degrees, saturation and lightness are percentages. The
    /// lightness cut-offs at 20 and 85 are inclusive on the dark side: a
    /// lightness of exactly 20 is black and one of exactly 85 still gets a
    /// chromatic bucket.
    pub fn of_hsl(h: Float, s: Float, l: Float) -> Self {
        use Category::*;

        if l <= 20.0 {
            Black
        } else if l > 85.0 {
            White
        } else if s < 20.0 {
            Gray
        } else if h < 26.0 {
            Red
        } else if h < 50.0 {
            Orange
        } else if h < 70.0 {
            Yellow
        } else if h < 165.0 {
            Green
        } else if h < 190.0 {
            Cyan
        } else if h < 265.0 {
            Blue
        } else if h < 320.0 {
            Purple
        } else {
            Red
        }
    }

    /// Classify the given color.
    pub fn of_rgb(color: &Rgb) -> Self {
        let Hsl { h, s, l } = color.to_hsl();
        Self::of_hsl(h, s, l)
    }

    /// Get an iterator over all categories, in order of their codes.
    pub fn all() -> impl Iterator<Item = Self> {
        use Category::*;

        [
            Red, Orange, Yellow, Green, Cyan, Blue, Purple, White, Gray, Black,
        ]
        .into_iter()
    }

    /// Get this category's numeric code.
    #[must_use = "method returns a new number and does not mutate this category"]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Get this category's human-readable name.
    #[must_use = "method returns a new string and does not mutate this category"]
    pub const fn name(&self) -> &'static str {
        use Category::*;

        match self {
            Red => "red",
            Orange => "orange",
            Yellow => "yellow",
            Green => "green",
            Cyan => "cyan",
            Blue => "blue",
            Purple => "purple",
            White => "white",
            Gray => "gray",
            Black => "black",
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = OutOfBoundsError;

    /// Try converting the numeric code to a category.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Category::*;

        Ok(match value {
            0 => Red,
            1 => Orange,
            2 => Yellow,
            3 => Green,
            4 => Cyan,
            5 => Blue,
            6 => Purple,
            7 => White,
            8 => Gray,
            9 => Black,
            _ => return Err(OutOfBoundsError::new(value, 0..=9)),
        })
    }
}

impl From<Category> for u8 {
    /// Convert the category to its numeric code.
    fn from(value: Category) -> Self {
        value.code()
    }
}

impl std::fmt::Display for Category {
    /// Display this category's name.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
