//! Sticker layout of a triangular pyramid puzzle and its run-length notation.
//!
//! A surface holds nine triangular tiles, read top-down and left to right:
//!
//! ```text
//!         0
//!       1 2 3
//!     4 5 6 7 8
//! ```
//!
//! Each tile is written as its colour letter (`r`, `g`, `b`, `y`). A run of
//! three or more equal tiles is written once, followed by its length, so
//! `"rg3y3rr"` is `r g g g y y y r r`. A whole pyramid lists its front, right,
//! left and bottom surfaces separated by commas.

use std::fmt;
use std::str::FromStr;

use crate::algorithms::FaceColor;
use crate::error::{FacetError, Result};

pub const TILES_PER_SURFACE: usize = 9;

const CORNERS: [usize; 3] = [0, 4, 8];

fn notation_error(input: &str, reason: impl Into<String>) -> FacetError {
    FacetError::Notation {
        input: input.to_string(),
        reason: reason.into(),
    }
}

/// Run-length encode a colour sequence. Runs shorter than three are spelled out.
pub fn encode_runs(colors: &[FaceColor]) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < colors.len() {
        let color = colors[i];
        let run = colors[i..].iter().take_while(|&&c| c == color).count();
        if run >= 3 {
            out.push(color.letter());
            out.push_str(&run.to_string());
        } else {
            out.extend(std::iter::repeat_n(color.letter(), run));
        }
        i += run;
    }
    out
}

/// Expand run-length notation, refusing anything longer than `max` tiles
fn decode_runs(input: &str, max: usize) -> Result<Vec<FaceColor>> {
    let mut colors = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            return Err(notation_error(input, "run length must follow a colour letter"));
        }
        let color = FaceColor::from_letter(c)
            .ok_or_else(|| notation_error(input, format!("unknown colour {c:?}")))?;

        let mut run: Option<usize> = None;
        while let Some(d) = chars.peek().and_then(|d| d.to_digit(10)) {
            chars.next();
            run = Some(run.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        }
        let run = match run {
            Some(0) => return Err(notation_error(input, "run length of zero")),
            Some(n) => n,
            None => 1,
        };

        if colors.len().saturating_add(run) > max {
            return Err(notation_error(input, format!("more than {max} tiles")));
        }
        colors.extend(std::iter::repeat_n(color, run));
    }

    Ok(colors)
}

/// One face of the pyramid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Surface {
    tiles: [FaceColor; TILES_PER_SURFACE],
}

impl Surface {
    pub fn uniform(color: FaceColor) -> Self {
        Self {
            tiles: [color; TILES_PER_SURFACE],
        }
    }

    pub fn from_tiles(tiles: [FaceColor; TILES_PER_SURFACE]) -> Self {
        Self { tiles }
    }

    /// Build a surface from exactly nine colours in reading order
    pub fn from_colors(colors: &[FaceColor]) -> Result<Self> {
        let tiles: [FaceColor; TILES_PER_SURFACE] = colors.try_into().map_err(|_| {
            notation_error(
                &encode_runs(colors),
                format!("expected {TILES_PER_SURFACE} tiles, got {}", colors.len()),
            )
        })?;
        Ok(Self { tiles })
    }

    pub fn tiles(&self) -> &[FaceColor; TILES_PER_SURFACE] {
        &self.tiles
    }

    pub fn top(&self) -> FaceColor {
        self.tiles[0]
    }

    pub fn leftmost(&self) -> FaceColor {
        self.tiles[4]
    }

    pub fn rightmost(&self) -> FaceColor {
        self.tiles[8]
    }

    /// Every tile has the same colour
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(|&c| c == self.tiles[0])
    }

    /// Every tile except the three corners has the same colour
    pub fn is_solved_but_corners(&self) -> bool {
        let mut inner = (0..TILES_PER_SURFACE)
            .filter(|i| !CORNERS.contains(i))
            .map(|i| self.tiles[i]);
        match inner.next() {
            Some(first) => inner.all(|c| c == first),
            None => true,
        }
    }
}

impl FromStr for Surface {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self> {
        let colors = decode_runs(s, TILES_PER_SURFACE)?;
        if colors.len() != TILES_PER_SURFACE {
            return Err(notation_error(
                s,
                format!("expected {TILES_PER_SURFACE} tiles, got {}", colors.len()),
            ));
        }
        Self::from_colors(&colors)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_runs(&self.tiles))
    }
}

/// The pyramid standing on its bottom surface, one surface facing the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pyramid {
    pub front: Surface,
    pub right: Surface,
    pub left: Surface,
    pub bottom: Surface,
}

impl Pyramid {
    pub fn uniform(front: FaceColor, left: FaceColor, right: FaceColor, bottom: FaceColor) -> Self {
        Self {
            front: Surface::uniform(front),
            right: Surface::uniform(right),
            left: Surface::uniform(left),
            bottom: Surface::uniform(bottom),
        }
    }

    pub fn surfaces(&self) -> [&Surface; 4] {
        [&self.front, &self.right, &self.left, &self.bottom]
    }

    pub fn is_solved(&self) -> bool {
        self.surfaces().iter().all(|s| s.is_solved())
    }

    pub fn is_solved_but_corners(&self) -> bool {
        self.surfaces().iter().all(|s| s.is_solved_but_corners())
    }
}

impl FromStr for Pyramid {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        let [front, right, left, bottom] = parts.as_slice() else {
            return Err(notation_error(
                s,
                format!("expected 4 comma-separated surfaces, got {}", parts.len()),
            ));
        };

        Ok(Self {
            front: front.parse()?,
            right: right.parse()?,
            left: left.parse()?,
            bottom: bottom.parse()?,
        })
    }
}

impl fmt::Display for Pyramid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.front, self.right, self.left, self.bottom)
    }
}
