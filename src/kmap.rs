//! Karnaugh-map layout and rendering.
//!
//! A map of `n` variables (1 ≤ n ≤ 4) places the first `n / 2` variables on
//! the rows and the remaining ones on the columns. Both axes walk their bits
//! in Gray-code order (`00, 01, 11, 10`), so any two orthogonally adjacent
//! cells, including across the wrap-around edges, differ in exactly one input.
//!
//! ```text
//! ab\cd │ 00  01  11  10
//! ──────┼───────────────
//!    00 │ 0   1   3   2
//!    01 │ 4   5   7   6
//!    11 │ 12  13  15  14
//!    10 │ 8   9   11  10
//! ```
//!
//! (cells shown as assignment indices)

use std::fmt;

use crate::enumerate::Enumeration;
use crate::types::Symbol;

/// Largest number of variables a map can show.
pub const MAX_VARIABLES: usize = 4;

/// The `i`-th reflected binary Gray code.
pub fn gray(i: usize) -> usize {
    i ^ (i >> 1)
}

fn names(vars: &[Symbol]) -> String {
    vars.iter().map(|v| v.to_string()).collect()
}

/// A renderable grid of one function's values.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KmapGrid {
    name: Symbol,
    row_vars: Vec<Symbol>,
    col_vars: Vec<Symbol>,
    values: Vec<bool>,
}

impl KmapGrid {
    pub fn name(&self) -> Symbol {
        self.name
    }

    pub fn row_vars(&self) -> &[Symbol] {
        &self.row_vars
    }

    pub fn col_vars(&self) -> &[Symbol] {
        &self.col_vars
    }

    pub fn num_rows(&self) -> usize {
        1 << self.row_vars.len()
    }

    pub fn num_cols(&self) -> usize {
        1 << self.col_vars.len()
    }

    /// Assignment index shown at `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        (gray(row) << self.col_vars.len()) | gray(col)
    }

    /// Function value shown at `(row, col)`.
    pub fn value(&self, row: usize, col: usize) -> bool {
        self.values[self.index(row, col)]
    }

    fn label(bits: usize, width: usize) -> String {
        if width == 0 {
            String::new()
        } else {
            format!("{:0width$b}", bits, width = width)
        }
    }
}

impl fmt::Display for KmapGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let corner = format!("{}\\{}", names(&self.row_vars), names(&self.col_vars));
        let w = corner.chars().count().max(self.row_vars.len());
        let cw = self.col_vars.len();

        let header: Vec<String> = (0..self.num_cols())
            .map(|c| Self::label(gray(c), cw))
            .collect();
        let body_width = header.len() * cw + (header.len() - 1) * 2;

        writeln!(f, "{:>w$} │ {}", corner, header.join("  "), w = w)?;
        write!(f, "{}┼{}", "─".repeat(w + 1), "─".repeat(body_width + 1))?;

        for r in 0..self.num_rows() {
            let cells: Vec<String> = (0..self.num_cols())
                .map(|c| format!("{:<cw$}", if self.value(r, c) { '1' } else { '0' }, cw = cw))
                .collect();
            write!(
                f,
                "\n{:>w$} │ {}",
                Self::label(gray(r), self.row_vars.len()),
                cells.join("  ").trim_end(),
                w = w
            )?;
        }
        Ok(())
    }
}

/// The outcome of a k-map request.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum KarnaughMap {
    Grid(KmapGrid),
    /// The function has no variables or more than [`MAX_VARIABLES`].
    Unrenderable { variables: usize },
}

impl KarnaughMap {
    /// Lay out target `target` of `enumeration`.
    ///
    /// Maps need between 1 and [`MAX_VARIABLES`] variables; anything else is
    /// reported as [`KarnaughMap::Unrenderable`].
    pub fn new(enumeration: &Enumeration, target: usize) -> Self {
        let n = enumeration.variables().len();
        if n == 0 || n > MAX_VARIABLES {
            return KarnaughMap::Unrenderable { variables: n };
        }

        let split = n / 2;
        KarnaughMap::Grid(KmapGrid {
            name: enumeration.targets()[target].name(),
            row_vars: enumeration.variables()[..split].to_vec(),
            col_vars: enumeration.variables()[split..].to_vec(),
            values: enumeration.column(target),
        })
    }

    /// Report a function too large to enumerate for a map at all.
    pub fn too_many(variables: usize) -> Self {
        KarnaughMap::Unrenderable { variables }
    }

    pub fn grid(&self) -> Option<&KmapGrid> {
        match self {
            KarnaughMap::Grid(grid) => Some(grid),
            KarnaughMap::Unrenderable { .. } => None,
        }
    }
}

impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KarnaughMap::Grid(grid) => write!(f, "{}", grid),
            KarnaughMap::Unrenderable { variables: 0 } => {
                write!(f, "Your expression has no variables! I can only display k-maps with 1 to 4 variables")
            }
            KarnaughMap::Unrenderable { .. } => write!(
                f,
                "Your expression has too many variables! I can only display k-maps with 4 or less variables"
            ),
        }
    }
}
