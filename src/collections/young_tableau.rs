//! Bounded min-priority matrix (Young tableau).
//!
//! An `R × C` grid whose rows are sorted left to right and whose columns are
//! sorted top to bottom. Empty cells are treated as larger than any stored
//! value, so the minimum always sits in the top-left corner and the empty
//! cells form a staircase anchored at the bottom-right corner.
//!
//! # Algorithm
//!
//! - **insert**: place the value in the bottom-right cell and sift it up/left,
//!   swapping with the larger of the upper and left neighbours while that
//!   neighbour is greater than the value.
//! - **extract_min**: remove the top-left value and sift the hole down/right,
//!   pulling in the smaller of the lower and right neighbours.
//! - **find**: staircase walk from the top-right corner.
//!
//! Every operation is O(R + C).
//!
//! # References
//!
//! - Cormen, Leiserson, Rivest & Stein (2009), *Introduction to Algorithms*,
//!   3rd ed., Problem 6-3.

use std::fmt;

/// Errors returned by [`YoungTableau`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableauError {
    /// A dimension passed to [`YoungTableau::new`] was zero (or the capacity
    /// overflowed `usize`).
    InvalidDimension { rows: usize, cols: usize },
    /// `extract_min` on a tableau with no entries.
    Empty,
    /// `insert` on a tableau holding `capacity` entries.
    Full { capacity: usize },
    /// The value cannot be ordered against itself (e.g. `f64::NAN`).
    InvalidValue,
    /// Accessor used with coordinates outside the grid.
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for TableauError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableauError::InvalidDimension { rows, cols } => {
                write!(f, "invalid tableau dimensions {rows}x{cols}")
            }
            TableauError::Empty => write!(f, "tableau is empty"),
            TableauError::Full { capacity } => {
                write!(f, "tableau is full (capacity {capacity})")
            }
            TableauError::InvalidValue => write!(f, "value is not orderable"),
            TableauError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({row}, {col}) out of range for {rows}x{cols} tableau"
            ),
        }
    }
}

impl std::error::Error for TableauError {}

/// `a < b`, where an absent cell compares greater than every present value.
fn cell_lt<T: PartialOrd>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => x < y,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Fixed-capacity min-priority container backed by a sorted grid.
///
/// # Examples
/// ```
/// use young_tableau::collections::YoungTableau;
///
/// let mut t = YoungTableau::new(2, 2).unwrap();
/// for v in [5, 2, 8, 1] {
///     t.insert(v).unwrap();
/// }
/// assert!(t.is_full());
/// assert_eq!(t.peek_min(), Some(&1));
/// assert!(t.find(&8).is_some());
///
/// assert_eq!(t.extract_min(), Ok(1));
/// assert_eq!(t.extract_min(), Ok(2));
/// assert_eq!(t.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct YoungTableau<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
    len: usize,
}

impl<T: PartialOrd> YoungTableau<T> {
    /// Creates an empty `rows × cols` tableau.
    ///
    /// # Errors
    /// [`TableauError::InvalidDimension`] if either dimension is zero.
    ///
    /// # Complexity
    /// O(R·C)
    pub fn new(rows: usize, cols: usize) -> Result<Self, TableauError> {
        let capacity = rows
            .checked_mul(cols)
            .filter(|&cap| cap > 0)
            .ok_or(TableauError::InvalidDimension { rows, cols })?;

        let mut cells = Vec::with_capacity(capacity);
        cells.resize_with(capacity, || None);

        Ok(Self {
            rows,
            cols,
            cells,
            len: 0,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Maximum number of entries (`rows × cols`).
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the top-left cell is absent.
    pub fn is_empty(&self) -> bool {
        self.cells[0].is_none()
    }

    /// Returns `true` if the bottom-right cell is present.
    pub fn is_full(&self) -> bool {
        self.cells[self.cells.len() - 1].is_some()
    }

    /// Returns the smallest entry without removing it.
    pub fn peek_min(&self) -> Option<&T> {
        self.cells[0].as_ref()
    }

    /// Removes and returns the smallest entry.
    ///
    /// When the lower and right neighbours of the hole are equal, the lower
    /// one moves up.
    ///
    /// # Errors
    /// [`TableauError::Empty`] if there is nothing to extract.
    ///
    /// # Complexity
    /// O(R + C)
    pub fn extract_min(&mut self) -> Result<T, TableauError> {
        let min = self.cells[0].take().ok_or(TableauError::Empty)?;
        self.len -= 1;
        self.sift_down();
        Ok(min)
    }

    /// Inserts a value.
    ///
    /// When the upper and left neighbours are equal and both greater than
    /// the value, the value swaps with the left one.
    ///
    /// # Errors
    /// - [`TableauError::InvalidValue`] if `value` is unordered (NaN).
    /// - [`TableauError::Full`] if the tableau is at capacity.
    ///
    /// # Complexity
    /// O(R + C)
    pub fn insert(&mut self, value: T) -> Result<(), TableauError> {
        if value.partial_cmp(&value).is_none() {
            return Err(TableauError::InvalidValue);
        }
        if self.is_full() {
            return Err(TableauError::Full {
                capacity: self.capacity(),
            });
        }

        let last = self.cells.len() - 1;
        self.cells[last] = Some(value);
        self.len += 1;
        self.sift_up();
        Ok(())
    }

    /// Locates `value`, returning its `(row, col)`.
    ///
    /// Starts at the top-right corner: moves left past cells that are absent
    /// or greater, and down past cells that are smaller.
    ///
    /// # Complexity
    /// O(R + C)
    ///
    /// # Examples
    /// ```
    /// use young_tableau::collections::YoungTableau;
    ///
    /// let mut t = YoungTableau::new(3, 3).unwrap();
    /// for v in [1, 3, 5, 7, 9] {
    ///     t.insert(v).unwrap();
    /// }
    /// let (r, c) = t.find(&7).unwrap();
    /// assert_eq!(t.get(r, c), Ok(Some(&7)));
    /// assert_eq!(t.find(&4), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<(usize, usize)> {
        let (mut r, mut c) = (0, self.cols - 1);
        loop {
            let step_left = match self.cell(r, c) {
                None => true,
                Some(x) => match x.partial_cmp(value)? {
                    std::cmp::Ordering::Equal => return Some((r, c)),
                    std::cmp::Ordering::Greater => true,
                    std::cmp::Ordering::Less => false,
                },
            };

            if step_left {
                if c == 0 {
                    return None;
                }
                c -= 1;
            } else {
                r += 1;
                if r == self.rows {
                    return None;
                }
            }
        }
    }

    /// Returns `true` if `value` is stored in the tableau.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Read-only view of row `r`; `None` marks an absent cell.
    ///
    /// # Errors
    /// [`TableauError::IndexOutOfRange`] if `r >= rows()`.
    pub fn row(&self, r: usize) -> Result<&[Option<T>], TableauError> {
        if r >= self.rows {
            return Err(self.out_of_range(r, 0));
        }
        let start = r * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Read-only access to cell `(r, c)`; `Ok(None)` for an absent cell.
    ///
    /// # Errors
    /// [`TableauError::IndexOutOfRange`] if either coordinate is outside the grid.
    pub fn get(&self, r: usize, c: usize) -> Result<Option<&T>, TableauError> {
        if r >= self.rows || c >= self.cols {
            return Err(self.out_of_range(r, c));
        }
        Ok(self.cell(r, c).as_ref())
    }

    /// Iterates over the stored entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter().filter_map(Option::as_ref)
    }

    /// Removes every entry, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.len = 0;
    }

    /// Drains the tableau into an ascending vector.
    ///
    /// # Complexity
    /// O(n·(R + C)) for `n` stored entries.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Ok(v) = self.extract_min() {
            sorted.push(v);
        }
        sorted
    }

    fn cell(&self, r: usize, c: usize) -> &Option<T> {
        &self.cells[r * self.cols + c]
    }

    fn swap(&mut self, (r1, c1): (usize, usize), (r2, c2): (usize, usize)) {
        self.cells.swap(r1 * self.cols + c1, r2 * self.cols + c2);
    }

    fn out_of_range(&self, row: usize, col: usize) -> TableauError {
        TableauError::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Pushes the hole at the top-left corner towards the staircase.
    fn sift_down(&mut self) {
        let (mut r, mut c) = (0, 0);
        loop {
            let mut next = (r, c);
            if r + 1 < self.rows && cell_lt(self.cell(r + 1, c), self.cell(r, c)) {
                next = (r + 1, c);
            }
            // Strict: ties keep the lower neighbour.
            if c + 1 < self.cols && cell_lt(self.cell(r, c + 1), self.cell(next.0, next.1)) {
                next = (r, c + 1);
            }

            if next == (r, c) {
                break;
            }
            self.swap((r, c), next);
            (r, c) = next;
        }
    }

    /// Moves the value at the bottom-right corner up/left into place.
    fn sift_up(&mut self) {
        let (mut r, mut c) = (self.rows - 1, self.cols - 1);
        loop {
            let mut next = (r, c);
            if r > 0 && cell_lt(self.cell(r, c), self.cell(r - 1, c)) {
                next = (r - 1, c);
            }
            if c > 0 {
                let left = self.cell(r, c - 1);
                // Non-strict: ties go to the left neighbour.
                if cell_lt(self.cell(r, c), left) && !cell_lt(left, self.cell(next.0, next.1)) {
                    next = (r, c - 1);
                }
            }

            if next == (r, c) {
                break;
            }
            self.swap((r, c), next);
            (r, c) = next;
        }
    }
}

impl<T: fmt::Display> fmt::Display for YoungTableau<T> {
    /// Renders the grid one row per line; absent cells print as `∞`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(v) => write!(f, "{v}")?,
                    None => write!(f, "∞")?,
                }
            }
        }
        Ok(())
    }
}

/// Sorts `values` ascending through an `n × n` tableau, `n = ⌈√len⌉`.
///
/// # Errors
/// [`TableauError::InvalidValue`] if any value is unordered (NaN).
///
/// # Complexity
/// O(n³) for `n²` values.
///
/// # Examples
/// ```
/// use young_tableau::collections::tableau_sort;
///
/// let sorted = tableau_sort(vec![9, 16, 3, 2, 4, 8, 5, 14, 12]).unwrap();
/// assert_eq!(sorted, vec![2, 3, 4, 5, 8, 9, 12, 14, 16]);
/// ```
pub fn tableau_sort<T: PartialOrd>(values: Vec<T>) -> Result<Vec<T>, TableauError> {
    if values.is_empty() {
        return Ok(values);
    }

    let mut n = (values.len() as f64).sqrt() as usize;
    while n * n < values.len() {
        n += 1;
    }

    let mut tableau = YoungTableau::new(n, n)?;
    for v in values {
        tableau.insert(v)?;
    }
    Ok(tableau.into_sorted_vec())
}

// ============================================================================
// Tests
// ============================================================================
