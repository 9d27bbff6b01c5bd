//! Fixed-capacity ordered containers.

mod young_tableau;

pub use young_tableau::{tableau_sort, TableauError, YoungTableau};
