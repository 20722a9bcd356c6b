use std::fmt;

use solver::Set;

/// Displays a set as `{a, b, c}`, with its elements sorted.
pub struct FormatSet<'a, T>(pub &'a Set<T>);

impl<T: fmt::Display + Ord> fmt::Display for FormatSet<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elems = self.0.iter().collect::<Vec<_>>();
        elems.sort();

        f.write_str("{")?;
        for (i, elem) in elems.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str("}")
    }
}
