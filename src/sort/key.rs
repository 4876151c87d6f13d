/// Sort key specification: 1-based column arguments from the command line,
/// held as 0-based column indices in priority order.
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    columns: Vec<usize>,
}

impl KeySpec {
    /// Parse column arguments like `["1", "2"]` for a table of `ncols` columns.
    ///
    /// Every argument must be a plain integer in `[1, ncols]`; anything else
    /// (zero, negative, out of range, non-numeric) is an `InvalidColumn`.
    pub fn parse<S: AsRef<str>>(args: &[S], ncols: usize) -> Result<KeySpec> {
        let mut columns = Vec::with_capacity(args.len());
        for arg in args {
            let arg = arg.as_ref();
            let col = parse_column(arg, ncols).ok_or_else(|| Error::InvalidColumn {
                arg: arg.to_string(),
                max: ncols,
            })?;
            columns.push(col);
        }
        Ok(KeySpec { columns })
    }

    /// Build from 0-based indices, validating each against `ncols`.
    pub fn from_indices(indices: &[usize], ncols: usize) -> Result<KeySpec> {
        if let Some(&bad) = indices.iter().find(|&&c| c >= ncols) {
            return Err(Error::InvalidColumn {
                arg: (bad + 1).to_string(),
                max: ncols,
            });
        }
        Ok(KeySpec {
            columns: indices.to_vec(),
        })
    }

    /// Column indices in priority order.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// First grouping column.
    pub fn primary(&self) -> Option<usize> {
        self.columns.first().copied()
    }

    /// Second grouping column. With a single key this is the primary
    /// column again, so grouping degenerates to one column.
    pub fn secondary(&self) -> Option<usize> {
        self.columns.get(1).copied().or_else(|| self.primary())
    }
}

/// Parse one 1-based column argument into a 0-based index.
fn parse_column(arg: &str, ncols: usize) -> Option<usize> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n = arg.parse::<usize>().ok()?;
    if n == 0 || n > ncols { None } else { Some(n - 1) }
}
