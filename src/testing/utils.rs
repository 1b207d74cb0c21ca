use crate::error::{ExpressionError, Result};

/// Column positions whose header label equals `label`, in header order.
pub fn group_indices(label: &str, header: &[String]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .filter_map(|(i, column)| if column == label { Some(i) } else { None })
        .collect()
}

/// A named set of sample columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGroup {
    pub label: String,
    pub indices: Vec<usize>,
}

impl SampleGroup {
    pub fn new(label: impl Into<String>, indices: Vec<usize>) -> Self {
        SampleGroup {
            label: label.into(),
            indices,
        }
    }

    /// Collect every column of `header` carrying `label`.
    pub fn from_header(label: &str, header: &[String]) -> Self {
        SampleGroup::new(label, group_indices(label, header))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Reject groups that select no columns, or columns beyond `ncols`.
///
/// Bounds are only checked when `ncols` is nonzero; a matrix with no retained rows has
/// no columns to index into.
pub fn validate_groups(groups: &[&SampleGroup], ncols: usize) -> Result<()> {
    for group in groups {
        if group.is_empty() {
            return Err(ExpressionError::EmptyGroup {
                label: group.label.clone(),
            });
        }
    }

    if ncols == 0 {
        return Ok(());
    }

    for group in groups {
        if let Some(&index) = group.indices.iter().find(|&&i| i >= ncols) {
            return Err(ExpressionError::GroupIndexOutOfBounds {
                index,
                columns: ncols,
            });
        }
    }

    Ok(())
}
