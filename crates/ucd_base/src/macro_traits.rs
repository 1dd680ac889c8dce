//! Contains traits used by ucd macros


/// Trait to get the number of elements in an enum
pub trait EnumCountT {
    /// Count or number of element in an enum
    const COUNT : usize;
}

/// Trait to get an enum from a given index
pub trait EnumFromIndexT: Sized {
    /// Try to convert an index to an enum
    fn from_idx(idx: usize) -> Option<Self>;

    /// Try to convert an index to an enum, if it couldn't convert it, return a default value
    fn from_idx_or(idx: usize, default: Self) -> Self {
        Self::from_idx(idx).unwrap_or(default)
    }
}

pub trait EnumFromNameT: Sized {
    /// Try to parse the enum from a string slice.
    fn parse(s: &str) -> Option<Self>;
}

/// Trait to get the short name of an enum variant, backed by a table indexed by discriminant
pub trait EnumNameT: Sized {
    /// Name used for an index that doesn't belong to any variant
    const PLACEHOLDER: &'static str;

    /// Names of all variants, where the name of a variant is located at the index of its discriminant
    const NAMES: &'static [&'static str];

    /// Get the name of the variant
    fn name(&self) -> &'static str;

    /// Get the name of the variant at `idx`, or `PLACEHOLDER` if no variant has that index
    fn name_from_idx(idx: usize) -> &'static str {
        match Self::NAMES.get(idx) {
            Some(name) => name,
            None => Self::PLACEHOLDER,
        }
    }
}
