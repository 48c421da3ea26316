use std::fmt::{self, Display};

/// Identity of one module instance, used to tell log lines apart.
///
/// Displays as `Logic Wheel #N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(u32);

impl ModuleId {
    /// Creates an identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl Default for ModuleId {
    fn default() -> Self {
        Self(1)
    }
}

impl Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logic Wheel #{}", self.0)
    }
}
