/// An immutable record describing one constant (direct repeat), shared
/// across every construct in the library. `position_id` defines its
/// ordinal slot in every construct's layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constant {
    pub sequence: String,
    pub position_id: u32,
}

impl Constant {
    #[must_use]
    pub fn new(sequence: impl Into<String>, position_id: u32) -> Self {
        Constant { sequence: sequence.into(), position_id }
    }
}
