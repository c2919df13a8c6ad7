/// An immutable record describing one spacer within the library.
///
/// `variant_id` is the spacer's 0-based ordinal position within its
/// construct; `construct_id` identifies the construct it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spacer {
    pub sequence: String,
    pub construct_id: u32,
    pub variant_id: u32,
}

impl Spacer {
    #[must_use]
    pub fn new(sequence: impl Into<String>, construct_id: u32, variant_id: u32) -> Self {
        Spacer { sequence: sequence.into(), construct_id, variant_id }
    }
}
