use serde::Serialize;

/// A named snapshot of the cumulative deficit.
///
/// `deficit_total` is captured once at insertion and never recomputed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Week {
    pub id: i64,
    pub name: String,
    pub deficit_total: i64,
    pub created_at: String,
}
