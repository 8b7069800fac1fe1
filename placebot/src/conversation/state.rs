//! Conversation states.

/// Where a user is in the select-category → share-location flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConvState {
    /// Nothing shown yet.
    #[default]
    Idle,
    /// Category menu shown.
    AwaitingCategory,
    /// Category stored; location keyboard shown.
    AwaitingLocation,
    /// Location received; search for `type_code` in flight.
    Searching { type_code: String },
}
