pub mod connectivity;
pub mod placement;

pub use self::connectivity::ConnectivityRule;
pub use self::placement::PlacementValidator;
