pub mod competitor;
pub mod pairing;
pub mod roster;
pub mod scoring;

// Re-export core round logic (not I/O-specific)
pub use competitor::*;
pub use pairing::*;
pub use roster::*;
pub use scoring::*;
