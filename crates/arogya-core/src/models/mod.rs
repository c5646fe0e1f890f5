pub mod analysis;
pub mod biometrics;
pub mod condition;
pub mod insight;
pub mod profile;
pub mod recommendation;
