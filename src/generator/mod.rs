pub mod punches;
pub mod random;
