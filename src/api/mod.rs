pub mod attendance;
pub mod system;
