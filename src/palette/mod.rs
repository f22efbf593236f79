pub mod extract;
pub mod theme;
