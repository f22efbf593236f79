pub mod segment;
pub mod typewriter;
