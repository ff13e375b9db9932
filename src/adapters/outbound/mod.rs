pub mod console;
pub mod network;
