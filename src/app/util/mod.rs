pub mod hasher;
pub mod time;
