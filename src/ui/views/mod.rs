pub mod check;
pub mod map;
pub mod play;
pub mod warnings;
