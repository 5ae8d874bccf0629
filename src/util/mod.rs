pub mod check;
pub mod fs;
pub mod path;
