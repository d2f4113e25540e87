pub mod grouper;
pub mod idle;
pub mod layout;
pub mod merge;
