pub mod each;
pub mod insert;
pub mod lookup;
