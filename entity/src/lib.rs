pub mod prelude;

pub mod mission;
pub mod planet;
pub mod scientist;

mod validate;
