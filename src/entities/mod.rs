pub mod prelude;

pub mod cases;
pub mod users;
