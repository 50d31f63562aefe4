pub use super::cases::Entity as Cases;
pub use super::users::Entity as Users;
