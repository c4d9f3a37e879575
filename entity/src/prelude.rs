pub use super::bird::Entity as Bird;
