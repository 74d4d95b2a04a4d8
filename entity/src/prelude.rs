pub use super::club::Entity as Club;
pub use super::player::Entity as Player;
