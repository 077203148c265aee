pub use super::arcana::Entity as Arcana;
pub use super::equipment::Entity as Equipment;
pub use super::equipment_build_link::Entity as EquipmentBuildLink;
pub use super::hero::Entity as Hero;
pub use super::hero_matchup::Entity as HeroMatchup;
pub use super::meta::Entity as Meta;
pub use super::news::Entity as News;
pub use super::user::Entity as User;
