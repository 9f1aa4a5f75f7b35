pub use super::antinuke_action::Entity as AntinukeAction;
pub use super::antinuke_offense::Entity as AntinukeOffense;
pub use super::antinuke_settings::Entity as AntinukeSettings;
pub use super::antinuke_whitelist::Entity as AntinukeWhitelist;
