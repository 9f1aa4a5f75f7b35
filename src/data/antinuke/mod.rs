pub mod action;
pub mod offense;
pub mod settings;
pub mod whitelist;

pub use action::AntinukeActionRepository;
pub use offense::AntinukeOffenseRepository;
pub use settings::AntinukeSettingsRepository;
pub use whitelist::AntinukeWhitelistRepository;

#[cfg(test)]
mod test;
