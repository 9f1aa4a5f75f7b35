mod action;
mod offense;
mod settings;
mod whitelist;
