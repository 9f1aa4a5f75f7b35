//! Alerts sent to log channels and by direct message.

/// Embed colour for owner-compromise alerts.
pub const EMERGENCY_COLOUR: u32 = 0xe74c3c;

/// Embed colour for staff/bot threat alerts.
pub const WARNING_COLOUR: u32 = 0xf39c12;

/// A titled message with inline fields, rendered as an embed by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub description: String,
    pub colour: u32,
    pub fields: Vec<AlertField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Alert {
    pub fn new(title: impl Into<String>, description: impl Into<String>, colour: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            colour,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(AlertField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}
