use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Horizontal text alignment relative to the position given to a text command.
///
/// The wire strings are `start`, `end`, `left`, `right` and `center`.
/// Deserializing goes through [`TextAlign::from_wire`], so unknown strings
/// decode to [`TextAlign::Start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", from = "String"))]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// Decodes a wire string the way the client does: anything unknown is
    /// treated as [`TextAlign::Start`].
    ///
    /// Use [`str::parse`] to reject unknown values instead.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            log::debug!("from_wire: unknown text align '{value}', using start");
            Self::Start
        })
    }
}

impl std::fmt::Display for TextAlign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<String> for TextAlign {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}
