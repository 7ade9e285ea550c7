//! Draw styles and colours.

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Which of the two draw styles a fill uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Surface colour, used to erase a previous footprint.
    Background,
    /// Rectangle colour.
    Foreground,
}

impl Style {
    /// Short tag used in draw logs.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Background => "bg",
            Self::Foreground => "fg",
        }
    }
}

/// Colours for each [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Erase colour, also used to clear the surface on startup.
    pub background: Rgb,
    /// Rectangle colour.
    pub foreground: Rgb,
}

impl Palette {
    /// Resolve a style to its colour.
    #[inline]
    pub const fn color(&self, style: Style) -> Rgb {
        match style {
            Style::Background => self.background,
            Style::Foreground => self.foreground,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            foreground: Rgb::BLACK,
        }
    }
}
