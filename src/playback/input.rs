/// Keys the player reacts to. Anything else maps to no intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Next step.
    ArrowRight,
    /// Previous step.
    ArrowLeft,
    /// Next step.
    Space,
    /// Next step.
    Enter,
    /// Previous step.
    Backspace,
    /// First slide.
    Home,
    /// Last slide.
    End,
    /// Toggle fullscreen.
    F,
    /// Leave fullscreen.
    Escape,
    /// Anything unmapped.
    Other,
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowRight"`, `" "`, `"f"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            " " | "Space" | "Spacebar" => Self::Space,
            "Enter" | "Return" => Self::Enter,
            "Backspace" => Self::Backspace,
            "Home" => Self::Home,
            "End" => Self::End,
            "f" | "F" => Self::F,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// What an input asks the player to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Advance one step.
    Next,
    /// Go back one step.
    Prev,
    /// Jump to a position.
    GoTo {
        /// Target slide; out-of-range values are ignored by navigation.
        slide: i64,
        /// Target fragment.
        fragment: usize,
    },
    /// Flip presenter mode.
    TogglePresenterMode,
    /// Enter or leave fullscreen.
    ToggleFullscreen,
    /// Leave fullscreen if active.
    ExitFullscreen,
}

impl Intent {
    /// Map a key press. `End` targets the last slide of a `slide_count` deck; `Escape` only
    /// means something while fullscreen is active.
    pub fn from_key(key: Key, slide_count: usize, fullscreen: bool) -> Option<Self> {
        match key {
            Key::ArrowRight | Key::Space | Key::Enter => Some(Self::Next),
            Key::ArrowLeft | Key::Backspace => Some(Self::Prev),
            Key::Home => Some(Self::GoTo {
                slide: 0,
                fragment: 0,
            }),
            Key::End => Some(Self::GoTo {
                slide: slide_count as i64 - 1,
                fragment: 0,
            }),
            Key::F => Some(Self::ToggleFullscreen),
            Key::Escape if fullscreen => Some(Self::ExitFullscreen),
            Key::Escape | Key::Other => None,
        }
    }

    /// Map a click at horizontal position `x` on a surface `width` wide: the left third goes
    /// back, the rest goes forward.
    pub fn from_click(x: f64, width: f64) -> Self {
        if x < width / 3.0 {
            Self::Prev
        } else {
            Self::Next
        }
    }
}
