use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use crate::i18n::LanguagePreference;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind the navbar and footer.
    pub mantle: Color,
    /// Darkest background shade, used as text on highlighted tabs.
    pub crust: Color,
    /// Border color for panels.
    pub surface2: Color,
    /// Muted color for captions and hints.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for descriptions.
    pub subtext0: Color,
    /// Accent for links and the selected tab.
    pub sapphire: Color,
    /// Accent for headings.
    pub mauve: Color,
    /// Accent for step numbers and bullets.
    pub blue: Color,
    /// Tag color for tool categories.
    pub yellow: Color,
    /// Error color for alerts.
    pub red: Color,
    /// Accent for the selected language.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin Mocha
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            blue: Color::Rgb(0x89, 0xb4, 0xfa),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Language a fresh session starts in.
    pub default_language: LanguagePreference,
    /// Show the key-hint line in the footer.
    pub show_keybinds_footer: bool,
    /// Capture the mouse for clickable tabs, language buttons and links.
    pub mouse_enabled: bool,
    /// Configurable key bindings parsed from `settings.conf`
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: LanguagePreference::default(),
            show_keybinds_footer: true,
            mouse_enabled: true,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key pressed.
    pub code: KeyCode,
    /// Modifiers held with the key.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    /// Return a short display label such as "Ctrl+C", "F1", "Shift+Tab", "?".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        let key = match self.code {
            KeyCode::Char(ch) => {
                // Show uppercase character for display
                let up = ch.to_ascii_uppercase();
                if up == ' ' {
                    "Space".to_string()
                } else {
                    up.to_string()
                }
            }
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }

    /// What: Check whether a key event matches this chord.
    ///
    /// Details:
    /// - Character keys compare case-insensitively and ignore `Shift`, since
    ///   terminals report `?` and uppercase letters with the shift modifier.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        match (self.code, code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.eq_ignore_ascii_case(&b)
                    && self.mods.difference(KeyModifiers::SHIFT)
                        == mods.difference(KeyModifiers::SHIFT)
            }
            _ => self.code == code && self.mods == mods,
        }
    }
}

/// What: Join the labels of a binding list for display ("Tab / →").
#[must_use]
pub fn chords_label(chords: &[KeyChord]) -> String {
    chords
        .iter()
        .map(KeyChord::label)
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Quit the application
    pub exit: Vec<KeyChord>,
    /// Open or close the help overlay
    pub help_overlay: Vec<KeyChord>,
    /// Next page
    pub page_next: Vec<KeyChord>,
    /// Previous page
    pub page_prev: Vec<KeyChord>,
    /// Switch to the next language
    pub cycle_language: Vec<KeyChord>,
    /// Scroll up one line
    pub scroll_up: Vec<KeyChord>,
    /// Scroll down one line
    pub scroll_down: Vec<KeyChord>,
    /// Scroll up one viewport
    pub scroll_page_up: Vec<KeyChord>,
    /// Scroll down one viewport
    pub scroll_page_down: Vec<KeyChord>,
    /// Jump to the top of the page
    pub scroll_top: Vec<KeyChord>,
    /// Resources page: move the link selection down
    pub link_next: Vec<KeyChord>,
    /// Resources page: move the link selection up
    pub link_prev: Vec<KeyChord>,
    /// Resources page: open the selected link in the browser
    pub link_open: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{BackTab, Char, Down, Enter, F, Home, Left, PageDown, PageUp, Right, Tab, Up};
        let none = KeyModifiers::empty();
        Self {
            exit: vec![
                KeyChord::plain(Char('q')),
                KeyChord {
                    code: Char('c'),
                    mods: KeyModifiers::CONTROL,
                },
            ],
            help_overlay: vec![KeyChord::plain(Char('?')), KeyChord::plain(F(1))],
            page_next: vec![KeyChord::plain(Tab), KeyChord::plain(Right)],
            page_prev: vec![
                KeyChord {
                    code: BackTab,
                    mods: none,
                },
                KeyChord::plain(Left),
            ],
            cycle_language: vec![KeyChord::plain(Char('l'))],
            scroll_up: vec![KeyChord::plain(Up), KeyChord::plain(Char('k'))],
            scroll_down: vec![KeyChord::plain(Down), KeyChord::plain(Char('j'))],
            scroll_page_up: vec![KeyChord::plain(PageUp)],
            scroll_page_down: vec![KeyChord::plain(PageDown)],
            scroll_top: vec![KeyChord::plain(Home)],
            link_next: vec![KeyChord::plain(Char(']'))],
            link_prev: vec![KeyChord::plain(Char('['))],
            link_open: vec![KeyChord::plain(Enter), KeyChord::plain(Char('o'))],
        }
    }
}
