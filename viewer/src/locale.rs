//! Display-language string tables (viewer-only).
//!
//! The locale selects label text and nothing else; the field computation
//! never sees it.

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// English
    En,
    /// Russian
    Ru,
}

impl Locale {
    /// The other language; toggling twice returns the original.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ru,
            Locale::Ru => Locale::En,
        }
    }
}

/// Static UI strings for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    /// Horizontal axis label (math notation, shared across locales)
    pub axis_x: &'static str,
    /// Vertical axis label
    pub axis_y: &'static str,
    /// Penalty checkbox label
    pub penalty_checkbox: &'static str,
    /// Penalty strength slider label
    pub alpha_slider: &'static str,
    /// Keyboard shortcut hint line in the HUD
    pub hud_hint: &'static str,
    /// Title of the ring-profile plot window
    pub section_title: &'static str,
    /// Name of the loss curve in the ring-profile plot
    pub section_curve: &'static str,
    /// Name of the minima markers in the ring-profile plot
    pub section_minima: &'static str,
    /// PNG export button label
    pub export_button: &'static str,
}

const EN: Strings = Strings {
    axis_x: "x",
    axis_y: "y",
    penalty_checkbox: "Constraint α·x² enabled",
    alpha_slider: "Constraint strength α",
    hud_hint: "C: constraint  L: language  A: axes  P: ring profile  H: HUD",
    section_title: "Loss along the unit ring",
    section_curve: "ring loss",
    section_minima: "minima",
    export_button: "Save PNG",
};

const RU: Strings = Strings {
    axis_x: "x",
    axis_y: "y",
    penalty_checkbox: "Ограничение α·x² включено",
    alpha_slider: "Сила ограничения α",
    hud_hint: "C: ограничение  L: язык  A: оси  P: профиль  H: панель",
    section_title: "Потери вдоль единичной окружности",
    section_curve: "потери на кольце",
    section_minima: "минимумы",
    export_button: "Сохранить PNG",
};

/// Look up the string table for a locale.
pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::En => &EN,
        Locale::Ru => &RU,
    }
}
