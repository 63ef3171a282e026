/// Random theme selection
///
/// Picks a theme different from the one currently shown. Candidates are
/// `THEMES` minus the current theme, so selection always terminates.

use rand::{seq::SliceRandom, Rng};

/// Themes offered by the site switcher
pub const THEMES: &[&str] = &[
    "corporate",
    "synthwave",
    "cyberpunk",
    "valentine",
    "halloween",
    "aqua",
    "luxury",
    "autumn",
    "lemonade",
    "night",
    "coffee",
    "dim",
    "nord",
    "sunset",
    "caramellatte",
    "abyss",
    "silk",
];

/// Fallback when no theme can be drawn
pub const DEFAULT_THEME: &str = "corporate";

/// Whether `name` is one of the built-in themes
pub fn is_theme(name: &str) -> bool {
    THEMES.contains(&name)
}

/// Pick a built-in theme other than `current`
///
/// Unknown or empty `current` values get a uniform draw over every theme.
pub fn next_theme(current: &str) -> &'static str {
    next_theme_from(THEMES, current, &mut rand::thread_rng()).unwrap_or(DEFAULT_THEME)
}

/// Pick a member of `themes` other than `current` using `rng`
///
/// - `current` not in `themes` (including ""): uniform over all of `themes`
/// - otherwise: uniform over `themes` without `current`
/// - `themes == [current]`: returns `current`, nothing else exists
/// - empty `themes`: None
pub fn next_theme_from<'a, R: Rng + ?Sized>(
    themes: &[&'a str],
    current: &str,
    rng: &mut R,
) -> Option<&'a str> {
    let known = themes.iter().copied().find(|theme| *theme == current);
    let Some(current) = known else {
        return themes.choose(rng).copied();
    };

    let candidates: Vec<&'a str> = themes
        .iter()
        .copied()
        .filter(|theme| *theme != current)
        .collect();

    match candidates.choose(rng) {
        Some(theme) => Some(*theme),
        None => Some(current),
    }
}
