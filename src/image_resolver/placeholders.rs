//! Network-free avatar placeholders.
//!
//! These build initials-avatar URLs themed by position or club. They are used
//! as the last step of the portrait chain and directly by callers that need
//! an image immediately.

use crate::constants::themes;
use crate::image_resolver::api::build_avatar_url;

/// Club colors as (background, text), matched on the lower-cased team name.
const CLUB_THEMES: [(&str, (&str, &str)); 10] = [
    ("manchester united", ("dc2626", "ffffff")),
    ("manchester city", ("0ea5e9", "ffffff")),
    ("liverpool", ("dc2626", "ffffff")),
    ("chelsea", ("1e40af", "ffffff")),
    ("arsenal", ("dc2626", "ffffff")),
    ("tottenham", ("1e293b", "ffffff")),
    ("real madrid", ("1e40af", "ffffff")),
    ("barcelona", ("dc2626", "ffffff")),
    ("bayern munich", ("dc2626", "ffffff")),
    ("psg", ("1e40af", "ffffff")),
];

/// Theme for a position string, by substring.
pub fn position_theme(position: &str) -> (&'static str, &'static str) {
    let pos = position.to_lowercase();
    if pos.contains("goalkeeper") {
        themes::GOALKEEPER
    } else if pos.contains("defender") {
        themes::DEFENDER
    } else if pos.contains("midfielder") {
        themes::MIDFIELDER
    } else if pos.contains("forward") || pos.contains("striker") {
        themes::FORWARD
    } else {
        themes::NEUTRAL
    }
}

/// Club theme for a known team, ignoring case.
pub fn team_theme(team: &str) -> Option<(&'static str, &'static str)> {
    let key = team.trim().to_lowercase();
    CLUB_THEMES
        .iter()
        .find(|(club, _)| *club == key)
        .map(|(_, theme)| *theme)
}

/// The neutral avatar used when every lookup fails.
pub fn default_placeholder(avatar_base: &str, name: &str) -> String {
    build_avatar_url(avatar_base, name, themes::NEUTRAL)
}

/// Avatar colored by playing position.
///
/// # Example
/// ```
/// use scout_portraits::image_resolver::placeholders::position_placeholder;
///
/// let url = position_placeholder("https://ui-avatars.com", "Jane Doe", "Goalkeeper");
/// assert!(url.contains("background=dc2626&color=ffffff"));
/// ```
pub fn position_placeholder(avatar_base: &str, name: &str, position: &str) -> String {
    build_avatar_url(avatar_base, name, position_theme(position))
}

/// Avatar in club colors, or the neutral theme for unknown clubs.
pub fn team_placeholder(avatar_base: &str, name: &str, team: &str) -> String {
    build_avatar_url(
        avatar_base,
        name,
        team_theme(team).unwrap_or(themes::NEUTRAL),
    )
}

/// Whether `url` was produced by the avatar service at `avatar_base`.
pub fn is_placeholder_url(avatar_base: &str, url: &str) -> bool {
    url.starts_with(&format!("{avatar_base}/api/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVATAR: &str = "https://ui-avatars.com";

    #[test]
    fn test_position_themes() {
        assert_eq!(position_theme("Goalkeeper"), ("dc2626", "ffffff"));
        assert_eq!(position_theme("Centre Defender"), ("2563eb", "ffffff"));
        assert_eq!(position_theme("MIDFIELDER"), ("16a34a", "ffffff"));
        assert_eq!(position_theme("Forward"), ("f59e0b", "000000"));
        assert_eq!(position_theme("Striker"), ("f59e0b", "000000"));
        assert_eq!(position_theme("Wing-back"), ("1e293b", "60a5fa"));
        assert_eq!(position_theme(""), themes::NEUTRAL);
    }

    #[test]
    fn test_position_placeholder_urls() {
        let keeper = position_placeholder(AVATAR, "Jane Doe", "Goalkeeper");
        assert!(keeper.contains("background=dc2626"));
        let striker = position_placeholder(AVATAR, "Jane Doe", "Striker");
        assert!(striker.contains("background=f59e0b&color=000000"));
        assert!(striker.contains("name=Jane%20Doe"));
    }

    #[test]
    fn test_team_placeholder_any_casing() {
        for team in ["Liverpool", "LIVERPOOL", "liverpool", " Liverpool "] {
            let url = team_placeholder(AVATAR, "Jane Doe", team);
            assert!(
                url.contains("background=dc2626&color=ffffff"),
                "unexpected colors for {team}: {url}"
            );
        }
    }

    #[test]
    fn test_team_placeholder_unknown_team() {
        let url = team_placeholder(AVATAR, "Jane Doe", "Forest Green Rovers");
        assert!(url.contains("background=1e293b&color=60a5fa"));
        assert_eq!(team_theme("Forest Green Rovers"), None);
    }

    #[test]
    fn test_team_theme_specific_clubs() {
        assert_eq!(team_theme("Manchester City"), Some(("0ea5e9", "ffffff")));
        assert_eq!(team_theme("psg"), Some(("1e40af", "ffffff")));
        assert_eq!(team_theme("Manchester"), None);
    }

    #[test]
    fn test_is_placeholder_url() {
        let url = default_placeholder(AVATAR, "Jane Doe");
        assert!(is_placeholder_url(AVATAR, &url));
        assert!(!is_placeholder_url(
            AVATAR,
            "https://upload.wikimedia.org/jane.jpg"
        ));
    }
}
