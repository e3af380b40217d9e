//! Settings cascade: built-in defaults, then `invite.toml`, then
//! `INVITE__*` environment overrides.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, LocalResult, TimeZone, Utc};

#[derive(Debug, Clone)]
pub struct Settings {
    pub rsvp_endpoint: String,
    pub event_start: DateTime<Utc>,
    pub autoplay: bool,
    pub music_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rsvp_endpoint: "https://intake.example.com/api/rsvp".into(),
            event_start: default_event_start(),
            autoplay: true,
            music_path: None,
        }
    }
}

fn default_event_start() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2026, 9, 12, 14, 0, 0) {
        LocalResult::Single(start) => start,
        _ => Utc::now(),
    }
}

fn parse_bool(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

fn apply_values(settings: &mut Settings, values: &HashMap<String, String>) {
    if let Some(v) = values.get("rsvp_endpoint") {
        settings.rsvp_endpoint = v.clone();
    }
    if let Some(v) = values.get("event_start") {
        if let Ok(parsed) = v.parse::<DateTime<Utc>>() {
            settings.event_start = parsed;
        }
    }
    if let Some(v) = values.get("autoplay") {
        settings.autoplay = parse_bool(v);
    }
    if let Some(v) = values.get("music_path") {
        settings.music_path = Some(PathBuf::from(v));
    }
}

pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let path = config_path.unwrap_or(Path::new("invite.toml"));
    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_values(&mut settings, &file_cfg);
        }
    }

    if let Ok(v) = std::env::var("INVITE__RSVP_ENDPOINT") {
        settings.rsvp_endpoint = v;
    }
    if let Ok(v) = std::env::var("INVITE__EVENT_START") {
        if let Ok(parsed) = v.parse::<DateTime<Utc>>() {
            settings.event_start = parsed;
        }
    }
    if let Ok(v) = std::env::var("INVITE__AUTOPLAY") {
        settings.autoplay = parse_bool(&v);
    }
    if let Ok(v) = std::env::var("INVITE__MUSIC_PATH") {
        settings.music_path = Some(PathBuf::from(v));
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_values_override_defaults() {
        let mut settings = Settings::default();
        let values: HashMap<String, String> = toml::from_str(
            r#"
            rsvp_endpoint = "https://rsvp.test/api"
            event_start = "2027-01-02T18:30:00Z"
            autoplay = "false"
            music_path = "music/theme.ogg"
            "#,
        )
        .expect("toml");

        apply_values(&mut settings, &values);

        assert_eq!(settings.rsvp_endpoint, "https://rsvp.test/api");
        assert_eq!(
            settings.event_start,
            "2027-01-02T18:30:00Z".parse::<DateTime<Utc>>().expect("ts")
        );
        assert!(!settings.autoplay);
        assert_eq!(settings.music_path, Some(PathBuf::from("music/theme.ogg")));
    }

    #[test]
    fn malformed_event_start_keeps_the_default() {
        let mut settings = Settings::default();
        let default_start = settings.event_start;
        let mut values = HashMap::new();
        values.insert("event_start".to_string(), "next saturday".to_string());

        apply_values(&mut settings, &values);

        assert_eq!(settings.event_start, default_start);
    }

    #[test]
    fn autoplay_accepts_one_and_true() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("off"));
    }
}
