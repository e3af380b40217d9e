//! Per-language page content. Swapping the language replaces every display
//! string and replays the reveal animations through the controller reset.
//!
//! Attendance wire values stay identical across languages; only labels
//! change, so a language swap never alters what the intake receives.

use serde::{Deserialize, Serialize};
use shared::domain::AttendanceOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Cs,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Cs,
            Language::Cs => Language::En,
        }
    }

    /// Label on the toggle names the language it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::En => "Česky",
            Language::Cs => "English",
        }
    }
}

pub struct AttendanceChoice {
    pub option: AttendanceOption,
    pub label: &'static str,
}

pub struct RevealSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct PageContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub countdown_heading: &'static str,
    pub days_label: &'static str,
    pub hours_label: &'static str,
    pub minutes_label: &'static str,
    pub seconds_label: &'static str,
    pub rsvp_heading: &'static str,
    pub name_label: &'static str,
    pub guests_label: &'static str,
    pub message_label: &'static str,
    pub submit_label: &'static str,
    pub music_play_label: &'static str,
    pub music_pause_label: &'static str,
    pub confirmation_notice: &'static str,
    pub failure_notice: &'static str,
    pub attendance: Vec<AttendanceChoice>,
    pub sections: Vec<RevealSection>,
}

fn attendance_options(labels: [&'static str; 4]) -> Vec<AttendanceChoice> {
    let [solo, partner, family, declined] = labels;
    vec![
        AttendanceChoice {
            option: AttendanceOption::new("solo", 1),
            label: solo,
        },
        AttendanceChoice {
            option: AttendanceOption::new("with_partner", 2),
            label: partner,
        },
        AttendanceChoice {
            option: AttendanceOption::new("with_family", 4),
            label: family,
        },
        AttendanceChoice {
            option: AttendanceOption::new("not_coming", 0),
            label: declined,
        },
    ]
}

pub fn content_for(language: Language) -> PageContent {
    match language {
        Language::En => PageContent {
            title: "Marek & Lucie",
            subtitle: "We are getting married — and you are invited",
            countdown_heading: "The celebration begins in",
            days_label: "days",
            hours_label: "hours",
            minutes_label: "minutes",
            seconds_label: "seconds",
            rsvp_heading: "Will you join us?",
            name_label: "Your name",
            guests_label: "Guests",
            message_label: "A few words for us (optional)",
            submit_label: "Send RSVP",
            music_play_label: "Play music",
            music_pause_label: "Pause music",
            confirmation_notice: "Thank you! Your reply is on its way to us.",
            failure_notice: "We could not send your reply. Please check your connection and try again.",
            attendance: attendance_options([
                "I am coming alone",
                "With my partner",
                "With the whole family",
                "Sadly, I cannot come",
            ]),
            sections: vec![
                RevealSection {
                    heading: "The place",
                    body: "Vineyard estate Na Vyhlídce, above the river, a short walk \
                           from the village square. Parking is right by the cellar.",
                },
                RevealSection {
                    heading: "The day",
                    body: "Ceremony at two in the afternoon, garden lunch afterwards, \
                           and music under the lanterns until the small hours.",
                },
                RevealSection {
                    heading: "Getting there",
                    body: "Trains run hourly from the city; we will shuttle you from \
                           the station. Drivers: follow the white ribbons.",
                },
                RevealSection {
                    heading: "Good to know",
                    body: "No gifts, please — your company is plenty. Bring comfortable \
                           shoes for the meadow and a sweater for the evening.",
                },
            ],
        },
        Language::Cs => PageContent {
            title: "Marek & Lucie",
            subtitle: "Budeme se brát — a vy jste zváni",
            countdown_heading: "Oslava začíná za",
            days_label: "dní",
            hours_label: "hodin",
            minutes_label: "minut",
            seconds_label: "sekund",
            rsvp_heading: "Přijdete?",
            name_label: "Vaše jméno",
            guests_label: "Počet hostů",
            message_label: "Pár slov pro nás (nepovinné)",
            submit_label: "Odeslat odpověď",
            music_play_label: "Pustit hudbu",
            music_pause_label: "Ztlumit hudbu",
            confirmation_notice: "Děkujeme! Vaše odpověď je na cestě k nám.",
            failure_notice: "Odpověď se nepodařilo odeslat. Zkontrolujte připojení a zkuste to znovu.",
            attendance: attendance_options([
                "Přijdu sám / sama",
                "S partnerem / partnerkou",
                "S celou rodinou",
                "Bohužel nedorazím",
            ]),
            sections: vec![
                RevealSection {
                    heading: "Místo",
                    body: "Vinařská usedlost Na Vyhlídce nad řekou, kousek pěšky \
                           z návsi. Parkovat můžete přímo u sklepa.",
                },
                RevealSection {
                    heading: "Den",
                    body: "Obřad ve dvě odpoledne, poté oběd na zahradě a hudba \
                           pod lampiony až do ranních hodin.",
                },
                RevealSection {
                    heading: "Jak se k nám dostanete",
                    body: "Vlaky jezdí každou hodinu; od nádraží vás svezeme. \
                           Řidiči, sledujte bílé stuhy.",
                },
                RevealSection {
                    heading: "Dobré vědět",
                    body: "Žádné dary, prosíme — stačí nám vaše společnost. Vezměte si \
                           pohodlné boty na louku a svetr na večer.",
                },
            ],
        },
    }
}
