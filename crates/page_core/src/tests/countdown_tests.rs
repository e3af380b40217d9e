use chrono::{Duration, TimeZone, Utc};

use super::*;

fn event_start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, 12, 14, 0, 0)
        .single()
        .expect("timestamp")
}

#[test]
fn splits_remaining_time_into_padded_fields() {
    let target = event_start();
    let now = target - Duration::milliseconds(90_061_000);

    let parts = CountdownParts::at(target, now);

    assert_eq!(
        parts,
        CountdownParts {
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1,
        }
    );
    assert_eq!(parts.days_label(), "1");
    assert_eq!(parts.hours_label(), "01");
    assert_eq!(parts.minutes_label(), "01");
    assert_eq!(parts.seconds_label(), "01");
}

#[test]
fn pins_to_zero_at_and_after_the_target() {
    let target = event_start();

    for now in [target, target + Duration::seconds(1), target + Duration::days(40)] {
        let parts = CountdownParts::at(target, now);
        assert_eq!(
            parts,
            CountdownParts {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
            }
        );
        assert_eq!(parts.hours_label(), "00");
        assert_eq!(parts.minutes_label(), "00");
        assert_eq!(parts.seconds_label(), "00");
        assert_eq!(parts.days_label(), "0");
    }
}

#[test]
fn sub_second_remainders_floor_to_the_current_second() {
    let target = event_start();
    let now = target - Duration::milliseconds(1_999);

    let parts = CountdownParts::at(target, now);

    assert_eq!(parts.seconds, 1);
    assert_eq!(parts.minutes, 0);
}

#[test]
fn carries_full_days_out_of_the_hour_field() {
    let target = event_start();
    let now = target - Duration::days(12) - Duration::hours(23) - Duration::minutes(59);

    let parts = CountdownParts::at(target, now);

    assert_eq!(parts.days, 12);
    assert_eq!(parts.hours, 23);
    assert_eq!(parts.minutes, 59);
    assert_eq!(parts.seconds, 0);
}
