//! Walks every day of the supported range through both conversions.

use chrono::NaiveDate;
use nepcal::bounds::{EPOCH_GREGORIAN, first_bs, last_bs, last_gregorian};
use nepcal::{BsDate, DateError, MAX_YEAR, MIN_YEAR, Month};

#[test]
fn test_every_day_round_trips() {
    let mut day = EPOCH_GREGORIAN;
    let mut previous: Option<BsDate> = None;
    let mut count = 0_u32;

    while day <= last_gregorian() {
        let bs = BsDate::from_gregorian(day).unwrap();
        assert_eq!(bs.gregorian(), day);

        let back = BsDate::new(bs.year(), bs.month().number(), bs.day()).unwrap();
        assert_eq!(back.gregorian(), day, "round trip of {bs}");
        assert_eq!(back, bs);

        if let Some(prev) = previous {
            assert!(bs.is_after(&prev), "{bs} should follow {prev}");
        }

        previous = Some(bs);
        count += 1;
        day = day.succ_opt().unwrap();
    }

    let total: u32 = (MIN_YEAR..=MAX_YEAR)
        .map(|year| u32::from(nepcal::days_in_year(year).unwrap()))
        .sum();
    assert_eq!(count, total);
}

#[test]
fn test_range_endpoints() {
    let first = BsDate::from_gregorian(EPOCH_GREGORIAN).unwrap();
    assert_eq!(first.ymd(), (MIN_YEAR, Month::Baisakh, 1));
    assert_eq!(
        (first.year(), first.month().number(), first.day()),
        first_bs()
    );

    let last = BsDate::from_gregorian(last_gregorian()).unwrap();
    assert_eq!((last.year(), last.month().number(), last.day()), last_bs());
}

#[test]
fn test_just_outside_the_range_is_rejected() {
    let before = EPOCH_GREGORIAN.pred_opt().unwrap();
    let after = last_gregorian().succ_opt().unwrap();

    assert_eq!(
        BsDate::from_gregorian(before),
        Err(DateError::GregorianOutOfRange(before))
    );
    assert_eq!(
        BsDate::from_gregorian(after),
        Err(DateError::GregorianOutOfRange(after))
    );

    let (year, month, day) = last_bs();
    assert!(BsDate::new(year, month, day + 1).is_err());
    assert!(BsDate::new(MAX_YEAR + 1, 1, 1).unwrap_err().is_out_of_range());
    assert!(BsDate::new(MIN_YEAR - 1, 12, 30).unwrap_err().is_out_of_range());
}

#[test]
fn test_parse_and_display_agree() {
    let date = NaiveDate::from_ymd_opt(2019, 6, 15).unwrap();
    let bs = BsDate::from_gregorian(date).unwrap();
    let text = bs.to_string();
    assert_eq!(text, "2076-02-32");
    assert_eq!(text.parse::<BsDate>().unwrap().gregorian(), date);
}
