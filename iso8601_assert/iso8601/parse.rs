use ::chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Weekday};

use super::{NaiveZone, ParsedInstant};

/// Parse a string strictly as ISO-8601, placing offset-less values in UTC.
///
/// See [`parse_iso8601_in`] for the accepted grammar.
pub fn parse_iso8601(input: &str) -> ParsedInstant {
    parse_iso8601_in(input, NaiveZone::Utc)
}

/// Parse a string strictly as ISO-8601.
///
/// Accepted, after optional leading whitespace:
/// - dates in extended or basic form: `YYYY-MM-DD`/`YYYYMMDD`, `YYYY-MM`/`YYYYMM`, `YYYY`,
///   week dates `YYYY-Www-D`/`YYYYWwwD` and `YYYY-Www`/`YYYYWww`, ordinal dates `YYYY-DDD`/`YYYYDDD`.
///   The year may be written expanded as `±YYYYYY`.
/// - an optional time after `T` or a space, in the same form as the date:
///   `HH`, `HH:MM`, `HH:MM:SS`, `HH:MM:SS.fff` (or `HHMMSS.fff`), fractions truncated to milliseconds.
///   Reduced precision dates (year, year-month, week without a day) take no time.
/// - an optional offset after the time: `Z`, `±HH`, `±HH:MM`, `±HHMM`.
///
/// Arguments:
/// - `input`: The string to parse.
/// - `naive_zone`: Where to place values without an offset.
pub fn parse_iso8601_in(input: &str, naive_zone: NaiveZone) -> ParsedInstant {
    match parse_inner(input.trim_start(), naive_zone) {
        Some(instant) => instant,
        None => ParsedInstant::invalid(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Extended,
    Basic,
}

struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Number of consecutive ascii digits from the current position.
    fn digit_run(&self) -> usize {
        self.src[self.pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    }

    /// Consume exactly `n` digits.
    fn digits(&mut self, n: usize) -> Option<u32> {
        if self.digit_run() < n {
            return None;
        }
        let val = self.src[self.pos..self.pos + n]
            .iter()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        self.pos += n;
        Some(val)
    }

    /// Consume a whole fraction, returning the milliseconds it represents, truncated.
    fn fraction_millis(&mut self) -> Option<u32> {
        let run = self.digit_run();
        if run == 0 {
            return None;
        }
        let frac = &self.src[self.pos..self.pos + run];
        self.pos += run;
        Some(
            (0..3)
                .map(|i| frac.get(i).map_or(0, |b| u32::from(b - b'0')))
                .fold(0, |acc, d| acc * 10 + d),
        )
    }
}

fn parse_inner(input: &str, naive_zone: NaiveZone) -> Option<ParsedInstant> {
    let mut cur = Cursor::new(input);
    let (date, form, allows_time) = parse_date(&mut cur)?;

    if cur.is_done() {
        let ndt = date.and_time(NaiveTime::from_hms_opt(0, 0, 0)?);
        return Some(naive_zone.resolve(&ndt).into());
    }

    if !allows_time || !(cur.eat(b'T') || cur.eat(b' ')) {
        return None;
    }

    let (hour, minute, second, millis) = parse_time(&mut cur, form)?;
    let offset = parse_offset(&mut cur)?;
    if !cur.is_done() {
        return None;
    }

    // 24:00 is the end of the day, i.e. the start of the next one:
    let (date, hour) = if hour == 24 {
        if minute != 0 || second != 0 || millis != 0 {
            return None;
        }
        (date.succ_opt()?, 0)
    } else {
        (date, hour)
    };
    let ndt = date.and_time(NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?);

    Some(match offset {
        Some(secs) => FixedOffset::east_opt(secs)?
            .from_local_datetime(&ndt)
            .single()?
            .into(),
        None => naive_zone.resolve(&ndt).into(),
    })
}

/// Returns the date, the form it was written in and whether it's precise enough to take a time.
fn parse_date(cur: &mut Cursor) -> Option<(NaiveDate, Form, bool)> {
    let year = parse_year(cur)?;
    let form = if cur.eat(b'-') {
        Form::Extended
    } else {
        Form::Basic
    };

    if cur.eat(b'W') {
        let week = cur.digits(2)?;
        let has_day = match form {
            Form::Extended => cur.eat(b'-'),
            Form::Basic => cur.digit_run() > 0,
        };
        let weekday = if has_day {
            iso_weekday(cur.digits(1)?)?
        } else {
            Weekday::Mon
        };
        let date = NaiveDate::from_isoywd_opt(year, week, weekday)?;
        return Some((date, form, has_day));
    }

    let (date, allows_time) = match (form, cur.digit_run()) {
        (_, 3) => (NaiveDate::from_yo_opt(year, cur.digits(3)?)?, true),
        (Form::Extended, 2) => {
            let month = cur.digits(2)?;
            if cur.eat(b'-') {
                (NaiveDate::from_ymd_opt(year, month, cur.digits(2)?)?, true)
            } else {
                (NaiveDate::from_ymd_opt(year, month, 1)?, false)
            }
        }
        (Form::Basic, 4) => {
            let month = cur.digits(2)?;
            (NaiveDate::from_ymd_opt(year, month, cur.digits(2)?)?, true)
        }
        (Form::Basic, 2) => (NaiveDate::from_ymd_opt(year, cur.digits(2)?, 1)?, false),
        (Form::Basic, 0) => (NaiveDate::from_ymd_opt(year, 1, 1)?, false),
        _ => return None,
    };
    Some((date, form, allows_time))
}

fn parse_year(cur: &mut Cursor) -> Option<i32> {
    let sign = if cur.eat(b'+') {
        1
    } else if cur.eat(b'-') {
        -1
    } else {
        return cur.digits(4).map(|y| y as i32);
    };
    cur.digits(6).map(|y| sign * y as i32)
}

fn iso_weekday(day: u32) -> Option<Weekday> {
    match day {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

fn parse_time(cur: &mut Cursor, form: Form) -> Option<(u32, u32, u32, u32)> {
    fn next_component(cur: &mut Cursor, form: Form) -> bool {
        match form {
            Form::Extended => cur.eat(b':'),
            Form::Basic => cur.digit_run() > 0,
        }
    }

    let hour = cur.digits(2)?;
    let (mut minute, mut second, mut millis) = (0, 0, 0);
    if next_component(cur, form) {
        minute = cur.digits(2)?;
        if next_component(cur, form) {
            second = cur.digits(2)?;
            if cur.eat(b'.') || cur.eat(b',') {
                millis = cur.fraction_millis()?;
            }
        }
    }

    if hour > 24 || minute > 59 || second > 59 {
        return None;
    }
    Some((hour, minute, second, millis))
}

/// Outer `None` when malformed, inner `None` when no offset was written.
fn parse_offset(cur: &mut Cursor) -> Option<Option<i32>> {
    let start = cur.pos;
    while cur.peek().is_some_and(|b| b.is_ascii_whitespace()) {
        cur.pos += 1;
    }
    if cur.eat(b'Z') {
        return Some(Some(0));
    }
    cur.pos = start;

    let sign = if cur.eat(b'+') {
        1
    } else if cur.eat(b'-') {
        -1
    } else {
        return Some(None);
    };
    let hours = cur.digits(2)? as i32;
    let minutes = if cur.eat(b':') || cur.digit_run() > 0 {
        cur.digits(2)? as i32
    } else {
        0
    };
    Some(Some(sign * (hours * 3600 + minutes * 60)))
}
