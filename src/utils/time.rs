use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Accepts RFC 3339, the naive `YYYY-MM-DDTHH:MM:SS[.f]` form older
/// deployments wrote without an offset, and a bare `YYYY-MM-DD` date.
/// Naive values are taken as UTC; a bare date is midnight.
pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
    {
        return Ok(naive.and_utc());
    }
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?
        .and_time(chrono::NaiveTime::MIN)
        .and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_timestamp("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn parses_naive_isoformat_as_utc() {
        let dt = parse_timestamp("2024-03-01T12:30:45.123456").unwrap();
        assert_eq!((dt.year(), dt.hour(), dt.minute()), (2024, 12, 30));
    }

    #[test]
    fn parses_bare_date_as_midnight_utc() {
        let dt = parse_timestamp("2024-01-05").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-05T00:00:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
