use jiff::SpanRelativeTo;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    #[test]
    fn test_parse_duration_formats() {
        assert_eq!(parse_duration("10s"), Ok(SignedDuration::from_secs(10)));
        assert_eq!(parse_duration("PT1M"), Ok(SignedDuration::from_mins(1)));
        assert_eq!(parse_duration("30"), Ok(SignedDuration::from_secs(30)));
        assert!(parse_duration("soon").is_err());
    }
}
