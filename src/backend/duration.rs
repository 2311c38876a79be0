use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration, expected HH:MM:SS")]
    InvalidFormat,
}

/// Parses a `H+:M+:S+` string into total seconds.
///
/// Each field is an unbounded run of ASCII digits; there is no upper limit on
/// minutes or seconds, so `0:90:0` is ninety minutes. The total saturates at
/// `u64::MAX` seconds.
pub fn parse_hms(input: &str) -> Result<u64, DurationError> {
    let mut fields = [0u64; 3];
    let mut count = 0;

    for part in input.split(':') {
        if count == fields.len() {
            return Err(DurationError::InvalidFormat);
        }
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DurationError::InvalidFormat);
        }
        fields[count] = part.parse().map_err(|_| DurationError::InvalidFormat)?;
        count += 1;
    }

    if count != fields.len() {
        return Err(DurationError::InvalidFormat);
    }

    let [hours, minutes, seconds] = fields;
    Ok(hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds))
}

pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod test {
    use super::*;

    mod parse_hms {
        use super::*;

        #[test]
        fn should_sum_fields_into_seconds() {
            assert_eq!(parse_hms("01:01:01"), Ok(3661));
            assert_eq!(parse_hms("00:00:00"), Ok(0));
            assert_eq!(parse_hms("10:00:00"), Ok(36000));
        }

        #[test]
        fn should_accept_unpadded_fields() {
            assert_eq!(parse_hms("1:2:3"), Ok(3723));
            assert_eq!(parse_hms("0:0:0"), Ok(0));
        }

        #[test]
        fn should_not_bound_minutes_or_seconds() {
            assert_eq!(parse_hms("0:90:0"), Ok(5400));
            assert_eq!(parse_hms("0:0:3661"), Ok(3661));
        }

        #[test]
        fn should_roundtrip_formatted_output() {
            for secs in [0, 59, 60, 3661, 86399, 86400, 360000] {
                assert_eq!(parse_hms(&format_hms(secs)), Ok(secs));
            }
        }

        #[test]
        fn should_reject_non_matching_input() {
            let invalid = [
                "", "abc", "12:34", "1:2:3:4", "1:2:", ":2:3", " 1:2:3", "1:2:3 ", "1:2:-3",
                "+1:2:3", "01:0x:00", "1.5:0:0",
            ];

            for input in invalid {
                assert_eq!(parse_hms(input), Err(DurationError::InvalidFormat));
            }
        }

        #[test]
        fn should_reject_fields_beyond_u64() {
            assert_eq!(
                parse_hms("18446744073709551616:0:0"),
                Err(DurationError::InvalidFormat)
            );
        }

        #[test]
        fn should_saturate_instead_of_overflowing() {
            assert_eq!(parse_hms("18446744073709551615:0:0"), Ok(u64::MAX));
        }
    }

    mod format_hms {
        use super::*;

        #[test]
        fn should_zero_pad_each_field() {
            assert_eq!(format_hms(0), "00:00:00");
            assert_eq!(format_hms(61), "00:01:01");
            assert_eq!(format_hms(3661), "01:01:01");
        }

        #[test]
        fn should_widen_hours_past_two_digits() {
            assert_eq!(format_hms(360000), "100:00:00");
        }
    }
}
