use super::duration::format_hms;

/// A fixed countdown length. The start instant lives with the caller; this
/// type only derives what is left from elapsed whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    total_secs: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Remaining {
    Time(String),
    Finished,
}

impl Countdown {
    pub fn new(total_secs: u64) -> Self {
        Self { total_secs }
    }

    pub fn remaining(&self, elapsed_secs: u64) -> Remaining {
        if elapsed_secs >= self.total_secs {
            return Remaining::Finished;
        }

        Remaining::Time(format_hms(self.total_secs - elapsed_secs))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    mod remaining {
        use super::*;

        #[test]
        fn should_finish_when_elapsed_reaches_total() {
            let countdown = Countdown::new(10);

            assert_eq!(countdown.remaining(10), Remaining::Finished);
            assert_eq!(countdown.remaining(11), Remaining::Finished);
        }

        #[test]
        fn should_format_positive_remainder() {
            let countdown = Countdown::new(10);

            assert_eq!(
                countdown.remaining(9),
                Remaining::Time(String::from("00:00:01"))
            );
        }

        #[test]
        fn should_decompose_hours_minutes_and_seconds() {
            let countdown = Countdown::new(3661);

            assert_eq!(
                countdown.remaining(0),
                Remaining::Time(String::from("01:01:01"))
            );
        }

        #[test]
        fn should_finish_immediately_for_zero_duration() {
            let countdown = Countdown::new(0);

            assert_eq!(countdown.remaining(0), Remaining::Finished);
        }
    }
}
