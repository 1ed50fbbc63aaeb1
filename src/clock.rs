use std::fmt::{Display, Formatter};

/// Elapsed milliseconds rendered as `MM:SS:CC` (minutes, seconds, hundredths).
///
/// Minutes are not bounded: past 99 the field simply grows wider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock(pub u64);

impl Display for Clock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let minutes = self.0 / 60_000;
        let seconds = (self.0 % 60_000) / 1_000;
        let hundredths = (self.0 % 1_000) / 10;

        write!(f, "{minutes:02}:{seconds:02}:{hundredths:02}")
    }
}

pub fn format(elapsed_ms: u64) -> String {
    Clock(elapsed_ms).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(format(0), "00:00:00");
        assert_eq!(format(10), "00:00:01");
        assert_eq!(format(500), "00:00:50");
        assert_eq!(format(990), "00:00:99");
        assert_eq!(format(1000), "00:01:00");
        assert_eq!(format(59_990), "00:59:99");
        assert_eq!(format(61_000), "01:01:00");
    }

    #[test]
    fn sub_hundredth_remainders_truncate() {
        assert_eq!(format(9), "00:00:00");
        assert_eq!(format(1_999), "00:01:99");
    }

    #[test]
    fn minutes_do_not_roll_over() {
        assert_eq!(format(3_600_000), "60:00:00");
        assert_eq!(format(100 * 60_000 + 1_230), "100:01:23");
    }
}
