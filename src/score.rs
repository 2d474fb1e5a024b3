use std::{fmt, time::Duration};

/// 60 seconds per minute / 5 characters per word.
const WPM_FACTOR: f64 = 12.0;

/// Elapsed times shorter than this produce a NaN score instead of a huge number.
const MIN_ELAPSED_SECS: f64 = 1e-6;

pub fn words_per_minute(char_count: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs < MIN_ELAPSED_SECS {
        return f64::NAN;
    }
    WPM_FACTOR * char_count as f64 / secs
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub wpm: f64,
    pub elapsed: Duration,
    pub char_count: usize,
}

impl Score {
    pub fn new(char_count: usize, elapsed: Duration) -> Self {
        Self {
            wpm: words_per_minute(char_count, elapsed),
            elapsed,
            char_count,
        }
    }

    /// A NaN or infinite wpm is shown as is, never treated as an error.
    pub fn is_degenerate(&self) -> bool {
        !self.wpm.is_finite()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WPM: {:.6}", self.wpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_chars_in_sixty_seconds_is_twelve_wpm() {
        assert_eq!(words_per_minute(60, Duration::from_secs(60)), 12.0);
    }

    #[test]
    fn wpm_scales_with_char_count_and_time() {
        assert_eq!(words_per_minute(300, Duration::from_secs(60)), 60.0);
        assert_eq!(words_per_minute(60, Duration::from_secs(30)), 24.0);
    }

    #[test]
    fn zero_elapsed_is_nan() {
        assert!(words_per_minute(10, Duration::ZERO).is_nan());
        assert!(words_per_minute(10, Duration::from_nanos(10)).is_nan());
    }

    #[test]
    fn score_display() {
        let score = Score::new(60, Duration::from_secs(60));

        assert_eq!(score.to_string(), "WPM: 12.000000");
        assert!(!score.is_degenerate());
    }

    #[test]
    fn degenerate_score_displays_verbatim() {
        let score = Score::new(0, Duration::ZERO);

        assert!(score.is_degenerate());
        assert_eq!(score.to_string(), "WPM: NaN");
    }
}
