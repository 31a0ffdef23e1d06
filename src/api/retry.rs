use std::time::Duration;

use tracing::warn;

use crate::error::CoactorError;

/// Run `attempt` once per entry in `delays`, sleeping that entry's delay
/// after each failure
///
/// Every failure is treated the same way. Returns `None` once all attempts
/// have failed.
pub fn retry_with_delays<T, F>(delays: &[Duration], mut attempt: F) -> Option<T>
where
    F: FnMut(usize) -> Result<T, CoactorError>,
{
    let total = delays.len();

    for (index, delay) in delays.iter().enumerate() {
        let number = index + 1;
        match attempt(number) {
            Ok(value) => return Some(value),
            Err(err) => {
                warn!(attempt = number, total, error = %err, "request failed, backing off for {delay:?}");
                std::thread::sleep(*delay);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> CoactorError {
        CoactorError::ApiError {
            message: "HTTP 503 Service Unavailable".to_string(),
        }
    }

    #[test]
    fn test_gives_up_after_every_delay() {
        let delays = [Duration::ZERO; 3];
        let mut calls = 0;

        let result: Option<()> = retry_with_delays(&delays, |_| {
            calls += 1;
            Err(failure())
        });

        assert_eq!(result, None);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_sleeps_after_the_final_failure() {
        let delays = [Duration::from_millis(10); 3];
        let started = std::time::Instant::now();

        let result: Option<()> = retry_with_delays(&delays, |_| Err(failure()));

        assert_eq!(result, None);
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_stops_on_first_success() {
        let delays = [Duration::ZERO; 3];
        let mut seen = Vec::new();

        let result = retry_with_delays(&delays, |attempt| {
            seen.push(attempt);
            if attempt < 2 { Err(failure()) } else { Ok("payload") }
        });

        assert_eq!(result, Some("payload"));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_no_delays_means_no_attempts() {
        let mut calls = 0;
        let result: Option<u8> = retry_with_delays(&[], |_| {
            calls += 1;
            Ok(1)
        });

        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }
}
