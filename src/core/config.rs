use std::env;
use std::time::Duration;

use crate::ai::chat::{DEFAULT_GREETING, TurnDelays};
use crate::carousel::{DEFAULT_MARQUEE_INTERVAL, DEFAULT_TESTIMONIAL_INTERVAL};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub greeting: String,
    pub turn_delays: TurnDelays,
    pub testimonial_interval: Duration,
    pub marquee_interval: Duration,
}

/// Parse a millisecond count, falling back to `default` when the value
/// is missing or not a number.
fn millis_or(key: &str, val: Option<String>, default: Duration) -> Duration {
    let Some(val) = val else {
        return default;
    };
    match val.trim().parse::<u64>() {
        Ok(ms) => Duration::from_millis(ms),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, val);
            default
        }
    }
}

fn millis_from_env(key: &str, default: Duration) -> Duration {
    millis_or(key, env::var(key).ok(), default)
}

impl Default for AppConfig {
    fn default() -> Self {
        let defaults = TurnDelays::default();
        let thinking = millis_from_env("FINANCEAI_THINKING_DELAY_MS", defaults.thinking);
        let responding = millis_from_env("FINANCEAI_RESPONDING_DELAY_MS", defaults.responding);
        let testimonial_interval = millis_from_env(
            "FINANCEAI_TESTIMONIAL_INTERVAL_MS",
            DEFAULT_TESTIMONIAL_INTERVAL,
        );
        let marquee_interval =
            millis_from_env("FINANCEAI_MARQUEE_INTERVAL_MS", DEFAULT_MARQUEE_INTERVAL);
        let greeting =
            env::var("FINANCEAI_GREETING").unwrap_or_else(|_| DEFAULT_GREETING.to_string());

        Self {
            greeting,
            turn_delays: TurnDelays {
                thinking,
                responding,
            },
            testimonial_interval,
            marquee_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "FINANCEAI_THINKING_DELAY_MS";

    #[test]
    fn test_missing_var_uses_default() {
        let default = Duration::from_millis(1234);
        assert_eq!(
            millis_from_env("FINANCEAI_TEST_UNSET_VARIABLE", default),
            default
        );
        assert_eq!(millis_or(KEY, None, default), default);
    }

    #[test]
    fn test_invalid_value_uses_default() {
        let default = Duration::from_millis(1500);
        assert_eq!(millis_or(KEY, Some("abc".to_string()), default), default);
        assert_eq!(millis_or(KEY, Some("".to_string()), default), default);
        assert_eq!(millis_or(KEY, Some("-5".to_string()), default), default);
        assert_eq!(millis_or(KEY, Some("1.5".to_string()), default), default);
    }

    #[test]
    fn test_valid_value_overrides_default() {
        let default = Duration::from_millis(1500);
        assert_eq!(
            millis_or(KEY, Some(" 250 ".to_string()), default),
            Duration::from_millis(250)
        );
        assert_eq!(
            millis_or(KEY, Some("0".to_string()), default),
            Duration::ZERO
        );
    }
}
