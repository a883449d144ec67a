//! Environment-variable knobs.
//!
//! Values are trimmed and matched case-insensitively. Missing or unparsable
//! variables fall back to the supplied default.

/// Read a boolean (`1/true/yes/on`, `0/false/no/off`).
pub fn env_bool(name: &str, default: bool) -> bool {
    parse_bool(std::env::var(name).ok().as_deref()).unwrap_or(default)
}

pub fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

/// Read a lowercased, non-empty string.
pub fn env_string(name: &str, default: &str) -> String {
    normalize(std::env::var(name).ok().as_deref()).unwrap_or_else(|| default.to_string())
}

fn parse_bool(raw: Option<&str>) -> Option<bool> {
    let v = raw?.trim().to_ascii_lowercase();
    match v.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn normalize(raw: Option<&str>) -> Option<String> {
    raw.map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool(Some(" Yes ")), Some(true));
        assert_eq!(parse_bool(Some("0")), Some(false));
        assert_eq!(parse_bool(Some("maybe")), None);
        assert_eq!(parse_bool(None), None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Some("  IMU_Link ")), Some("imu_link".to_string()));
        assert_eq!(normalize(Some("   ")), None);
    }

    #[test]
    fn test_defaults_for_unset_variables() {
        let name = "IMU_SENSOR_TEST_SURELY_UNSET_VARIABLE";
        assert!(env_bool(name, true));
        assert_eq!(env_u64(name, 42), 42);
        assert_eq!(env_string(name, "imu_link"), "imu_link");
    }
}
