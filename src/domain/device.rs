const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Rough phone/tablet check on a `navigator.userAgent` string
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|m| ua.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_mobile_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36"
        ));
        assert!(!is_mobile_user_agent(""));
    }
}
