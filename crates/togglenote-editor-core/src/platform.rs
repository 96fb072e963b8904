//! Platform classification for keybinding decisions.
//!
//! Detection here is a pure function of navigator strings so it can run
//! (and be tested) off the browser. The browser crate feeds it the real
//! `navigator` values once and caches the result.

/// Platform facts the dispatcher cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Platform {
    pub ios: bool,
    pub mac: bool,
    pub android: bool,
    pub mobile: bool,
}

impl Platform {
    /// Classify from `navigator.platform`, `navigator.userAgent` and
    /// `navigator.maxTouchPoints`.
    pub fn detect(platform: &str, user_agent: &str, max_touch_points: i32) -> Self {
        let platform = platform.to_lowercase();
        let user_agent = user_agent.to_lowercase();

        // iPadOS reports a Mac platform string but has touch
        let ios = user_agent.contains("iphone")
            || user_agent.contains("ipad")
            || user_agent.contains("ipod")
            || (platform.contains("mac") && max_touch_points > 0);

        let mac = platform.contains("mac") && !ios;
        let android = user_agent.contains("android");
        let mobile = ios || android || user_agent.contains("mobile");

        Self {
            ios,
            mac,
            android,
            mobile,
        }
    }

    /// Whether Cmd (meta) rather than Ctrl is the primary modifier.
    pub fn primary_is_meta(&self) -> bool {
        self.mac || self.ios
    }
}
