pub const SITE_NAME: &str = "CommunityClara";
pub const SITE_TAGLINE: &str = "AI-powered moderation for Discord communities";

/// Dashboard payload and notification feed refresh interval.
pub const POLL_INTERVAL_MS: u32 = 30_000;

/// Auto-dismiss delays for settings messages.
pub const SUCCESS_MESSAGE_MS: u32 = 3_000;
pub const ERROR_MESSAGE_MS: u32 = 5_000;

/// Learning insights change slowly.
pub const INSIGHTS_POLL_INTERVAL_MS: u32 = 60_000;

pub const DEFAULT_ANALYTICS_DAYS: u32 = 7;
pub const DEFAULT_VIOLATION_LIMIT: u32 = 50;

pub const SUPPORT_EMAIL: &str = "support@communityclara.xyz";
