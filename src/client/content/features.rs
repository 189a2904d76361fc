pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🛡️",
        title: "AI-Powered Moderation",
        description: "Machine learning models detect toxicity, spam, harassment and NSFW content as messages arrive.",
    },
    Feature {
        icon: "🔒",
        title: "Privacy-First Design",
        description: "Messages are analyzed in real time and never stored. Thresholds adapt without keeping your data.",
    },
    Feature {
        icon: "📊",
        title: "Smart Analytics",
        description: "Track community health, violation trends and moderation accuracy from one dashboard.",
    },
    Feature {
        icon: "🤖",
        title: "Community Learning",
        description: "Moderator feedback on false positives tunes detection to your server's culture.",
    },
];

pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// Marketing figures shown on the landing page.
pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "💬",
        label: "Messages Analyzed",
        value: "2.4M+",
    },
    Highlight {
        icon: "🛡️",
        label: "Violations Prevented",
        value: "15.7K+",
    },
    Highlight {
        icon: "✨",
        label: "Communities Safer",
        value: "100%",
    },
];

pub const BOT_COMMANDS: &[(&str, &str)] = &[
    ("!clara help", "Show the help menu"),
    ("!clara status", "Bot uptime and server statistics"),
    ("!clara checkperms", "Verify the bot's permissions"),
    ("!clara test", "Run a self-test"),
];
