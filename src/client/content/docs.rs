pub struct DocSection {
    pub slug: &'static str,
    pub title: &'static str,
    /// Markdown.
    pub body: &'static str,
}

pub fn find_section(slug: &str) -> &'static DocSection {
    SECTIONS
        .iter()
        .find(|s| s.slug == slug)
        .unwrap_or(&SECTIONS[0])
}

pub const SECTIONS: &[DocSection] = &[
    DocSection {
        slug: "getting-started",
        title: "🚀 Getting Started",
        body: "\
# Getting Started

Set up AI moderation for your Discord server in about five minutes.

## 1. Invite the bot
1. Use the invite link on the home page.
2. Select your server.
3. Grant *Manage Messages* (or *Administrator*).

## 2. Configure
1. Sign in to the dashboard with Discord.
2. Pick your server.
3. Set the toxicity, spam and harassment thresholds.
4. Enable the automatic actions you want.

## 3. Test
Send a test message in a monitored channel and watch it appear in the dashboard.

## Defaults
- **Thresholds**: 0.7
- **Auto delete**: on
- **Auto timeout**: off, 5 minutes when enabled
- **Escalation**: warn, warn, then act
",
    },
    DocSection {
        slug: "dashboard",
        title: "📊 Dashboard Features",
        body: "\
# Dashboard

## Community health score
A 0-100% score combining violation rate and moderation accuracy.

| Score | Status |
|-------|--------|
| 90%+ | Excellent |
| 75-89% | Good |
| 60-74% | Fair |
| below 60% | Poor |

## Analytics
- **Messages processed**: everything the bot analyzed
- **Violations detected**: messages over a threshold
- **False positives**: violations moderators marked as wrong

## Recent violations
Each entry shows the type, confidence and action taken. Mark it **Correct** or **False**; the feedback feeds the learning system.
",
    },
    DocSection {
        slug: "configuration",
        title: "⚙️ Configuration",
        body: "\
# Configuration

## Thresholds (0.1 - 1.0)
Lower values flag more content.

- **0.1 - 0.4**: very strict
- **0.5 - 0.7**: balanced, recommended
- **0.8 - 1.0**: lenient

## Automatic actions
- **Auto delete** removes messages over the threshold.
- **Auto timeout** times out repeat offenders, from 1 minute to 24 hours.
- **Warnings** send the author a warning first.
- **Escalation** applies stronger actions after the escalation threshold.

## Server settings
Moderation channels, exempt roles, custom keywords, a violation log channel and NSFW handling are configured per server.
",
    },
    DocSection {
        slug: "troubleshooting",
        title: "🔧 Troubleshooting",
        body: "\
# Troubleshooting

## Bot not responding
1. The bot needs *Manage Messages*, *Kick/Ban Members* and *Timeout Members*.
2. Its role must be higher than the members it moderates.

## Commands
- `!clara help`: help menu
- `!clara status`: uptime and statistics
- `!clara checkperms`: permission check
- `!clara test`: self-test

## Too many false positives
Raise the threshold a little (0.7 to 0.75) and check the exempt roles.
",
    },
];
