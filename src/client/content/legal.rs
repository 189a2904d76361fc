use crate::client::constant::SUPPORT_EMAIL;

pub const LAST_UPDATED: &str = "August 2025";

#[derive(PartialEq)]
pub struct LegalSection {
    pub icon: &'static str,
    pub title: &'static str,
    /// Markdown.
    pub body: &'static str,
}

pub fn contact_line() -> String {
    format!("Questions? Contact us at [{0}](mailto:{0}).", SUPPORT_EMAIL)
}

pub const PRIVACY: &[LegalSection] = &[
    LegalSection {
        icon: "📊",
        title: "Information We Collect",
        body: "\
**Discord data**, once the bot is in your server:
- server ID and basic server information
- message content, analyzed in real time and not stored
- user IDs for moderation actions and analytics
- channel configuration and permissions

**Account data**, when you sign in:
- Discord or Google username and avatar
- email address, for important notifications only
- which servers you own or administer",
    },
    LegalSection {
        icon: "🎯",
        title: "How We Use Your Information",
        body: "\
- Real-time content analysis and the moderation actions you configure
- Community health insights and recommendations
- Improving detection from moderator feedback
- Service and security notifications",
    },
    LegalSection {
        icon: "🔐",
        title: "Data Storage & Security",
        body: "\
**Not stored**: message content after analysis, direct messages, deleted messages.

**Kept temporarily**:
- moderation decisions and confidence scores, 30 days
- analytics for the dashboard, 90 days
- account settings, until the account is deleted

All traffic is encrypted in transit.",
    },
    LegalSection {
        icon: "⚖️",
        title: "Your Privacy Rights",
        body: "\
- View, export or correct the data held about your servers
- Delete your account and every associated record
- Opt out of non-essential email
- GDPR and CCPA requests are honoured",
    },
    LegalSection {
        icon: "🤝",
        title: "Third-Party Services",
        body: "\
- Discord's official API, subject to Discord's privacy policy
- AI providers for content analysis, processing only
- Hosting and email providers bound by data-processing agreements",
    },
    LegalSection {
        icon: "👶",
        title: "Children's Privacy",
        body: "\
Users must meet Discord's minimum age of 13. We do not knowingly collect data from younger children.",
    },
];

pub const TERMS: &[LegalSection] = &[
    LegalSection {
        icon: "📜",
        title: "Acceptance of Terms",
        body: "\
By adding the bot to a server or signing in to the dashboard you agree to these terms and to Discord's Terms of Service.",
    },
    LegalSection {
        icon: "🛡️",
        title: "Use of the Service",
        body: "\
- You must have permission to manage the servers you configure.
- Do not use the service to harass, surveil or profile members.
- Do not attempt to bypass rate limits or access other servers' data.",
    },
    LegalSection {
        icon: "🤖",
        title: "Automated Moderation",
        body: "\
Detection is probabilistic. Moderators remain responsible for the actions configured on their servers and should review flagged content and false positives.",
    },
    LegalSection {
        icon: "⚠️",
        title: "Disclaimer",
        body: "\
The service is provided *as is*, without warranty of uninterrupted operation or complete detection accuracy.",
    },
    LegalSection {
        icon: "🔄",
        title: "Changes",
        body: "\
These terms may change. Continued use after an update means you accept the revised terms.",
    },
];
