//! Public REST endpoints listed on the API docs page.

use crate::client::api::Method;

pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub description: &'static str,
    pub body: Option<&'static str>,
    pub response: &'static str,
}

pub struct EndpointGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub endpoints: &'static [Endpoint],
}

pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// `curl` invocation for `endpoint`. The JSON content type and body are only
/// added when the endpoint takes a body.
pub fn generate_curl(base_url: &str, endpoint: &Endpoint, api_key: &str) -> String {
    let api_key = if api_key.trim().is_empty() {
        PLACEHOLDER_API_KEY
    } else {
        api_key.trim()
    };

    let mut curl = format!(
        "curl -X {} \"{}{}\" \\\n  -H \"Authorization: Bearer {}\"",
        endpoint.method,
        base_url.trim_end_matches('/'),
        endpoint.path,
        api_key
    );

    if let Some(body) = endpoint.body {
        curl.push_str(" \\\n  -H \"Content-Type: application/json\"");
        curl.push_str(&format!(" \\\n  -d '{}'", body));
    }

    curl
}

pub fn find_group(id: &str) -> &'static EndpointGroup {
    GROUPS.iter().find(|g| g.id == id).unwrap_or(&GROUPS[0])
}

pub const GROUPS: &[EndpointGroup] = &[
    EndpointGroup {
        id: "servers",
        title: "Server Management",
        description: "List your Discord servers and read their statistics",
        endpoints: &[
            Endpoint {
                method: Method::Get,
                path: "/api/v1/servers",
                description: "List servers",
                body: None,
                response: r#"{
  "servers": [
    {
      "id": "936677346449170493",
      "name": "My Discord Server",
      "health_score": 0.85,
      "total_messages": 1250
    }
  ],
  "total_count": 1
}"#,
            },
            Endpoint {
                method: Method::Get,
                path: "/api/v1/servers/{server_id}/stats",
                description: "Server statistics and bot configuration",
                body: None,
                response: r#"{
  "server_id": "936677346449170493",
  "server_name": "My Discord Server",
  "total_violations": 15,
  "health_score": 0.85,
  "toxicity_threshold": 0.7
}"#,
            },
        ],
    },
    EndpointGroup {
        id: "auth",
        title: "Authentication",
        description: "Exchange identity-provider credentials for an API token",
        endpoints: &[Endpoint {
            method: Method::Post,
            path: "/api/v1/auth/google",
            description: "Sign in with a Google credential",
            body: Some(r#"{"token": "google_oauth_token_here"}"#),
            response: r#"{
  "user": {
    "id": "google_123456789",
    "email": "user@example.com",
    "username": "johndoe"
  },
  "token": "jwt_token_here"
}"#,
        }],
    },
    EndpointGroup {
        id: "moderation",
        title: "Content Moderation",
        description: "Analyze content for violations",
        endpoints: &[Endpoint {
            method: Method::Post,
            path: "/api/v1/analyze",
            description: "Analyze a piece of content",
            body: Some(r#"{"content": "Text to analyze", "content_type": "text"}"#),
            response: r#"{
  "flagged": true,
  "confidence": 0.95,
  "violation_type": "toxicity",
  "categories": {
    "toxicity": 0.95,
    "spam": 0.1
  }
}"#,
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curl_without_body() {
        let endpoint = &find_group("servers").endpoints[0];
        let curl = generate_curl("http://localhost:8000/", endpoint, "k1");

        assert_eq!(
            curl,
            "curl -X GET \"http://localhost:8000/api/v1/servers\" \\\n  -H \"Authorization: Bearer k1\""
        );
    }

    #[test]
    fn curl_with_body_and_default_key() {
        let endpoint = &find_group("moderation").endpoints[0];
        let curl = generate_curl("https://api.example.com", endpoint, " ");

        assert!(curl.starts_with("curl -X POST \"https://api.example.com/api/v1/analyze\""));
        assert!(curl.contains("Bearer your-api-key-here"));
        assert!(curl.contains("-H \"Content-Type: application/json\""));
        assert!(curl.ends_with("-d '{\"content\": \"Text to analyze\", \"content_type\": \"text\"}'"));
    }

    #[test]
    fn unknown_group_falls_back_to_first() {
        assert_eq!(find_group("nope").id, "servers");
    }
}
