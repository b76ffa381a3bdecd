use indexmap::IndexMap;

use crate::document::security::{
    ApiKeyLocation, OAuthFlow, OAuthFlows, SecurityScheme, SecuritySchemeType,
};

/// The fixed set of security schemes the generator knows how to declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecuritySchemeKind {
    Basic,
    Bearer,
    ApiKey,
    OpenId,
    OAuth2,
}

impl SecuritySchemeKind {
    /// Match a caller-supplied scheme name. Unknown names are advisory
    /// failures handled by the caller.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "BasicAuth" => Some(SecuritySchemeKind::Basic),
            "BearerAuth" => Some(SecuritySchemeKind::Bearer),
            "ApiKeyAuth" => Some(SecuritySchemeKind::ApiKey),
            "OpenID" => Some(SecuritySchemeKind::OpenId),
            "OAuth2" => Some(SecuritySchemeKind::OAuth2),
            _ => None,
        }
    }

    /// The component name the scheme is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            SecuritySchemeKind::Basic => "BasicAuth",
            SecuritySchemeKind::Bearer => "BearerAuth",
            SecuritySchemeKind::ApiKey => "ApiKeyAuth",
            SecuritySchemeKind::OpenId => "OpenID",
            SecuritySchemeKind::OAuth2 => "OAuth2",
        }
    }

    /// The fixed descriptor registered into `components.securitySchemes`.
    pub fn descriptor(&self) -> SecurityScheme {
        match self {
            SecuritySchemeKind::Basic => SecurityScheme {
                scheme_type: SecuritySchemeType::Http,
                scheme: Some("basic".to_string()),
                ..empty_scheme(SecuritySchemeType::Http)
            },
            SecuritySchemeKind::Bearer => SecurityScheme {
                scheme_type: SecuritySchemeType::Http,
                scheme: Some("bearer".to_string()),
                bearer_format: Some("JWT".to_string()),
                ..empty_scheme(SecuritySchemeType::Http)
            },
            SecuritySchemeKind::ApiKey => SecurityScheme {
                scheme_type: SecuritySchemeType::ApiKey,
                name: Some("X-API-Key".to_string()),
                location: Some(ApiKeyLocation::Header),
                ..empty_scheme(SecuritySchemeType::ApiKey)
            },
            SecuritySchemeKind::OpenId => SecurityScheme {
                scheme_type: SecuritySchemeType::OpenIdConnect,
                open_id_connect_url: Some(
                    "https://example.com/.well-known/openid-configuration".to_string(),
                ),
                ..empty_scheme(SecuritySchemeType::OpenIdConnect)
            },
            SecuritySchemeKind::OAuth2 => SecurityScheme {
                scheme_type: SecuritySchemeType::OAuth2,
                flows: Some(OAuthFlows {
                    authorization_code: Some(OAuthFlow {
                        authorization_url: Some("https://example.com/auth".to_string()),
                        token_url: Some("https://example.com/token".to_string()),
                        scopes: oauth2_scopes(),
                    }),
                }),
                ..empty_scheme(SecuritySchemeType::OAuth2)
            },
        }
    }
}

fn empty_scheme(scheme_type: SecuritySchemeType) -> SecurityScheme {
    SecurityScheme {
        scheme_type,
        name: None,
        location: None,
        scheme: None,
        bearer_format: None,
        flows: None,
        open_id_connect_url: None,
    }
}

fn oauth2_scopes() -> IndexMap<String, String> {
    let mut scopes = IndexMap::new();
    scopes.insert(
        "read:items".to_string(),
        "read your items".to_string(),
    );
    scopes.insert(
        "write:items".to_string(),
        "modify items in your account".to_string(),
    );
    scopes
}
