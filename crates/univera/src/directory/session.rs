use axum::http::HeaderMap;

use super::domain::Role;

/// Header carrying the caller's role from the fronting auth layer.
pub const ROLE_HEADER: &str = "x-univera-role";

/// Exposes the role of whoever is looking at the page.
pub trait SessionProvider {
    fn current_role(&self) -> Role;

    fn is_admin(&self) -> bool {
        self.current_role() == Role::Admin
    }
}

impl SessionProvider for Role {
    fn current_role(&self) -> Role {
        *self
    }
}

impl SessionProvider for HeaderMap {
    fn current_role(&self) -> Role {
        self.get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(Role::parse)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn missing_header_is_anonymous() {
        assert_eq!(HeaderMap::new().current_role(), Role::Anonymous);
    }

    #[test]
    fn admin_header_grants_admin() {
        let mut headers = HeaderMap::new();
        headers.insert(ROLE_HEADER, HeaderValue::from_static("admin"));
        assert!(headers.is_admin());

        headers.insert(ROLE_HEADER, HeaderValue::from_static("user"));
        assert_eq!(headers.current_role(), Role::User);
        assert!(!headers.is_admin());
    }
}
