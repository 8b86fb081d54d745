//! Tenant resolution step.
//!
//! Runs once per incoming request, before any service logic, and turns the
//! tenant header into a `TenantContext`. Absent or malformed headers produce
//! an unresolved context; the rejection happens later, in the scoped service.

use super::TenantContext;
use log::debug;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Header carrying the tenant (company) id.
pub const DEFAULT_TENANT_HEADER: &str = "X-Company-ID";

/// Read access to the named header values of an incoming request.
///
/// Implementations must compare header names case-insensitively and return
/// every value sent under the name, in request order where the shape has one.
pub trait RequestHeaders {
    fn header_values(&self, name: &str) -> Vec<&str>;

    /// The header value when exactly one was sent.
    fn header(&self, name: &str) -> Option<&str> {
        match self.header_values(name).as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }
}

fn matching_values<'a, K, V, I>(pairs: I, name: &str) -> Vec<&'a str>
where
    K: AsRef<str> + 'a,
    V: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    pairs
        .into_iter()
        .filter(|(key, _)| <K as AsRef<str>>::as_ref(key).eq_ignore_ascii_case(name))
        .map(|(_, value)| <V as AsRef<str>>::as_ref(value))
        .collect()
}

impl RequestHeaders for [(&str, &str)] {
    fn header_values(&self, name: &str) -> Vec<&str> {
        matching_values(self.iter().map(|(key, value)| (key, value)), name)
    }
}

impl<const N: usize> RequestHeaders for [(&str, &str); N] {
    fn header_values(&self, name: &str) -> Vec<&str> {
        self.as_slice().header_values(name)
    }
}

impl RequestHeaders for Vec<(String, String)> {
    fn header_values(&self, name: &str) -> Vec<&str> {
        matching_values(self.iter().map(|(key, value)| (key, value)), name)
    }
}

impl<S: std::hash::BuildHasher> RequestHeaders for HashMap<String, String, S> {
    fn header_values(&self, name: &str) -> Vec<&str> {
        matching_values(self.iter(), name)
    }
}

impl RequestHeaders for BTreeMap<String, String> {
    fn header_values(&self, name: &str) -> Vec<&str> {
        matching_values(self.iter(), name)
    }
}

/// Builds a `TenantContext` from request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantResolver {
    header_name: String,
}

impl Default for TenantResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TENANT_HEADER)
    }
}

impl TenantResolver {
    /// Creates a resolver that reads the given header name.
    pub fn new(header_name: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
        }
    }

    pub fn header_name(&self) -> &str {
        self.header_name.as_str()
    }

    /// Produces the tenant context for one request.
    ///
    /// Never fails: a missing header, a header sent more than once, or a
    /// value that is not a UUID yields `TenantContext::unresolved()`.
    pub fn resolve<H>(&self, request: &H) -> TenantContext
    where
        H: RequestHeaders + ?Sized,
    {
        let raw = match request.header_values(&self.header_name).as_slice() {
            [] => {
                debug!("event=tenant_resolve module=tenant status=absent");
                return TenantContext::unresolved();
            }
            [single] => *single,
            repeated => {
                debug!(
                    "event=tenant_resolve module=tenant status=ambiguous values={}",
                    repeated.len()
                );
                return TenantContext::unresolved();
            }
        };

        match Uuid::parse_str(raw.trim()) {
            Ok(company_id) => {
                debug!("event=tenant_resolve module=tenant status=ok tenant={company_id}");
                TenantContext::for_company(company_id)
            }
            Err(_) => {
                debug!("event=tenant_resolve module=tenant status=malformed");
                TenantContext::unresolved()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RequestHeaders, TenantResolver, DEFAULT_TENANT_HEADER};
    use std::collections::HashMap;

    #[test]
    fn header_lookup_ignores_ascii_case() {
        let headers = [("x-company-id", "abc")];
        assert_eq!(headers.header(DEFAULT_TENANT_HEADER), Some("abc"));
    }

    #[test]
    fn repeated_header_has_no_single_value() {
        let headers = [("X-Company-ID", "a"), ("x-company-id", "b")];
        assert_eq!(headers.header_values(DEFAULT_TENANT_HEADER), vec!["a", "b"]);
        assert_eq!(headers.header(DEFAULT_TENANT_HEADER), None);
    }

    #[test]
    fn custom_header_name_is_used() {
        let resolver = TenantResolver::new("X-Tenant");
        let mut headers = HashMap::new();
        headers.insert(
            "X-Tenant".to_string(),
            "40a0d0a0-e1f2-3456-7890-000000000001".to_string(),
        );
        assert!(resolver.resolve(&headers).is_established());

        let default_only = [(DEFAULT_TENANT_HEADER, "40a0d0a0-e1f2-3456-7890-000000000001")];
        assert!(!resolver.resolve(&default_only).is_established());
    }
}
