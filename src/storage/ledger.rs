use std::collections::HashMap;

use uuid::Uuid;

/// Outcome of looking up an idempotency token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reservation {
    /// The token was seen before; holds the id of the resource it created.
    Existing(String),
    /// First use of the token. The caller creates the resource and then
    /// calls [`IdempotencyLedger::record`] with this token.
    New(String),
}

/// Maps client idempotency tokens to the resource they created.
///
/// One ledger exists per resource type and region backend. Entries never
/// expire. Reservation and recording happen under the backend's exclusive
/// borrow, so no token is ever recorded without its entity.
#[derive(Debug, Clone, Default)]
pub struct IdempotencyLedger {
    entries: HashMap<String, String>,
}

impl IdempotencyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `token`. A missing or blank token is replaced by a fresh
    /// one, so such calls always create a new resource.
    pub fn resolve_or_reserve(&self, token: Option<&str>) -> Reservation {
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return Reservation::New(Uuid::new_v4().to_string());
        };

        match self.entries.get(token) {
            Some(resource_id) => Reservation::Existing(resource_id.clone()),
            None => Reservation::New(token.to_string()),
        }
    }

    pub fn record(&mut self, token: String, resource_id: String) {
        self.entries.entry(token).or_insert(resource_id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdempotencyLedger, Reservation};

    #[test]
    fn recorded_token_resolves_to_original_id() {
        let mut ledger = IdempotencyLedger::new();
        let Reservation::New(token) = ledger.resolve_or_reserve(Some("token-1")) else {
            panic!("first use must be new");
        };
        assert_eq!(token, "token-1");

        ledger.record(token, "port-aaaaaaaaaaaaa".to_string());

        assert_eq!(
            ledger.resolve_or_reserve(Some("token-1")),
            Reservation::Existing("port-aaaaaaaaaaaaa".to_string())
        );
    }

    #[test]
    fn missing_or_empty_token_is_always_new() {
        let mut ledger = IdempotencyLedger::new();

        let first = ledger.resolve_or_reserve(None);
        let Reservation::New(generated) = first.clone() else {
            panic!("absent token must be new");
        };
        ledger.record(generated, "port-aaaaaaaaaaaaa".to_string());

        assert!(matches!(ledger.resolve_or_reserve(None), Reservation::New(_)));
        assert!(matches!(ledger.resolve_or_reserve(Some("")), Reservation::New(_)));
        assert_ne!(ledger.resolve_or_reserve(None), first);
    }

    #[test]
    fn record_keeps_first_mapping() {
        let mut ledger = IdempotencyLedger::new();
        ledger.record("t".to_string(), "first".to_string());
        ledger.record("t".to_string(), "second".to_string());

        assert_eq!(
            ledger.resolve_or_reserve(Some("t")),
            Reservation::Existing("first".to_string())
        );
        assert_eq!(ledger.len(), 1);
    }
}
