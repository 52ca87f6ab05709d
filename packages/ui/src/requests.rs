//! Monotonic sequencing for in-flight requests.
//!
//! Responses from overlapping requests may land in any order. Targeted
//! mutations (append, replace-by-id, remove-by-id) commute, but a whole-list
//! snapshot does not: a slow fetch-all must not overwrite state that a later
//! mutation already changed. Every operation therefore takes a token at issue
//! time, and a snapshot is applied only while its token is still the newest
//! one issued.

/// Issues monotonically increasing request tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    last_issued: u64,
}

impl RequestSeq {
    /// Take a token for a request that is about to be sent.
    pub fn issue(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    /// Whether no further request has been issued since `token` was taken.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.last_issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_token_is_current() {
        let mut seq = RequestSeq::default();
        let token = seq.issue();
        assert!(seq.is_current(token));
    }

    #[test]
    fn an_overtaken_token_is_stale() {
        let mut seq = RequestSeq::default();
        let snapshot = seq.issue();
        let mutation = seq.issue();

        assert!(!seq.is_current(snapshot));
        assert!(seq.is_current(mutation));
    }

    #[test]
    fn tokens_increase_monotonically() {
        let mut seq = RequestSeq::default();
        let a = seq.issue();
        let b = seq.issue();
        let c = seq.issue();
        assert!(a < b && b < c);
    }
}
