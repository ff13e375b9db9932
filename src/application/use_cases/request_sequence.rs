/// Monotonically increasing guard over overlapping alert loads.
///
/// Two loads triggered in quick succession have no ordering guarantee on
/// the wire; without a guard the earlier response could land last and
/// silently overwrite the newer one. Each load takes a ticket from
/// [`RequestSequence::begin`] and applies its response only while its
/// ticket is still the latest - explicit "last request wins" instead of an
/// accidental "last response wins".
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket, invalidating all earlier ones.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// True while `ticket` is the most recently issued request.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}
