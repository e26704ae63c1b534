//! Ports: the ledger API (driving) and record persistence (driven).

pub mod inbound;
pub mod outbound;
