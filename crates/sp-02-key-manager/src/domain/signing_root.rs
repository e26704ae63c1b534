//! Signing-root derivation for both entry points.
//!
//! Pure functions: payload validation plus domain-separated root. Nothing
//! here touches keys or the ledger.

use super::errors::{SignerError, SignerResult};
use shared_types::{
    compute_protocol_signing_root, compute_signature_domain, compute_signing_root, BeaconObject,
    ConsensusMessage, Domain, DomainType, DutyType, Root, SignatureType, TreeHash,
};

/// Root a beacon duty signs: `SigningData { object_root, domain }`.
pub fn beacon_signing_root(
    object: &BeaconObject,
    duty: DutyType,
    domain: &Domain,
) -> SignerResult<Root> {
    if !duty.accepts(object) {
        return Err(SignerError::InvalidPayload(format!(
            "{} duty cannot sign a {} payload",
            duty,
            object.kind()
        )));
    }
    if let BeaconObject::Attestation(data) = object {
        data.validate()
            .map_err(|e| SignerError::InvalidPayload(e.to_string()))?;
    }
    Ok(compute_signing_root(&object.tree_hash_root(), domain))
}

/// Root an agreement-protocol message signs, separated by network and
/// signature type.
pub fn protocol_signing_root(
    message: &ConsensusMessage,
    network: DomainType,
    signature_type: SignatureType,
) -> SignerResult<Root> {
    message
        .validate()
        .map_err(|e| SignerError::InvalidPayload(e.to_string()))?;
    let domain = compute_signature_domain(network, signature_type);
    Ok(compute_protocol_signing_root(
        &message.tree_hash_root(),
        &domain,
    ))
}
