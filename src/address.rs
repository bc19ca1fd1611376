//! Payment credential to address formatting.
//!
//! This is the only entry point for rendering an address: it decodes the
//! credential, resolves the network prefix and layout, and bech32-encodes
//! the header byte followed by the credential hash.

use crate::codec;
use crate::domain::{AddressError, CREDENTIAL_HASH_LEN, NetworkContext, PaymentCredential};

/// Encode an already decoded credential as an enterprise address.
///
/// # Errors
///
/// Returns [`AddressError::Encode`] if the network prefix is rejected by the
/// encoder. With the built-in networks this does not happen.
pub fn encode_credential(
    credential: &PaymentCredential,
    network: NetworkContext,
) -> Result<String, AddressError> {
    let params = network.resolve();

    let mut payload = Vec::with_capacity(1 + CREDENTIAL_HASH_LEN);
    payload.push(params.layout.header(credential.kind()));
    payload.extend_from_slice(credential.hash());

    Ok(codec::encode(params.prefix, &payload)?)
}

/// Format raw credential bytes as an address on `network`.
///
/// # Errors
///
/// Decode failures are returned before any encoding is attempted.
pub fn format_address(raw: &[u8], network: NetworkContext) -> Result<String, AddressError> {
    let credential = PaymentCredential::decode(raw)?;
    encode_credential(&credential, network)
}

/// Format a hex-encoded credential as an address on `network`.
///
/// # Errors
///
/// Returns [`AddressError::Decode`] if `hex` is not a valid credential.
///
/// # Examples
///
/// ```
/// use ibc_tx_display::address::format_address_hex;
/// use ibc_tx_display::domain::NetworkContext;
///
/// let zero = "00".repeat(28);
/// let addr = format_address_hex(&zero, NetworkContext::Main).unwrap();
/// assert!(addr.starts_with("addr1"));
/// ```
pub fn format_address_hex(hex: &str, network: NetworkContext) -> Result<String, AddressError> {
    let credential = PaymentCredential::from_hex(hex)?;
    encode_credential(&credential, network)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::checksum_is_valid;
    use crate::domain::{DecodeError, TestNetwork};
    use crate::test_utils::CredentialMother;
    use rstest::rstest;

    const ZERO_MAINNET: &str = "addr1vyqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqkdl5mw";

    #[test]
    fn test_zero_key_hash_mainnet_vector() {
        let addr = format_address(&[0u8; 28], NetworkContext::Main).unwrap();
        assert_eq!(addr, ZERO_MAINNET);
    }

    #[rstest]
    #[case::zero_key_testnet(
        CredentialMother::zero_key_hash(),
        NetworkContext::Test(TestNetwork::Preprod),
        "addr_test1vqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqd9tg5t"
    )]
    #[case::zero_script_mainnet(
        CredentialMother::zero_script_hash(),
        NetworkContext::Main,
        "addr1wyqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqql9r5vw"
    )]
    #[case::zero_script_testnet(
        CredentialMother::zero_script_hash(),
        NetworkContext::Test(TestNetwork::Local),
        "addr_test1wqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqydhgrt"
    )]
    #[case::counting_key_mainnet(
        CredentialMother::counting_key_hash(),
        NetworkContext::Main,
        "addr1vyqqzqsrqszsvpcgpy9qkrqdpc83qygjzv2p29shrqv35xcjrvarg"
    )]
    #[case::counting_key_testnet(
        CredentialMother::counting_key_hash(),
        NetworkContext::Test(TestNetwork::Preview),
        "addr_test1vqqqzqsrqszsvpcgpy9qkrqdpc83qygjzv2p29shrqv35xcftcpvd"
    )]
    fn test_known_addresses(
        #[case] raw: Vec<u8>,
        #[case] network: NetworkContext,
        #[case] expected: &str,
    ) {
        assert_eq!(format_address(&raw, network).unwrap(), expected);
    }

    #[test]
    fn test_hex_and_bytes_agree() {
        let raw = CredentialMother::counting_key_hash();
        let hex = data_encoding::HEXLOWER.encode(&raw);
        assert_eq!(
            format_address_hex(&hex, NetworkContext::Main).unwrap(),
            format_address(&raw, NetworkContext::Main).unwrap()
        );
    }

    #[test]
    fn test_deterministic_and_checksum_valid() {
        for seed in 0u8..16 {
            let raw: Vec<u8> = (0..28).map(|i| seed.wrapping_mul(31).wrapping_add(i)).collect();
            for network in NetworkContext::ALL {
                let first = format_address(&raw, network).unwrap();
                let second = format_address(&raw, network).unwrap();
                assert_eq!(first, second);
                assert!(checksum_is_valid(&first), "{first}");

                let (hrp, data) = bech32::decode(&first).unwrap();
                assert_eq!(hrp.to_string(), network.resolve().prefix);
                assert_eq!(&data[1..], raw.as_slice());
            }
        }
    }

    #[test]
    fn test_decode_error_takes_priority() {
        assert_eq!(
            format_address(&[0u8; 5], NetworkContext::Main),
            Err(AddressError::Decode(DecodeError::InvalidLength { len: 5 }))
        );

        let mut tagged = vec![9u8];
        tagged.extend_from_slice(&[0; 28]);
        assert_eq!(
            format_address(&tagged, NetworkContext::Main),
            Err(AddressError::Decode(DecodeError::UnknownTag(9)))
        );
    }

    #[test]
    fn test_hex_errors() {
        assert!(matches!(
            format_address_hex("not hex", NetworkContext::Main),
            Err(AddressError::Decode(DecodeError::InvalidHex(_)))
        ));
    }
}
