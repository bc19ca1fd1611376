//! Network context for address encoding.
//!
//! The network decides the address prefix and the network id nibble in the
//! address header. It is always passed explicitly by the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::credential::CredentialKind;

// ============================================================================
// Constants
// ============================================================================

/// Network magic of Cardano mainnet.
pub const MAINNET_MAGIC: u32 = 764_824_073;

/// Network magic of the preprod test network.
pub const PREPROD_MAGIC: u32 = 1;

/// Network magic of the preview test network.
pub const PREVIEW_MAGIC: u32 = 2;

/// Network magic used by local development clusters.
pub const LOCAL_MAGIC: u32 = 42;

const MAINNET_HRP: &str = "addr";
const TESTNET_HRP: &str = "addr_test";

// Enterprise address header types (CIP-19).
const ENTERPRISE_KEY_HASH: u8 = 0b0110;
const ENTERPRISE_SCRIPT_HASH: u8 = 0b0111;

// ============================================================================
// Network Context
// ============================================================================

/// Named test networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestNetwork {
    /// The long-lived preprod network.
    Preprod,
    /// The preview network.
    Preview,
    /// A local development cluster.
    Local,
}

/// The network addresses are rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NetworkContext {
    /// Cardano mainnet.
    #[default]
    Main,
    /// One of the test networks.
    Test(TestNetwork),
}

/// Per-network byte layout of an address payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Low nibble of the header byte: 1 on mainnet, 0 on test networks.
    pub network_id: u8,
}

impl LayoutParams {
    /// Header byte of an enterprise address for a credential of `kind`.
    #[must_use]
    pub const fn header(&self, kind: CredentialKind) -> u8 {
        let address_type = match kind {
            CredentialKind::KeyHash => ENTERPRISE_KEY_HASH,
            CredentialKind::ScriptHash => ENTERPRISE_SCRIPT_HASH,
        };
        (address_type << 4) | (self.network_id & 0x0f)
    }
}

/// Everything the address encoder needs to know about a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    /// Bech32 human-readable prefix.
    pub prefix: &'static str,
    /// Payload layout.
    pub layout: LayoutParams,
}

impl NetworkContext {
    /// Every supported network, mainnet first.
    pub const ALL: [Self; 4] = [
        Self::Main,
        Self::Test(TestNetwork::Preprod),
        Self::Test(TestNetwork::Preview),
        Self::Test(TestNetwork::Local),
    ];

    /// Resolve the prefix and layout for this network.
    ///
    /// Each variant has exactly one entry here; adding a network means adding
    /// one arm.
    #[must_use]
    pub const fn resolve(&self) -> NetworkParams {
        match self {
            Self::Main => NetworkParams {
                prefix: MAINNET_HRP,
                layout: LayoutParams { network_id: 1 },
            },
            Self::Test(TestNetwork::Preprod | TestNetwork::Preview | TestNetwork::Local) => {
                NetworkParams {
                    prefix: TESTNET_HRP,
                    layout: LayoutParams { network_id: 0 },
                }
            }
        }
    }

    /// Pick the network for a Cardano network magic.
    ///
    /// Mainnet, preprod and preview magics map to their networks; any other
    /// value is treated as a local cluster.
    #[must_use]
    pub const fn from_magic(magic: u32) -> Self {
        match magic {
            MAINNET_MAGIC => Self::Main,
            PREPROD_MAGIC => Self::Test(TestNetwork::Preprod),
            PREVIEW_MAGIC => Self::Test(TestNetwork::Preview),
            _ => Self::Test(TestNetwork::Local),
        }
    }

    /// The network magic of this network.
    #[must_use]
    pub const fn magic(&self) -> u32 {
        match self {
            Self::Main => MAINNET_MAGIC,
            Self::Test(TestNetwork::Preprod) => PREPROD_MAGIC,
            Self::Test(TestNetwork::Preview) => PREVIEW_MAGIC,
            Self::Test(TestNetwork::Local) => LOCAL_MAGIC,
        }
    }

    /// Returns the lower-case name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "mainnet",
            Self::Test(TestNetwork::Preprod) => "preprod",
            Self::Test(TestNetwork::Preview) => "preview",
            Self::Test(TestNetwork::Local) => "local",
        }
    }

    /// Returns whether this is mainnet.
    #[must_use]
    pub const fn is_mainnet(&self) -> bool {
        matches!(self, Self::Main)
    }
}

impl fmt::Display for NetworkContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == name)
            .ok_or_else(|| {
                format!("unknown network '{s}' (expected mainnet, preprod, preview or local)")
            })
    }
}

impl TryFrom<String> for NetworkContext {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NetworkContext> for String {
    fn from(value: NetworkContext) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
