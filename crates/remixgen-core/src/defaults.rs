//! Default versions and toggles for the Remix + CDK flavor.
//!
//! Every caller-facing option resolves against this table, so bumping a
//! pinned version is a one-line change here.

/// Remix framework version.
pub const REMIX_VERSION: &str = "1.9.0";

/// AWS JavaScript SDK v3 version.
pub const AWS_SDK_V3_VERSION: &str = "3.229.0";

/// React version.
pub const REACT_VERSION: &str = "^18";

/// React `@types` version.
pub const REACT_TYPES_VERSION: &str = "^18";

/// Node version written to the `.nvmrc` marker.
pub const NVM_NODE_VERSION: &str = "16";

/// Whether Tailwind support is enabled.
pub const TAILWIND: bool = true;

/// Directory that holds the Remix application files.
pub const REMIX_DIR: &str = "remix";

/// Minimum node version forwarded to the base generator.
pub const MIN_NODE_VERSION: &str = "14.17.0";
