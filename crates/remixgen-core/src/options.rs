//! Caller-facing option bundles.
//!
//! [`RemixProjectOptions`] carries the flavor-specific knobs (versions,
//! Tailwind toggle, target directory) next to [`BaseAppOptions`], the
//! options forwarded to the external base generator. Every flavor field
//! is optional and resolves against the [`crate::defaults`] table.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::defaults;
use crate::descriptor::TsconfigOptions;

/// Options for a Remix application deployed with AWS CDK.
///
/// # Examples
///
/// ```
/// use remixgen_core::{BaseAppOptions, RemixProjectOptions};
///
/// let options = RemixProjectOptions::builder()
///     .base(
///         BaseAppOptions::builder()
///             .name("hello")
///             .cdk_version("2.51.1")
///             .build(),
///     )
///     .build();
///
/// assert_eq!(options.remix_version(), "1.9.0");
/// assert!(options.tailwind());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct RemixProjectOptions {
    /// Options forwarded to the base generator.
    #[serde(flatten)]
    base: BaseAppOptions,

    /// Remix version.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    remix_version: Option<String>,

    /// AWS JavaScript SDK v3 version.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aws_sdk_v3_version: Option<String>,

    /// React version.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    react_version: Option<String>,

    /// React `@types` version.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    react_types_version: Option<String>,

    /// Node version for the `.nvmrc` marker.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nvm_node_version: Option<String>,

    /// Enable Tailwind support.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tailwind: Option<bool>,

    /// Directory that the Remix project files should be in.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    remix_dir: Option<String>,
}

impl RemixProjectOptions {
    /// Returns the base generator options.
    pub fn base(&self) -> &BaseAppOptions {
        &self.base
    }

    /// Remix version, resolved against the defaults table.
    pub fn remix_version(&self) -> &str {
        self.remix_version
            .as_deref()
            .unwrap_or(defaults::REMIX_VERSION)
    }

    /// AWS SDK v3 version, resolved against the defaults table.
    pub fn aws_sdk_v3_version(&self) -> &str {
        self.aws_sdk_v3_version
            .as_deref()
            .unwrap_or(defaults::AWS_SDK_V3_VERSION)
    }

    /// React version, resolved against the defaults table.
    pub fn react_version(&self) -> &str {
        self.react_version
            .as_deref()
            .unwrap_or(defaults::REACT_VERSION)
    }

    /// React `@types` version, resolved against the defaults table.
    pub fn react_types_version(&self) -> &str {
        self.react_types_version
            .as_deref()
            .unwrap_or(defaults::REACT_TYPES_VERSION)
    }

    /// Node version for the `.nvmrc` marker, resolved against the defaults table.
    pub fn nvm_node_version(&self) -> &str {
        self.nvm_node_version
            .as_deref()
            .unwrap_or(defaults::NVM_NODE_VERSION)
    }

    /// Whether Tailwind support is enabled (default true).
    pub fn tailwind(&self) -> bool {
        self.tailwind.unwrap_or(defaults::TAILWIND)
    }

    /// Directory that holds the Remix application files.
    pub fn remix_dir(&self) -> &str {
        self.remix_dir.as_deref().unwrap_or(defaults::REMIX_DIR)
    }

    /// Whether the flavor writes its sample scaffold (default true).
    pub fn sample_code(&self) -> bool {
        self.base.sample_code.unwrap_or(true)
    }
}

/// Options understood by the external base generator.
///
/// Only the fields the composer consumes are modeled; everything else a
/// caller supplies rides in the flattened pass-through map and reaches
/// the generator untouched.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct BaseAppOptions {
    /// Project name.
    #[builder(setter(into))]
    name: String,

    /// AWS CDK version, without a caret.
    #[builder(setter(into))]
    cdk_version: String,

    /// Extra runtime dependencies, appended after the computed defaults.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    deps: Vec<String>,

    /// Extra development dependencies, appended after the computed defaults.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dev_deps: Vec<String>,

    /// Caller tsconfig additions.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tsconfig: Option<TsconfigOptions>,

    /// Extra file globs for the deployment watcher to observe.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    watch_includes: Vec<String>,

    /// Extra file globs for the deployment watcher to ignore.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    watch_excludes: Vec<String>,

    /// Minimum node version required by the generated package.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_node_version: Option<String>,

    /// Whether sample code should be written into the project tree.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_code: Option<bool>,

    /// Fields not consumed by this layer, forwarded unmodified.
    #[builder(default)]
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl BaseAppOptions {
    /// Returns the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the AWS CDK version.
    pub fn cdk_version(&self) -> &str {
        &self.cdk_version
    }

    /// Returns the caller's extra runtime dependencies.
    pub fn deps(&self) -> &[String] {
        &self.deps
    }

    /// Returns the caller's extra development dependencies.
    pub fn dev_deps(&self) -> &[String] {
        &self.dev_deps
    }

    /// Returns the caller's tsconfig additions, if any.
    pub fn tsconfig(&self) -> Option<&TsconfigOptions> {
        self.tsconfig.as_ref()
    }

    /// Returns the caller's extra watch includes.
    pub fn watch_includes(&self) -> &[String] {
        &self.watch_includes
    }

    /// Returns the caller's extra watch excludes.
    pub fn watch_excludes(&self) -> &[String] {
        &self.watch_excludes
    }

    /// Returns the minimum node version override, if set.
    pub fn min_node_version(&self) -> Option<&str> {
        self.min_node_version.as_deref()
    }

    /// Returns the sample-code toggle, if set.
    pub fn sample_code(&self) -> Option<bool> {
        self.sample_code
    }

    /// Returns the pass-through fields not consumed by this layer.
    pub fn rest(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.rest
    }
}
