//! Descriptor composition.
//!
//! [`compose`] turns caller options into the fully resolved build
//! descriptor handed to the external generator: dependency lists,
//! tsconfig, watch sets, and the forwarded base fields. Composition is
//! pure and deterministic; defaults always precede caller extras, and
//! caller extras are never deduplicated against them (the downstream
//! package manager owns resolution).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::options::RemixProjectOptions;

// ── Tsconfig model ───────────────────────────────────────────

/// JSX compilation mode marker emitted into the tsconfig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsxMode {
    None,
    Preserve,
    React,
    ReactNative,
    ReactJsx,
    ReactJsxdev,
}

/// Module resolution strategy emitted into the tsconfig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleResolution {
    Classic,
    Node,
    Node16,
    NodeNext,
    Bundler,
}

/// Compiler options emitted into the project tsconfig.
///
/// These are fixed by the flavor; callers extend the include globs but
/// cannot override the compiler flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Root directory of source files.
    pub root_dir: String,

    /// Path-alias map.
    pub paths: BTreeMap<String, Vec<String>>,

    /// JSX mode marker.
    pub jsx: JsxMode,

    /// Library list.
    pub lib: Vec<String>,

    /// Skip type checking of declaration files.
    pub skip_lib_check: bool,

    /// Module resolution mode.
    pub module_resolution: ModuleResolution,

    /// Allow JavaScript sources alongside TypeScript.
    pub allow_js: bool,

    /// Enforce consistent casing in file names.
    pub force_consistent_casing_in_file_names: bool,

    /// Base directory for non-relative module names.
    pub base_url: String,

    /// Compile each file as an isolated module.
    pub isolated_modules: bool,

    /// Disable emission; the bundler owns output.
    pub no_emit: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        let mut paths = BTreeMap::new();
        paths.insert("~/*".to_owned(), vec!["./remix/app/*".to_owned()]);

        Self {
            root_dir: "./".to_owned(),
            paths,
            jsx: JsxMode::ReactJsx,
            lib: vec![
                "DOM".to_owned(),
                "DOM.Iterable".to_owned(),
                "ES2019".to_owned(),
            ],
            skip_lib_check: true,
            module_resolution: ModuleResolution::Node,
            allow_js: true,
            force_consistent_casing_in_file_names: true,
            base_url: ".".to_owned(),
            isolated_modules: true,
            no_emit: true,
        }
    }
}

/// Caller-supplied tsconfig additions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsconfigOptions {
    /// Extra include globs, appended after the flavor defaults.
    #[serde(default)]
    pub include: Vec<String>,
}

/// Project tsconfig: include globs plus the fixed compiler options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tsconfig {
    /// Ordered include globs.
    pub include: Vec<String>,

    /// Fixed compiler options.
    pub compiler_options: CompilerOptions,
}

// ── Resolved descriptor ──────────────────────────────────────

/// Fully resolved build descriptor handed to the external generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDescriptor {
    /// Runtime dependency specifiers, `name@version` or bare `name`.
    pub deps: Vec<String>,

    /// Development dependency specifiers.
    pub dev_deps: Vec<String>,

    /// Project tsconfig.
    pub tsconfig: Tsconfig,

    /// File globs the deployment watcher observes.
    pub watch_includes: Vec<String>,

    /// File globs the deployment watcher ignores.
    pub watch_excludes: Vec<String>,

    /// Minimum node version forwarded to the base generator.
    pub min_node_version: String,

    /// Always false toward the base generator; the flavor owns its own
    /// sample scaffolding.
    pub sample_code: bool,

    /// Caller fields not consumed by the composer, forwarded untouched.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Default tsconfig include globs.
const TSCONFIG_INCLUDE: &[&str] = &["remix/**/*.ts", "remix/remix.env.d.ts", "remix/**/*.tsx"];

/// Default globs the deployment watcher observes.
const WATCH_INCLUDES: &[&str] = &[
    "src/**/*.ts",
    "test/**/*.ts",
    "remix/server/server.js",
    "remix/build/index.js",
];

/// Default globs the deployment watcher ignores.
const WATCH_EXCLUDES: &[&str] = &[
    "README.md",
    "cdk*.json",
    "**/*.d.ts",
    "./*.js",
    "src/**/*.js",
    "tsconfig.json",
    "package*.json",
    "yarn.lock",
    "node_modules",
];

/// Resolve the full build descriptor from caller options.
///
/// Idempotent and referentially transparent: structurally equal inputs
/// always yield a structurally equal descriptor. No I/O is performed and
/// version strings pass through uninterpreted.
pub fn compose(options: &RemixProjectOptions) -> ResolvedDescriptor {
    let remix = options.remix_version();
    let sdk = options.aws_sdk_v3_version();
    let react = options.react_version();
    let react_types = options.react_types_version();
    let base = options.base();

    let mut deps = vec![
        format!("@remix-run/node@{remix}"),
        format!("@remix-run/react@{remix}"),
        format!("@remix-run/serve@{remix}"),
        format!("@remix-run/architect@{remix}"),
        format!("react@{react}"),
        format!("react-dom@{react}"),
        "isbot".to_owned(),
        format!("@aws-sdk/lib-dynamodb@{sdk}"),
        format!("@aws-sdk/client-dynamodb@{sdk}"),
        format!("@aws-sdk/client-apigatewaymanagementapi@{sdk}"),
        format!("@aws-sdk/client-sns@{sdk}"),
        format!("@aws-sdk/client-ssm@{sdk}"),
        format!("@aws-sdk/client-sqs@{sdk}"),
        format!("@aws-sdk/client-sts@{sdk}"),
        "@rogerchi/cdk-remix-app".to_owned(),
    ];
    deps.extend(base.deps().iter().cloned());

    let mut dev_deps = vec![
        "esbuild".to_owned(),
        format!("@remix-run/dev@{remix}"),
        format!("@remix-run/eslint-config@{remix}"),
        format!("@types/react@{react_types}"),
        format!("@types/react-dom@{react_types}"),
        "npm-run-all".to_owned(),
        "dotenv".to_owned(),
    ];
    dev_deps.extend(base.dev_deps().iter().cloned());

    let mut include: Vec<String> = TSCONFIG_INCLUDE.iter().map(|s| (*s).to_owned()).collect();
    if let Some(tsconfig) = base.tsconfig() {
        include.extend(tsconfig.include.iter().cloned());
    }

    let mut watch_includes: Vec<String> = WATCH_INCLUDES.iter().map(|s| (*s).to_owned()).collect();
    watch_includes.extend(base.watch_includes().iter().cloned());

    let mut watch_excludes: Vec<String> = WATCH_EXCLUDES.iter().map(|s| (*s).to_owned()).collect();
    watch_excludes.extend(base.watch_excludes().iter().cloned());

    ResolvedDescriptor {
        deps,
        dev_deps,
        tsconfig: Tsconfig {
            include,
            compiler_options: CompilerOptions::default(),
        },
        watch_includes,
        watch_excludes,
        min_node_version: base
            .min_node_version()
            .unwrap_or(defaults::MIN_NODE_VERSION)
            .to_owned(),
        sample_code: false,
        rest: base.rest().clone(),
    }
}
