//! Synthesis entry point.
//!
//! The external generic generator is consumed through the
//! [`ProjectGenerator`] seam instead of being subclassed, so the core
//! stays testable with a fake. [`synthesize`] is a single linear pass:
//! compose the descriptor, build the base project, apply the overlay.

use tracing::{debug, info, instrument};

use crate::descriptor::{self, ResolvedDescriptor};
use crate::error::SynthError;
use crate::options::RemixProjectOptions;
use crate::overlay;
use crate::project::BaseProject;

/// External generic project generator, consumed through this seam.
///
/// Implementations turn a resolved descriptor into a base project with
/// its default task graph. The overlay assumes the returned graph
/// already defines `deploy`, `watch`, `hotswap`, and `build-hotswap`.
pub trait ProjectGenerator {
    /// Build the base project object for the given descriptor.
    ///
    /// # Errors
    ///
    /// Implementation-defined; any error aborts synthesis unmodified.
    fn generate(
        &self,
        name: &str,
        descriptor: &ResolvedDescriptor,
    ) -> Result<BaseProject, SynthError>;
}

/// Run one full synthesis pass.
///
/// # Errors
///
/// Propagates generator errors and overlay contract violations
/// (`SynthError::DuplicateTask`, `SynthError::MissingTask`) unmodified.
#[instrument(skip_all, fields(name = %options.base().name()))]
pub fn synthesize(
    options: &RemixProjectOptions,
    generator: &dyn ProjectGenerator,
) -> Result<BaseProject, SynthError> {
    let descriptor = descriptor::compose(options);
    debug!(
        deps = descriptor.deps.len(),
        dev_deps = descriptor.dev_deps.len(),
        "composed descriptor"
    );

    let mut project = generator.generate(options.base().name(), &descriptor)?;
    overlay::apply_overlay(&mut project, options)?;

    info!(tasks = project.tasks.len(), "synthesis complete");
    Ok(project)
}
