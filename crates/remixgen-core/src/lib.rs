pub mod defaults;

mod descriptor;
mod error;
mod options;
mod overlay;
mod project;
mod scaffold;
mod synth;
mod tasks;

pub use descriptor::{
    CompilerOptions, JsxMode, ModuleResolution, ResolvedDescriptor, Tsconfig, TsconfigOptions,
    compose,
};
pub use error::SynthError;
pub use options::{BaseAppOptions, RemixProjectOptions};
pub use overlay::apply_overlay;
pub use project::{BaseProject, LintConfig, TasksFile, load_tasks_file, save_tasks_file};
pub use scaffold::{FileWriteIntent, append_gitignore, materialize, sample_intents};
pub use synth::{ProjectGenerator, synthesize};
pub use tasks::{Task, TaskGraph, TaskStep};
