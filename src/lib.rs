#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod errors;
pub mod paths;
pub mod plugin;
pub mod registry;

pub use config::RegistryConfig;
pub use errors::{ResourceError, Result};
pub use paths::SearchPaths;
pub use plugin::{
    ExtensionSet, LanguageSet, ModelRef, ModelResource, ResourcePlugin, ScriptModule,
    ScriptPlugin, ScriptRef, ScriptResource, ShaderRef, ShaderResource, TextureRef,
    TextureResource,
};
pub use registry::ResourceRegistry;
