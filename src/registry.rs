//! Resource registry: plugin dispatch, typed caches, and teardown.
//!
//! The registry resolves logical resource names to cached handles. A request
//! first checks the kind's resident cache; on miss it scans the kind's
//! plugin list in registration order for a capable loader, resolves the full
//! path through [`SearchPaths`], invokes the loader, and stores the result
//! before returning it. Nothing is cached on failure.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::warn;
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;

use crate::config::RegistryConfig;
use crate::errors::{ResourceError, Result};
use crate::paths::SearchPaths;
use crate::plugin::{
    ModelRef, ModelResource, ResourcePlugin, ScriptModule, ScriptPlugin, ScriptRef, ShaderRef,
    ShaderResource, TextureRef, TextureResource,
};

/// Lowercased file extension, or an empty string when the name has none.
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

struct TableInner<A: ?Sized + Send + Sync> {
    plugins: Vec<Box<dyn ResourcePlugin<Resource = A>>>,
    resident: FxHashMap<String, Arc<A>>,
}

impl<A: ?Sized + Send + Sync> Default for TableInner<A> {
    fn default() -> Self {
        Self {
            plugins: Vec::new(),
            resident: FxHashMap::default(),
        }
    }
}

/// Plugin list plus resident cache for one file-backed resource kind.
///
/// The lock spans the whole check-select-resolve-load-insert sequence, so
/// concurrent requests for the same filename converge on a single load.
struct LoaderTable<A: ?Sized + Send + Sync> {
    kind: &'static str,
    inner: Mutex<TableInner<A>>,
}

impl<A: ?Sized + Send + Sync> LoaderTable<A> {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            inner: Mutex::new(TableInner::default()),
        }
    }

    fn add_plugin(&self, plugin: Box<dyn ResourcePlugin<Resource = A>>) {
        self.inner.lock().plugins.push(plugin);
    }

    fn create(&self, paths: &SearchPaths, filename: &str) -> Result<Arc<A>> {
        let mut inner = self.inner.lock();

        // A previously requested resource is returned as-is: no plugin
        // re-entry, no extension re-validation, no filesystem access.
        if let Some(resident) = inner.resident.get(filename) {
            return Ok(Arc::clone(resident));
        }

        let ext = extension_of(filename);
        let Some(plugin) = inner
            .plugins
            .iter()
            .find(|plugin| plugin.accepts_extension(&ext))
        else {
            warn!("Plugin for .{ext} not found ({} {filename:?})", self.kind);
            return Err(ResourceError::UnsupportedFormat(filename.to_string()));
        };

        // Resolution failure is not checked here: the plugin is invoked with
        // an empty path and reports the specific I/O error itself.
        let fullname = paths.find_file(filename).unwrap_or_default();
        let resource = plugin.create(&fullname)?;
        inner
            .resident
            .insert(filename.to_string(), Arc::clone(&resource));
        Ok(resource)
    }

    fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.resident.clear();
        inner.plugins.clear();
    }
}

#[derive(Default)]
struct ScriptInner {
    plugins: Vec<Box<dyn ScriptPlugin>>,
    modules: Vec<Arc<dyn ScriptModule>>,
}

/// Script plugin and module lists. Scripts have no resident cache.
#[derive(Default)]
struct ScriptTable {
    inner: RwLock<ScriptInner>,
}

impl ScriptTable {
    fn add_plugin(&self, plugin: Box<dyn ScriptPlugin>) {
        self.inner.write().plugins.push(plugin);
    }

    fn add_module(&self, module: Arc<dyn ScriptModule>) {
        self.inner.write().modules.push(module);
    }

    fn create(&self, language: &str) -> Result<ScriptRef> {
        let inner = self.inner.read();
        let Some(plugin) = inner
            .plugins
            .iter()
            .find(|plugin| plugin.runs_language(language))
        else {
            warn!("Plugin for scripting language {language} not found");
            return Err(ResourceError::UnsupportedLanguage(language.to_string()));
        };
        plugin.create()
    }

    fn modules_for(&self, language: &str) -> Vec<Arc<dyn ScriptModule>> {
        self.inner
            .read()
            .modules
            .iter()
            .filter(|module| module.runs_language(language))
            .cloned()
            .collect()
    }

    fn clear(&self) {
        let mut inner = self.inner.write();
        inner.plugins.clear();
        inner.modules.clear();
    }
}

/// Process-wide resource registry.
///
/// One registry instance is shared by every subsystem that creates
/// resources. Cloning is cheap and clones share all state.
///
/// Resource identity is the originally requested filename string: two
/// spellings of the same file are two cache entries and two loads. Resident
/// handles live until [`shutdown`](Self::shutdown), regardless of how many
/// external handle copies remain.
#[derive(Clone)]
pub struct ResourceRegistry {
    paths: Arc<SearchPaths>,
    textures: Arc<LoaderTable<dyn TextureResource>>,
    models: Arc<LoaderTable<dyn ModelResource>>,
    shaders: Arc<LoaderTable<dyn ShaderResource>>,
    scripts: Arc<ScriptTable>,
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: Arc::new(SearchPaths::new()),
            textures: Arc::new(LoaderTable::new("texture")),
            models: Arc::new(LoaderTable::new("model")),
            shaders: Arc::new(LoaderTable::new("shader")),
            scripts: Arc::new(ScriptTable::default()),
        }
    }

    /// Builds a registry and applies `config`.
    #[must_use]
    pub fn with_config(config: &RegistryConfig) -> Self {
        let registry = Self::new();
        registry.apply_config(config);
        registry
    }

    /// Appends every configured search path not already present.
    pub fn apply_config(&self, config: &RegistryConfig) {
        for dir in &config.search_paths {
            if !self.paths.contains(dir) {
                self.paths.append(dir.clone());
            }
        }
    }

    /// The shared search-path list, for standalone probing.
    #[must_use]
    pub fn paths(&self) -> &SearchPaths {
        &self.paths
    }

    /// Appends a directory to the search path with lowest priority.
    pub fn append_path(&self, dir: impl Into<PathBuf>) {
        self.paths.append(dir);
    }

    /// Prepends a directory to the search path with highest priority.
    pub fn prepend_path(&self, dir: impl Into<PathBuf>) {
        self.paths.prepend(dir);
    }

    /// Whether `dir` is already in the search path.
    #[must_use]
    pub fn contains_path(&self, dir: impl AsRef<Path>) -> bool {
        self.paths.contains(dir)
    }

    /// Resolves a bare filename against the search path.
    #[must_use]
    pub fn find_file(&self, filename: &str) -> Option<PathBuf> {
        self.paths.find_file(filename)
    }

    // ========================================================================
    // File-Backed Resources (Texture / Model / Shader)
    // ========================================================================

    pub fn add_texture_plugin<P>(&self, plugin: P)
    where
        P: ResourcePlugin<Resource = dyn TextureResource> + 'static,
    {
        self.textures.add_plugin(Box::new(plugin));
    }

    pub fn add_model_plugin<P>(&self, plugin: P)
    where
        P: ResourcePlugin<Resource = dyn ModelResource> + 'static,
    {
        self.models.add_plugin(Box::new(plugin));
    }

    pub fn add_shader_plugin<P>(&self, plugin: P)
    where
        P: ResourcePlugin<Resource = dyn ShaderResource> + 'static,
    {
        self.shaders.add_plugin(Box::new(plugin));
    }

    /// Returns the texture resident under `filename`, loading it through the
    /// first accepting plugin on first request.
    pub fn create_texture(&self, filename: &str) -> Result<TextureRef> {
        self.textures.create(&self.paths, filename)
    }

    /// Returns the model resident under `filename`, loading it through the
    /// first accepting plugin on first request.
    pub fn create_model(&self, filename: &str) -> Result<ModelRef> {
        self.models.create(&self.paths, filename)
    }

    /// Returns the shader resident under `filename`, loading it through the
    /// first accepting plugin on first request.
    pub fn create_shader(&self, filename: &str) -> Result<ShaderRef> {
        self.shaders.create(&self.paths, filename)
    }

    // ========================================================================
    // Scripting Resources & Modules
    // ========================================================================

    pub fn add_script_plugin<P: ScriptPlugin + 'static>(&self, plugin: P) {
        self.scripts.add_plugin(Box::new(plugin));
    }

    /// Constructs a fresh scripting resource for `language`.
    ///
    /// Script resources carry interpreter state, so each call yields a new
    /// instance; they are never cached.
    pub fn create_script(&self, language: &str) -> Result<ScriptRef> {
        self.scripts.create(language)
    }

    /// Registers an interpreter extension module.
    ///
    /// The module stays shared with the caller, who installs matching
    /// modules into interpreters via [`ScriptModule::init`].
    pub fn add_script_module(&self, module: Arc<dyn ScriptModule>) {
        self.scripts.add_module(module);
    }

    /// Every registered module that runs `language`, in registration order.
    /// Empty when none match; this query never fails.
    #[must_use]
    pub fn script_modules(&self, language: &str) -> Vec<Arc<dyn ScriptModule>> {
        self.scripts.modules_for(language)
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Flushes every resident cache and plugin/module list.
    ///
    /// The search-path list and memoized resolutions survive. The registry
    /// stays usable, but plugins must be registered again before it can load
    /// anything.
    pub fn shutdown(&self) {
        self.textures.clear();
        self.models.clear();
        self.shaders.clear();
        self.scripts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::extension_of;

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(extension_of("Tree.PNG"), "png");
    }

    #[test]
    fn test_missing_extension_is_empty() {
        assert_eq!(extension_of("Makefile"), "");
    }

    #[test]
    fn test_last_dot_wins() {
        assert_eq!(extension_of("pack.tar.gz"), "gz");
    }

    #[test]
    fn test_extension_survives_directories() {
        assert_eq!(extension_of("models/v1.2/ship.obj"), "obj");
    }
}
