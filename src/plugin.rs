//! Plugin and resource contracts.
//!
//! Loader plugins are supplied by the surrounding application and registered
//! with the [`ResourceRegistry`](crate::registry::ResourceRegistry) at
//! startup. The registry never constructs plugins; it only queries their
//! capability predicate and invokes their construction operation.

use std::path::Path;
use std::sync::Arc;

use crate::errors::Result;

/// A decoded texture asset.
pub trait TextureResource: Send + Sync {}

/// A decoded model asset.
pub trait ModelResource: Send + Sync {}

/// A compiled or source shader asset.
pub trait ShaderResource: Send + Sync {}

/// A scripting interpreter instance.
///
/// Script resources carry mutable execution state, so unlike the file-backed
/// kinds they are never shared or cached.
pub trait ScriptResource: Send {}

/// Shared handle to a resident texture.
pub type TextureRef = Arc<dyn TextureResource>;
/// Shared handle to a resident model.
pub type ModelRef = Arc<dyn ModelResource>;
/// Shared handle to a resident shader.
pub type ShaderRef = Arc<dyn ShaderResource>;
/// Owned handle to a fresh scripting resource.
pub type ScriptRef = Box<dyn ScriptResource>;

/// Loader plugin for file-backed resources.
///
/// The three file-backed kinds share this contract; the kind a plugin
/// produces is its [`Resource`](Self::Resource) type.
pub trait ResourcePlugin: Send + Sync {
    /// The resource kind this plugin constructs, e.g. `dyn TextureResource`.
    type Resource: ?Sized + Send + Sync;

    /// Whether this plugin can decode files with the given extension.
    /// `ext` arrives lowercased and without a leading dot.
    fn accepts_extension(&self, ext: &str) -> bool;

    /// Constructs a resource from the resolved file path.
    ///
    /// `path` is empty when search-path resolution found no file; the plugin
    /// is still invoked and reports the specific I/O failure itself.
    fn create(&self, path: &Path) -> Result<Arc<Self::Resource>>;
}

/// Loader plugin for scripting resources.
///
/// Selected by language rather than extension, and constructs without a file.
pub trait ScriptPlugin: Send + Sync {
    /// Whether this plugin can produce an interpreter for `language`.
    /// One plugin may serve several languages.
    fn runs_language(&self, language: &str) -> bool;

    /// Constructs a fresh scripting resource.
    fn create(&self) -> Result<ScriptRef>;
}

/// An embeddable interpreter extension, queried by language.
///
/// Modules are distinct from script resource plugins: they expose an
/// initialization contract, not a construction contract. The registry stores
/// and returns them in full matching sets; installing them into an
/// interpreter (via [`init`](Self::init)) is the caller's job.
pub trait ScriptModule: Send + Sync {
    /// Whether this module extends interpreters for `language`.
    fn runs_language(&self, language: &str) -> bool;

    /// Installs the module into its host interpreter.
    fn init(&self);
}

/// Declared extension list for answering
/// [`ResourcePlugin::accepts_extension`].
///
/// Extensions are stored lowercased without a leading dot and matched
/// case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ExtensionSet {
    exts: Vec<String>,
}

impl ExtensionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ext: &str) {
        self.exts
            .push(ext.trim_start_matches('.').to_ascii_lowercase());
    }

    #[must_use]
    pub fn accepts(&self, ext: &str) -> bool {
        self.exts.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for ext in iter {
            set.add(ext.as_ref());
        }
        set
    }
}

/// Declared language list for answering the `runs_language` predicates.
#[derive(Debug, Clone, Default)]
pub struct LanguageSet {
    langs: Vec<String>,
}

impl LanguageSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, language: &str) {
        self.langs.push(language.to_string());
    }

    #[must_use]
    pub fn runs(&self, language: &str) -> bool {
        self.langs.iter().any(|l| l == language)
    }
}

impl<S: AsRef<str>> FromIterator<S> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for language in iter {
            set.add(language.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_set_normalizes_on_add() {
        let mut set = ExtensionSet::new();
        set.add(".PNG");
        assert!(set.accepts("png"));
        assert!(set.accepts("PNG"));
        assert!(!set.accepts("jpg"));
    }

    #[test]
    fn test_extension_set_from_iter() {
        let set: ExtensionSet = ["tga", "bmp"].into_iter().collect();
        assert!(set.accepts("tga"));
        assert!(set.accepts("bmp"));
        assert!(!set.accepts("png"));
    }

    #[test]
    fn test_language_set_is_exact() {
        let set: LanguageSet = ["lua"].into_iter().collect();
        assert!(set.runs("lua"));
        assert!(!set.runs("Lua"));
        assert!(!set.runs("python"));
    }
}
