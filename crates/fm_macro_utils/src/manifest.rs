use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item};

const FACADE_NAME: &str = "fieldmap";
const MEMBER_PREFIX: &str = "fm_";

/// The dependency names of the crate invoking a proc-macro, read from its
/// `Cargo.toml`.
///
/// Generated code must name workspace crates by a path that resolves in the
/// caller, which depends on how the caller pulled them in.
///
/// # Example
///
/// ```rust
/// # use fm_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("fm_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `fm_` and the caller depends on
///    the facade crate `fieldmap`, return `::fieldmap::short_name`
///    (e.g. `fm_reflect` -> `::fieldmap::reflect`).
/// 3. Repeat steps 1-2 with `dev-dependencies`.
/// 4. Otherwise, fall back to `::crate_name`.
///
/// A crate referencing itself needs `extern crate self as crate_name;` in its
/// root for the fallback to resolve.
#[derive(Debug, Default)]
pub struct Manifest {
    dependencies: BTreeSet<String>,
    dev_dependencies: BTreeSet<String>,
    modified_time: Option<SystemTime>,
}

impl Manifest {
    /// Parses the dependency tables out of `Cargo.toml` text.
    ///
    /// Returns `None` if the text is not valid TOML.
    pub fn parse(text: &str) -> Option<Self> {
        let document = Document::parse(text).ok()?;

        let table_keys = |name: &str| -> BTreeSet<String> {
            match document.get(name) {
                Some(Item::Table(table)) => table.iter().map(|(key, _)| key.to_owned()).collect(),
                _ => BTreeSet::new(),
            }
        };

        Some(Self {
            dependencies: table_keys("dependencies"),
            dev_dependencies: table_keys("dev-dependencies"),
            modified_time: None,
        })
    }

    fn find_in(deps: &BTreeSet<String>, name: &str) -> Option<syn::Path> {
        if deps.contains(name) {
            return Some(parse_path(&format!("::{name}")));
        }

        let module = name.strip_prefix(MEMBER_PREFIX)?;
        deps.contains(FACADE_NAME)
            .then(|| parse_path(&format!("::{FACADE_NAME}::{module}")))
    }

    /// Returns a [`syn::Path`] for the package named `name` as seen from the
    /// caller. See the type documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        Self::find_in(&self.dependencies, name)
            .or_else(|| Self::find_in(&self.dev_dependencies, name))
            .unwrap_or_else(|| parse_path(&format!("::{name}")))
    }

    /// Runs `func` on the [`Manifest`] of the caller's `Cargo.toml`.
    ///
    /// Manifests are cached per path and re-read when the file's modified time
    /// changes. Reading is still relatively expensive, so call this once per
    /// macro invocation and pass the resulting path around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = manifest_path();
        let modified_time = std::fs::metadata(&manifest_path)
            .and_then(|metadata| metadata.modified())
            .ok();

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&manifest_path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let mut manifest = read_manifest(&manifest_path);
        manifest.modified_time = modified_time;

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

fn manifest_path() -> PathBuf {
    let dir = env::var_os("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
    let path = PathBuf::from(dir).join("Cargo.toml");
    assert!(
        path.exists(),
        "Cargo manifest does not exist at path {}",
        path.display(),
    );
    path
}

#[inline(never)]
fn read_manifest(path: &Path) -> Manifest {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
    Manifest::parse(&text)
        .unwrap_or_else(|| panic!("Failed to parse cargo manifest: {}", path.display()))
}

fn parse_path(path: &str) -> syn::Path {
    syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
}
