//! Product/version resolution and the process-wide profile cache

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use once_cell::sync::OnceCell;
use regex::Regex;
use tracing::debug;

use super::families;
use super::profile::FamilySpec;
use super::Dialect;
use crate::version::Version;

/// Cache key: (family id, profile id)
type ProfileKey = (&'static str, &'static str);

/// Construct-once cells per profile
///
/// The map lock is held only to fetch or insert a cell, never while a profile
/// is built, so building one profile may build its newer fallback profiles.
static PROFILE_CACHE: LazyLock<Mutex<HashMap<ProfileKey, Arc<OnceCell<Arc<Dialect>>>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

static RESOLVER: LazyLock<DialectResolver> = LazyLock::new(DialectResolver::new);

/// Resolve the dialect for a reported product name and version
///
/// Never fails: unknown products get the generic dialect, unknown versions the
/// nearest older profile of their family (the oldest when none is older).
pub fn resolve_dialect(
    product_name: &str,
    major: u32,
    minor: u32,
    revision: Option<u32>,
) -> Arc<Dialect> {
    RESOLVER.resolve(
        product_name,
        Version::new(major, minor, revision.unwrap_or(0)),
    )
}

/// The fallback dialect for unrecognized products
pub fn generic_dialect() -> Arc<Dialect> {
    VersionResolver::new(&families::GENERIC).resolve(Version::major(0))
}

/// Picks the profile of one family for a version
#[derive(Debug, Clone, Copy)]
pub struct VersionResolver {
    family: &'static FamilySpec,
}

impl VersionResolver {
    pub fn new(family: &'static FamilySpec) -> Self {
        Self { family }
    }

    pub fn family(&self) -> &'static FamilySpec {
        self.family
    }

    pub fn resolve(&self, version: Version) -> Arc<Dialect> {
        let index = self.family.profile_index(version);
        debug!(
            family = self.family.id,
            %version,
            profile = self.family.profiles[index].id,
            "resolved dialect profile"
        );
        cached_profile(self.family, index)
    }
}

/// Ordered product-name patterns, each bound to its family's resolver
#[derive(Debug)]
pub struct DialectResolver {
    entries: Vec<(Regex, VersionResolver)>,
}

impl Default for DialectResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectResolver {
    /// Resolver with every built-in family registered
    pub fn new() -> Self {
        let mut resolver = Self {
            entries: Vec::with_capacity(families::ALL.len()),
        };
        for family in families::ALL {
            resolver.register(family);
        }
        resolver
    }

    /// Register a family after the existing ones
    pub fn register(&mut self, family: &'static FamilySpec) {
        let pattern = Regex::new(&format!("(?i){}", family.product_pattern))
            .expect("Invalid product name pattern");
        self.entries.push((pattern, VersionResolver::new(family)));
    }

    /// Family whose pattern matches the trimmed product name first
    pub fn family_for(&self, product_name: &str) -> Option<&'static FamilySpec> {
        let product_name = product_name.trim();
        self.entries
            .iter()
            .find(|(pattern, _)| pattern.is_match(product_name))
            .map(|(_, resolver)| resolver.family())
    }

    pub fn resolve(&self, product_name: &str, version: Version) -> Arc<Dialect> {
        match self.family_for(product_name) {
            Some(family) => VersionResolver::new(family).resolve(version),
            None => {
                debug!(product_name, "no dialect family matched, using generic");
                generic_dialect()
            }
        }
    }
}

/// The shared instance of a profile, building it and its newer fallbacks on
/// first use
fn cached_profile(family: &'static FamilySpec, index: usize) -> Arc<Dialect> {
    let profile = &family.profiles[index];
    let cell = {
        let mut cache = PROFILE_CACHE
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry((family.id, profile.id)).or_default())
    };

    Arc::clone(cell.get_or_init(|| {
        let next = (index + 1 < family.profiles.len()).then(|| cached_profile(family, index + 1));
        debug!(family = family.id, profile = profile.id, "building dialect profile");
        Arc::new(Dialect::compose(family, profile, next))
    }))
}
