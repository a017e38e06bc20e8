//! Meson backend: renders one `meson.build` per project plus the root
//! `meson.build` that sequences them with `subdir` calls.
//!
//! Meson evaluates `subdir` calls in file order and a project can only use
//! `<ident>_dep` variables that an earlier subdir defined, so the root file
//! lists projects dependency-first.

pub mod files;

mod factory;
mod generator;
mod project_set;

pub use factory::MesonProjectSetFactory;
pub use generator::MesonFileGenerator;
pub use project_set::MesonProjectSet;

/// Meson identifier for a project name: variables cannot contain dashes or
/// other punctuation, so every run of non-alphanumeric characters collapses
/// to a single underscore.
pub(crate) fn meson_ident(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());
    let mut last_was_underscore = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            ident.push(c);
            last_was_underscore = false;
        } else if !last_was_underscore {
            ident.push('_');
            last_was_underscore = true;
        }
    }
    if ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
