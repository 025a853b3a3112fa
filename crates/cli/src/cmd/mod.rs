pub mod doctor;
pub mod fill;
pub mod list;
pub mod vars;

use textblocks_core::catalog::{CatalogRepository, TemplateRecord};

use crate::SelectArgs;

/// Resolve a catalog record from selection flags.
///
/// Exact shortcut lookup wins; otherwise category plus template. `Ok(None)`
/// means the flags do not identify a record and the caller decides whether to
/// fall back to interactive pickers.
pub(crate) fn record_from_flags<'a>(
    repo: &'a CatalogRepository,
    select: &SelectArgs,
) -> Result<Option<&'a TemplateRecord>, String> {
    if let Some(ref shortcut) = select.shortcut {
        return match repo.find_by_shortcut(shortcut) {
            Some(record) => Ok(Some(record)),
            None => Err(format!("no template with shortcut '{shortcut}'")),
        };
    }

    if let (Some(category), Some(template)) = (&select.category, &select.template) {
        return match repo.get(category, template) {
            Some(record) => Ok(Some(record)),
            None => Err(format!("template not found: {category}/{template}")),
        };
    }

    Ok(None)
}
