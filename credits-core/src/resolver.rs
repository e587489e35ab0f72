//! Turns authored credits into fully styled credits.
//!
//! Styling for every entry comes from, highest first:
//!
//! 1. the override whose key path matches the entry exactly,
//! 2. the defaults for that level.
//!
//! Authored content is never taken from either: the text and image an author
//! typed always end up in the output, and so does the author's
//! `display_role_name` toggle. Overrides only change how things look.

use crate::defaults::StyleDefaults;
use crate::model::{
    Name, Role, RoleDefaults, RoleSimple, Section, SectionDefaults, SectionSimple, SimpleText,
    StyledText,
};
use crate::overrides::OverrideTable;

/// Resolves a section against an override table using the stock defaults.
pub fn resolve(simple: &SectionSimple, overrides: &OverrideTable) -> Section {
    let defaults = StyleDefaults::default();
    Resolver::new(&defaults, overrides).resolve_section(simple)
}

/// Borrowing view over a set of defaults and an override table.
///
/// Resolution only reads both, so one resolver can serve any number of
/// sections, from any number of threads.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    defaults: &'a StyleDefaults,
    overrides: &'a OverrideTable,
}

impl<'a> Resolver<'a> {
    pub fn new(defaults: &'a StyleDefaults, overrides: &'a OverrideTable) -> Self {
        Self { defaults, overrides }
    }

    /// Resolves every section in one pass. The section override, when on,
    /// applies to all of them alike.
    pub fn resolve_all(&self, sections: &[SectionSimple]) -> Vec<Section> {
        sections.iter().map(|section| self.resolve_section(section)).collect()
    }

    pub fn resolve_section(&self, simple: &SectionSimple) -> Section {
        let section = simple.key();
        log::debug!("Resolving section '{}' ({} roles)", section, simple.roles.len());

        for role in simple.duplicate_role_names() {
            log::warn!(
                "Section '{}' lists role '{}' more than once; each copy gets the same override.",
                section, role
            );
        }

        Section {
            section_properties: self.resolve_title(&simple.title),
            roles: self.resolve_roles(&section, &simple.roles),
        }
    }

    /// Section styling with the authored title content in place.
    pub fn resolve_title(&self, title: &SimpleText) -> SectionDefaults {
        let base = self.section_styling();
        SectionDefaults {
            title: base.title.with_content(title),
            ..base.clone()
        }
    }

    pub fn resolve_roles(&self, section: &Name, roles: &[RoleSimple]) -> Vec<Role> {
        roles.iter().map(|role| self.resolve_role(section, role)).collect()
    }

    pub fn resolve_role(&self, section: &Name, simple: &RoleSimple) -> Role {
        let role = simple.key();
        Role {
            role_properties: self.resolve_role_properties(section, simple),
            played_by_names: self.resolve_played_by(section, &role, &simple.played_by),
        }
    }

    /// Role caption styling with the authored caption and toggle in place.
    pub fn resolve_role_properties(&self, section: &Name, simple: &RoleSimple) -> RoleDefaults {
        let base = self.role_styling(section, &simple.key());
        RoleDefaults {
            role: self.resolve_role_text(base, &simple.role),
            role_position: base.role_position,
            display_role_name: simple.display_role_name,
        }
    }

    /// Caption of a role, styled by `base`.
    pub fn resolve_role_text(&self, base: &RoleDefaults, caption: &SimpleText) -> StyledText {
        base.role.with_content(caption)
    }

    pub fn resolve_played_by(
        &self,
        section: &Name,
        role: &Name,
        names: &[SimpleText],
    ) -> Vec<StyledText> {
        names.iter().map(|name| self.resolve_name(section, role, name)).collect()
    }

    pub fn resolve_name(&self, section: &Name, role: &Name, name: &SimpleText) -> StyledText {
        let key = name.key();
        let base = match self.overrides.find_name_override(section, role, &key) {
            Some(data) => {
                log::debug!("Name override hit: {}/{}/{}", section, role, key);
                data
            }
            None => &self.defaults.name,
        };
        base.with_content(name)
    }

    fn section_styling(&self) -> &'a SectionDefaults {
        self.overrides
            .find_section_override()
            .unwrap_or(&self.defaults.section)
    }

    fn role_styling(&self, section: &Name, role: &Name) -> &'a RoleDefaults {
        match self.overrides.find_role_override(section, role) {
            Some(data) => {
                log::debug!("Role override hit: {}/{}", section, role);
                data
            }
            None => &self.defaults.role,
        }
    }
}
