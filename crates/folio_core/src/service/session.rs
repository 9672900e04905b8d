//! Session document model.
//!
//! # Responsibility
//! - Own the mutable document for the lifetime of one editing session.
//! - Expose field-level and list-level operations plus the read-only
//!   snapshot used by the render path.
//!
//! # Invariants
//! - Every mutator is best-effort and non-throwing: unknown identifiers,
//!   absent values and out-of-range positions are no-ops.
//! - Each identifier side-table stays index-aligned with its document list.
//! - Removing a position shifts later entries left by one; unaffected
//!   entries keep their relative order and their identifiers.

use uuid::Uuid;

use crate::model::document::{
    Certification, Document, Education, EntryId, Internship, Project, SkillDetail,
};

/// Addressable scalar fields on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Title,
    About,
    ContactEmail,
    ContactGithub,
    ContactLinkedin,
    ContactPhone,
}

/// Addressable scalar fields on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    Image,
    Date,
    LinkDemo,
    LinkCode,
}

/// One session's mutable copy of the document.
///
/// Identifier side-tables give every project, internship and certification
/// a stable identity for the session, so an edit addressed to one entry is
/// unaffected by removals that shift positions underneath it.
pub struct DocumentSession {
    document: Document,
    project_ids: Vec<EntryId>,
    internship_ids: Vec<EntryId>,
    certification_ids: Vec<EntryId>,
    dirty: bool,
}

impl DocumentSession {
    /// Wraps a freshly loaded document, minting identifiers for every
    /// existing list entry.
    pub fn new(document: Document) -> Self {
        let project_ids = mint_ids(document.projects.len());
        let internship_ids = mint_ids(section_len(&document.internships));
        let certification_ids = mint_ids(section_len(&document.certifications));
        Self {
            document,
            project_ids,
            internship_ids,
            certification_ids,
            dirty: false,
        }
    }

    /// Read-only snapshot for the render path.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// True when a mutation was applied since load or the last commit.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag after a successful commit.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    // ---- profile ----------------------------------------------------------

    /// Replaces one profile scalar. Any string is accepted, including empty.
    pub fn set_profile_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        let profile = &mut self.document.profile;
        match field {
            ProfileField::Name => profile.name = value,
            ProfileField::Title => profile.title = value,
            ProfileField::About => profile.about = value,
            ProfileField::ContactEmail => profile.contact.email = value,
            ProfileField::ContactGithub => profile.contact.github = value,
            ProfileField::ContactLinkedin => profile.contact.linkedin = value,
            ProfileField::ContactPhone => profile.contact.phone = Some(value),
        }
        self.dirty = true;
    }

    /// Appends a skill unless it is already present.
    pub fn add_skill(&mut self, skill: impl Into<String>) -> bool {
        let added = append_unique(&mut self.document.profile.skills, skill.into());
        self.dirty |= added;
        added
    }

    /// Rewrites one skill in place.
    ///
    /// No-op when `old` is absent, or when `new` would duplicate another
    /// entry.
    pub fn rename_skill(&mut self, old: &str, new: impl Into<String>) -> bool {
        let renamed = rename_value(&mut self.document.profile.skills, old, new.into());
        self.dirty |= renamed;
        renamed
    }

    /// Removes a skill by value.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let removed = remove_value(&mut self.document.profile.skills, skill);
        self.dirty |= removed;
        removed
    }

    /// Removes the skill at a display position. Out of range is a no-op.
    pub fn remove_skill_at(&mut self, index: usize) -> bool {
        let removed = remove_at(&mut self.document.profile.skills, index);
        self.dirty |= removed;
        removed
    }

    // ---- projects ---------------------------------------------------------

    /// Inserts a placeholder project at the front so the newest entry is
    /// displayed first. Always succeeds; returns the new entry's identifier.
    pub fn add_project(&mut self, date: impl Into<String>) -> EntryId {
        let id = Uuid::new_v4();
        self.document.projects.insert(0, Project::placeholder(date));
        self.project_ids.insert(0, id);
        self.dirty = true;
        id
    }

    /// Removes the project with the given identifier.
    pub fn remove_project(&mut self, id: EntryId) -> bool {
        let Some(position) = position_of(&self.project_ids, id) else {
            return false;
        };
        self.document.projects.remove(position);
        self.project_ids.remove(position);
        self.dirty = true;
        true
    }

    /// Replaces one scalar on the addressed project.
    pub fn set_project_field(
        &mut self,
        id: EntryId,
        field: ProjectField,
        value: impl Into<String>,
    ) -> bool {
        let value = value.into();
        let Some(project) = self.project_mut(id) else {
            return false;
        };
        match field {
            ProjectField::Title => project.title = value,
            ProjectField::Description => project.description = value,
            ProjectField::Image => project.image = value,
            ProjectField::Date => project.date = value,
            ProjectField::LinkDemo => project.links.demo = value,
            ProjectField::LinkCode => project.links.code = value,
        }
        self.dirty = true;
        true
    }

    /// Flips the featured flag on the addressed project.
    pub fn toggle_featured(&mut self, id: EntryId) -> bool {
        let Some(project) = self.project_mut(id) else {
            return false;
        };
        project.featured = !project.featured;
        self.dirty = true;
        true
    }

    /// Appends a technology to the addressed project unless already present.
    pub fn add_technology(&mut self, id: EntryId, technology: impl Into<String>) -> bool {
        let technology = technology.into();
        let Some(project) = self.project_mut(id) else {
            return false;
        };
        let added = append_unique(&mut project.technologies, technology);
        self.dirty |= added;
        added
    }

    /// Removes a technology by value from the addressed project.
    pub fn remove_technology(&mut self, id: EntryId, technology: &str) -> bool {
        let Some(project) = self.project_mut(id) else {
            return false;
        };
        let removed = remove_value(&mut project.technologies, technology);
        self.dirty |= removed;
        removed
    }

    /// Removes the technology at a display position. Out of range is a no-op.
    pub fn remove_technology_at(&mut self, id: EntryId, index: usize) -> bool {
        let Some(project) = self.project_mut(id) else {
            return false;
        };
        let removed = remove_at(&mut project.technologies, index);
        self.dirty |= removed;
        removed
    }

    /// Identifier of the project at a display position.
    pub fn project_id_at(&self, position: usize) -> Option<EntryId> {
        self.project_ids.get(position).copied()
    }

    // ---- academic sections ------------------------------------------------

    /// Adds a leveled skill to the academic section, keyed by name.
    pub fn add_skill_detail(&mut self, name: impl Into<String>, level: u8) -> bool {
        let name = name.into();
        let section = self.document.skills.get_or_insert_with(Vec::new);
        if section.iter().any(|s| s.name == name) {
            return false;
        }
        section.push(SkillDetail { name, level });
        self.dirty = true;
        true
    }

    /// Updates the level of a named skill in the academic section.
    pub fn set_skill_level(&mut self, name: &str, level: u8) -> bool {
        let Some(section) = self.document.skills.as_mut() else {
            return false;
        };
        let Some(skill) = section.iter_mut().find(|s| s.name == name) else {
            return false;
        };
        skill.level = level;
        self.dirty = true;
        true
    }

    /// Removes a named skill from the academic section.
    pub fn remove_skill_detail(&mut self, name: &str) -> bool {
        let Some(section) = self.document.skills.as_mut() else {
            return false;
        };
        let Some(position) = section.iter().position(|s| s.name == name) else {
            return false;
        };
        section.remove(position);
        self.dirty = true;
        true
    }

    /// Appends an internship and returns its identifier.
    pub fn add_internship(&mut self, internship: Internship) -> EntryId {
        let id = Uuid::new_v4();
        self.document
            .internships
            .get_or_insert_with(Vec::new)
            .push(internship);
        self.internship_ids.push(id);
        self.dirty = true;
        id
    }

    /// Edits the addressed internship in place.
    pub fn update_internship(&mut self, id: EntryId, edit: impl FnOnce(&mut Internship)) -> bool {
        let Some(position) = position_of(&self.internship_ids, id) else {
            return false;
        };
        let Some(section) = self.document.internships.as_mut() else {
            return false;
        };
        edit(&mut section[position]);
        self.dirty = true;
        true
    }

    /// Removes the addressed internship.
    pub fn remove_internship(&mut self, id: EntryId) -> bool {
        let Some(position) = position_of(&self.internship_ids, id) else {
            return false;
        };
        if let Some(section) = self.document.internships.as_mut() {
            section.remove(position);
        }
        self.internship_ids.remove(position);
        self.dirty = true;
        true
    }

    /// Identifier of the internship at a display position.
    pub fn internship_id_at(&self, position: usize) -> Option<EntryId> {
        self.internship_ids.get(position).copied()
    }

    /// Appends a certification and returns its identifier.
    pub fn add_certification(&mut self, certification: Certification) -> EntryId {
        let id = Uuid::new_v4();
        self.document
            .certifications
            .get_or_insert_with(Vec::new)
            .push(certification);
        self.certification_ids.push(id);
        self.dirty = true;
        id
    }

    /// Edits the addressed certification in place.
    pub fn update_certification(
        &mut self,
        id: EntryId,
        edit: impl FnOnce(&mut Certification),
    ) -> bool {
        let Some(position) = position_of(&self.certification_ids, id) else {
            return false;
        };
        let Some(section) = self.document.certifications.as_mut() else {
            return false;
        };
        edit(&mut section[position]);
        self.dirty = true;
        true
    }

    /// Removes the addressed certification.
    pub fn remove_certification(&mut self, id: EntryId) -> bool {
        let Some(position) = position_of(&self.certification_ids, id) else {
            return false;
        };
        if let Some(section) = self.document.certifications.as_mut() {
            section.remove(position);
        }
        self.certification_ids.remove(position);
        self.dirty = true;
        true
    }

    /// Identifier of the certification at a display position.
    pub fn certification_id_at(&self, position: usize) -> Option<EntryId> {
        self.certification_ids.get(position).copied()
    }

    /// Sets or replaces the university block.
    pub fn set_education(&mut self, education: Education) {
        self.document.profile.education = Some(education);
        self.dirty = true;
    }

    /// Removes the university block.
    pub fn clear_education(&mut self) {
        if self.document.profile.education.take().is_some() {
            self.dirty = true;
        }
    }

    fn project_mut(&mut self, id: EntryId) -> Option<&mut Project> {
        let position = position_of(&self.project_ids, id)?;
        self.document.projects.get_mut(position)
    }
}

fn mint_ids(len: usize) -> Vec<EntryId> {
    (0..len).map(|_| Uuid::new_v4()).collect()
}

fn section_len<T>(section: &Option<Vec<T>>) -> usize {
    section.as_ref().map_or(0, Vec::len)
}

fn position_of(ids: &[EntryId], id: EntryId) -> Option<usize> {
    ids.iter().position(|candidate| *candidate == id)
}

fn append_unique(list: &mut Vec<String>, value: String) -> bool {
    if list.iter().any(|existing| *existing == value) {
        return false;
    }
    list.push(value);
    true
}

fn rename_value(list: &mut [String], old: &str, new: String) -> bool {
    if new != old && list.iter().any(|existing| *existing == new) {
        return false;
    }
    match list.iter_mut().find(|existing| **existing == old) {
        Some(slot) => {
            *slot = new;
            true
        }
        None => false,
    }
}

fn remove_value(list: &mut Vec<String>, value: &str) -> bool {
    match list.iter().position(|existing| *existing == value) {
        Some(position) => {
            list.remove(position);
            true
        }
        None => false,
    }
}

fn remove_at(list: &mut Vec<String>, index: usize) -> bool {
    if index >= list.len() {
        return false;
    }
    list.remove(index);
    true
}

#[cfg(test)]
mod tests {
    use super::{append_unique, remove_at, remove_value, rename_value};

    #[test]
    fn append_unique_rejects_existing_value() {
        let mut list = vec!["Python".to_string()];
        assert!(!append_unique(&mut list, "Python".to_string()));
        assert!(append_unique(&mut list, "Rust".to_string()));
        assert_eq!(list, ["Python", "Rust"]);
    }

    #[test]
    fn rename_value_refuses_collisions() {
        let mut list = vec!["Python".to_string(), "SQL".to_string()];
        assert!(!rename_value(&mut list, "Python", "SQL".to_string()));
        assert!(rename_value(&mut list, "Python", "Rust".to_string()));
        assert_eq!(list, ["Rust", "SQL"]);
    }

    #[test]
    fn rename_value_to_itself_is_accepted() {
        let mut list = vec!["Python".to_string()];
        assert!(rename_value(&mut list, "Python", "Python".to_string()));
        assert_eq!(list, ["Python"]);
    }

    #[test]
    fn remove_value_misses_are_noops() {
        let mut list = vec!["Python".to_string()];
        assert!(!remove_value(&mut list, "Rust"));
        assert_eq!(list, ["Python"]);
    }

    #[test]
    fn remove_at_guards_out_of_range() {
        let mut list = vec!["a".to_string(), "b".to_string()];
        assert!(!remove_at(&mut list, 2));
        assert!(remove_at(&mut list, 0));
        assert_eq!(list, ["b"]);
    }
}
