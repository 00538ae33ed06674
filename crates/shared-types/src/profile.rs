use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub grade: String,
    pub professor: String,
}

/// Personal and academic record shown on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub address: String,
    pub department: String,
    pub year: String,
    pub cgpa: f32,
    pub attendance: u8,
    pub advisor: String,
    pub credits_completed: u16,
    pub credits_required: u16,
    pub courses: Vec<Course>,
    pub achievements: Vec<String>,
}

/// Fields the edit view exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    DateOfBirth,
    Address,
}

pub const EDITABLE_FIELDS: [ProfileField; 5] = [
    ProfileField::Name,
    ProfileField::Email,
    ProfileField::Phone,
    ProfileField::DateOfBirth,
    ProfileField::Address,
];

impl ProfileField {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::DateOfBirth => "Date of Birth",
            ProfileField::Address => "Address",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::DateOfBirth => "dob",
            ProfileField::Address => "address",
        }
    }

    pub fn get<'a>(&self, profile: &'a StudentProfile) -> &'a str {
        match self {
            ProfileField::Name => &profile.name,
            ProfileField::Email => &profile.email,
            ProfileField::Phone => &profile.phone,
            ProfileField::DateOfBirth => &profile.dob,
            ProfileField::Address => &profile.address,
        }
    }

    pub fn set(&self, profile: &mut StudentProfile, value: String) {
        match self {
            ProfileField::Name => profile.name = value,
            ProfileField::Email => profile.email = value,
            ProfileField::Phone => profile.phone = value,
            ProfileField::DateOfBirth => profile.dob = value,
            ProfileField::Address => profile.address = value,
        }
    }
}

/// View/edit toggle over a scratch copy of the profile.
///
/// The canonical record only changes on [`ProfileEditor::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEditor {
    canonical: StudentProfile,
    scratch: Option<StudentProfile>,
}

impl ProfileEditor {
    pub fn new(profile: StudentProfile) -> Self {
        Self {
            canonical: profile,
            scratch: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.scratch.is_some()
    }

    pub fn current(&self) -> &StudentProfile {
        &self.canonical
    }

    /// The scratch copy while editing.
    pub fn draft(&self) -> Option<&StudentProfile> {
        self.scratch.as_ref()
    }

    pub fn begin_edit(&mut self) {
        self.scratch = Some(self.canonical.clone());
    }

    /// Edit the scratch copy. Ignored outside edit mode.
    pub fn update(&mut self, field: ProfileField, value: impl Into<String>) {
        if let Some(scratch) = self.scratch.as_mut() {
            field.set(scratch, value.into());
        }
    }

    /// Commit the scratch copy. Returns whether the canonical record changed.
    pub fn save(&mut self) -> bool {
        match self.scratch.take() {
            Some(scratch) => {
                let changed = scratch != self.canonical;
                self.canonical = scratch;
                changed
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.scratch = None;
    }

    /// Editable fields whose scratch value differs from the canonical one.
    pub fn dirty_fields(&self) -> Vec<ProfileField> {
        match &self.scratch {
            Some(scratch) => EDITABLE_FIELDS
                .iter()
                .copied()
                .filter(|f| f.get(scratch) != f.get(&self.canonical))
                .collect(),
            None => Vec::new(),
        }
    }
}
