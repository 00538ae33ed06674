use pretty_assertions::assert_eq;
use shared_types::{fixtures, ProfileEditor, ProfileField};

#[test]
fn cancel_restores_the_canonical_profile() {
    let mut editor = ProfileEditor::new(fixtures::student_profile());
    editor.begin_edit();
    editor.update(ProfileField::Name, "R. Sharma");
    editor.update(ProfileField::Address, "Somewhere else");
    editor.cancel();

    assert_eq!(editor.current(), &fixtures::student_profile());

    editor.begin_edit();
    assert_eq!(editor.draft(), Some(&fixtures::student_profile()));
}

#[test]
fn save_commits_every_edited_field() {
    let mut editor = ProfileEditor::new(fixtures::student_profile());
    editor.begin_edit();
    editor.update(ProfileField::Phone, "+91 9000000000");
    editor.update(ProfileField::DateOfBirth, "16 May 2001");
    assert_eq!(
        editor.dirty_fields(),
        vec![ProfileField::Phone, ProfileField::DateOfBirth]
    );

    assert!(editor.save());
    assert!(!editor.is_editing());
    assert_eq!(editor.current().phone, "+91 9000000000");
    assert_eq!(editor.current().dob, "16 May 2001");
    assert_eq!(editor.current().cgpa, fixtures::student_profile().cgpa);
}

#[test]
fn saving_without_changes_reports_nothing_changed() {
    let mut editor = ProfileEditor::new(fixtures::student_profile());
    editor.begin_edit();
    assert!(!editor.save());
    assert_eq!(editor.current(), &fixtures::student_profile());
}
