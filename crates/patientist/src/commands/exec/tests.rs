use super::{execute, failure_log_line, run_command, CommandResult, FindPersons, TransferWard, MESSAGE_CLEARED};
use crate::commands::parse::Index;
use crate::error::{CommandError, ErrorKind, ModelError};
use crate::model::{IdNumber, Model, Patientist, PersonFilter, PersonKind, StatusDetail};
use crate::test_utils::{typical_patientist, WARD_A, WARD_B, WARD_C};

fn typical_model() -> Model {
    Model::new(typical_patientist())
}

fn id(raw: &str) -> IdNumber {
    IdNumber::parse(raw).expect("id")
}

fn status_of(model: &Model, raw_id: &str) -> Vec<String> {
    model
        .patientist()
        .find_person(&id(raw_id))
        .and_then(|entry| entry.person.status())
        .map(|status| status.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

fn ward_of(model: &Model, raw_id: &str) -> Option<String> {
    model
        .patientist()
        .ward_of(&id(raw_id))
        .map(|ward| ward.name().to_string())
}

fn expect_err(name: &str, args: &str, model: &mut Model) -> CommandError {
    execute(name, args, model).expect_err("command should fail")
}

#[test]
fn addpat_places_new_patient_in_ward() {
    let mut model = typical_model();
    let args = format!("n/John Doe id/T1234567A p/98765432 e/johnd@example.com a/311, Clementi Ave 2 w/{WARD_C} t/diabetic");
    let result = execute("addpat", &args, &mut model).expect("addpat");

    assert!(result.ok);
    assert!(result.message.starts_with("New patient added to Block C Ward 1: John Doe"));
    assert_eq!(ward_of(&model, "T1234567A").as_deref(), Some(WARD_C));
    assert_eq!(status_of(&model, "T1234567A"), Vec::<String>::new());
    assert!(model.take_dirty());
}

#[test]
fn addstf_requires_title_and_addpat_rejects_it() {
    let mut model = typical_model();
    let base = format!("n/Jane Roe id/S9 p/91234567 e/jane@example.com a/Jurong w/{WARD_A}");

    let err = expect_err("addstf", &base, &mut model);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = expect_err("addpat", &format!("{base} r/Nurse"), &mut model);
    assert!(matches!(err, CommandError::InvalidFormat { .. }));

    let result = execute("addstf", &format!("{base} r/Nurse"), &mut model).expect("addstf");
    assert!(result.message.starts_with("New staff added to Block A Ward 1: Jane Roe"));
}

#[test]
fn adding_duplicate_id_is_a_conflict() {
    let mut model = typical_model();
    let args = format!("n/Copy Cat id/p1 p/91234567 e/copy@example.com a/Somewhere w/{WARD_B}");
    let err = expect_err("addpat", &args, &mut model);

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(!model.take_dirty());
}

#[test]
fn adding_to_missing_ward_is_not_found() {
    let mut model = typical_model();
    let args = "n/Lost Soul id/P77 p/91234567 e/lost@example.com a/Nowhere w/Block Z";
    let err = expect_err("addpat", args, &mut model);
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn trf_ward_moves_patient_and_points_at_target_ward() {
    let mut model = typical_model();
    // Position 2 in the unfiltered view is Amy (P1) in ward A.
    let args = format!("2 w/{WARD_A} w/{WARD_B}");
    let result = execute("trfWard", &args, &mut model).expect("trfWard");

    assert_eq!(
        result.message,
        "Patient 2 has been transferred from ward Block A Ward 1 to ward Block B Ward 2"
    );
    assert_eq!(result.ward_detail, Some(1));
    assert_eq!(ward_of(&model, "P1").as_deref(), Some(WARD_B));
    assert_eq!(model.patientist().person_count(), 6);
}

#[test]
fn trf_ward_from_wrong_ward_is_invalid_state() {
    let mut model = typical_model();
    // Benson (position 4) lives in ward B, not ward A.
    let args = format!("4 w/{WARD_A} w/{WARD_C}");
    let err = expect_err("trfWard", &args, &mut model);

    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(
        err.to_string(),
        "Ward of patient is incorrect: P3 is not in ward Block A Ward 1"
    );
    assert_eq!(ward_of(&model, "P3").as_deref(), Some(WARD_B));
}

#[test]
fn trf_ward_rejects_staff_and_missing_wards() {
    let mut model = typical_model();

    let err = expect_err("trfWard", &format!("1 w/{WARD_A} w/{WARD_B}"), &mut model);
    assert_eq!(err, CommandError::Model(ModelError::NotAPatient("Alice Pauline".to_string())));

    let err = expect_err("trfWard", &format!("2 w/{WARD_A} w/Block Z"), &mut model);
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = expect_err("trfWard", &format!("2 w/{WARD_A}"), &mut model);
    assert!(matches!(err, CommandError::InvalidFormat { .. }));
}

#[test]
fn list_ward_staff_for_missing_ward_is_not_found() {
    let mut model = typical_model();
    let err = expect_err("lswardstf", "Block Z Ward 9", &mut model);

    assert_eq!(err, CommandError::WardNotFound("Block Z Ward 9".to_string()));
    assert_eq!(err.to_string(), "Ward [Block Z Ward 9] not found.");
    assert_eq!(model.filter(), &PersonFilter::All);
}

#[test]
fn list_ward_members_filters_by_ward_and_role() {
    let mut model = typical_model();
    let result = execute("lswardpat", WARD_A, &mut model).expect("lswardpat");
    assert_eq!(result.message, "2 persons listed!");
    assert_eq!(result.ward_detail, Some(0));

    let names: Vec<String> = model
        .filtered_persons()
        .iter()
        .map(|entry| entry.person.name.to_string())
        .collect();
    assert_eq!(names, vec!["Amy Bee", "Carl Kurz"]);

    let result = execute("lswardstf", WARD_B, &mut model).expect("lswardstf");
    assert_eq!(result.message, "1 persons listed!");
    assert_eq!(result.ward_detail, Some(1));
}

#[test]
fn add_status_resolves_index_against_filtered_view() {
    let mut unfiltered = typical_model();
    execute("addstatus", "3 s/Needs rest", &mut unfiltered).expect("addstatus unfiltered");

    let mut filtered = typical_model();
    execute("lswardpat", WARD_A, &mut filtered).expect("lswardpat");
    // Carl is third overall but second among ward A patients.
    execute("addstatus", "2 s/Needs rest", &mut filtered).expect("addstatus filtered");

    assert_eq!(unfiltered.patientist(), filtered.patientist());
    assert_eq!(status_of(&filtered, "P2"), vec!["Doing good", "Needs rest"]);
}

#[test]
fn add_status_on_staff_is_invalid_state() {
    let mut model = typical_model();
    let err = expect_err("addstatus", "1 s/Tired", &mut model);
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(!model.take_dirty());
}

#[test]
fn add_status_keeps_every_detail_in_order() {
    let mut model = typical_model();
    let result = execute("addstatus", "6 s/Fever s/Cough", &mut model).expect("addstatus");
    assert!(result.message.starts_with("New status [Fever, Cough] added to Elle Meyer"));
    assert_eq!(status_of(&model, "P4"), vec!["Fever", "Cough"]);
}

#[test]
fn delete_status_uses_one_based_numbers() {
    let mut model = typical_model();
    execute("addstatus", "2 s/Recovering", &mut model).expect("addstatus");

    let result = execute("delstatus", "2 s/1", &mut model).expect("delstatus");
    assert_eq!(result.message, "Removed status \"Doing fine\" from Amy Bee");
    assert_eq!(status_of(&model, "P1"), vec!["Recovering"]);

    let err = expect_err("delstatus", "2 s/5", &mut model);
    assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
}

#[test]
fn delete_status_takes_exactly_one_number() {
    let mut model = typical_model();
    execute("addstatus", "2 s/Recovering", &mut model).expect("addstatus");
    model.take_dirty();

    for args in ["2 s/1 s/2", "2"] {
        let err = expect_err("delstatus", args, &mut model);
        assert!(matches!(err, CommandError::InvalidFormat { .. }), "{args:?}");
    }
    assert_eq!(status_of(&model, "P1"), vec!["Doing fine", "Recovering"]);
    assert!(!model.take_dirty());
}

#[test]
fn index_out_of_bounds_has_same_kind_filtered_or_not() {
    let mut unfiltered = typical_model();
    let err = expect_err("del", "7", &mut unfiltered);
    assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);

    let mut filtered = typical_model();
    execute("lspat", "", &mut filtered).expect("lspat");
    assert_eq!(filtered.filtered_persons().len(), 4);
    let err = expect_err("del", "5", &mut filtered);
    assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(filtered.patientist().person_count(), 6);
}

#[test]
fn zero_or_garbage_index_is_a_format_error() {
    let mut model = typical_model();
    for args in ["0", "-1", "abc", ""] {
        let err = expect_err("view", args, &mut model);
        assert!(matches!(err, CommandError::InvalidFormat { .. }), "{args:?}");
    }
}

#[test]
fn delete_person_removes_from_their_ward() {
    let mut model = typical_model();
    let result = execute("del", "5", &mut model).expect("del");
    assert!(result.message.starts_with("Deleted person: Daniel Meier"));
    assert!(!model.patientist().has_person(&id("S2")));
    assert_eq!(model.patientist().ward(WARD_B).expect("ward").len(), 1);
}

#[test]
fn edit_replaces_fields_and_resets_filter() {
    let mut model = typical_model();
    execute("find", "carl", &mut model).expect("find");

    let result = execute("edit", "1 p/91234567 t/", &mut model).expect("edit");
    assert!(result.message.starts_with("Edited person: Carl Kurz"));
    assert_eq!(model.filter(), &PersonFilter::All);

    let carl = model.patientist().find_person(&id("P2")).expect("carl");
    assert_eq!(carl.person.phone.as_str(), "91234567");
    assert_eq!(carl.ward.name(), WARD_A);
    assert_eq!(
        carl.person.status().map(<[StatusDetail]>::len),
        Some(1)
    );
}

#[test]
fn edit_without_fields_or_with_taken_id_fails() {
    let mut model = typical_model();
    assert_eq!(expect_err("edit", "1", &mut model), CommandError::NothingToEdit);

    let err = expect_err("edit", "2 id/P2", &mut model);
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let err = expect_err("edit", "2 r/Doctor", &mut model);
    assert_eq!(err.kind(), ErrorKind::InvalidState);
}

#[test]
fn view_points_detail_at_filtered_position() {
    let mut model = typical_model();
    execute("lsstf", "", &mut model).expect("lsstf");
    let result = execute("view", "2", &mut model).expect("view");

    assert_eq!(result.person_detail, Some(1));
    assert!(result.message.starts_with("Viewing staff in Block B Ward 2: Daniel Meier"));
}

#[test]
fn list_commands_install_role_filters() {
    let mut model = typical_model();
    execute("lsstf", "", &mut model).expect("lsstf");
    assert_eq!(model.filter(), &PersonFilter::Role(PersonKind::Staff));

    let result = execute("list", "", &mut model).expect("list");
    assert_eq!(result.message, "Listed all persons");
    assert_eq!(model.filtered_persons().len(), 6);
}

#[test]
fn find_matches_whole_words_case_insensitively() {
    let mut model = typical_model();
    let result = execute("find", "meier KURZ", &mut model).expect("find");
    assert_eq!(result.message, "3 persons listed!");

    let result = execute("find", "Mei", &mut model).expect("find");
    assert_eq!(result.message, "0 persons listed!");

    assert!(matches!(
        expect_err("find", "   ", &mut model),
        CommandError::InvalidFormat { .. }
    ));
}

#[test]
fn ward_lifecycle() {
    let mut model = Model::default();
    execute("addward", "w/Block D Ward 4", &mut model).expect("addward");
    assert!(model.has_ward("Block D Ward 4"));

    let err = expect_err("addward", "w/Block D Ward 4", &mut model);
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let result = execute("lsward", "", &mut model).expect("lsward");
    assert_eq!(
        result.message,
        "1 wards listed!\n1. Block D Ward 4 (0 patients, 0 staff)"
    );

    execute("delward", "w/Block D Ward 4", &mut model).expect("delward");
    assert!(!model.has_ward("Block D Ward 4"));
}

#[test]
fn delete_ward_with_persons_is_invalid_state() {
    let mut model = typical_model();
    let err = expect_err("delward", &format!("w/{WARD_C}"), &mut model);
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(model.has_ward(WARD_C));
}

#[test]
fn clear_matches_fresh_aggregate() {
    let mut model = typical_model();
    let result = execute("clear", "", &mut model).expect("clear");

    assert_eq!(result.message, MESSAGE_CLEARED);
    assert_eq!(model.patientist(), &Patientist::default());
    assert!(model.filtered_persons().is_empty());
    assert!(model.take_dirty());

    let mut cleared_directly = typical_patientist();
    cleared_directly.clear();
    assert_eq!(model.patientist(), &cleared_directly);
}

#[test]
fn help_and_exit_set_flags() {
    let mut model = Model::default();
    let help = execute("help", "", &mut model).expect("help");
    assert!(help.show_help && !help.exit);
    assert!(help.message.contains("trfWard"));

    let exit = execute("exit", "", &mut model).expect("exit");
    assert!(exit.exit && !exit.show_help);
}

#[test]
fn run_command_turns_errors_into_failed_results() {
    let mut model = typical_model();
    let result = run_command("del", "42", &mut model);

    assert_eq!(
        result,
        CommandResult {
            ok: false,
            message: "The person index provided is invalid".to_string(),
            ..CommandResult::default()
        }
    );
    assert!(!model.take_dirty());
}

#[test]
fn unknown_word_reaching_dispatch_is_rejected() {
    let mut model = Model::default();
    let err = expect_err("frobnicate", "", &mut model);
    assert_eq!(err, CommandError::UnknownCommand("frobnicate".to_string()));
}

#[test]
fn parsed_commands_compare_by_arguments() {
    let index = Index::from_one_based(2).expect("index");
    assert_eq!(
        TransferWard::parse("2 w/Block A Ward 1 w/Block B Ward 2").expect("parse"),
        TransferWard::new(index, WARD_A, WARD_B)
    );
    assert_ne!(
        TransferWard::parse("2 w/Block A Ward 1 w/Block C Ward 1").expect("parse"),
        TransferWard::new(index, WARD_A, WARD_B)
    );
    assert_eq!(
        FindPersons::parse("  amy   carl ").expect("parse"),
        FindPersons::new(vec!["amy".to_string(), "carl".to_string()])
    );
}

#[test]
fn failure_log_line_names_error_kind() {
    let mut model = typical_model();
    let err = expect_err("trfWard", &format!("4 w/{WARD_A} w/{WARD_C}"), &mut model);
    let line = failure_log_line("trfWard", &err);

    assert!(line.starts_with("trfWard failed (InvalidState): "), "{line}");
    assert!(line.ends_with("P3 is not in ward Block A Ward 1"));
}
