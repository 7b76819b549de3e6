use super::common::*;
use crate::analysis::{AttributeField, CaseAttributesDraft, Outcome, TopCharge};
use crate::session::{Screen, Session, SessionAction, SessionError, SessionId, Transition};

fn signed_in(username: &str) -> Session {
    let mut session = Session::new();
    session.sign_in(username).expect("sign in from signed-out");
    session
}

#[test]
fn new_session_starts_signed_out() {
    let session = Session::default();
    assert_eq!(session.screen(), Screen::SignedOut);
    assert!(session.username().is_none());
    assert!(session.attributes().is_none());
    assert!(session.analysis().is_none());
}

#[test]
fn blank_usernames_are_ignored() {
    let mut session = Session::new();

    assert_eq!(session.sign_in(""), Ok(Transition::Ignored));
    assert_eq!(session.sign_in("   \t"), Ok(Transition::Ignored));
    assert_eq!(session.screen(), Screen::SignedOut);
    assert!(session.username().is_none());
    assert!(session.signed_in_at().is_none());
}

#[test]
fn sign_in_moves_to_the_parameter_form() {
    let mut session = Session::new();

    let transition = session.sign_in("alice").expect("sign in succeeds");

    assert_eq!(
        transition,
        Transition::Moved {
            from: Screen::SignedOut,
            to: Screen::AwaitingParameters,
        }
    );
    assert_eq!(session.username(), Some("alice"));
    assert!(session.signed_in_at().is_some());
}

#[test]
fn incomplete_submission_stays_on_the_form() {
    let mut session = signed_in("alice");

    match session.submit(&partial_draft()) {
        Err(SessionError::Incomplete(err)) => {
            assert_eq!(err.to_string(), "Please fill in all fields before proceeding.");
            assert_eq!(err.missing.len(), 4);
            assert_eq!(err.missing[0], AttributeField::TopCharge);
        }
        other => panic!("expected incomplete submission, got {other:?}"),
    }
    assert_eq!(session.screen(), Screen::AwaitingParameters);
    assert!(session.attributes().is_none());
}

#[test]
fn complete_submission_shows_results() {
    let mut session = signed_in("alice");

    let released = session
        .submit(&complete_draft())
        .expect("submission succeeds")
        .percentage(Outcome::ReleasedOnRecognizance);

    assert_eq!(released.value(), 75.0);
    assert_eq!(session.screen(), Screen::ShowingResults);
    assert_eq!(
        session.attributes().map(|attributes| attributes.top_charge),
        Some(TopCharge::Assault3rd)
    );
    assert!(session.analysis().is_some());
}

#[test]
fn back_keeps_attributes_for_re_editing() {
    let mut session = signed_in("alice");
    session.submit(&complete_draft()).expect("submission succeeds");

    session.back().expect("back from results");

    assert_eq!(session.screen(), Screen::AwaitingParameters);
    assert!(session.analysis().is_none());
    assert_eq!(session.form_draft(), complete_draft());

    let mut revised = complete_draft();
    revised.top_charge = "PL 155.25 - Petit Larceny".to_string();
    let result = session.submit(&revised).expect("resubmission succeeds");
    assert!(!result.indicators.violent_charge);
    assert_eq!(
        session.attributes().map(|attributes| attributes.top_charge),
        Some(TopCharge::PetitLarceny)
    );
}

#[test]
fn sign_out_clears_state_from_every_screen() {
    let mut on_form = signed_in("alice");
    let mut on_results = signed_in("bob");
    on_results.submit(&complete_draft()).expect("submission succeeds");
    let mut already_out = Session::new();

    for session in [&mut on_form, &mut on_results, &mut already_out] {
        session.sign_out();
        assert_eq!(session.screen(), Screen::SignedOut);
        assert!(session.username().is_none());
        assert!(session.attributes().is_none());
        assert!(session.analysis().is_none());
        assert_eq!(session.form_draft(), CaseAttributesDraft::default());
    }
}

#[test]
fn actions_without_a_transition_are_rejected() {
    let mut session = Session::new();
    assert_eq!(
        session.back(),
        Err(SessionError::InvalidTransition {
            action: SessionAction::Back,
            screen: Screen::SignedOut,
        })
    );
    assert!(matches!(
        session.submit(&complete_draft()),
        Err(SessionError::InvalidTransition { .. })
    ));

    let mut session = signed_in("alice");
    let err = session.sign_in("mallory").expect_err("already signed in");
    assert_eq!(
        err.to_string(),
        "cannot sign in from the case parameters screen"
    );
    assert_eq!(session.username(), Some("alice"));
}

#[test]
fn view_exposes_form_only_on_the_parameter_screen() {
    let id = SessionId("session-test".to_string());
    let mut session = signed_in("alice");

    let form_view = session.view(&id);
    assert_eq!(form_view.title, "Decision Analysis System");
    assert!(form_view.form.is_some());
    assert!(form_view.analysis.is_none());

    session.submit(&complete_draft()).expect("submission succeeds");
    let results_view = session.view(&id);
    assert!(results_view.form.is_none());
    let analysis = results_view.analysis.expect("analysis on results screen");
    assert_eq!(analysis.categories.len(), 7);
}
