use super::*;

#[test]
fn network_failure_gets_connectivity_hint() {
    assert_eq!(
        friendly_message(&ApiError::NetworkUnavailable),
        "Unable to connect. Please check your internet connection."
    );
}

#[test]
fn session_expiry_prompts_new_login() {
    assert_eq!(
        friendly_message(&ApiError::SessionExpired),
        "Your session has expired. Please log in again."
    );
}

#[test]
fn server_message_passes_through() {
    let err = ApiError::ServerRejected {
        status: 409,
        message: "Carer already exists".to_owned(),
    };
    assert_eq!(friendly_message(&err), "Carer already exists");
}

#[test]
fn schedule_conflicts_get_a_time_slot_hint() {
    let err = ApiError::ServerRejected {
        status: 409,
        message: "Schedule conflict: overlapping visit".to_owned(),
    };
    assert_eq!(
        friendly_message(&err),
        "Schedule conflict: overlapping visit\nPlease choose a different time slot."
    );
}

#[test]
fn five_xx_hides_internals_behind_generic_text() {
    let err = ApiError::ServerError {
        status: 500,
        message: "Internal Server Error".to_owned(),
    };
    assert_eq!(friendly_message(&err), "Something went wrong. Please try again.");
}
