use super::*;
use serde_json::json;

#[test]
fn login_response_reads_access_token() {
    let parsed: LoginResponse =
        serde_json::from_value(json!({ "access_token": "tok-123" })).unwrap();
    assert_eq!(parsed.access_token, "tok-123");
}

#[test]
fn me_response_keeps_role_as_wire_string() {
    let parsed: MeResponse = serde_json::from_value(json!({
        "user": { "id": 7, "name": "Sam Okafor", "email": "sam@care.example" },
        "role": "carer"
    }))
    .unwrap();
    assert_eq!(parsed.role, "carer");
    assert_eq!(parsed.user.name, "Sam Okafor");
}

#[test]
fn client_record_tolerates_missing_optional_fields() {
    let parsed: ClientRecord =
        serde_json::from_value(json!({ "id": 3, "name": "Edna Whitfield" })).unwrap();
    assert_eq!(parsed.age, None);
    assert_eq!(parsed.room, None);
    assert_eq!(parsed.support_needs, None);
}

#[test]
fn manager_dashboard_defaults_missing_sections() {
    let parsed: ManagerDashboard = serde_json::from_value(json!({
        "basic_stats": { "clients": 12, "carers": 5 }
    }))
    .unwrap();
    assert_eq!(parsed.basic_stats.clients, 12);
    assert_eq!(parsed.this_week, WeekStats::default());
}
