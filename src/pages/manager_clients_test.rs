use super::*;

fn client(age: Option<i64>, room: Option<&str>) -> ClientRecord {
    ClientRecord {
        id: 7,
        name: "Edna Whitfield".to_owned(),
        age,
        room: room.map(str::to_owned),
        support_needs: None,
    }
}

#[test]
fn meta_line_combines_age_and_room() {
    assert_eq!(
        client_meta_line(&client(Some(84), Some("12B"))),
        "Age 84 - Room 12B"
    );
}

#[test]
fn meta_line_skips_absent_fields() {
    assert_eq!(client_meta_line(&client(Some(84), None)), "Age 84");
    assert_eq!(client_meta_line(&client(None, Some("12B"))), "Room 12B");
    assert_eq!(client_meta_line(&client(None, None)), "");
}

#[test]
fn meta_line_treats_empty_room_as_absent() {
    assert_eq!(client_meta_line(&client(Some(84), Some(""))), "Age 84");
}
