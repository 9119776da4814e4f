use super::*;

#[test]
fn both_fields_are_required() {
    let err = Err("Please fill in all fields");
    assert_eq!(validate_credentials("", "password123"), err);
    assert_eq!(validate_credentials("manager@demo.com", ""), err);
    assert_eq!(validate_credentials("", ""), err);
    assert_eq!(validate_credentials("   ", "password123"), err);
}

#[test]
fn email_is_trimmed_before_submission() {
    assert_eq!(
        validate_credentials("  manager@demo.com  ", "password123"),
        Ok(("manager@demo.com".to_owned(), "password123".to_owned()))
    );
}

#[test]
fn password_is_passed_through_verbatim() {
    // Leading or trailing whitespace may be part of the password.
    assert_eq!(
        validate_credentials("carer@demo.com", " pass word "),
        Ok(("carer@demo.com".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn demo_accounts_cover_three_roles_with_distinct_emails() {
    assert_eq!(DEMO_USERS.len(), 3);
    let mut emails: Vec<&str> = DEMO_USERS.iter().map(|demo| demo.email).collect();
    emails.sort_unstable();
    emails.dedup();
    assert_eq!(emails.len(), 3);
    for demo in DEMO_USERS {
        assert!(demo.email.ends_with("@demo.com"));
        assert!(!demo.password.is_empty());
    }
}
