use crate::models::NewCard;
use proptest::prelude::*;

/// Generates a card field value: empty, plain ASCII, URL-like or printable unicode
pub fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9 ]{1,24}",
        "https://[a-z]{3,10}\\.org/[a-z0-9/]{0,20}",
        "\\PC{1,32}",
    ]
}

/// Generates an arbitrary card ready to insert
pub fn arb_new_card() -> impl Strategy<Value = NewCard> {
    (
        arb_field(),
        arb_field(),
        arb_field(),
        arb_field(),
        arb_field(),
        arb_field(),
        arb_field(),
    ).prop_map(|(subject, task_name, color, deadline, task_info_link, task_submission_link, task_enrollment_link)| {
        NewCard {
            subject,
            task_name,
            color,
            deadline,
            task_info_link,
            task_submission_link,
            task_enrollment_link,
        }
    })
}
