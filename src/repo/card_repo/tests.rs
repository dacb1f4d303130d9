use super::*;
use crate::repo::tests::{setup_empty_db, setup_test_db};

fn math_card() -> NewCard {
    NewCard {
        subject: "Math".to_string(),
        task_name: "HW1".to_string(),
        color: "red".to_string(),
        deadline: "2024-01-01".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_create_card() {
    let pool = setup_test_db();

    let card = create_card(&pool, &math_card()).unwrap();

    assert_eq!(card.get_id(), 1);
    assert_eq!(card.get_subject(), "Math");
    assert_eq!(card.get_task_name(), "HW1");
    assert_eq!(card.get_color(), "red");
    assert_eq!(card.get_deadline(), "2024-01-01");
    assert_eq!(card.get_task_info_link(), "");
    assert_eq!(card.get_task_submission_link(), "");
    assert_eq!(card.get_task_enrollment_link(), "");
}

#[test]
fn test_create_card_assigns_increasing_ids() {
    let pool = setup_test_db();

    let first = create_card(&pool, &math_card()).unwrap();
    let second = create_card(&pool, &math_card()).unwrap();

    assert!(first.get_id() > 0);
    assert!(second.get_id() > first.get_id());
}

#[test]
fn test_create_card_accepts_all_empty_fields() {
    let pool = setup_test_db();

    let card = create_card(&pool, &NewCard::default()).unwrap();

    assert!(card.get_id() > 0);
    assert_eq!(card.to_new_card(), NewCard::default());
}

#[test]
fn test_get_card() {
    let pool = setup_test_db();

    let new_card = NewCard {
        task_info_link: "https://example.org/info".to_string(),
        task_submission_link: "https://example.org/submit".to_string(),
        task_enrollment_link: "https://example.org/enroll".to_string(),
        ..math_card()
    };
    let created = create_card(&pool, &new_card).unwrap();

    let retrieved = get_card(&pool, created.get_id()).unwrap().unwrap();

    assert_eq!(retrieved, created);
    assert_eq!(retrieved.to_new_card(), new_card);
}

#[test]
fn test_get_card_not_found() {
    let pool = setup_test_db();

    assert!(get_card(&pool, 42).unwrap().is_none());

    create_card(&pool, &math_card()).unwrap();
    assert!(get_card(&pool, 42).unwrap().is_none());
}

#[test]
fn test_list_cards_empty() {
    let pool = setup_test_db();

    let cards = list_cards(&pool).unwrap();

    assert!(cards.is_empty());
}

#[test]
fn test_list_cards_returns_every_card() {
    let pool = setup_test_db();

    let mut created = Vec::new();
    for i in 0..5 {
        let new_card = NewCard {
            task_name: format!("Task {}", i),
            ..math_card()
        };
        created.push(create_card(&pool, &new_card).unwrap());
    }

    let cards = list_cards(&pool).unwrap();

    assert_eq!(cards.len(), created.len());
    for card in &created {
        assert!(cards.contains(card), "card {} missing from list", card.get_id());
    }
}

#[test]
fn test_operations_fail_without_schema() {
    let pool = setup_empty_db();

    assert!(create_card(&pool, &math_card()).is_err());
    assert!(get_card(&pool, 1).is_err());
    assert!(list_cards(&pool).is_err());
}
