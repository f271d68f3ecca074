use shortstack_engine::errors::GameError;
use shortstack_engine::pot::settle;

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn single_winner_takes_everything() {
    let awards = settle(37, &names(&["Bob"])).unwrap();
    assert_eq!(awards, vec![("Bob".to_string(), 37)]);
}

#[test]
fn three_way_split_gives_remainder_alphabetically() {
    let awards = settle(10, &names(&["Cid", "Ana", "Bob"])).unwrap();
    assert_eq!(
        awards,
        vec![
            ("Ana".to_string(), 4),
            ("Bob".to_string(), 3),
            ("Cid".to_string(), 3)
        ]
    );
}

#[test]
fn two_leftover_chips_go_to_first_two_names() {
    let awards = settle(11, &names(&["Zed", "Max", "Bea"])).unwrap();
    assert_eq!(
        awards,
        vec![
            ("Bea".to_string(), 4),
            ("Max".to_string(), 4),
            ("Zed".to_string(), 3)
        ]
    );
}

#[test]
fn even_split_has_no_remainder() {
    let awards = settle(12, &names(&["B", "A"])).unwrap();
    assert_eq!(awards, vec![("A".to_string(), 6), ("B".to_string(), 6)]);
}

#[test]
fn awards_always_sum_to_pot() {
    for pot in 0..40u32 {
        for k in 1..=6usize {
            let winners: Vec<String> = (0..k).map(|i| format!("P{i}")).collect();
            let awards = settle(pot, &winners).unwrap();
            assert_eq!(awards.iter().map(|(_, a)| a).sum::<u32>(), pot);
            let max = awards.iter().map(|(_, a)| *a).max().unwrap();
            let min = awards.iter().map(|(_, a)| *a).min().unwrap();
            assert!(max - min <= 1);
        }
    }
}

#[test]
fn empty_winner_list_is_an_error() {
    assert_eq!(settle(10, &[]), Err(GameError::NoWinners));
}
