use bitmove::perft::{perft, PerftArgs};
use bitmove_core::perft::divide;
use bitmove_core::Position;

#[test]
fn counts_from_the_start() {
    let mut out = Vec::new();
    let nodes = perft(&PerftArgs { depth: 3, divide: false }, &mut out).unwrap();
    assert_eq!(nodes, 8_902);
    assert_eq!(String::from_utf8(out).unwrap(), "Nodes: 8,902\n");
}

#[test]
fn divide_lists_every_first_move() {
    let mut out = Vec::new();
    let nodes = perft(&PerftArgs { depth: 2, divide: true }, &mut out).unwrap();
    assert_eq!(nodes, 400);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert!(lines.contains(&"e2e4: 20"));
    assert!(lines.contains(&"g1f3: 20"));
    assert_eq!(lines[20], "Nodes: 400");
}

#[test]
fn divide_matches_core() {
    let split = divide(&Position::start_pos(), 1);
    assert!(split.iter().all(|(_, nodes)| *nodes == 1));
    assert_eq!(split.len(), 20);
}
