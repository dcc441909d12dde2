use signal_router::{Board, Router, Tile};

fn main() {
    env_logger::init();

    let board = Board::from_rows(vec![
        vec![Tile::Empty, Tile::Source, Tile::Wire, Tile::Target],
        vec![Tile::Blocker, Tile::Blocker, Tile::Wire, Tile::Empty],
        vec![Tile::Empty, Tile::Splitter, Tile::Wire, Tile::Empty],
        vec![Tile::Empty, Tile::Wire, Tile::Blocker, Tile::Empty],
    ]).unwrap();

    assert_eq!(format!("{}", board), ".S-T
##-.
.*-.
.-#.
");

    println!("Circuit Board:");
    for line in board.to_string().lines() {
        let spaced: String = line.chars().map(|glyph| format!("{} ", glyph)).collect();
        println!("{}", spaced);
    }

    let router = Router::new(board);
    log::info!("routing with the {:?} strategy", router.strategy());
    println!("\nCan route signal to target? {}", router.can_route_signal());
}
