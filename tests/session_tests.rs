//! Session tests - a full round driven through the resolver

use match3::config::AppConfig;
use match3::core::EngineConfig;
use match3::engine::{Effect, Resolver};
use match3::session::{GameMode, Session};
use match3::types::{Coord, DEFAULT_MOVES, DEFAULT_TIME_SECS};

fn first_accepted_swap(resolver: &mut Resolver) -> Vec<Effect> {
    let size = resolver.grid_size();
    for row in 0..size {
        for col in 0..size {
            for other in [Coord::new(row, col + 1), Coord::new(row + 1, col)] {
                let effects = resolver.attempt_swap(Coord::new(row, col), other);
                if !effects[0].is_rejected() {
                    return effects;
                }
            }
        }
    }
    panic!("no accepted swap");
}

#[test]
fn test_moves_round_ends_after_budget() {
    let mut resolver = Resolver::new(EngineConfig::default(), 2024).unwrap();
    let mut session = Session::new(GameMode::Moves);
    let mut total = 0;

    while !session.is_over() {
        let effects = first_accepted_swap(&mut resolver);
        total += effects.iter().map(Effect::score_delta).sum::<u32>();
        session.apply(&effects);
    }

    assert_eq!(session.turns(), DEFAULT_MOVES);
    assert_eq!(session.score(), total);
    assert!(session.score() >= DEFAULT_MOVES * 30);
    assert_eq!(session.finish(), total);
}

#[test]
fn test_time_round_earns_bonus_time() {
    let mut resolver = Resolver::new(EngineConfig::default(), 7).unwrap();
    let mut session = Session::new(GameMode::Time);

    let effects = first_accepted_swap(&mut resolver);
    let summary = session.apply(&effects);

    assert!(summary.steps >= 1);
    assert!(session.time_left_secs() > u64::from(DEFAULT_TIME_SECS));
    session.tick(u64::from(DEFAULT_TIME_SECS) * 1000);
    assert!(!session.is_over());
}

#[test]
fn test_config_file_drives_engine() {
    let path = std::env::temp_dir().join(format!("match3-test-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[game]\nmode = \"moves\"\ntheme = \"halloween\"\nseed = 5\n\n[board]\ngrid_size = 8\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.mode, GameMode::Moves);
    assert_eq!(config.theme.name, "Halloween");
    assert_eq!(config.seed, Some(5));

    let resolver = Resolver::new(config.engine, 5).unwrap();
    assert_eq!(resolver.grid_size(), 8);
    assert_eq!(resolver.config().piece_kinds, 5);
}
